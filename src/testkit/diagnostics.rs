//! A recording diagnostics sink for loader tests.

use parking_lot::Mutex;

use crate::loader::Diagnostics;

/// One recorded fallback event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEvent {
    FetchFailed {
        table: &'static str,
        reason: String,
    },
    MissingRow {
        table: &'static str,
    },
}

/// Records every diagnostic event for later assertions.
#[derive(Default)]
pub struct RecordingDiagnostics {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events in arrival order.
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn fetch_failed(&self, table: &'static str, reason: &str) {
        self.events.lock().push(DiagnosticEvent::FetchFailed {
            table,
            reason: reason.to_string(),
        });
    }

    fn missing_row(&self, table: &'static str) {
        self.events.lock().push(DiagnosticEvent::MissingRow { table });
    }
}
