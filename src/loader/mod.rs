//! Remote configuration loading with safe fallback.
//!
//! Components render from compiled-in defaults immediately; a one-shot
//! fetch may later replace those defaults wholesale with a row from the
//! table store. Every failure mode, whether transport, HTTP status, shape
//! mismatch or an empty table, leaves the defaults in place and surfaces
//! only through [`Diagnostics`]. Rendering never waits on the network and
//! never sees an error.

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::client::{Direction, Query, RestClient};
use crate::error::Result;
use crate::schema::Table;

mod about;
mod avatar;
mod handle;

pub use about::AboutSection;
pub use avatar::{AvatarConfig, PLACEHOLDER_AVATAR};
pub use handle::{ConfigOrigin, StateHandle};

/// A configuration type with compiled-in defaults and a remote row shape.
pub trait RemoteConfig: Clone + Send + Sync + 'static {
    /// Table holding the remote value.
    type Table: Table;

    /// Compiled-in defaults, used until a load lands and kept on failure.
    fn defaults() -> Self;

    /// Maps a fetched row onto the render-ready value, field for field.
    fn from_row(row: Self::Table) -> Self;

    /// Row selection policy. The default takes the earliest created row,
    /// so stray extra rows never flip the rendered value.
    fn query() -> Query {
        Query::new().order("created_at", Direction::Ascending)
    }
}

/// Sink for load outcomes that left the defaults in place.
pub trait Diagnostics: Send + Sync {
    /// The fetch failed; the handle keeps its current value.
    fn fetch_failed(&self, table: &'static str, reason: &str);

    /// The table had no row; the handle keeps its current value.
    fn missing_row(&self, table: &'static str);
}

/// Default sink: structured log events, warnings for failures.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn fetch_failed(&self, table: &'static str, reason: &str) {
        warn!(table, reason, "config fetch failed, keeping defaults");
    }

    fn missing_row(&self, table: &'static str) {
        debug!(table, "no config row, keeping defaults");
    }
}

/// Loads remote configuration into [`StateHandle`]s.
pub struct ConfigLoader {
    diagnostics: Arc<dyn Diagnostics>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            diagnostics: Arc::new(TracingDiagnostics),
        }
    }

    #[must_use]
    pub fn with_diagnostics(diagnostics: Arc<dyn Diagnostics>) -> Self {
        Self { diagnostics }
    }

    /// Creates a handle pre-filled with `C`'s defaults.
    #[must_use]
    pub fn mount<C: RemoteConfig>(&self) -> StateHandle<C> {
        StateHandle::new(C::defaults())
    }

    /// Fetches `C`'s row and applies it to `handle`.
    ///
    /// One attempt, no retry. On any failure the handle keeps its current
    /// value and the outcome goes to diagnostics alone.
    pub async fn load<C: RemoteConfig>(&self, handle: &StateHandle<C>, client: &RestClient) {
        self.load_with(handle, client.select_first::<C::Table>(C::query()))
            .await;
    }

    /// Like [`ConfigLoader::load`], with the fetch supplied by the caller.
    pub async fn load_with<C, F>(&self, handle: &StateHandle<C>, fetch: F)
    where
        C: RemoteConfig,
        F: Future<Output = Result<Option<C::Table>>>,
    {
        match fetch.await {
            Ok(Some(row)) => {
                if handle.apply(C::from_row(row)) {
                    debug!(table = C::Table::NAME, "applied remote config");
                } else {
                    debug!(
                        table = C::Table::NAME,
                        "handle unmounted, dropping fetched config"
                    );
                }
            }
            Ok(None) => self.diagnostics.missing_row(C::Table::NAME),
            Err(err) => self
                .diagnostics
                .fetch_failed(C::Table::NAME, &err.to_string()),
        }
    }
}
