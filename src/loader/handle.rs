//! Shared state cell for remotely loaded configuration.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;

/// Where the current value of a handle came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigOrigin {
    /// Compiled-in defaults; no remote row has been applied.
    Defaults,
    /// A fetched row replaced the defaults.
    Remote,
}

struct Shared<C> {
    value: RwLock<C>,
    origin: RwLock<ConfigOrigin>,
    mounted: AtomicBool,
}

/// Handle to one component's configuration state.
///
/// Starts out holding defaults and stays readable at every moment; a
/// successful load swaps the value in wholesale. Handles are cheap to
/// clone and all clones observe the same cell.
pub struct StateHandle<C> {
    shared: Arc<Shared<C>>,
}

impl<C> Clone for StateHandle<C> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<C: Clone> StateHandle<C> {
    #[must_use]
    pub fn new(defaults: C) -> Self {
        Self {
            shared: Arc::new(Shared {
                value: RwLock::new(defaults),
                origin: RwLock::new(ConfigOrigin::Defaults),
                mounted: AtomicBool::new(true),
            }),
        }
    }

    /// Current value: defaults until a load lands.
    #[must_use]
    pub fn get(&self) -> C {
        self.shared.value.read().clone()
    }

    #[must_use]
    pub fn origin(&self) -> ConfigOrigin {
        *self.shared.origin.read()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.shared.mounted.load(Ordering::SeqCst)
    }

    /// Marks the component gone. Loads resolving afterwards are dropped.
    pub fn unmount(&self) {
        self.shared.mounted.store(false, Ordering::SeqCst);
    }

    /// Replaces the value wholesale and records the remote origin.
    ///
    /// Returns `false` when the handle was unmounted first, in which case
    /// nothing changes.
    pub(crate) fn apply(&self, value: C) -> bool {
        if !self.is_mounted() {
            return false;
        }
        *self.shared.value.write() = value;
        *self.shared.origin.write() = ConfigOrigin::Remote;
        true
    }
}
