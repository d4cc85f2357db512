//! Session context shared by the main window's components.
//!
//! A session owns the configuration and the slot for the one view manager
//! of the main window. Components receive the session (or the view manager
//! it hands out) explicitly instead of reaching for process-wide state.

use parking_lot::Mutex;
use std::sync::{Arc, Weak};

use swcenter_core::{SessionError, StoreConfig};

use crate::view_manager::ViewManager;

/// Per-window session context.
pub struct Session {
    config: StoreConfig,
    view_manager: Mutex<Weak<ViewManager>>,
}

impl Session {
    /// Create a session with the given configuration.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            view_manager: Mutex::new(Weak::new()),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The live view manager, if one has been created.
    ///
    /// Every call returns the same instance until it is dropped.
    pub fn view_manager(&self) -> Option<Arc<ViewManager>> {
        self.view_manager.lock().upgrade()
    }

    /// Store a newly built view manager, failing if one is still alive.
    pub(crate) fn install_view_manager<F>(&self, build: F) -> Result<Arc<ViewManager>, SessionError>
    where
        F: FnOnce() -> ViewManager,
    {
        let mut slot = self.view_manager.lock();
        if slot.upgrade().is_some() {
            tracing::warn!("Refusing to create a second view manager");
            return Err(SessionError::ViewManagerExists);
        }
        let view_manager = Arc::new(build());
        *slot = Arc::downgrade(&view_manager);
        tracing::debug!("View manager created");
        Ok(view_manager)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}
