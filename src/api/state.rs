//! Application state for the Support Estimator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, RateSchedule};

/// Shared application state.
///
/// Holds the loaded rate schedule. The schedule is immutable once loaded, so
/// handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded schedule configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the rate schedule calculations run against.
    pub fn schedule(&self) -> &RateSchedule {
        self.config.schedule()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_schedule() {
        let state = AppState::new(ConfigLoader::builtin());
        let cloned = state.clone();
        assert!(std::ptr::eq(state.schedule(), cloned.schedule()));
    }
}
