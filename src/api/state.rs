//! Application state for the ledger API.
//!
//! This module defines the shared application state that is available
//! to all request handlers: the loaded configuration and the in-memory
//! import sessions.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::ConfigLoader;
use crate::models::Ledger;

/// Shared application state.
///
/// Each import creates a session holding one ledger. Sessions live only as
/// long as the process.
#[derive(Clone)]
pub struct AppState {
    /// The loaded ledger configuration.
    config: Arc<ConfigLoader>,
    /// Ledgers by session id.
    sessions: Arc<RwLock<HashMap<Uuid, Ledger>>>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the session store.
    pub fn sessions(&self) -> &RwLock<HashMap<Uuid, Ledger>> {
        &self.sessions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_clones_share_sessions() {
        let state = AppState::new(ConfigLoader::default());
        let other = state.clone();
        let id = Uuid::new_v4();

        state.sessions().write().await.insert(id, Ledger::default());

        assert!(other.sessions().read().await.contains_key(&id));
    }
}
