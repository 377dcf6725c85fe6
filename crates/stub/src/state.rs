//! Application state for the stub Food service.

use std::sync::Arc;

use crate::auth::TokenRegistry;
use crate::config::StubConfig;
use crate::storage::FoodStorage;

/// Shared state available to all request handlers.
///
/// # Type Parameters
///
/// * `S` - The storage backend type (must implement [`FoodStorage`])
pub struct AppState<S> {
    storage: Arc<S>,
    tokens: Arc<TokenRegistry>,
    config: Arc<StubConfig>,
}

// S sits behind an Arc so it does not need to be Clone itself
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            tokens: Arc::clone(&self.tokens),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: FoodStorage> AppState<S> {
    /// Creates a new AppState with the given storage and configuration.
    pub fn new(storage: Arc<S>, config: StubConfig) -> Self {
        Self {
            storage,
            tokens: Arc::new(TokenRegistry::new()),
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns the registry of issued bearer tokens.
    pub fn tokens(&self) -> &TokenRegistry {
        &self.tokens
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &StubConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryFoodStorage;

    #[test]
    fn test_clone_shares_storage() {
        let state = AppState::new(Arc::new(InMemoryFoodStorage::new()), StubConfig::default());
        let cloned = state.clone();

        let token = state.tokens().issue("noraivo");
        assert!(cloned.tokens().is_valid(&token));
        assert_eq!(cloned.config().username, "noraivo");
        assert_eq!(cloned.storage().backend_name(), "in-memory");
    }
}
