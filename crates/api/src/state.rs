//! Application state

use bank_account_core::{AccountDirectory, AccountStore, InMemoryAccountStore};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<AccountDirectory>,
}

impl AppState {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self {
            directory: Arc::new(AccountDirectory::new(store)),
        }
    }

    /// State với in-memory store rỗng
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryAccountStore::new()))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory()
    }
}
