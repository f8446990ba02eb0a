//! Shared application state for all routes.

use crate::store::ProviderStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProviderStore>,
}

impl AppState {
    pub fn new<S: ProviderStore + 'static>(store: S) -> Self {
        AppState {
            store: Arc::new(store),
        }
    }
}
