use std::sync::Arc;

use service::memory::user_store::InMemoryUserStore;
use service::users::UserStore;

/// Shared handle passed to every handler through the router state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Fresh, empty process-lifetime store.
    pub fn in_memory() -> Self {
        let users: Arc<dyn UserStore> = InMemoryUserStore::new();
        Self::new(users)
    }
}
