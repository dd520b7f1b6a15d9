//! Shared application state for all routes.

use crate::service::DogStore;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    /// Process-scoped handle to the store, acquired once at startup.
    pub store: DogStore,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        AppState {
            store: DogStore::new(pool),
        }
    }
}
