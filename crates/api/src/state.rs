use std::sync::Arc;

use creatorhub_db::{Catalog, EntityStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: everything sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The entity store (PostgreSQL or in-memory).
    pub store: Arc<dyn EntityStore>,
    /// Read-side catalog over the same store.
    pub catalog: Catalog,
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn EntityStore>, config: ServerConfig) -> Self {
        Self {
            catalog: Catalog::new(Arc::clone(&store)),
            store,
            config: Arc::new(config),
        }
    }
}
