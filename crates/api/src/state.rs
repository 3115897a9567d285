use std::sync::Arc;

use portfolio_core::catalog::CatalogService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; holds no per-request data, the catalog is rebuilt
/// from disk on every call.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Folder-backed project catalog.
    pub catalog: Arc<CatalogService>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let catalog = CatalogService::new(config.catalog.clone());
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
        }
    }
}
