//! Route definitions for the project catalog.
//!
//! Merged at `/projects` by `api_routes()` and at `/catalog` by the app
//! router.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Catalog routes under `prefix`.
///
/// ```text
/// GET {prefix}              -> list_all
/// GET {prefix}/             -> list_all
/// GET {prefix}/{category}   -> list_category
/// ```
pub fn router(prefix: &str) -> Router<AppState> {
    Router::new()
        .route(prefix, get(catalog::list_all))
        .route(&format!("{prefix}/"), get(catalog::list_all))
        .route(&format!("{prefix}/{{category}}"), get(catalog::list_category))
}
