pub mod catalog;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects, /projects/      all categories
/// /projects/{category}       one category
/// /testimonials              projects with a client review
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(catalog::router("/projects"))
        .route("/testimonials", get(handlers::catalog::list_testimonials))
}
