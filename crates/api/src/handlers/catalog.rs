//! Handlers for the project catalog.
//!
//! Responses are bare JSON (no `data` envelope) because the static frontend
//! consumes the catalog shape directly.

use axum::extract::{Path, State};
use axum::Json;

use portfolio_core::catalog::Catalog;
use portfolio_core::project::Project;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /projects -- every category, always with all three keys.
pub async fn list_all(State(state): State<AppState>) -> Json<Catalog> {
    let catalog = state.catalog.get_all().await;
    tracing::debug!(
        completed = catalog.completed.len(),
        ongoing = catalog.ongoing.len(),
        upcoming = catalog.upcoming.len(),
        "Loaded catalog"
    );
    Json(catalog)
}

/// GET /projects/{category} -- one category, 400 for unknown names.
pub async fn list_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<Vec<Project>>> {
    let projects = state.catalog.get_category(&category).await?;
    Ok(Json(projects))
}

/// GET /testimonials -- projects with a client review.
pub async fn list_testimonials(State(state): State<AppState>) -> Json<Vec<Project>> {
    let catalog = state.catalog.get_all().await;
    Json(catalog.testimonials().into_iter().cloned().collect())
}
