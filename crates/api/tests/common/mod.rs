#![allow(dead_code)]

use std::fs;
use std::path::Path;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use portfolio_api::config::ServerConfig;
use portfolio_api::router::build_app_router;
use portfolio_api::state::AppState;
use portfolio_core::catalog::CategoryRoots;

/// Build a test `ServerConfig` serving `site_root` with the default
/// category folder names.
pub fn test_config(site_root: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        catalog: CategoryRoots::new(site_root),
    }
}

/// Build the full application router over `site_root`.
///
/// Uses the same builder as `main.rs` so integration tests exercise the
/// production middleware stack.
pub fn build_test_app(site_root: &Path) -> Router {
    let config = test_config(site_root);
    let state = AppState::new(config.clone());
    build_app_router(state, &config)
}

/// Create a project folder with an optional `project.txt` and empty files.
pub fn add_project(
    site_root: &Path,
    category_folder: &str,
    folder: &str,
    metadata: Option<&str>,
    files: &[&str],
) {
    let dir = site_root.join(category_folder).join(folder);
    fs::create_dir_all(&dir).expect("create project dir");
    if let Some(text) = metadata {
        fs::write(dir.join("project.txt"), text).expect("write project.txt");
    }
    for file in files {
        fs::write(dir.join(file), b"img").expect("write file");
    }
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as bytes.
pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
