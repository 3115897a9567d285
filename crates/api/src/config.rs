use std::path::{Path, PathBuf};

use portfolio_core::catalog::CategoryRoots;
use portfolio_core::category::Category;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for running from the site directory.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Static site root and the category folders inside it.
    pub catalog: CategoryRoots,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `3000`                  |
    /// | `CORS_ORIGINS`         | `http://localhost:3000` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `SITE_ROOT`            | `.`                     |
    /// | `COMPLETED_DIR`        | `completed_projects`    |
    /// | `ONGOING_DIR`          | `ongoing_projects`      |
    /// | `UPCOMING_DIR`         | `upcoming_projects`     |
    pub fn from_env() -> Self {
        let host = env_or("HOST", "0.0.0.0");

        let port: u16 = env_or("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(&env_or("CORS_ORIGINS", "http://localhost:3000"));

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let catalog = CategoryRoots {
            base_dir: PathBuf::from(env_or("SITE_ROOT", ".")),
            completed: env_or("COMPLETED_DIR", Category::Completed.default_folder()),
            ongoing: env_or("ONGOING_DIR", Category::Ongoing.default_folder()),
            upcoming: env_or("UPCOMING_DIR", Category::Upcoming.default_folder()),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            catalog,
        }
    }

    /// Directory served as the static site.
    pub fn site_root(&self) -> &Path {
        self.catalog.base_dir()
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
