//! The combined project catalog and the read-only service that builds it.
//!
//! A catalog is rebuilt from disk on every call and never cached, so there
//! is no shared mutable state between requests.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::discovery::build_category;
use crate::error::CoreError;
use crate::project::Project;

/// Where each category's project folders live on disk.
///
/// The folder names double as the public URL prefix of image paths, so the
/// base directory is expected to be served as static content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRoots {
    pub base_dir: PathBuf,
    pub completed: String,
    pub ongoing: String,
    pub upcoming: String,
}

impl CategoryRoots {
    /// Roots under `base_dir` using the default folder names.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            completed: Category::Completed.default_folder().to_string(),
            ongoing: Category::Ongoing.default_folder().to_string(),
            upcoming: Category::Upcoming.default_folder().to_string(),
        }
    }

    pub fn folder(&self, category: Category) -> &str {
        match category {
            Category::Completed => &self.completed,
            Category::Ongoing => &self.ongoing,
            Category::Upcoming => &self.upcoming,
        }
    }

    pub fn root(&self, category: Category) -> PathBuf {
        self.base_dir.join(self.folder(category))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

/// All three categories mapped to their projects. Every key is always
/// present when serialized, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub completed: Vec<Project>,
    pub ongoing: Vec<Project>,
    pub upcoming: Vec<Project>,
}

impl Catalog {
    pub fn get(&self, category: Category) -> &[Project] {
        match category {
            Category::Completed => &self.completed,
            Category::Ongoing => &self.ongoing,
            Category::Upcoming => &self.upcoming,
        }
    }

    /// Projects contributing a client testimonial: completed first, then
    /// ongoing. Upcoming projects never contribute.
    pub fn testimonials(&self) -> Vec<&Project> {
        self.completed
            .iter()
            .chain(self.ongoing.iter())
            .filter(|p| p.has_review())
            .collect()
    }
}

/// Builds catalogs from the folder layout described by [`CategoryRoots`].
#[derive(Debug, Clone)]
pub struct CatalogService {
    roots: CategoryRoots,
}

impl CatalogService {
    pub fn new(roots: CategoryRoots) -> Self {
        Self { roots }
    }

    /// Discover the projects of one category.
    pub async fn category(&self, category: Category) -> Result<Vec<Project>, CoreError> {
        build_category(&self.roots.root(category)).await
    }

    /// Discover the projects of a category given by name.
    ///
    /// Fails with [`CoreError::InvalidCategory`] for names outside the fixed
    /// set. A valid category without projects is an empty list.
    pub async fn get_category(&self, name: &str) -> Result<Vec<Project>, CoreError> {
        let category: Category = name.parse()?;
        self.category(category).await
    }

    /// Discover all categories concurrently.
    ///
    /// A category whose root cannot be listed is logged and left empty so the
    /// others still come through.
    pub async fn get_all(&self) -> Catalog {
        let (completed, ongoing, upcoming) = tokio::join!(
            self.category_or_empty(Category::Completed),
            self.category_or_empty(Category::Ongoing),
            self.category_or_empty(Category::Upcoming),
        );

        Catalog {
            completed,
            ongoing,
            upcoming,
        }
    }

    async fn category_or_empty(&self, category: Category) -> Vec<Project> {
        match self.category(category).await {
            Ok(projects) => projects,
            Err(e) => {
                tracing::error!(%category, error = %e, "Failed to load category, returning it empty");
                Vec::new()
            }
        }
    }
}
