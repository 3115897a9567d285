//! Project portfolio discovery.
//!
//! Builds a catalog of construction projects (completed, ongoing, upcoming)
//! from a folder tree on disk: one subdirectory per project, an optional
//! `project.txt` metadata file and any number of photos. No HTTP types live
//! here; the API crate wraps [`catalog::CatalogService`].

pub mod catalog;
pub mod category;
pub mod discovery;
pub mod error;
pub mod metadata;
pub mod project;
pub mod sample;
