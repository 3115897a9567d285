//! Project records and the partial records produced by the metadata parser.

use serde::{Deserialize, Serialize};

/// One discovered (or sample) project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Display name. Always populated; falls back to the folder name.
    pub name: String,
    pub owner: String,
    pub address: String,
    /// Client testimonial. Empty means the project contributes none.
    pub review: String,
    /// Public image paths (`/<category folder>/<project folder>/<file>`).
    pub images: Vec<String>,
    /// The original, unmodified folder name.
    pub folder: String,
}

impl Project {
    /// Start a record for a project folder: name is the folder name with
    /// underscores replaced by spaces, everything else empty.
    pub fn from_folder(folder: &str) -> Self {
        Self {
            name: display_name(folder),
            owner: String::new(),
            address: String::new(),
            review: String::new(),
            images: Vec::new(),
            folder: folder.to_string(),
        }
    }

    /// Overwrite only the fields the metadata populated.
    ///
    /// An empty `project name` value is ignored so `name` stays populated.
    pub fn apply(&mut self, meta: ProjectMetadata) {
        if let Some(name) = meta.name.filter(|n| !n.is_empty()) {
            self.name = name;
        }
        if let Some(owner) = meta.owner {
            self.owner = owner;
        }
        if let Some(address) = meta.address {
            self.address = address;
        }
        if let Some(review) = meta.review {
            self.review = review;
        }
    }

    pub fn has_review(&self) -> bool {
        !self.review.is_empty()
    }
}

/// Fields read from a `project.txt` file. `None` means the key was absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectMetadata {
    pub name: Option<String>,
    pub owner: Option<String>,
    pub address: Option<String>,
    pub review: Option<String>,
}

impl ProjectMetadata {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.owner.is_none()
            && self.address.is_none()
            && self.review.is_none()
    }
}

/// `Green_Gardens_Villa` -> `Green Gardens Villa`.
pub fn display_name(folder: &str) -> String {
    folder.replace('_', " ")
}
