//! The three fixed project lifecycle categories.
//!
//! A project belongs to exactly one category, decided solely by which root
//! folder it was discovered under.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Project lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Completed,
    Ongoing,
    Upcoming,
}

impl Category {
    /// All categories in catalog order.
    pub const ALL: [Category; 3] = [Self::Completed, Self::Ongoing, Self::Upcoming];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Ongoing => "ongoing",
            Self::Upcoming => "upcoming",
        }
    }

    /// Default on-disk folder name for this category (e.g. `completed_projects`).
    pub fn default_folder(&self) -> &'static str {
        match self {
            Self::Completed => "completed_projects",
            Self::Ongoing => "ongoing_projects",
            Self::Upcoming => "upcoming_projects",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    /// Exact match against the lowercase category names. Anything else is
    /// rejected rather than defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(Self::Completed),
            "ongoing" => Ok(Self::Ongoing),
            "upcoming" => Ok(Self::Upcoming),
            other => Err(CoreError::InvalidCategory(other.to_string())),
        }
    }
}
