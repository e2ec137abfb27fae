//! Side-nav dropdown kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// The option list a side-nav dropdown draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropdownKind {
    Team,
    Member,
    Project,
}

impl DropdownKind {
    pub const fn all() -> &'static [DropdownKind] {
        &[DropdownKind::Team, DropdownKind::Member, DropdownKind::Project]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DropdownKind::Team => "team",
            DropdownKind::Member => "member",
            DropdownKind::Project => "project",
        }
    }

    /// The dropdown a general section shows above its category tree.
    ///
    /// Only the team, member and project sections carry one.
    pub fn for_section(section_key: &str) -> Option<Self> {
        match section_key {
            "team" => Some(DropdownKind::Team),
            "member" => Some(DropdownKind::Member),
            "project" => Some(DropdownKind::Project),
            _ => None,
        }
    }
}

impl fmt::Display for DropdownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DropdownKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "team" => Ok(DropdownKind::Team),
            "member" => Ok(DropdownKind::Member),
            "project" => Ok(DropdownKind::Project),
            _ => Err(ModelError::UnknownDropdown(s.to_string())),
        }
    }
}
