//! Presentation content attached to catalog leaves.
//!
//! Descriptions, badges, and dropdown option lists. Loaded from TOML:
//!
//! ```toml
//! default_description = "feature description"
//!
//! [badges]
//! recommended = ["review analysis"]
//! new = ["team summary"]
//!
//! [dropdowns.team]
//! placeholder = "select a team"
//! options = ["qa team"]
//!
//! [descriptions.team.activity]
//! "team summary" = "..."
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use navshell_model::DropdownKind;

use crate::error::Result;
use crate::loaders::{EMBEDDED_ORIGIN, load_toml, parse_toml};

const DEFAULT_CONTENT: &str = include_str!("../data/content.toml");

/// Leaf name badges shown on menu cards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Badges {
    pub recommended: Vec<String>,
    pub new: Vec<String>,
}

/// Option list and placeholder of one dropdown.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DropdownOptions {
    pub placeholder: String,
    #[serde(default)]
    pub options: Vec<String>,
}

impl DropdownOptions {
    pub fn contains(&self, value: &str) -> bool {
        self.options.iter().any(|option| option == value)
    }

    /// Options whose text contains `query`, ignoring case.
    ///
    /// A blank query matches everything.
    pub fn filter(&self, query: &str) -> Vec<&str> {
        let needle = query.trim().to_lowercase();
        self.options
            .iter()
            .filter(|option| needle.is_empty() || option.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dropdowns {
    pub team: DropdownOptions,
    pub member: DropdownOptions,
    pub project: DropdownOptions,
}

impl Dropdowns {
    pub fn get(&self, kind: DropdownKind) -> &DropdownOptions {
        match kind {
            DropdownKind::Team => &self.team,
            DropdownKind::Member => &self.member,
            DropdownKind::Project => &self.project,
        }
    }
}

/// section -> category -> leaf -> description
type DescriptionTable = BTreeMap<String, BTreeMap<String, BTreeMap<String, String>>>;

/// Everything the shell shows about a leaf beyond its name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogContent {
    #[serde(default = "default_description")]
    pub default_description: String,
    #[serde(default)]
    pub badges: Badges,
    #[serde(default)]
    pub dropdowns: Dropdowns,
    #[serde(default)]
    pub descriptions: DescriptionTable,
}

fn default_description() -> String {
    "feature description".to_string()
}

impl Default for CatalogContent {
    fn default() -> Self {
        Self {
            default_description: default_description(),
            badges: Badges::default(),
            dropdowns: Dropdowns::default(),
            descriptions: DescriptionTable::new(),
        }
    }
}

impl CatalogContent {
    /// The content shipped with the crate.
    pub fn embedded() -> Result<Self> {
        parse_toml(DEFAULT_CONTENT, EMBEDDED_ORIGIN)
    }

    pub fn load(path: &Path) -> Result<Self> {
        load_toml(path)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        parse_toml(text, "<string>")
    }

    /// Description for a leaf, falling back to the default text.
    pub fn description(&self, section_key: &str, category_title: &str, leaf_name: &str) -> &str {
        self.descriptions
            .get(section_key)
            .and_then(|categories| categories.get(category_title))
            .and_then(|leaves| leaves.get(leaf_name))
            .map_or(self.default_description.as_str(), String::as_str)
    }

    pub fn is_recommended(&self, leaf_name: &str) -> bool {
        self.badges.recommended.iter().any(|name| name == leaf_name)
    }

    pub fn is_new(&self, leaf_name: &str) -> bool {
        self.badges.new.iter().any(|name| name == leaf_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = CatalogContent::embedded().expect("embedded content");
        assert_eq!(content.dropdowns.team.placeholder, "select a team");
        assert_eq!(content.dropdowns.get(DropdownKind::Member).options.len(), 15);
        assert!(content.is_recommended("review analysis"));
        assert!(content.is_new("team summary"));
        assert!(!content.is_new("team detail"));
    }

    #[test]
    fn description_falls_back_to_default() {
        let content = CatalogContent::embedded().expect("embedded content");
        assert!(
            content
                .description("team", "activity", "team summary")
                .starts_with("Get a bird's-eye view")
        );
        assert_eq!(
            content.description("settings", "organization settings", "access status"),
            "feature description"
        );
    }

    #[test]
    fn filter_is_case_insensitive() {
        let options = DropdownOptions {
            placeholder: "select a team".to_string(),
            options: vec!["QA team".to_string(), "design team".to_string()],
        };
        assert_eq!(options.filter("qa"), vec!["QA team"]);
        assert_eq!(options.filter("  ").len(), 2);
        assert!(options.filter("mobile").is_empty());
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let content = CatalogContent::from_toml_str("").expect("empty content");
        assert_eq!(content.default_description, "feature description");
        assert!(content.dropdowns.team.options.is_empty());
    }
}
