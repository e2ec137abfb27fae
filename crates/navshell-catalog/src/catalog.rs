//! The navigation catalog: section tree plus leaf content.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{info, warn};

use navshell_model::{DropdownKind, LeafRef, Section};

use crate::content::{CatalogContent, DropdownOptions};
use crate::error::Result;
use crate::loaders::{EMBEDDED_ORIGIN, load_navigation, parse_navigation};

const DEFAULT_NAVIGATION: &str = include_str!("../data/navigation.json");

/// Immutable navigation data loaded once at startup.
#[derive(Debug, Clone)]
pub struct NavigationCatalog {
    sections: Vec<Section>,
    content: CatalogContent,
}

impl NavigationCatalog {
    pub fn new(sections: Vec<Section>, content: CatalogContent) -> Self {
        let catalog = Self { sections, content };
        catalog.log_summary();
        catalog
    }

    /// The catalog shipped with the crate.
    pub fn embedded() -> Result<Self> {
        Self::embedded_with(CatalogContent::embedded()?)
    }

    /// The shipped section tree with caller-provided content.
    pub fn embedded_with(content: CatalogContent) -> Result<Self> {
        let sections = parse_navigation(DEFAULT_NAVIGATION, EMBEDDED_ORIGIN)?;
        Ok(Self::new(sections, content))
    }

    /// Load a navigation JSON file, pairing it with the given content.
    pub fn load(navigation: &Path, content: CatalogContent) -> Result<Self> {
        let sections = load_navigation(navigation)?;
        Ok(Self::new(sections, content))
    }

    pub fn from_json_str(json: &str, content: CatalogContent) -> Result<Self> {
        let sections = parse_navigation(json, "<string>")?;
        Ok(Self::new(sections, content))
    }

    fn log_summary(&self) {
        let leaves: usize = self.sections.iter().map(Section::leaf_count).sum();
        info!(
            sections = self.sections.len(),
            leaves, "navigation catalog loaded"
        );
        for name in self.duplicate_leaf_names() {
            warn!(leaf = name, "leaf name appears in more than one category");
        }
    }

    /// Sections in top-navigation order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, key: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.key == key)
    }

    pub fn has_section(&self, key: &str) -> bool {
        self.section(key).is_some()
    }

    /// Position of a section in top-navigation order.
    pub fn section_index(&self, key: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.key == key)
    }

    pub fn contains_leaf(&self, section_key: &str, category_title: &str, leaf_name: &str) -> bool {
        self.section(section_key)
            .is_some_and(|section| section.has_leaf(category_title, leaf_name))
    }

    /// Resolve a leaf name inside one section to its full reference.
    pub fn find_leaf(&self, section_key: &str, leaf_name: &str) -> Option<LeafRef> {
        let section = self.section(section_key)?;
        let category = section.category_of(leaf_name)?;
        Some(LeafRef::new(&section.key, &category.title, leaf_name))
    }

    /// Every leaf in catalog order.
    pub fn leaf_refs(&self) -> impl Iterator<Item = LeafRef> + '_ {
        self.sections.iter().flat_map(Section::leaf_refs)
    }

    /// Leaf names listed in more than one (section, category).
    pub fn duplicate_leaf_names(&self) -> Vec<&str> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for section in &self.sections {
            for category in &section.categories {
                for leaf in &category.leaves {
                    *counts.entry(leaf.as_str()).or_default() += 1;
                }
            }
        }
        counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(name, _)| name)
            .collect()
    }

    pub fn content(&self) -> &CatalogContent {
        &self.content
    }

    pub fn description(&self, leaf: &LeafRef) -> &str {
        self.content
            .description(&leaf.section_key, &leaf.category_title, &leaf.leaf_name)
    }

    pub fn is_recommended(&self, leaf_name: &str) -> bool {
        self.content.is_recommended(leaf_name)
    }

    pub fn is_new(&self, leaf_name: &str) -> bool {
        self.content.is_new(leaf_name)
    }

    pub fn dropdown(&self, kind: DropdownKind) -> &DropdownOptions {
        self.content.dropdowns.get(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> NavigationCatalog {
        NavigationCatalog::embedded().expect("embedded catalog")
    }

    #[test]
    fn embedded_section_order() {
        let catalog = catalog();
        let keys: Vec<&str> = catalog.sections().iter().map(|s| s.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "dashboard",
                "favorites",
                "team",
                "member",
                "project",
                "organization",
                "settings"
            ]
        );
    }

    #[test]
    fn resolves_leaves() {
        let catalog = catalog();
        assert!(catalog.contains_leaf("team", "activity", "team comparison"));
        assert!(!catalog.contains_leaf("team", "benchmark", "team comparison"));
        assert!(!catalog.contains_leaf("nowhere", "activity", "team comparison"));
        assert_eq!(
            catalog.find_leaf("member", "member stats"),
            Some(LeafRef::new("member", "activity", "member stats"))
        );
        assert_eq!(catalog.find_leaf("team", "member stats"), None);
    }

    #[test]
    fn embedded_catalog_has_unique_leaf_names() {
        assert!(catalog().duplicate_leaf_names().is_empty());
    }

    #[test]
    fn detects_repeated_leaf_names() {
        let json = r#"{
            "team": { "title": "Team", "items": [ { "title": "report", "submenu": ["report"] } ] },
            "organization": { "title": "Management", "items": [ { "title": "report", "submenu": ["report", "roi analysis"] } ] }
        }"#;
        let catalog = NavigationCatalog::from_json_str(json, CatalogContent::default())
            .expect("parse catalog");
        assert_eq!(catalog.duplicate_leaf_names(), vec!["report"]);
    }

    #[test]
    fn dropdown_lists() {
        let catalog = catalog();
        let teams = catalog.dropdown(DropdownKind::Team);
        assert!(teams.contains("qa team"));
        assert_eq!(catalog.dropdown(DropdownKind::Project).placeholder, "select a project");
    }
}
