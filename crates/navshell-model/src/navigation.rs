//! Navigation tree types.
//!
//! The tree is two levels deep: a [`Section`] (top navigation) holds
//! [`Category`] groups (collapsible side-nav headers), each of which lists
//! leaf names (the navigable menu entries).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Section key of the dashboard area.
pub const DASHBOARD_SECTION: &str = "dashboard";

/// Section key of the favorites area.
pub const FAVORITES_SECTION: &str = "favorites";

/// Identifies one navigable leaf in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LeafRef {
    /// Top-level section key (e.g., "team").
    pub section_key: String,
    /// Category title within the section (e.g., "activity").
    pub category_title: String,
    /// Leaf name (e.g., "team summary").
    pub leaf_name: String,
}

impl LeafRef {
    pub fn new(
        section_key: impl Into<String>,
        category_title: impl Into<String>,
        leaf_name: impl Into<String>,
    ) -> Self {
        Self {
            section_key: section_key.into(),
            category_title: category_title.into(),
            leaf_name: leaf_name.into(),
        }
    }
}

impl fmt::Display for LeafRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} / {}",
            self.section_key, self.category_title, self.leaf_name
        )
    }
}

/// A collapsible group of leaves in the side navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    pub leaves: Vec<String>,
}

impl Category {
    pub fn contains(&self, leaf_name: &str) -> bool {
        self.leaves.iter().any(|leaf| leaf == leaf_name)
    }
}

/// A top-level navigation area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub key: String,
    pub title: String,
    pub categories: Vec<Category>,
}

impl Section {
    /// Look up a category by title.
    pub fn category(&self, title: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.title == title)
    }

    /// Find the first category that lists `leaf_name`.
    pub fn category_of(&self, leaf_name: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.contains(leaf_name))
    }

    /// True if `(category_title, leaf_name)` exists in this section.
    pub fn has_leaf(&self, category_title: &str, leaf_name: &str) -> bool {
        self.category(category_title)
            .is_some_and(|category| category.contains(leaf_name))
    }

    /// Total number of leaves across all categories.
    pub fn leaf_count(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.leaves.len())
            .sum()
    }

    /// Iterate every leaf of the section as a [`LeafRef`].
    pub fn leaf_refs(&self) -> impl Iterator<Item = LeafRef> + '_ {
        self.categories.iter().flat_map(move |category| {
            category
                .leaves
                .iter()
                .map(move |leaf| LeafRef::new(&self.key, &category.title, leaf))
        })
    }

    pub fn view(&self) -> SectionView {
        SectionView::for_key(&self.key)
    }
}

/// How a section presents itself in the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionView {
    /// General catalog section: menu card list plus category tree.
    MenuList,
    /// Dashboard: team selector plus the single dashboard category.
    Dashboard,
    /// Favorites: grouped favorite cards, no side navigation.
    Favorites,
}

impl SectionView {
    pub fn for_key(key: &str) -> Self {
        match key {
            DASHBOARD_SECTION => SectionView::Dashboard,
            FAVORITES_SECTION => SectionView::Favorites,
            _ => SectionView::MenuList,
        }
    }

    /// Favorites is a list view; its entries are followed, not navigated to.
    pub fn has_leaves(&self) -> bool {
        !matches!(self, SectionView::Favorites)
    }

    pub fn shows_side_nav(&self) -> bool {
        !matches!(self, SectionView::Favorites)
    }
}
