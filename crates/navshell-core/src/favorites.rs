//! Favorites registry.
//!
//! Holds at most one [`FavoriteEntry`] per leaf name. Toggling a present name
//! removes it; toggling an absent name adds it, provided complete metadata
//! comes with it.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use navshell_model::{FavoriteEntry, FavoriteMetadata};

/// Favorites of one section, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteGroup {
    pub section_key: String,
    pub entries: Vec<FavoriteEntry>,
}

/// A change applied to the registry, delivered to listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoriteChange {
    Added(FavoriteEntry),
    Removed(FavoriteEntry),
}

impl FavoriteChange {
    pub fn entry(&self) -> &FavoriteEntry {
        match self {
            FavoriteChange::Added(entry) | FavoriteChange::Removed(entry) => entry,
        }
    }
}

type Listener = Box<dyn FnMut(&FavoriteChange)>;

#[derive(Default)]
pub struct FavoritesRegistry {
    entries: Vec<FavoriteEntry>,
    listeners: Vec<Listener>,
}

impl fmt::Debug for FavoritesRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FavoritesRegistry")
            .field("entries", &self.entries)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl FavoritesRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_favorite(&self, leaf_name: &str) -> bool {
        self.get(leaf_name).is_some()
    }

    pub fn get(&self, leaf_name: &str) -> Option<&FavoriteEntry> {
        self.entries.iter().find(|entry| entry.name() == leaf_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    /// Flip the favorite flag of `leaf_name` and return the new state.
    ///
    /// Removal only needs the name. Adding needs `metadata` with every field
    /// filled in; otherwise nothing changes and `false` is returned.
    pub fn toggle(&mut self, leaf_name: &str, metadata: Option<FavoriteMetadata>) -> bool {
        if let Some(index) = self.entries.iter().position(|e| e.name() == leaf_name) {
            let removed = self.entries.remove(index);
            debug!(leaf = leaf_name, "favorite removed");
            self.notify(&FavoriteChange::Removed(removed));
            return false;
        }
        let Some(metadata) = metadata else {
            debug!(leaf = leaf_name, "favorite add rejected: metadata missing");
            return false;
        };
        if let Err(error) = metadata.validate() {
            debug!(leaf = leaf_name, %error, "favorite add rejected");
            return false;
        }
        if leaf_name.trim().is_empty() {
            debug!("favorite add rejected: empty leaf name");
            return false;
        }
        let entry = FavoriteEntry::from_metadata(leaf_name, metadata);
        debug!(leaf = leaf_name, section = entry.section_key(), "favorite added");
        self.entries.push(entry.clone());
        self.notify(&FavoriteChange::Added(entry));
        true
    }

    /// Entries grouped by section.
    ///
    /// Sections appear in the order their first entry was added; empty
    /// sections are never emitted.
    pub fn list_by_section(&self) -> Vec<FavoriteGroup> {
        let mut groups: Vec<FavoriteGroup> = Vec::new();
        for entry in &self.entries {
            match groups
                .iter_mut()
                .find(|group| group.section_key == entry.section_key())
            {
                Some(group) => group.entries.push(entry.clone()),
                None => groups.push(FavoriteGroup {
                    section_key: entry.section_key().to_string(),
                    entries: vec![entry.clone()],
                }),
            }
        }
        groups
    }

    /// Register a callback invoked after every successful toggle.
    pub fn subscribe(&mut self, listener: impl FnMut(&FavoriteChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self, change: &FavoriteChange) {
        for listener in &mut self.listeners {
            listener(change);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn metadata(section: &str, category: &str) -> Option<FavoriteMetadata> {
        Some(FavoriteMetadata {
            section_key: section.to_string(),
            category_title: category.to_string(),
            description: "desc".to_string(),
        })
    }

    #[test]
    fn toggle_round_trip() {
        let mut registry = FavoritesRegistry::new();
        assert!(registry.toggle("team summary", metadata("team", "activity")));
        assert!(registry.is_favorite("team summary"));
        assert!(!registry.toggle("team summary", None));
        assert!(!registry.is_favorite("team summary"));
        assert!(registry.is_empty());
    }

    #[test]
    fn add_without_metadata_is_rejected() {
        let mut registry = FavoritesRegistry::new();
        assert!(!registry.toggle("team summary", None));
        assert!(registry.is_empty());
        let partial = Some(FavoriteMetadata {
            section_key: "team".to_string(),
            category_title: String::new(),
            description: "desc".to_string(),
        });
        assert!(!registry.toggle("team summary", partial));
        assert!(registry.is_empty());
    }

    #[test]
    fn at_most_one_entry_per_name() {
        let mut registry = FavoritesRegistry::new();
        registry.toggle("report", metadata("team", "report"));
        // Same name from another section toggles the existing entry off.
        registry.toggle("report", metadata("organization", "report"));
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn groups_by_section_in_insertion_order() {
        let mut registry = FavoritesRegistry::new();
        registry.toggle("member detail", metadata("member", "activity"));
        registry.toggle("team summary", metadata("team", "activity"));
        registry.toggle("review analysis", metadata("team", "development process"));
        let groups = registry.list_by_section();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].section_key, "member");
        assert_eq!(groups[1].section_key, "team");
        let names: Vec<&str> = groups[1].entries.iter().map(FavoriteEntry::name).collect();
        assert_eq!(names, vec!["team summary", "review analysis"]);
        let all: Vec<&str> = registry.entries().iter().map(FavoriteEntry::name).collect();
        assert_eq!(all, vec!["member detail", "team summary", "review analysis"]);

        registry.toggle("member detail", None);
        let groups = registry.list_by_section();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].section_key, "team");
    }

    #[test]
    fn listeners_see_successful_toggles_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut registry = FavoritesRegistry::new();
        let sink = Rc::clone(&seen);
        registry.subscribe(move |change| sink.borrow_mut().push(change.clone()));

        registry.toggle("team summary", None);
        registry.toggle("team summary", metadata("team", "activity"));
        registry.toggle("team summary", None);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert!(matches!(seen[0], FavoriteChange::Added(_)));
        assert!(matches!(seen[1], FavoriteChange::Removed(_)));
        assert_eq!(seen[1].entry().name(), "team summary");
    }
}
