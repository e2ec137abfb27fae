//! Selection state owned by the navigation controller.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use navshell_model::{DASHBOARD_SECTION, DropdownKind, LeafRef, SectionView};

/// One side-nav dropdown slot.
///
/// The dashboard keeps its own team selector, independent of the team
/// section's, so there are four slots for three option lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropdownSlot {
    Team,
    Member,
    Project,
    DashboardTeam,
}

impl DropdownSlot {
    pub const fn all() -> &'static [DropdownSlot] {
        &[
            DropdownSlot::Team,
            DropdownSlot::Member,
            DropdownSlot::Project,
            DropdownSlot::DashboardTeam,
        ]
    }

    /// Option list the slot draws from.
    pub fn kind(&self) -> DropdownKind {
        match self {
            DropdownSlot::Team | DropdownSlot::DashboardTeam => DropdownKind::Team,
            DropdownSlot::Member => DropdownKind::Member,
            DropdownSlot::Project => DropdownKind::Project,
        }
    }

    /// Slot shown by a section's side nav, if any.
    pub fn for_section(section_key: &str) -> Option<Self> {
        if section_key == DASHBOARD_SECTION {
            return Some(DropdownSlot::DashboardTeam);
        }
        DropdownKind::for_section(section_key).map(|kind| match kind {
            DropdownKind::Team => DropdownSlot::Team,
            DropdownKind::Member => DropdownSlot::Member,
            DropdownKind::Project => DropdownSlot::Project,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DropdownSlot::Team => "team",
            DropdownSlot::Member => "member",
            DropdownSlot::Project => "project",
            DropdownSlot::DashboardTeam => "dashboard_team",
        }
    }
}

impl fmt::Display for DropdownSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selected option per slot. A missing slot shows its placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownSelections {
    values: BTreeMap<DropdownSlot, String>,
}

impl DropdownSelections {
    pub fn get(&self, slot: DropdownSlot) -> Option<&str> {
        self.values.get(&slot).map(String::as_str)
    }

    pub fn set(&mut self, slot: DropdownSlot, value: impl Into<String>) {
        self.values.insert(slot, value.into());
    }

    pub fn reset(&mut self, slot: DropdownSlot) {
        self.values.remove(&slot);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub active_section_key: String,
    pub active_leaf: Option<LeafRef>,
    pub side_nav_collapsed: bool,
    pub dropdowns: DropdownSelections,
    /// Categories of the active section whose leaves are folded away.
    pub collapsed_categories: BTreeSet<String>,
}

impl SelectionState {
    pub fn new(section_key: impl Into<String>) -> Self {
        Self {
            active_section_key: section_key.into(),
            active_leaf: None,
            side_nav_collapsed: false,
            dropdowns: DropdownSelections::default(),
            collapsed_categories: BTreeSet::new(),
        }
    }

    pub fn view(&self) -> SectionView {
        SectionView::for_key(&self.active_section_key)
    }

    /// True if the active leaf is exactly this catalog position.
    pub fn is_leaf_active(&self, section_key: &str, category_title: &str, leaf_name: &str) -> bool {
        self.active_leaf.as_ref().is_some_and(|leaf| {
            leaf.section_key == section_key
                && leaf.category_title == category_title
                && leaf.leaf_name == leaf_name
        })
    }

    pub fn is_category_expanded(&self, category_title: &str) -> bool {
        !self.collapsed_categories.contains(category_title)
    }

    /// Enter `section_key` with no active leaf.
    ///
    /// Tree expansion always resets. The dashboard team selector falls back
    /// to its placeholder on every entry; the other slots keep their values.
    pub(crate) fn enter_section(&mut self, section_key: &str) {
        self.active_section_key = section_key.to_string();
        self.active_leaf = None;
        self.collapsed_categories.clear();
        if section_key == DASHBOARD_SECTION {
            self.dropdowns.reset(DropdownSlot::DashboardTeam);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_per_section() {
        assert_eq!(DropdownSlot::for_section("dashboard"), Some(DropdownSlot::DashboardTeam));
        assert_eq!(DropdownSlot::for_section("member"), Some(DropdownSlot::Member));
        assert_eq!(DropdownSlot::for_section("favorites"), None);
        assert_eq!(DropdownSlot::DashboardTeam.kind(), DropdownKind::Team);
    }

    #[test]
    fn entering_dashboard_resets_only_its_slot() {
        let mut state = SelectionState::new("team");
        state.dropdowns.set(DropdownSlot::Team, "alpha");
        state.dropdowns.set(DropdownSlot::DashboardTeam, "beta");
        state.collapsed_categories.insert("activity".to_string());
        state.active_leaf = Some(LeafRef::new("team", "activity", "team summary"));

        state.enter_section("dashboard");
        assert_eq!(state.dropdowns.get(DropdownSlot::Team), Some("alpha"));
        assert_eq!(state.dropdowns.get(DropdownSlot::DashboardTeam), None);
        assert!(state.active_leaf.is_none());
        assert!(state.is_category_expanded("activity"));
        assert_eq!(state.view(), SectionView::Dashboard);
    }
}
