//! Render instructions emitted to the presentation layer.
//!
//! A [`RenderInstruction`] is a complete, self-contained description of the
//! shell after a controller call. The renderer is expected to be a pure
//! function of it.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use navshell_model::{DropdownKind, LeafRef, OverlayState, RestrictionTier};

use crate::favorites::FavoriteGroup;
use crate::overlay::OverlayContent;
use crate::selection::DropdownSlot;

/// Message shown by the favorites page when nothing has been added.
pub const FAVORITES_EMPTY_MESSAGE: &str = "No menus have been added to favorites.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderInstruction {
    pub active_section_key: String,
    pub active_leaf: Option<LeafRef>,
    pub side_nav_collapsed: bool,
    /// `None` while no overlay is shown.
    pub overlay: Option<OverlayView>,
    /// Favorites grouped by section, in insertion order.
    pub favorites: Vec<FavoriteGroup>,
    pub top_nav: Vec<TopNavItem>,
    pub side_nav: SideNavView,
    pub content: ContentView,
    pub layout: LayoutView,
    pub dropdowns: Vec<DropdownView>,
}

impl RenderInstruction {
    pub fn overlay_state(&self) -> OverlayState {
        self.overlay
            .as_ref()
            .map_or_else(OverlayState::hidden, |overlay| overlay.state)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverlayView {
    #[serde(flatten)]
    pub state: OverlayState,
    #[serde(flatten)]
    pub content: OverlayContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopNavItem {
    pub key: String,
    pub title: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SideNavView {
    /// The favorites page has no side navigation.
    Hidden,
    /// Dashboard team selector plus the dashboard category.
    Dashboard {
        dropdown: DropdownView,
        categories: Vec<CategoryView>,
    },
    /// General catalog tree, with a selector for team, member and project.
    Menu {
        dropdown: Option<DropdownView>,
        categories: Vec<CategoryView>,
    },
}

impl SideNavView {
    pub fn categories(&self) -> &[CategoryView] {
        match self {
            SideNavView::Hidden => &[],
            SideNavView::Dashboard { categories, .. } | SideNavView::Menu { categories, .. } => {
                categories.as_slice()
            }
        }
    }

    /// The leaf currently highlighted in the tree, if any.
    pub fn active_leaf(&self) -> Option<&LeafView> {
        self.categories()
            .iter()
            .flat_map(|category| category.leaves.iter())
            .find(|leaf| leaf.active)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    pub title: String,
    pub expanded: bool,
    pub leaves: Vec<LeafView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeafView {
    pub name: String,
    pub active: bool,
    pub tier: RestrictionTier,
    pub favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentView {
    /// Menu cards of the active section, grouped by category.
    MenuList {
        section_key: String,
        groups: Vec<CardGroup>,
    },
    /// The static artifact of the active leaf.
    Leaf { leaf: LeafRef, artifact: String },
    /// Dashboard with no leaf chosen yet.
    DashboardHome { artifact: String },
    Favorites {
        groups: Vec<FavoriteGroup>,
        empty_message: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardGroup {
    pub category: String,
    pub cards: Vec<MenuCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuCard {
    pub name: String,
    pub description: String,
    pub tier: RestrictionTier,
    pub recommended: bool,
    pub new: bool,
    pub favorite: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutView {
    pub side_nav_visible: bool,
    pub toggle_visible: bool,
    pub content_offset_left: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownView {
    pub slot: DropdownSlot,
    pub kind: DropdownKind,
    /// Selected option, or the placeholder label.
    pub text: String,
    pub placeholder: bool,
}

/// Consumer of render instructions.
pub trait RenderSink {
    fn render(&mut self, instruction: &RenderInstruction);
}

impl<F> RenderSink for F
where
    F: FnMut(&RenderInstruction),
{
    fn render(&mut self, instruction: &RenderInstruction) {
        self(instruction);
    }
}

/// Discards every instruction.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn render(&mut self, _instruction: &RenderInstruction) {}
}

/// Keeps every instruction it receives. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    frames: Rc<RefCell<Vec<RenderInstruction>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.borrow().is_empty()
    }

    pub fn last(&self) -> Option<RenderInstruction> {
        self.frames.borrow().last().cloned()
    }

    /// Drain the recorded instructions.
    pub fn take(&self) -> Vec<RenderInstruction> {
        std::mem::take(&mut *self.frames.borrow_mut())
    }
}

impl RenderSink for RecordingSink {
    fn render(&mut self, instruction: &RenderInstruction) {
        self.frames.borrow_mut().push(instruction.clone());
    }
}
