//! Navigation state synchronization and plan feature gating.
//!
//! [`NavigationController`] owns the selection, the favorites and the
//! restriction overlay, consults [`FeaturePolicy`] on every navigation and
//! hands a [`RenderInstruction`] to its [`RenderSink`] after each change.

pub mod action;
pub mod controller;
pub mod favorites;
pub mod options;
pub mod outline;
pub mod overlay;
pub mod policy;
pub mod render;
pub mod selection;

pub use action::{Action, ScriptError, parse_script};
pub use controller::{NavigationController, Transition};
pub use favorites::{FavoriteChange, FavoriteGroup, FavoritesRegistry};
pub use options::{DEFAULT_SIDE_NAV_WIDTH, ShellOptions};
pub use outline::{Outline, render_outline};
pub use overlay::{LogNotifier, OverlayContent, OverlayManager, UpgradeNotifier};
pub use policy::{ALWAYS_STANDARD, FeaturePolicy};
pub use render::{
    CardGroup, CategoryView, ContentView, DropdownView, FAVORITES_EMPTY_MESSAGE, LayoutView,
    LeafView, MenuCard, NullSink, OverlayView, RecordingSink, RenderInstruction, RenderSink,
    SideNavView, TopNavItem,
};
pub use selection::{DropdownSelections, DropdownSlot, SelectionState};
