//! Navigation controller.
//!
//! Sole writer of [`SelectionState`], the favorites and the overlay. Every
//! public method leaves the model consistent before it returns and, when it
//! changed something, emits one [`RenderInstruction`] to the render sink.

use std::fmt;

use tracing::debug;

use navshell_catalog::NavigationCatalog;
use navshell_model::{
    Category, DropdownKind, FavoriteMetadata, LeafRef, OverlayState, Section, SectionView,
};

use crate::action::Action;
use crate::favorites::{FavoriteChange, FavoriteGroup, FavoritesRegistry};
use crate::options::ShellOptions;
use crate::overlay::{OverlayManager, UpgradeNotifier};
use crate::policy::FeaturePolicy;
use crate::render::{
    CardGroup, CategoryView, ContentView, DropdownView, FAVORITES_EMPTY_MESSAGE, LayoutView,
    LeafView, MenuCard, NullSink, OverlayView, RenderInstruction, RenderSink, SideNavView,
    TopNavItem,
};
use crate::selection::{DropdownSlot, SelectionState};

/// Outcome of a controller call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The call took effect.
    Applied,
    /// A guard rejected the call; state is unchanged.
    Ignored,
}

impl Transition {
    pub fn is_applied(self) -> bool {
        matches!(self, Transition::Applied)
    }
}

pub struct NavigationController {
    catalog: NavigationCatalog,
    policy: FeaturePolicy,
    options: ShellOptions,
    selection: SelectionState,
    favorites: FavoritesRegistry,
    overlay: OverlayManager,
    sink: Box<dyn RenderSink>,
}

impl fmt::Debug for NavigationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationController")
            .field("options", &self.options)
            .field("selection", &self.selection)
            .field("favorites", &self.favorites)
            .field("overlay", &self.overlay)
            .finish_non_exhaustive()
    }
}

impl NavigationController {
    /// Start in `options.default_section`, or the first catalog section when
    /// that key is unknown.
    pub fn new(catalog: NavigationCatalog, policy: FeaturePolicy, options: ShellOptions) -> Self {
        let initial = if catalog.has_section(&options.default_section) {
            options.default_section.clone()
        } else {
            catalog
                .sections()
                .first()
                .map(|section| section.key.clone())
                .unwrap_or_default()
        };
        Self {
            catalog,
            policy,
            options,
            selection: SelectionState::new(initial),
            favorites: FavoritesRegistry::new(),
            overlay: OverlayManager::default(),
            sink: Box::new(NullSink),
        }
    }

    #[must_use]
    pub fn with_render_sink(mut self, sink: impl RenderSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    #[must_use]
    pub fn with_upgrade_notifier(mut self, notifier: impl UpgradeNotifier + 'static) -> Self {
        self.overlay.set_notifier(notifier);
        self
    }

    pub fn set_render_sink(&mut self, sink: impl RenderSink + 'static) {
        self.sink = Box::new(sink);
    }

    /// Observe favorite additions and removals.
    pub fn on_favorite_change(&mut self, listener: impl FnMut(&FavoriteChange) + 'static) {
        self.favorites.subscribe(listener);
    }

    pub fn catalog(&self) -> &NavigationCatalog {
        &self.catalog
    }

    pub fn policy(&self) -> &FeaturePolicy {
        &self.policy
    }

    pub fn options(&self) -> &ShellOptions {
        &self.options
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn favorites(&self) -> &FavoritesRegistry {
        &self.favorites
    }

    pub fn overlay(&self) -> &OverlayManager {
        &self.overlay
    }

    pub fn overlay_state(&self) -> OverlayState {
        self.overlay.state()
    }

    pub fn active_leaf(&self) -> Option<&LeafRef> {
        self.selection.active_leaf.as_ref()
    }

    /// Switch the top-level section.
    ///
    /// Clears the active leaf, the overlay and tree expansion. Unknown keys
    /// are ignored.
    pub fn select_section(&mut self, section_key: &str) -> Transition {
        if !self.catalog.has_section(section_key) {
            debug!(section = section_key, "unknown section ignored");
            return Transition::Ignored;
        }
        self.overlay.hide();
        self.selection.enter_section(section_key);
        debug!(section = section_key, "section selected");
        self.emit();
        Transition::Applied
    }

    /// Make a catalog leaf the active one.
    ///
    /// Any previous overlay is removed first; a restricted destination gets
    /// a fresh one anchored to the side nav. Positions absent from the
    /// catalog, and the favorites section, are ignored.
    pub fn navigate_to_leaf(
        &mut self,
        section_key: &str,
        category_title: &str,
        leaf_name: &str,
    ) -> Transition {
        if !SectionView::for_key(section_key).has_leaves() {
            debug!(section = section_key, "section has no navigable leaves");
            return Transition::Ignored;
        }
        if !self
            .catalog
            .contains_leaf(section_key, category_title, leaf_name)
        {
            debug!(
                section = section_key,
                category = category_title,
                leaf = leaf_name,
                "unknown leaf ignored"
            );
            return Transition::Ignored;
        }

        self.overlay.hide();
        if self.selection.active_section_key != section_key {
            self.selection.enter_section(section_key);
        }
        self.selection.active_leaf = Some(LeafRef::new(section_key, category_title, leaf_name));
        self.selection.collapsed_categories.remove(category_title);

        let tier = self.policy.restriction_tier(leaf_name);
        if tier.is_restricted() {
            let offset = self.anchor_offset();
            self.overlay.show(tier, offset);
        }
        debug!(
            section = section_key,
            category = category_title,
            leaf = leaf_name,
            %tier,
            "navigated to leaf"
        );
        self.emit();
        Transition::Applied
    }

    /// Collapse or expand the side nav, keeping a visible overlay anchored.
    pub fn toggle_side_nav(&mut self) -> Transition {
        self.selection.side_nav_collapsed = !self.selection.side_nav_collapsed;
        if self.overlay.is_visible() {
            let offset = self.anchor_offset();
            self.overlay.reposition(offset);
        }
        debug!(
            collapsed = self.selection.side_nav_collapsed,
            "side nav toggled"
        );
        self.emit();
        Transition::Applied
    }

    /// Toggle a favorite by leaf name.
    ///
    /// Adding needs complete metadata; removing needs only the name.
    pub fn toggle_favorite(
        &mut self,
        leaf_name: &str,
        metadata: Option<FavoriteMetadata>,
    ) -> Transition {
        let was_favorite = self.favorites.is_favorite(leaf_name);
        let is_favorite = self.favorites.toggle(leaf_name, metadata);
        if was_favorite == is_favorite {
            return Transition::Ignored;
        }
        debug!(leaf = leaf_name, favorite = is_favorite, "favorite toggled");
        self.emit();
        Transition::Applied
    }

    /// Toggle the favorite flag of the active leaf with catalog metadata.
    pub fn toggle_active_favorite(&mut self) -> Transition {
        let Some(leaf) = self.selection.active_leaf.clone() else {
            debug!("no active leaf to favorite");
            return Transition::Ignored;
        };
        let metadata = FavoriteMetadata {
            section_key: leaf.section_key.clone(),
            category_title: leaf.category_title.clone(),
            description: self.catalog.description(&leaf).to_string(),
        };
        self.toggle_favorite(&leaf.leaf_name, Some(metadata))
    }

    /// Pick an option in a side-nav dropdown.
    ///
    /// On the dashboard the team selector writes its own slot. Values that
    /// are not in the option list are ignored.
    pub fn set_dropdown_selection(&mut self, kind: DropdownKind, value: &str) -> Transition {
        if !self.catalog.dropdown(kind).contains(value) {
            debug!(%kind, value, "unknown dropdown option ignored");
            return Transition::Ignored;
        }
        let slot = match kind {
            DropdownKind::Team if self.selection.view() == SectionView::Dashboard => {
                DropdownSlot::DashboardTeam
            }
            DropdownKind::Team => DropdownSlot::Team,
            DropdownKind::Member => DropdownSlot::Member,
            DropdownKind::Project => DropdownSlot::Project,
        };
        self.selection.dropdowns.set(slot, value);
        debug!(%slot, value, "dropdown selection changed");
        self.emit();
        Transition::Applied
    }

    /// Return to the menu card list of the current section.
    pub fn show_menu_list(&mut self) -> Transition {
        if self.selection.active_leaf.is_none() {
            return Transition::Ignored;
        }
        self.overlay.hide();
        self.selection.active_leaf = None;
        debug!(section = %self.selection.active_section_key, "menu list shown");
        self.emit();
        Transition::Applied
    }

    /// Collapse or expand one category of the current side-nav tree.
    pub fn toggle_category(&mut self, category_title: &str) -> Transition {
        let known = self.selection.view().shows_side_nav()
            && self
                .active_section()
                .is_some_and(|section| section.category(category_title).is_some());
        if !known {
            debug!(category = category_title, "unknown category ignored");
            return Transition::Ignored;
        }
        let collapsed = &mut self.selection.collapsed_categories;
        if !collapsed.remove(category_title) {
            collapsed.insert(category_title.to_string());
        }
        debug!(
            category = category_title,
            expanded = self.selection.is_category_expanded(category_title),
            "category toggled"
        );
        self.emit();
        Transition::Applied
    }

    /// Follow a favorite entry to its leaf.
    pub fn navigate_to_favorite(&mut self, leaf_name: &str) -> Transition {
        let Some(entry) = self.favorites.get(leaf_name) else {
            debug!(leaf = leaf_name, "not a favorite");
            return Transition::Ignored;
        };
        let leaf = entry.leaf.clone();
        self.navigate_to_leaf(&leaf.section_key, &leaf.category_title, &leaf.leaf_name)
    }

    /// Fire the overlay call-to-action.
    ///
    /// Nothing is redrawn; ignored when no overlay is shown.
    pub fn request_upgrade(&mut self) -> Transition {
        if self.overlay.request_upgrade() {
            Transition::Applied
        } else {
            Transition::Ignored
        }
    }

    pub fn apply(&mut self, action: &Action) -> Transition {
        match action {
            Action::SelectSection { section } => self.select_section(section),
            Action::Navigate {
                section,
                category,
                leaf,
            } => self.navigate_to_leaf(section, category, leaf),
            Action::ToggleSideNav => self.toggle_side_nav(),
            Action::ToggleFavorite { leaf, metadata } => {
                self.toggle_favorite(leaf, metadata.clone())
            }
            Action::ToggleActiveFavorite => self.toggle_active_favorite(),
            Action::SetDropdown { kind, value } => self.set_dropdown_selection(*kind, value),
            Action::ShowMenuList => self.show_menu_list(),
            Action::ToggleCategory { category } => self.toggle_category(category),
            Action::OpenFavorite { leaf } => self.navigate_to_favorite(leaf),
            Action::RequestUpgrade => self.request_upgrade(),
        }
    }

    /// Describe the current state without changing it.
    pub fn snapshot(&self) -> RenderInstruction {
        let view = self.selection.view();
        RenderInstruction {
            active_section_key: self.selection.active_section_key.clone(),
            active_leaf: self.selection.active_leaf.clone(),
            side_nav_collapsed: self.selection.side_nav_collapsed,
            overlay: self.overlay.content().map(|content| OverlayView {
                state: self.overlay.state(),
                content: *content,
            }),
            favorites: self.favorites.list_by_section(),
            top_nav: self.top_nav(),
            side_nav: self.side_nav(view),
            content: self.content(view),
            layout: self.layout(view),
            dropdowns: DropdownSlot::all()
                .iter()
                .map(|&slot| self.dropdown_view(slot))
                .collect(),
        }
    }

    fn emit(&mut self) {
        let instruction = self.snapshot();
        self.sink.render(&instruction);
    }

    fn anchor_offset(&self) -> u32 {
        if self.selection.side_nav_collapsed {
            0
        } else {
            self.options.side_nav_width
        }
    }

    fn active_section(&self) -> Option<&Section> {
        self.catalog.section(&self.selection.active_section_key)
    }

    fn top_nav(&self) -> Vec<TopNavItem> {
        self.catalog
            .sections()
            .iter()
            .map(|section| TopNavItem {
                key: section.key.clone(),
                title: section.title.clone(),
                active: section.key == self.selection.active_section_key,
            })
            .collect()
    }

    fn side_nav(&self, view: SectionView) -> SideNavView {
        let Some(section) = self.active_section() else {
            return SideNavView::Hidden;
        };
        let categories = || -> Vec<CategoryView> {
            section
                .categories
                .iter()
                .map(|category| self.category_view(section, category))
                .collect()
        };
        match view {
            SectionView::Favorites => SideNavView::Hidden,
            SectionView::Dashboard => SideNavView::Dashboard {
                dropdown: self.dropdown_view(DropdownSlot::DashboardTeam),
                categories: categories(),
            },
            SectionView::MenuList => SideNavView::Menu {
                dropdown: DropdownSlot::for_section(&section.key)
                    .map(|slot| self.dropdown_view(slot)),
                categories: categories(),
            },
        }
    }

    fn category_view(&self, section: &Section, category: &Category) -> CategoryView {
        CategoryView {
            title: category.title.clone(),
            expanded: self.selection.is_category_expanded(&category.title),
            leaves: category
                .leaves
                .iter()
                .map(|leaf| LeafView {
                    name: leaf.clone(),
                    active: self
                        .selection
                        .is_leaf_active(&section.key, &category.title, leaf),
                    tier: self.policy.restriction_tier(leaf),
                    favorite: self.favorites.is_favorite(leaf),
                })
                .collect(),
        }
    }

    fn content(&self, view: SectionView) -> ContentView {
        match (view, &self.selection.active_leaf) {
            (SectionView::Favorites, _) => self.favorites_content(),
            (SectionView::Dashboard, Some(leaf)) => ContentView::Leaf {
                leaf: leaf.clone(),
                artifact: self.options.artifact_path(&self.options.dashboard_artifact),
            },
            (SectionView::Dashboard, None) => ContentView::DashboardHome {
                artifact: self.options.artifact_path(&self.options.dashboard_artifact),
            },
            (SectionView::MenuList, Some(leaf)) => ContentView::Leaf {
                leaf: leaf.clone(),
                artifact: self.options.artifact_path(&leaf.leaf_name),
            },
            (SectionView::MenuList, None) => ContentView::MenuList {
                section_key: self.selection.active_section_key.clone(),
                groups: self.menu_cards(),
            },
        }
    }

    fn menu_cards(&self) -> Vec<CardGroup> {
        let Some(section) = self.active_section() else {
            return Vec::new();
        };
        section
            .categories
            .iter()
            .map(|category| CardGroup {
                category: category.title.clone(),
                cards: category
                    .leaves
                    .iter()
                    .map(|leaf| MenuCard {
                        name: leaf.clone(),
                        description: self
                            .catalog
                            .description(&LeafRef::new(&section.key, &category.title, leaf))
                            .to_string(),
                        tier: self.policy.restriction_tier(leaf),
                        recommended: self.catalog.is_recommended(leaf),
                        new: self.catalog.is_new(leaf),
                        favorite: self.favorites.is_favorite(leaf),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Favorites grouped in top-navigation order.
    fn favorites_content(&self) -> ContentView {
        let mut groups: Vec<FavoriteGroup> = self.favorites.list_by_section();
        groups.sort_by_key(|group| {
            self.catalog
                .section_index(&group.section_key)
                .unwrap_or(usize::MAX)
        });
        let empty_message = groups
            .is_empty()
            .then(|| FAVORITES_EMPTY_MESSAGE.to_string());
        ContentView::Favorites {
            groups,
            empty_message,
        }
    }

    fn layout(&self, view: SectionView) -> LayoutView {
        let toggle_visible = view.shows_side_nav();
        let side_nav_visible = toggle_visible && !self.selection.side_nav_collapsed;
        LayoutView {
            side_nav_visible,
            toggle_visible,
            content_offset_left: if side_nav_visible {
                self.options.side_nav_width
            } else {
                0
            },
        }
    }

    fn dropdown_view(&self, slot: DropdownSlot) -> DropdownView {
        let kind = slot.kind();
        match self.selection.dropdowns.get(slot) {
            Some(value) => DropdownView {
                slot,
                kind,
                text: value.to_string(),
                placeholder: false,
            },
            None => DropdownView {
                slot,
                kind,
                text: self.catalog.dropdown(kind).placeholder.clone(),
                placeholder: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use navshell_model::RestrictionTier;

    use super::*;
    use crate::render::RecordingSink;

    /// Catalog positions the tests below navigate to.
    const POSITIONS: &[(&str, &str, &str)] = &[
        ("team", "activity", "team summary"),
        ("team", "activity", "team comparison"),
        ("member", "activity", "member detail"),
        ("organization", "report", "executive report"),
        ("organization", "strategy", "roi analysis"),
        ("settings", "organization settings", "authentication (password/sso)"),
    ];

    fn controller() -> NavigationController {
        let catalog = NavigationCatalog::embedded().expect("embedded catalog");
        let policy = FeaturePolicy::embedded().expect("embedded policy");
        NavigationController::new(catalog, policy, ShellOptions::default())
    }

    #[test]
    fn test_positions_exist_in_embedded_catalog() {
        let catalog = NavigationCatalog::embedded().expect("embedded catalog");
        for &(section, category, leaf) in POSITIONS {
            assert!(
                catalog.contains_leaf(section, category, leaf),
                "{section} / {category} / {leaf}"
            );
        }
    }

    #[test]
    fn starts_in_default_section() {
        let controller = controller();
        assert_eq!(controller.selection().active_section_key, "team");
        assert!(controller.active_leaf().is_none());
        assert!(!controller.overlay().is_visible());
    }

    #[test]
    fn unknown_default_falls_back_to_first_section() {
        let catalog = NavigationCatalog::embedded().expect("embedded catalog");
        let options = ShellOptions::default().with_default_section("nowhere");
        let controller = NavigationController::new(catalog, FeaturePolicy::default(), options);
        assert_eq!(controller.selection().active_section_key, "dashboard");
    }

    #[test]
    fn restricted_leaf_shows_overlay_anchored_to_side_nav() {
        let mut controller = controller();
        let outcome = controller.navigate_to_leaf("team", "activity", "team comparison");
        assert_eq!(outcome, Transition::Applied);
        assert_eq!(
            controller.overlay_state(),
            OverlayState {
                is_visible: true,
                tier: RestrictionTier::Standard,
                anchor_offset_left: 276,
            }
        );

        controller.toggle_side_nav();
        assert_eq!(controller.overlay_state().anchor_offset_left, 0);
        controller.toggle_side_nav();
        assert_eq!(controller.overlay_state().anchor_offset_left, 276);
    }

    #[test]
    fn navigating_while_collapsed_anchors_at_zero() {
        let mut controller = controller();
        controller.toggle_side_nav();
        controller.navigate_to_leaf("organization", "report", "executive report");
        let state = controller.overlay_state();
        assert_eq!(state.tier, RestrictionTier::Advanced);
        assert_eq!(state.anchor_offset_left, 0);
    }

    #[test]
    fn unknown_positions_leave_state_unchanged() {
        let mut controller = controller();
        controller.navigate_to_leaf("team", "activity", "team summary");
        let before = controller.snapshot();
        assert_eq!(controller.select_section("nowhere"), Transition::Ignored);
        assert_eq!(
            controller.navigate_to_leaf("team", "benchmark", "team summary"),
            Transition::Ignored
        );
        assert_eq!(
            controller.navigate_to_leaf("favorites", "favorite menus", "favorite menu list"),
            Transition::Ignored
        );
        assert_eq!(controller.snapshot(), before);
    }

    #[test]
    fn renders_only_applied_transitions() {
        let sink = RecordingSink::new();
        let mut controller = controller().with_render_sink(sink.clone());
        controller.select_section("member");
        controller.select_section("nowhere");
        controller.toggle_favorite("team summary", None);
        assert_eq!(sink.len(), 1);
        let frame = sink.last().expect("one frame");
        assert_eq!(frame.active_section_key, "member");
    }

    #[test]
    fn replaced_render_sink_receives_later_frames() {
        let first = RecordingSink::new();
        let second = RecordingSink::new();
        let mut controller = controller().with_render_sink(first.clone());
        controller.toggle_side_nav();
        controller.set_render_sink(second.clone());
        controller.toggle_side_nav();
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert!(!second.last().expect("frame").side_nav_collapsed);
    }

    #[test]
    fn leaf_artifact_stays_in_artifact_dir() {
        let mut controller = controller();
        controller.navigate_to_leaf(
            "settings",
            "organization settings",
            "authentication (password/sso)",
        );
        match controller.snapshot().content {
            ContentView::Leaf { artifact, .. } => {
                assert_eq!(artifact, "screens/authentication (password-sso).png");
            }
            other => panic!("expected leaf content, got {other:?}"),
        }
    }

    #[test]
    fn dashboard_keeps_an_independent_team_selector() {
        let mut controller = controller();
        let team = controller.catalog().dropdown(DropdownKind::Team).options[0].clone();
        let other = controller.catalog().dropdown(DropdownKind::Team).options[1].clone();

        assert!(controller.set_dropdown_selection(DropdownKind::Team, &team).is_applied());
        controller.select_section("dashboard");
        assert!(controller.set_dropdown_selection(DropdownKind::Team, &other).is_applied());
        assert_eq!(controller.selection().dropdowns.get(DropdownSlot::Team), Some(team.as_str()));
        assert_eq!(
            controller.selection().dropdowns.get(DropdownSlot::DashboardTeam),
            Some(other.as_str())
        );

        controller.select_section("team");
        controller.select_section("dashboard");
        assert_eq!(controller.selection().dropdowns.get(DropdownSlot::DashboardTeam), None);
        assert_eq!(controller.selection().dropdowns.get(DropdownSlot::Team), Some(team.as_str()));
        assert_eq!(
            controller.set_dropdown_selection(DropdownKind::Member, "nobody at all"),
            Transition::Ignored
        );
    }

    #[test]
    fn toggle_active_favorite_uses_catalog_metadata() {
        let mut controller = controller();
        assert_eq!(controller.toggle_active_favorite(), Transition::Ignored);
        controller.navigate_to_leaf("team", "activity", "team summary");
        assert!(controller.toggle_active_favorite().is_applied());
        let entry = controller.favorites().get("team summary").expect("favorite");
        assert_eq!(entry.leaf, LeafRef::new("team", "activity", "team summary"));
        assert!(!entry.description.is_empty());
    }

    #[test]
    fn favorite_navigation_follows_entry() {
        let mut controller = controller();
        let metadata = FavoriteMetadata::new("member", "activity", "desc").expect("metadata");
        controller.toggle_favorite("member detail", Some(metadata));
        controller.select_section("favorites");
        assert!(controller.navigate_to_favorite("member detail").is_applied());
        assert_eq!(controller.selection().active_section_key, "member");
        assert_eq!(
            controller.active_leaf().map(|leaf| leaf.leaf_name.as_str()),
            Some("member detail")
        );
        assert_eq!(controller.navigate_to_favorite("team summary"), Transition::Ignored);
    }

    #[test]
    fn show_menu_list_keeps_section() {
        let mut controller = controller();
        controller.navigate_to_leaf("team", "activity", "team comparison");
        assert!(controller.show_menu_list().is_applied());
        assert!(controller.active_leaf().is_none());
        assert!(!controller.overlay().is_visible());
        assert_eq!(controller.selection().active_section_key, "team");
        assert_eq!(controller.show_menu_list(), Transition::Ignored);
    }

    #[test]
    fn navigation_expands_destination_category() {
        let mut controller = controller();
        assert!(controller.toggle_category("activity").is_applied());
        assert!(!controller.selection().is_category_expanded("activity"));
        controller.navigate_to_leaf("team", "activity", "team summary");
        assert!(controller.selection().is_category_expanded("activity"));
        assert_eq!(controller.toggle_category("no such category"), Transition::Ignored);
    }

    #[test]
    fn upgrade_request_needs_visible_overlay() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let requests = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&requests);
        let mut controller = controller()
            .with_upgrade_notifier(move |tier: RestrictionTier| sink.borrow_mut().push(tier));
        assert_eq!(controller.request_upgrade(), Transition::Ignored);
        controller.navigate_to_leaf("organization", "strategy", "roi analysis");
        assert!(controller.request_upgrade().is_applied());
        assert_eq!(*requests.borrow(), vec![RestrictionTier::Advanced]);
    }
}
