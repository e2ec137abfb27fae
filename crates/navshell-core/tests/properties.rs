//! Property tests for navigation, favorites and overlay invariants.

use proptest::prelude::*;

use navshell_catalog::NavigationCatalog;
use navshell_core::{
    ALWAYS_STANDARD, Action, FeaturePolicy, NavigationController, ShellOptions, Transition,
};
use navshell_model::{DropdownKind, FAVORITES_SECTION, FavoriteMetadata, LeafRef, RestrictionTier};

fn catalog() -> NavigationCatalog {
    NavigationCatalog::embedded().expect("embedded catalog")
}

fn policy() -> FeaturePolicy {
    FeaturePolicy::embedded().expect("embedded policy")
}

fn controller() -> NavigationController {
    NavigationController::new(catalog(), policy(), ShellOptions::default())
}

fn navigable_leaves() -> Vec<LeafRef> {
    catalog()
        .leaf_refs()
        .filter(|leaf| leaf.section_key != FAVORITES_SECTION)
        .collect()
}

fn section_keys() -> Vec<String> {
    catalog()
        .sections()
        .iter()
        .map(|section| section.key.clone())
        .collect()
}

fn leaf_strategy() -> impl Strategy<Value = LeafRef> {
    prop::sample::select(navigable_leaves())
}

const DROPDOWN_KINDS: [DropdownKind; 3] =
    [DropdownKind::Team, DropdownKind::Member, DropdownKind::Project];

fn category_titles() -> Vec<String> {
    catalog()
        .sections()
        .iter()
        .flat_map(|section| section.categories.iter().map(|category| category.title.clone()))
        .collect()
}

/// Every option of every dropdown, so some picks land on the wrong kind.
fn dropdown_values() -> Vec<String> {
    let catalog = catalog();
    DROPDOWN_KINDS
        .iter()
        .flat_map(|&kind| catalog.dropdown(kind).options.clone())
        .collect()
}

/// Names guaranteed to be absent from the catalog and the option lists.
fn unknown_name() -> impl Strategy<Value = String> {
    "[a-z]{1,8}".prop_map(|name| format!("no such {name}"))
}

/// Actions whose target does not exist, each of which must be ignored.
fn unknown_target_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        unknown_name().prop_map(|section| Action::SelectSection { section }),
        (leaf_strategy(), unknown_name()).prop_map(|(leaf, name)| Action::Navigate {
            section: leaf.section_key,
            category: leaf.category_title,
            leaf: name,
        }),
        (leaf_strategy(), unknown_name()).prop_map(|(leaf, name)| Action::Navigate {
            section: leaf.section_key,
            category: name,
            leaf: leaf.leaf_name,
        }),
        (prop::sample::select(DROPDOWN_KINDS.to_vec()), unknown_name())
            .prop_map(|(kind, value)| Action::SetDropdown { kind, value }),
        unknown_name().prop_map(|category| Action::ToggleCategory { category }),
        unknown_name().prop_map(|leaf| Action::OpenFavorite { leaf }),
    ]
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => leaf_strategy().prop_map(|leaf| Action::Navigate {
            section: leaf.section_key,
            category: leaf.category_title,
            leaf: leaf.leaf_name,
        }),
        2 => prop::sample::select(section_keys())
            .prop_map(|section| Action::SelectSection { section }),
        1 => Just(Action::ToggleSideNav),
        1 => Just(Action::ToggleActiveFavorite),
        1 => Just(Action::ShowMenuList),
        1 => Just(Action::RequestUpgrade),
        1 => leaf_strategy().prop_map(|leaf| Action::OpenFavorite { leaf: leaf.leaf_name }),
        1 => leaf_strategy().prop_map(|leaf| Action::ToggleFavorite {
            metadata: Some(FavoriteMetadata {
                section_key: leaf.section_key,
                category_title: leaf.category_title,
                description: "description".to_string(),
            }),
            leaf: leaf.leaf_name,
        }),
        2 => (
            prop::sample::select(DROPDOWN_KINDS.to_vec()),
            prop::sample::select(dropdown_values()),
        )
            .prop_map(|(kind, value)| Action::SetDropdown { kind, value }),
        2 => prop_oneof![
            prop::sample::select(category_titles())
                .prop_map(|category| Action::ToggleCategory { category }),
            unknown_target_strategy(),
        ],
    ]
}

fn actions_strategy() -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(action_strategy(), 0..24)
}

/// Overlay visibility and tier agree with the active leaf.
fn overlay_matches_active_leaf(controller: &NavigationController) -> bool {
    let expected = controller
        .active_leaf()
        .map_or(RestrictionTier::None, |leaf| {
            controller.policy().restriction_tier(&leaf.leaf_name)
        });
    let state = controller.overlay_state();
    state.is_visible == expected.is_restricted() && state.tier == expected
}

proptest! {
    #[test]
    fn navigating_twice_is_idempotent(
        prefix in actions_strategy(),
        leaf in leaf_strategy(),
    ) {
        let mut controller = controller();
        for action in &prefix {
            controller.apply(action);
        }
        let first = controller.navigate_to_leaf(&leaf.section_key, &leaf.category_title, &leaf.leaf_name);
        let after_first = controller.snapshot();
        let second = controller.navigate_to_leaf(&leaf.section_key, &leaf.category_title, &leaf.leaf_name);
        let after_second = controller.snapshot();

        prop_assert_eq!(first, Transition::Applied);
        prop_assert_eq!(second, Transition::Applied);
        prop_assert_eq!(&after_first, &after_second);
        let restricted = controller.policy().is_restricted(&leaf.leaf_name);
        prop_assert_eq!(controller.overlay().visible_count(), usize::from(restricted));
    }

    #[test]
    fn favorite_toggle_round_trip(
        prefix in actions_strategy(),
        leaf in leaf_strategy(),
    ) {
        let mut controller = controller();
        for action in &prefix {
            controller.apply(action);
        }
        let was_favorite = controller.favorites().is_favorite(&leaf.leaf_name);
        let size = controller.favorites().len();
        let metadata = FavoriteMetadata::new(&leaf.section_key, &leaf.category_title, "description")
            .expect("metadata");

        controller.toggle_favorite(&leaf.leaf_name, Some(metadata.clone()));
        prop_assert_ne!(controller.favorites().is_favorite(&leaf.leaf_name), was_favorite);
        controller.toggle_favorite(&leaf.leaf_name, Some(metadata));

        prop_assert_eq!(controller.favorites().is_favorite(&leaf.leaf_name), was_favorite);
        prop_assert_eq!(controller.favorites().len(), size);
    }

    #[test]
    fn at_most_one_overlay(actions in actions_strategy()) {
        let mut controller = controller();
        for action in &actions {
            controller.apply(action);
            prop_assert!(controller.overlay().visible_count() <= 1);
            prop_assert!(overlay_matches_active_leaf(&controller));
        }
    }

    #[test]
    fn ignored_actions_leave_state_unchanged(actions in actions_strategy()) {
        let mut controller = controller();
        for action in &actions {
            let before = controller.snapshot();
            if controller.apply(action) == Transition::Ignored {
                prop_assert_eq!(&controller.snapshot(), &before, "{:?}", action);
            }
        }
    }

    #[test]
    fn unknown_targets_are_ignored(
        prefix in actions_strategy(),
        action in unknown_target_strategy(),
    ) {
        let mut controller = controller();
        for step in &prefix {
            controller.apply(step);
        }
        let before = controller.snapshot();
        prop_assert_eq!(controller.apply(&action), Transition::Ignored);
        prop_assert_eq!(&controller.snapshot(), &before);
        prop_assert!(overlay_matches_active_leaf(&controller));
    }

    #[test]
    fn upgrade_requests_never_change_the_view(prefix in actions_strategy()) {
        let mut controller = controller();
        for step in &prefix {
            controller.apply(step);
        }
        let before = controller.snapshot();
        let outcome = controller.request_upgrade();
        prop_assert_eq!(outcome.is_applied(), controller.overlay().is_visible());
        prop_assert_eq!(&controller.snapshot(), &before);
    }

    #[test]
    fn highlights_derive_from_selection(actions in actions_strategy()) {
        let mut controller = controller();
        for action in &actions {
            controller.apply(action);
        }
        let frame = controller.snapshot();
        let active_tabs: Vec<&str> = frame
            .top_nav
            .iter()
            .filter(|item| item.active)
            .map(|item| item.key.as_str())
            .collect();
        prop_assert_eq!(active_tabs, vec![frame.active_section_key.as_str()]);
        prop_assert_eq!(
            frame.side_nav.active_leaf().map(|leaf| leaf.name.as_str()),
            frame.active_leaf.as_ref().map(|leaf| leaf.leaf_name.as_str())
        );
    }

    #[test]
    fn member_section_clears_leaf(actions in actions_strategy()) {
        let mut controller = controller();
        for action in &actions {
            controller.apply(action);
        }
        controller.select_section("member");
        prop_assert!(controller.active_leaf().is_none());
        prop_assert!(!controller.overlay().is_visible());
        prop_assert_eq!(controller.selection().active_section_key.as_str(), "member");
    }

    #[test]
    fn names_outside_the_lists_are_unrestricted(name in "[a-z ]{0,24}") {
        let policy = policy();
        let listed = policy.standard_names().any(|n| n == name)
            || policy.advanced_names().any(|n| n == name)
            || ALWAYS_STANDARD.contains(&name.as_str());
        prop_assume!(!listed);
        prop_assert_eq!(policy.restriction_tier(&name), RestrictionTier::None);
    }
}

#[test]
fn listed_names_resolve_to_their_tier() {
    let policy = policy();
    let advanced: Vec<String> = policy.advanced_names().map(str::to_string).collect();
    for name in &advanced {
        assert_eq!(policy.restriction_tier(name), RestrictionTier::Advanced, "{name}");
    }
    for name in policy.standard_names() {
        if !advanced.iter().any(|a| a == name) {
            assert_eq!(policy.restriction_tier(name), RestrictionTier::Standard, "{name}");
        }
    }
    assert!(policy.restriction_tier("custom dashboard list") >= RestrictionTier::Standard);
    let empty = FeaturePolicy::default();
    assert_eq!(
        empty.restriction_tier("custom dashboard list"),
        RestrictionTier::Standard
    );
}
