//! Restriction overlay lifecycle.
//!
//! The manager owns the single overlay handle. Showing while shown replaces
//! the tier in place, so there is never more than one instance.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use navshell_model::{OverlayState, RestrictionTier};

/// Static copy displayed by the overlay for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverlayContent {
    pub title: &'static str,
    pub body: &'static str,
    pub cta_label: &'static str,
}

const STANDARD_CONTENT: OverlayContent = OverlayContent {
    title: "This feature is available on the Standard plan or higher",
    body: "Upgrade to the Standard plan to unlock team comparison, data export, and more.",
    cta_label: "Upgrade to Standard",
};

const ADVANCED_CONTENT: OverlayContent = OverlayContent {
    title: "This feature is available on the Advanced plan or higher",
    body: "Upgrade to the Advanced plan to unlock executive reports, ROI analysis, \
           and other advanced features.",
    cta_label: "Upgrade to Advanced",
};

impl OverlayContent {
    /// Copy for a restricted tier; `None` for [`RestrictionTier::None`].
    pub fn for_tier(tier: RestrictionTier) -> Option<&'static OverlayContent> {
        match tier {
            RestrictionTier::None => None,
            RestrictionTier::Standard => Some(&STANDARD_CONTENT),
            RestrictionTier::Advanced => Some(&ADVANCED_CONTENT),
        }
    }
}

/// Receives the overlay's call-to-action.
pub trait UpgradeNotifier {
    fn upgrade_requested(&mut self, tier: RestrictionTier);
}

impl<F> UpgradeNotifier for F
where
    F: FnMut(RestrictionTier),
{
    fn upgrade_requested(&mut self, tier: RestrictionTier) {
        self(tier);
    }
}

/// Default notifier: records the request in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl UpgradeNotifier for LogNotifier {
    fn upgrade_requested(&mut self, tier: RestrictionTier) {
        info!(plan = tier.plan_name(), "upgrade requested");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveOverlay {
    tier: RestrictionTier,
    anchor_offset_left: u32,
}

pub struct OverlayManager {
    active: Option<ActiveOverlay>,
    notifier: Box<dyn UpgradeNotifier>,
}

impl fmt::Debug for OverlayManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayManager")
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

impl Default for OverlayManager {
    fn default() -> Self {
        Self::new(LogNotifier)
    }
}

impl OverlayManager {
    pub fn new(notifier: impl UpgradeNotifier + 'static) -> Self {
        Self {
            active: None,
            notifier: Box::new(notifier),
        }
    }

    pub fn set_notifier(&mut self, notifier: impl UpgradeNotifier + 'static) {
        self.notifier = Box::new(notifier);
    }

    /// Show the overlay for `tier` at `anchor_offset_left`.
    ///
    /// Replaces an overlay that is already shown. An unrestricted tier hides.
    pub fn show(&mut self, tier: RestrictionTier, anchor_offset_left: u32) {
        if !tier.is_restricted() {
            self.hide();
            return;
        }
        let replaced = self
            .active
            .replace(ActiveOverlay {
                tier,
                anchor_offset_left,
            })
            .is_some();
        debug!(%tier, anchor_offset_left, replaced, "overlay shown");
    }

    /// Remove the overlay. Safe when nothing is shown.
    pub fn hide(&mut self) {
        if let Some(previous) = self.active.take() {
            debug!(tier = %previous.tier, "overlay hidden");
        }
    }

    /// Move the visible overlay. No-op when hidden.
    pub fn reposition(&mut self, anchor_offset_left: u32) {
        if let Some(active) = self.active.as_mut() {
            active.anchor_offset_left = anchor_offset_left;
            debug!(anchor_offset_left, "overlay repositioned");
        }
    }

    pub fn state(&self) -> OverlayState {
        match self.active {
            Some(active) => OverlayState {
                is_visible: true,
                tier: active.tier,
                anchor_offset_left: active.anchor_offset_left,
            },
            None => OverlayState::hidden(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.active.is_some()
    }

    /// Number of overlay instances in existence: 0 or 1.
    pub fn visible_count(&self) -> usize {
        usize::from(self.active.is_some())
    }

    pub fn content(&self) -> Option<&'static OverlayContent> {
        self.active
            .and_then(|active| OverlayContent::for_tier(active.tier))
    }

    /// Fire the call-to-action of the visible overlay.
    ///
    /// Returns `false` when no overlay is shown.
    pub fn request_upgrade(&mut self) -> bool {
        match self.active {
            Some(active) => {
                self.notifier.upgrade_requested(active.tier);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn show_replaces_in_place() {
        let mut overlay = OverlayManager::default();
        overlay.show(RestrictionTier::Standard, 276);
        overlay.show(RestrictionTier::Advanced, 0);
        assert_eq!(overlay.visible_count(), 1);
        assert_eq!(
            overlay.state(),
            OverlayState {
                is_visible: true,
                tier: RestrictionTier::Advanced,
                anchor_offset_left: 0,
            }
        );
        assert_eq!(overlay.content().map(|c| c.cta_label), Some("Upgrade to Advanced"));
    }

    #[test]
    fn hide_and_reposition_are_safe_when_hidden() {
        let mut overlay = OverlayManager::default();
        overlay.hide();
        overlay.reposition(10);
        assert_eq!(overlay.state(), OverlayState::hidden());
        overlay.show(RestrictionTier::None, 276);
        assert!(!overlay.is_visible());
    }

    #[test]
    fn reposition_moves_visible_overlay() {
        let mut overlay = OverlayManager::default();
        overlay.show(RestrictionTier::Standard, 276);
        overlay.reposition(0);
        assert_eq!(overlay.state().anchor_offset_left, 0);
        assert_eq!(overlay.state().tier, RestrictionTier::Standard);
    }

    #[test]
    fn upgrade_request_reaches_notifier() {
        let requests = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&requests);
        let mut overlay = OverlayManager::new(move |tier: RestrictionTier| sink.borrow_mut().push(tier));
        assert!(!overlay.request_upgrade());
        overlay.show(RestrictionTier::Standard, 0);
        assert!(overlay.request_upgrade());
        assert_eq!(*requests.borrow(), vec![RestrictionTier::Standard]);
    }

    #[test]
    fn content_table() {
        assert!(OverlayContent::for_tier(RestrictionTier::None).is_none());
        let standard = OverlayContent::for_tier(RestrictionTier::Standard).expect("standard copy");
        assert!(standard.title.contains("Standard plan"));
    }
}
