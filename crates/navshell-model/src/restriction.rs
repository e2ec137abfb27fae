//! Plan restriction types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Subscription tier required to unlock a leaf.
///
/// Variants are ordered from least to most restrictive, so
/// `tier >= RestrictionTier::Standard` reads as "needs at least Standard".
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RestrictionTier {
    /// Available on every plan.
    #[default]
    None,
    /// Requires the Standard plan or higher.
    Standard,
    /// Requires the Advanced plan.
    Advanced,
}

impl RestrictionTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RestrictionTier::None => "none",
            RestrictionTier::Standard => "standard",
            RestrictionTier::Advanced => "advanced",
        }
    }

    /// Plan name as shown to users.
    pub fn plan_name(&self) -> &'static str {
        match self {
            RestrictionTier::None => "Basic",
            RestrictionTier::Standard => "Standard",
            RestrictionTier::Advanced => "Advanced",
        }
    }

    pub fn is_restricted(&self) -> bool {
        !matches!(self, RestrictionTier::None)
    }
}

impl fmt::Display for RestrictionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RestrictionTier {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "basic" => Ok(RestrictionTier::None),
            "standard" => Ok(RestrictionTier::Standard),
            "advanced" => Ok(RestrictionTier::Advanced),
            _ => Err(ModelError::UnknownTier(s.to_string())),
        }
    }
}

/// Observable state of the restriction overlay.
///
/// `tier` is [`RestrictionTier::None`] whenever the overlay is hidden.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayState {
    pub is_visible: bool,
    pub tier: RestrictionTier,
    /// Left edge of the overlay in pixels: 0 with a collapsed side nav,
    /// the side-nav width otherwise.
    pub anchor_offset_left: u32,
}

impl OverlayState {
    pub fn hidden() -> Self {
        Self::default()
    }
}
