//! Plan feature gating.

use std::collections::BTreeSet;

use navshell_catalog::{CatalogError, PlanRestrictions};
use navshell_model::RestrictionTier;

/// Leaves that require at least the Standard plan regardless of the lists.
pub const ALWAYS_STANDARD: &[&str] = &["custom dashboard list"];

/// Decides which subscription tier a leaf requires.
///
/// Pure over two name sets. Unknown names resolve to
/// [`RestrictionTier::None`].
#[derive(Debug, Clone, Default)]
pub struct FeaturePolicy {
    standard: BTreeSet<String>,
    advanced: BTreeSet<String>,
}

impl FeaturePolicy {
    pub fn new<S, A>(standard: S, advanced: A) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        Self {
            standard: standard.into_iter().map(Into::into).collect(),
            advanced: advanced.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_restrictions(restrictions: &PlanRestrictions) -> Self {
        Self::new(
            restrictions.standard.iter().cloned(),
            restrictions.advanced.iter().cloned(),
        )
    }

    /// Policy built from the restriction lists shipped with the catalog.
    pub fn embedded() -> Result<Self, CatalogError> {
        Ok(Self::from_restrictions(&PlanRestrictions::embedded()?))
    }

    /// Effective tier of a leaf.
    ///
    /// Advanced membership wins over standard membership.
    pub fn restriction_tier(&self, leaf_name: &str) -> RestrictionTier {
        if self.advanced.contains(leaf_name) {
            RestrictionTier::Advanced
        } else if self.standard.contains(leaf_name) || ALWAYS_STANDARD.contains(&leaf_name) {
            RestrictionTier::Standard
        } else {
            RestrictionTier::None
        }
    }

    pub fn is_restricted(&self, leaf_name: &str) -> bool {
        self.restriction_tier(leaf_name).is_restricted()
    }

    pub fn standard_names(&self) -> impl Iterator<Item = &str> {
        self.standard.iter().map(String::as_str)
    }

    pub fn advanced_names(&self) -> impl Iterator<Item = &str> {
        self.advanced.iter().map(String::as_str)
    }
}
