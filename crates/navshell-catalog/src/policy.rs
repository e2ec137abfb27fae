//! Plan restriction lists.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::loaders::{EMBEDDED_ORIGIN, load_toml, parse_toml};

const DEFAULT_POLICY: &str = include_str!("../data/plan_policy.toml");

/// Leaf names locked behind each paid tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanRestrictions {
    pub standard: Vec<String>,
    pub advanced: Vec<String>,
}

impl PlanRestrictions {
    /// The restriction lists shipped with the crate.
    pub fn embedded() -> Result<Self> {
        parse_toml(DEFAULT_POLICY, EMBEDDED_ORIGIN)
    }

    pub fn load(path: &Path) -> Result<Self> {
        load_toml(path)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        parse_toml(text, "<string>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_policy_lists() {
        let policy = PlanRestrictions::embedded().expect("embedded policy");
        assert_eq!(policy.standard.len(), 9);
        assert_eq!(policy.advanced.len(), 4);
        assert!(policy.standard.iter().any(|name| name == "team comparison"));
        assert!(policy.advanced.iter().any(|name| name == "roi analysis"));
    }

    #[test]
    fn missing_tier_defaults_to_empty() {
        let policy = PlanRestrictions::from_toml_str("advanced = [\"x\"]").expect("parse");
        assert!(policy.standard.is_empty());
        assert_eq!(policy.advanced, vec!["x".to_string()]);
    }

    #[test]
    fn malformed_policy_is_an_error() {
        assert!(PlanRestrictions::from_toml_str("standard = 3").is_err());
    }
}
