//! CLI settings file.
//!
//! Read from `settings.toml` in the platform config directory, or from the
//! path given with `--config`:
//!
//! ```toml
//! [shell]
//! default_section = "team"
//! side_nav_width = 276
//!
//! [data]
//! catalog = "navigation.json"
//! policy = "plan_policy.toml"
//! ```
//!
//! Relative data paths resolve against the settings file's directory.
//! Favorites and selections are never written here.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use navshell_catalog::{CatalogContent, NavigationCatalog, PlanRestrictions};
use navshell_core::{FeaturePolicy, ShellOptions};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub shell: ShellOptions,
    pub data: DataSettings,
}

/// Optional replacements for the embedded data files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Navigation tree in the section JSON format.
    pub catalog: Option<PathBuf>,
    /// Descriptions, badges and dropdown options (TOML).
    pub content: Option<PathBuf>,
    /// Plan restriction lists (TOML).
    pub policy: Option<PathBuf>,
}

impl Settings {
    /// Default settings file location.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "Navshell", "navshell")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
    }

    /// Load settings from `explicit`, or from [`Settings::config_path`].
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        match Self::config_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => {
                debug!("no settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read settings {}", path.display()))?;
        let mut settings = Self::from_toml_str(&text)
            .with_context(|| format!("parse settings {}", path.display()))?;
        if let Some(base) = path.parent() {
            settings.data.resolve_against(base);
        }
        debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn catalog(&self) -> Result<NavigationCatalog> {
        let content = match &self.data.content {
            Some(path) => CatalogContent::load(path)?,
            None => CatalogContent::embedded()?,
        };
        let catalog = match &self.data.catalog {
            Some(path) => NavigationCatalog::load(path, content)?,
            None => NavigationCatalog::embedded_with(content)?,
        };
        Ok(catalog)
    }

    pub fn policy(&self) -> Result<FeaturePolicy> {
        let restrictions = match &self.data.policy {
            Some(path) => PlanRestrictions::load(path)?,
            None => PlanRestrictions::embedded()?,
        };
        Ok(FeaturePolicy::from_restrictions(&restrictions))
    }
}

impl DataSettings {
    fn resolve_against(&mut self, base: &Path) {
        for path in [&mut self.catalog, &mut self.content, &mut self.policy]
            .into_iter()
            .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
