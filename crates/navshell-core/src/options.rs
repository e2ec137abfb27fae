//! Shell options shared by the controller and its callers.

use serde::{Deserialize, Serialize};

/// Width of the expanded side navigation in pixels.
pub const DEFAULT_SIDE_NAV_WIDTH: u32 = 276;

/// Layout and startup options for the navigation shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellOptions {
    /// Section shown at startup. Falls back to the first catalog section
    /// when the key is unknown.
    pub default_section: String,
    /// Overlay and content offset while the side nav is expanded.
    pub side_nav_width: u32,
    /// Directory prefix of the static artifact rendered for a leaf.
    pub artifact_dir: String,
    /// Artifact name rendered for every dashboard leaf.
    pub dashboard_artifact: String,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            default_section: "team".to_string(),
            side_nav_width: DEFAULT_SIDE_NAV_WIDTH,
            artifact_dir: "screens".to_string(),
            dashboard_artifact: "main dashboard".to_string(),
        }
    }
}

impl ShellOptions {
    #[must_use]
    pub fn with_default_section(mut self, key: impl Into<String>) -> Self {
        self.default_section = key.into();
        self
    }

    #[must_use]
    pub fn with_side_nav_width(mut self, width: u32) -> Self {
        self.side_nav_width = width;
        self
    }

    #[must_use]
    pub fn with_artifact_dir(mut self, dir: impl Into<String>) -> Self {
        self.artifact_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_dashboard_artifact(mut self, name: impl Into<String>) -> Self {
        self.dashboard_artifact = name.into();
        self
    }

    /// Path of the static artifact for an artifact name.
    ///
    /// Path separators inside the name become `-` so every artifact lives
    /// directly under `artifact_dir`.
    pub fn artifact_path(&self, name: &str) -> String {
        let stem = name.replace(['/', '\\'], "-");
        if self.artifact_dir.is_empty() {
            format!("{stem}.png")
        } else {
            format!("{}/{stem}.png", self.artifact_dir.trim_end_matches('/'))
        }
    }
}
