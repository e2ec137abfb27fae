//! Serialized inbound actions.
//!
//! The event layer and the CLI replay drive the controller with [`Action`]
//! values. A script is one JSON object per line, tagged by `action`:
//!
//! ```text
//! {"action": "select_section", "section": "team"}
//! {"action": "navigate", "section": "team", "category": "activity", "leaf": "team comparison"}
//! {"action": "toggle_side_nav"}
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use navshell_model::{DropdownKind, FavoriteMetadata};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    SelectSection {
        section: String,
    },
    Navigate {
        section: String,
        category: String,
        leaf: String,
    },
    ToggleSideNav,
    /// Toggle a favorite by name. Adding requires `metadata`.
    ToggleFavorite {
        leaf: String,
        #[serde(default)]
        metadata: Option<FavoriteMetadata>,
    },
    ToggleActiveFavorite,
    SetDropdown {
        kind: DropdownKind,
        value: String,
    },
    ShowMenuList,
    ToggleCategory {
        category: String,
    },
    OpenFavorite {
        leaf: String,
    },
    RequestUpgrade,
}

#[derive(Debug, Error)]
#[error("invalid action on line {line}: {source}")]
pub struct ScriptError {
    pub line: usize,
    #[source]
    pub source: serde_json::Error,
}

/// Parse a JSON-lines action script.
///
/// Blank lines and lines starting with `#` are skipped. Line numbers in
/// errors are 1-based.
pub fn parse_script(text: &str) -> Result<Vec<Action>, ScriptError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|source| ScriptError {
                line: index + 1,
                source,
            })
        })
        .collect()
}
