//! Favorite entries.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::navigation::LeafRef;

/// Metadata required to add a leaf to the favorites.
///
/// Every field must be non-empty; use [`FavoriteMetadata::new`] when the
/// values come from outside the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteMetadata {
    pub section_key: String,
    pub category_title: String,
    pub description: String,
}

impl FavoriteMetadata {
    pub fn new(
        section_key: impl Into<String>,
        category_title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self> {
        let metadata = Self {
            section_key: section_key.into(),
            category_title: category_title.into(),
            description: description.into(),
        };
        metadata.validate()?;
        Ok(metadata)
    }

    /// Check that no field is blank.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("section_key", &self.section_key),
            ("category_title", &self.category_title),
            ("description", &self.description),
        ] {
            if value.trim().is_empty() {
                return Err(ModelError::EmptyField { field });
            }
        }
        Ok(())
    }
}

/// A favorited leaf with its display description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub leaf: LeafRef,
    pub description: String,
}

impl FavoriteEntry {
    pub fn from_metadata(leaf_name: impl Into<String>, metadata: FavoriteMetadata) -> Self {
        Self {
            leaf: LeafRef::new(metadata.section_key, metadata.category_title, leaf_name),
            description: metadata.description,
        }
    }

    pub fn name(&self) -> &str {
        &self.leaf.leaf_name
    }

    pub fn section_key(&self) -> &str {
        &self.leaf.section_key
    }
}
