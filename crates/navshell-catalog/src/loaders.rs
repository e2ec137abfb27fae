//! Readers for the catalog data files.
//!
//! The navigation tree is stored as a JSON object keyed by section key:
//!
//! ```json
//! { "team": { "title": "Team", "items": [ { "title": "activity", "submenu": ["team summary"] } ] } }
//! ```
//!
//! Object order is the display order of the top navigation, so the reader
//! keeps entries in document order instead of going through a hash map.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use serde::de::{DeserializeOwned, Deserializer, MapAccess, Visitor};

use navshell_model::{Category, Section};

use crate::error::{CatalogError, Result};

/// Origin label for data compiled into the binary.
pub const EMBEDDED_ORIGIN: &str = "<embedded>";

#[derive(Debug, Deserialize)]
struct SectionRecord {
    title: String,
    #[serde(default)]
    items: Vec<CategoryRecord>,
}

#[derive(Debug, Deserialize)]
struct CategoryRecord {
    title: String,
    #[serde(default)]
    submenu: Vec<String>,
}

/// Section records in document order.
struct OrderedSections(Vec<(String, SectionRecord)>);

impl<'de> Deserialize<'de> for OrderedSections {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SectionsVisitor;

        impl<'de> Visitor<'de> for SectionsVisitor {
            type Value = OrderedSections;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an object mapping section keys to sections")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, record)) = map.next_entry::<String, SectionRecord>()? {
                    entries.push((key, record));
                }
                Ok(OrderedSections(entries))
            }
        }

        deserializer.deserialize_map(SectionsVisitor)
    }
}

/// Parse and validate the navigation tree from JSON text.
pub fn parse_navigation(json: &str, origin: &str) -> Result<Vec<Section>> {
    let OrderedSections(records) =
        serde_json::from_str(json).map_err(|source| CatalogError::Json {
            origin: origin.to_string(),
            source,
        })?;
    let sections = records
        .into_iter()
        .map(|(key, record)| Section {
            key,
            title: record.title,
            categories: record
                .items
                .into_iter()
                .map(|item| Category {
                    title: item.title,
                    leaves: item.submenu,
                })
                .collect(),
        })
        .collect::<Vec<_>>();
    validate_sections(&sections)?;
    Ok(sections)
}

/// Read and parse a navigation JSON file.
pub fn load_navigation(path: &Path) -> Result<Vec<Section>> {
    let json = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    parse_navigation(&json, &path.display().to_string())
}

/// Parse a TOML document into `T`.
pub(crate) fn parse_toml<T: DeserializeOwned>(text: &str, origin: &str) -> Result<T> {
    toml::from_str(text).map_err(|source| CatalogError::Toml {
        origin: origin.to_string(),
        source,
    })
}

/// Read a TOML file into `T`.
pub(crate) fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    parse_toml(&text, &path.display().to_string())
}

fn validate_sections(sections: &[Section]) -> Result<()> {
    if sections.is_empty() {
        return Err(CatalogError::Empty);
    }
    let mut keys = BTreeSet::new();
    for section in sections {
        if section.key.trim().is_empty() {
            return Err(CatalogError::EmptySectionKey);
        }
        if !keys.insert(section.key.as_str()) {
            return Err(CatalogError::DuplicateSection {
                key: section.key.clone(),
            });
        }
        for category in &section.categories {
            if category.title.trim().is_empty() {
                return Err(CatalogError::EmptyCategoryTitle {
                    section: section.key.clone(),
                });
            }
            if category.leaves.is_empty() {
                return Err(CatalogError::EmptyCategory {
                    section: section.key.clone(),
                    category: category.title.clone(),
                });
            }
            let mut seen = BTreeSet::new();
            for leaf in &category.leaves {
                if leaf.trim().is_empty() {
                    return Err(CatalogError::EmptyLeafName {
                        section: section.key.clone(),
                        category: category.title.clone(),
                    });
                }
                if !seen.insert(leaf.as_str()) {
                    return Err(CatalogError::DuplicateLeaf {
                        section: section.key.clone(),
                        category: category.title.clone(),
                        leaf: leaf.clone(),
                    });
                }
            }
        }
    }
    Ok(())
}
