#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse navigation JSON {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse TOML {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("catalog has no sections")]
    Empty,

    #[error("duplicate section key: {key}")]
    DuplicateSection { key: String },

    #[error("section key must not be empty")]
    EmptySectionKey,

    #[error("section {section} has a category with an empty title")]
    EmptyCategoryTitle { section: String },

    #[error("category {section} / {category} has no leaves")]
    EmptyCategory { section: String, category: String },

    #[error("category {section} / {category} has an empty leaf name")]
    EmptyLeafName { section: String, category: String },

    #[error("leaf {leaf} is listed twice in {section} / {category}")]
    DuplicateLeaf {
        section: String,
        category: String,
        leaf: String,
    },
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
