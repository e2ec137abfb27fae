use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
    #[error("unknown restriction tier: {0}")]
    UnknownTier(String),
    #[error("unknown dropdown kind: {0}")]
    UnknownDropdown(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
