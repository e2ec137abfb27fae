//! Static navigation data for the dashboard shell.
//!
//! The catalog is pure data: the section/category/leaf tree, per-leaf
//! descriptions and badges, the dropdown option lists, and the plan
//! restriction lists. Defaults are compiled in from `data/`; every piece can
//! also be loaded from a file.

pub mod catalog;
pub mod content;
pub mod error;
pub mod loaders;
pub mod policy;

pub use catalog::NavigationCatalog;
pub use content::{Badges, CatalogContent, DropdownOptions, Dropdowns};
pub use error::{CatalogError, Result};
pub use loaders::{load_navigation, parse_navigation};
pub use policy::PlanRestrictions;
