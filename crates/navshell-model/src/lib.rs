pub mod dropdown;
pub mod error;
pub mod favorite;
pub mod navigation;
pub mod restriction;

pub use dropdown::DropdownKind;
pub use error::{ModelError, Result};
pub use favorite::{FavoriteEntry, FavoriteMetadata};
pub use navigation::{
    Category, DASHBOARD_SECTION, FAVORITES_SECTION, LeafRef, Section, SectionView,
};
pub use restriction::{OverlayState, RestrictionTier};
