pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::SessionConfig;

pub use crate::adapters::{
    FileMenuCatalog, FilePreferenceStore, FixedClock, HttpMenuCatalog, HttpPreferenceStore,
    LocalStorage, SystemClock,
};
pub use crate::core::cart::CartLedger;
pub use crate::core::engine::MenuEngine;
pub use crate::core::session::DiningSession;
pub use crate::domain::model::{
    CartLine, DietaryTag, MenuItem, MenuItemStatus, ProjectedMenuItem, Restaurant,
    SpicePreference, UserPreferences,
};
pub use crate::domain::ports::{Clock, MenuCatalog, PreferenceStore, Storage};
pub use crate::utils::error::{EngineError, Result};
