pub mod cart;
pub mod engine;
pub mod export;
pub mod pricing;
pub mod projection;
pub mod recommendations;
pub mod scoring;
pub mod session;

pub use crate::domain::model::{
    MenuItem, ProjectedMenuItem, Restaurant, UserPreferences,
};
pub use crate::domain::ports::{Clock, MenuCatalog, PreferenceStore, Storage};
pub use crate::utils::error::Result;
