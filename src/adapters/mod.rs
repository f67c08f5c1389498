// Adapters layer: concrete implementations of the engine's ports
// (catalog, preference store, clock, output storage).

pub mod clock;
pub mod file;
pub mod http;

pub use clock::{FixedClock, SystemClock};
pub use file::{FileMenuCatalog, FilePreferenceStore, LocalStorage};
pub use http::{HttpMenuCatalog, HttpPreferenceStore};
