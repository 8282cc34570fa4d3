//! # textrender-fonts
//!
//! Font discovery and loading for the text-render node.
//!
//! ## Architecture
//!
//! ```text
//! CatalogConfig (font dirs per OS)
//!     │
//!     ▼
//! FontCatalog::discover ── names::read_family_name (ja > en > other > mac)
//!     │
//!     ▼
//! FontCatalogCache (process lifetime) ──► resolve(name) ──► FontSelection
//!                                                             │
//!                                                             ▼
//!                                             loader::load_selection ──► FontData
//! ```
//!
//! - **`catalog`**: directory scan, display-name dedup, cached catalog.
//! - **`names`**: `name` table family lookup.
//! - **`loader`**: font-file loading and the fallback-font policy.
//! - **`config`**: per-platform font directories.

pub mod catalog;
pub mod config;
pub mod error;
pub mod loader;
pub mod names;

// Re-exports for ergonomic use.
pub use catalog::{FontCatalog, FontCatalogCache, FontSelection, DEFAULT_FONT_NAME};
pub use config::CatalogConfig;
pub use error::FontError;
pub use loader::{fallback_font, load_font_file, load_selection, FontData, FontOrigin};
pub use names::read_family_name;
