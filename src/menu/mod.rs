//! Menu catalog module.
//!
//! Provides [`MenuCatalog`] (ordered, validated, immutable menu data),
//! [`MenuItem`] and [`MenuError`].  The built-in catalog is the gukbap
//! restaurant menu; a substitute catalog can be loaded from TOML via
//! [`MenuCatalog::load_from`] without touching the extraction algorithm.

pub mod catalog;

pub use catalog::{MenuCatalog, MenuError, MenuItem};
