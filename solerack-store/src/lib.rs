//! Catalog engine entry point: configuration, snapshot building, and the
//! atomically swappable store the UI shell reads from.
//!
//! The engine is a synchronous batch transformation (one workbook read and
//! one photo-tree walk per refresh) exposing an immutable [`CatalogSnapshot`]
//! that consumers query through [`VariantFilter`].

pub mod config;
pub mod snapshot;
pub mod store;

pub use config::{ConfigError, StoreConfig};
pub use snapshot::{CatalogSnapshot, LoadStats, build_snapshot};
pub use store::CatalogStore;

pub use solerack_catalog::filter::{VariantFilter, filter_variants};
pub use solerack_catalog::types::{Gender, Variant};
pub use solerack_import::CatalogLoadError;
