//! Workbook ETL: ingest every worksheet, forward-fill sparse blocks,
//! normalize cells, and group rows into catalog variants.
//!
//! The pipeline is a single batch transformation per refresh, with
//! [`CatalogLoadError`] as the only failure that escapes.

use std::path::Path;

use solerack_catalog::types::NormalizedRow;

pub mod error;
pub mod fill;
pub mod group;
pub mod normalize;
pub mod sheets;

pub use error::CatalogLoadError;
pub use fill::forward_fill;
pub use group::{GroupKey, GroupStats, group_variants};
pub use normalize::{normalize_row, normalize_rows};
pub use sheets::read_workbook;

/// Read, fill, and normalize a workbook into rows ready for grouping.
pub fn load_rows(path: &Path, max_rows: usize) -> Result<Vec<NormalizedRow>, CatalogLoadError> {
    let mut raw = sheets::read_workbook(path, max_rows)?;
    fill::forward_fill(&mut raw);
    Ok(normalize::normalize_rows(&raw))
}
