//! Load-time errors surfaced to the caller.

use std::path::PathBuf;

use thiserror::Error;

/// A workbook that cannot be loaded is fatal for the refresh cycle. This is
/// the only error that crosses the engine boundary; every other imperfect
/// condition (bad price, missing photo, invalid row) degrades to a default
/// inside the row or variant it affects.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("workbook not found: {0}")]
    WorkbookMissing(PathBuf),
    #[error("failed to open workbook {path}: {source}")]
    Workbook {
        path: String,
        source: calamine::XlsxError,
    },
    #[error("failed to read sheet {sheet}: {source}")]
    Sheet {
        sheet: String,
        source: calamine::XlsxError,
    },
    #[error("workbook exceeds the {limit}-row load guard")]
    TooManyRows { limit: usize },
}
