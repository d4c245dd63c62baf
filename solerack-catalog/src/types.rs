//! Data model types for the sneaker catalog.
//!
//! These types trace one record through the pipeline: a `RawRow` as it comes
//! out of the workbook, a `NormalizedRow` after fill and attribute
//! extraction, and a `Variant`, the aggregated unit the UI displays.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ── Gender ──────────────────────────────────────────────────────────────────

/// Target gender for a product, inferred from free text when no explicit
/// column value exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Men,
    Women,
    #[default]
    Unisex,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Men => "men",
            Gender::Women => "women",
            Gender::Unisex => "unisex",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RawRow ──────────────────────────────────────────────────────────────────

/// One spreadsheet record as ingested, before any normalization.
///
/// Every cell is kept as a trimmed string; numeric cells are rendered
/// without a trailing `.0` so SKU-like values survive intact. Discarded
/// after normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    /// Source worksheet name, used as a brand fallback.
    pub sheet: String,
    pub brand: String,
    pub model: String,
    pub gender: String,
    pub color: String,
    pub image: String,
    pub price: String,
    pub size_us: String,
    pub size_eu: String,
    /// Delimited multi-size cell (EU values), e.g. `"41; 42 / 42.5"`.
    pub sizes: String,
    pub sku: String,
    pub description: String,
    pub in_stock: String,
    pub preorder: String,
}

// ── NormalizedRow ───────────────────────────────────────────────────────────

/// A `RawRow` after forward-fill and attribute extraction.
///
/// Nothing downstream of the extractor re-interprets raw cell text; this is
/// the strict value type every later stage works with. Rows with an empty
/// `brand` or `model_clean` are rejected before grouping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedRow {
    pub sheet: String,
    pub brand: String,
    pub model_raw: String,
    /// Model with parenthetical SKU noise and trailing size tokens stripped.
    pub model_clean: String,
    pub gender: Gender,
    /// Lower-cased explicit value, palette match, or `"other"`.
    pub color: String,
    pub size_us: Option<String>,
    pub size_eu: Option<String>,
    /// EU sizes parsed from the delimited `sizes` cell.
    pub extra_sizes_eu: Vec<String>,
    pub price: f64,
    /// Ordered image basenames from the image cell.
    pub image_tokens: Vec<String>,
    pub sku: Option<String>,
    pub in_stock: bool,
    pub preorder: bool,
    pub description: String,
}

impl NormalizedRow {
    /// Whether the row satisfies the non-empty brand/model invariant.
    pub fn is_valid(&self) -> bool {
        !self.brand.is_empty() && !self.model_clean.is_empty()
    }
}

// ── Variant ─────────────────────────────────────────────────────────────────

/// One catalog card: a unique (brand, clean model, color) combination
/// aggregated from one or more spreadsheet rows.
///
/// Immutable once a catalog snapshot is built. `price` is the minimum
/// non-zero price across constituent rows, supporting "from X ₸" display.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Variant {
    pub brand: String,
    pub model_clean: String,
    pub color: String,
    pub gender: Gender,
    pub sku: Option<String>,
    /// Deduplicated, numerically sorted ascending.
    pub sizes_us: Vec<String>,
    pub sizes_eu: Vec<String>,
    pub price: f64,
    pub description: String,
    pub in_stock: bool,
    pub preorder: bool,
    pub image_tokens: Vec<String>,
    /// Resolved photo paths; never empty once resolution has run (a
    /// placeholder stands in for missing photos).
    pub image_paths: Vec<PathBuf>,
}
