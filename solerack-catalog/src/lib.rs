//! Catalog data model, attribute extraction, size conversion, and the
//! variant query layer.
//!
//! This crate is pure, no I/O. `solerack-import` feeds it raw workbook
//! rows, and the store crate exposes the resulting [`Variant`] set to the
//! UI shell through [`VariantFilter`].

pub mod extract;
pub mod filter;
pub mod sizes;
pub mod types;

pub use extract::{
    COLOR_OTHER, ExtractedSize, SizeUnit, clean_model_name, extract_color, extract_gender,
    extract_size, parse_flag, parse_price, parse_size_list, split_image_tokens,
};
pub use filter::{VariantFilter, filter_variants};
pub use sizes::{eu_to_us, sort_sizes, us_to_eu};
pub use types::{Gender, NormalizedRow, RawRow, Variant};
