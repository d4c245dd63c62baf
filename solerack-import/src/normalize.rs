//! Raw-to-normalized row conversion.
//!
//! This is the strict boundary: no component downstream of here ever looks
//! at raw cell text again. Every lenient interpretation (gender keywords,
//! palette colors, currency-formatted prices, loose flags) happens exactly
//! once, through the pure extractors in `solerack-catalog`.

use solerack_catalog::extract::{
    SizeUnit, clean_model_name, extract_color, extract_gender, extract_size, parse_flag,
    parse_price, parse_size_list, split_image_tokens,
};
use solerack_catalog::sizes::{eu_to_us, us_to_eu};
use solerack_catalog::types::{NormalizedRow, RawRow};

/// Unitless sizes at or above this value can only be EU; the US adult range
/// tops out well below it.
const EU_THRESHOLD: f64 = 36.0;

fn non_empty(cell: &str) -> Option<String> {
    let trimmed = cell.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn size_cell(cell: &str) -> Option<String> {
    non_empty(cell).map(|s| s.replace(',', "."))
}

/// Convert one filled raw row into the strict normalized form.
///
/// Never fails: missing or malformed cells degrade to documented defaults.
/// Validity (non-empty brand and clean model) is checked by the grouping
/// engine, which drops and counts offending rows.
pub fn normalize_row(raw: &RawRow) -> NormalizedRow {
    let brand = non_empty(&raw.brand).unwrap_or_else(|| raw.sheet.trim().to_string());
    let model_clean = clean_model_name(&raw.model);

    let gender = match non_empty(&raw.gender) {
        Some(cell) => extract_gender(&cell),
        None => extract_gender(&raw.model),
    };
    let color = match non_empty(&raw.color) {
        Some(cell) => cell.to_lowercase(),
        None => extract_color(&raw.model),
    };

    let mut size_us = size_cell(&raw.size_us);
    let mut size_eu = size_cell(&raw.size_eu);
    if size_us.is_none() && size_eu.is_none() {
        if let Some(found) = extract_size(&raw.model) {
            let is_eu = match found.unit {
                Some(SizeUnit::Us) => false,
                Some(SizeUnit::Eu) => true,
                None => found
                    .value
                    .parse::<f64>()
                    .is_ok_and(|v| v >= EU_THRESHOLD),
            };
            if is_eu {
                size_eu = Some(found.value);
            } else {
                size_us = Some(found.value);
            }
        }
    }
    // Cross-fill through the conversion table; a miss leaves the field blank.
    if size_eu.is_none()
        && let Some(us) = size_us.as_deref()
    {
        size_eu = us_to_eu(us).map(str::to_string);
    }
    if size_us.is_none()
        && let Some(eu) = size_eu.as_deref()
    {
        size_us = eu_to_us(eu).map(str::to_string);
    }

    NormalizedRow {
        sheet: raw.sheet.clone(),
        brand,
        model_raw: raw.model.clone(),
        model_clean,
        gender,
        color,
        size_us,
        size_eu,
        extra_sizes_eu: parse_size_list(&raw.sizes),
        price: parse_price(&raw.price),
        image_tokens: split_image_tokens(&raw.image),
        sku: non_empty(&raw.sku),
        in_stock: parse_flag(&raw.in_stock, true),
        preorder: parse_flag(&raw.preorder, false),
        description: raw.description.trim().to_string(),
    }
}

/// Normalize a whole row sequence, preserving order.
pub fn normalize_rows(rows: &[RawRow]) -> Vec<NormalizedRow> {
    rows.iter().map(normalize_row).collect()
}
