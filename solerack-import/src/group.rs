//! Variant grouping: collapse normalized rows into one catalog card per key.
//!
//! Output order is first-seen row order and nothing depends on hash-map
//! iteration, so grouping the same input twice yields byte-identical
//! results.

use std::collections::HashMap;

use log::debug;
use serde::Serialize;
use solerack_catalog::sizes::sort_sizes;
use solerack_catalog::types::{Gender, NormalizedRow, Variant};

/// Grouping key shape.
///
/// The source workbooks are inconsistent about whether gender splits a
/// (brand, model, color) block, so the fourth field is configurable.
/// Three fields is the default; with it, the first row's gender represents
/// the whole group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupKey {
    #[default]
    BrandModelColor,
    BrandModelColorGender,
}

/// Counters from one grouping run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct GroupStats {
    pub rows_in: usize,
    /// Rows dropped for an empty brand or clean model.
    pub rows_rejected: usize,
    pub variants: usize,
}

/// Collapse normalized rows into variants, first-seen order.
pub fn group_variants(rows: &[NormalizedRow], key: GroupKey) -> (Vec<Variant>, GroupStats) {
    let mut stats = GroupStats {
        rows_in: rows.len(),
        ..GroupStats::default()
    };
    let mut variants: Vec<Variant> = Vec::new();
    let mut index: HashMap<(String, String, String, Option<Gender>), usize> = HashMap::new();

    for row in rows {
        if !row.is_valid() {
            stats.rows_rejected += 1;
            debug!(
                "rejected row from sheet {:?}: empty brand or model ({:?})",
                row.sheet, row.model_raw
            );
            continue;
        }

        let gender_key = match key {
            GroupKey::BrandModelColor => None,
            GroupKey::BrandModelColorGender => Some(row.gender),
        };
        let map_key = (
            row.brand.clone(),
            row.model_clean.clone(),
            row.color.clone(),
            gender_key,
        );
        let idx = match index.get(&map_key) {
            Some(&idx) => idx,
            None => {
                variants.push(new_variant(row));
                index.insert(map_key, variants.len() - 1);
                variants.len() - 1
            }
        };
        merge_row(&mut variants[idx], row);
    }

    for variant in &mut variants {
        sort_sizes(&mut variant.sizes_us);
        sort_sizes(&mut variant.sizes_eu);
    }

    stats.variants = variants.len();
    (variants, stats)
}

/// Start a variant from its representative (first) row.
fn new_variant(row: &NormalizedRow) -> Variant {
    Variant {
        brand: row.brand.clone(),
        model_clean: row.model_clean.clone(),
        color: row.color.clone(),
        gender: row.gender,
        ..Variant::default()
    }
}

/// Fold one constituent row into its variant.
fn merge_row(variant: &mut Variant, row: &NormalizedRow) {
    if variant.sku.is_none()
        && let Some(sku) = &row.sku
    {
        variant.sku = Some(sku.clone());
    }
    if let Some(us) = &row.size_us
        && !variant.sizes_us.contains(us)
    {
        variant.sizes_us.push(us.clone());
    }
    if let Some(eu) = &row.size_eu
        && !variant.sizes_eu.contains(eu)
    {
        variant.sizes_eu.push(eu.clone());
    }
    for extra in &row.extra_sizes_eu {
        if !variant.sizes_eu.contains(extra) {
            variant.sizes_eu.push(extra.clone());
        }
    }
    // Minimum non-zero price across the group, for "from X ₸" display.
    if row.price > 0.0 && (variant.price == 0.0 || row.price < variant.price) {
        variant.price = row.price;
    }
    variant.in_stock |= row.in_stock;
    variant.preorder |= row.preorder;
    if variant.description.is_empty() && !row.description.is_empty() {
        variant.description = row.description.clone();
    }
    if variant.image_tokens.is_empty() && !row.image_tokens.is_empty() {
        variant.image_tokens = row.image_tokens.clone();
    }
}
