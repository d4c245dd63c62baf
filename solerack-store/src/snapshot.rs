//! Snapshot construction: the whole load pipeline in one call.
//!
//! Read → fill → normalize → group → index photos → resolve. The result is
//! an immutable catalog version; a refresh builds an entirely new one.

use chrono::Utc;
use log::info;
use serde::Serialize;
use solerack_catalog::types::Variant;
use solerack_images::{ImageIndex, ImageResolver};
use solerack_import::{CatalogLoadError, GroupStats, group_variants, load_rows};

use crate::config::StoreConfig;

/// Counters from one completed load.
#[derive(Debug, Default, Clone, Serialize)]
pub struct LoadStats {
    #[serde(flatten)]
    pub grouping: GroupStats,
    pub images_indexed: usize,
    /// Variants that fell back to the placeholder image.
    pub variants_without_photo: usize,
}

/// One immutable catalog version: grouped variants with resolved photo
/// paths, plus load counters and a build timestamp.
#[derive(Debug)]
pub struct CatalogSnapshot {
    pub variants: Vec<Variant>,
    /// RFC 3339 build time.
    pub loaded_at: String,
    pub stats: LoadStats,
}

/// Run the full pipeline for one catalog version.
///
/// The only failure is [`CatalogLoadError`] from the workbook read; photo
/// problems degrade to placeholders and bad rows are dropped and counted.
pub fn build_snapshot(config: &StoreConfig) -> Result<CatalogSnapshot, CatalogLoadError> {
    let rows = load_rows(&config.workbook_path, config.max_rows)?;
    let (mut variants, grouping) = group_variants(&rows, config.group_key());

    let index = ImageIndex::build(&config.images_root, config.max_image_files);
    let images_indexed = index.len();
    let resolver = ImageResolver::new(index, config.placeholder_image.clone());

    let mut variants_without_photo = 0;
    for variant in &mut variants {
        variant.image_paths = resolver.resolve(&variant.image_tokens, variant.sku.as_deref());
        if variant.image_paths.len() == 1 && variant.image_paths[0] == config.placeholder_image {
            variants_without_photo += 1;
        }
    }

    let stats = LoadStats {
        grouping,
        images_indexed,
        variants_without_photo,
    };
    info!(
        "catalog loaded: {} variants from {} rows ({} rejected), {} images indexed, {} without photo",
        stats.grouping.variants,
        stats.grouping.rows_in,
        stats.grouping.rows_rejected,
        stats.images_indexed,
        stats.variants_without_photo
    );

    Ok(CatalogSnapshot {
        variants,
        loaded_at: Utc::now().to_rfc3339(),
        stats,
    })
}
