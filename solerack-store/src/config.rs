//! Engine configuration.
//!
//! Only the inputs and safety guards live here. Refresh cadence, cache TTL,
//! and what to do with a stale snapshot are the caller's policy.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use solerack_import::GroupKey;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

fn default_max_rows() -> usize {
    50_000
}

fn default_max_image_files() -> usize {
    20_000
}

/// Catalog engine configuration, loadable from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the xlsx workbook.
    pub workbook_path: PathBuf,
    /// Root of the product photo tree, arbitrarily nested.
    pub images_root: PathBuf,
    /// Image substituted when resolution finds nothing for a variant.
    pub placeholder_image: PathBuf,
    /// Total-row load guard across all sheets.
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
    /// Image index walk guard.
    #[serde(default = "default_max_image_files")]
    pub max_image_files: usize,
    /// Group by (brand, model, color, gender) instead of the default
    /// three-field key. See [`GroupKey`].
    #[serde(default)]
    pub group_by_gender: bool,
}

impl StoreConfig {
    /// Configuration with default guards and the conventional
    /// `<images_root>/no_image.jpg` placeholder.
    pub fn new(workbook_path: impl Into<PathBuf>, images_root: impl Into<PathBuf>) -> StoreConfig {
        let images_root = images_root.into();
        StoreConfig {
            workbook_path: workbook_path.into(),
            placeholder_image: images_root.join("no_image.jpg"),
            images_root,
            max_rows: default_max_rows(),
            max_image_files: default_max_image_files(),
            group_by_gender: false,
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<StoreConfig, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            source: e,
        })
    }

    pub fn group_key(&self) -> GroupKey {
        if self.group_by_gender {
            GroupKey::BrandModelColorGender
        } else {
            GroupKey::BrandModelColor
        }
    }
}
