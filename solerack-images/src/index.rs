//! Recursive photo index: normalized basename → absolute path.
//!
//! Built once per catalog load by walking the photo root; read-only
//! afterwards. Directory entries are sorted per level so the "first file
//! wins" policy for duplicate basenames is deterministic across platforms
//! and filesystems.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::{debug, warn};

/// File extensions that count as product photos.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Mapping from lower-cased file stem to the first path found for it.
#[derive(Debug, Default)]
pub struct ImageIndex {
    by_stem: HashMap<String, PathBuf>,
}

impl ImageIndex {
    /// Walk `root` recursively and index every image file, keyed by
    /// lower-cased filename without extension.
    ///
    /// Never fails: a missing or unreadable root (or subdirectory) is
    /// logged and skipped, yielding a smaller or empty index; a missing
    /// photo is a normal condition, not an error. The walk stops indexing
    /// once `max_files` is reached so a malformed tree cannot run away.
    pub fn build(root: &Path, max_files: usize) -> ImageIndex {
        let mut index = ImageIndex::default();
        if !root.is_dir() {
            warn!("photo root {} is not a directory; index is empty", root.display());
            return index;
        }
        index.walk(root, max_files);
        debug!("indexed {} images under {}", index.len(), root.display());
        index
    }

    fn walk(&mut self, dir: &Path, max_files: usize) {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("skipping unreadable directory {}: {e}", dir.display());
                return;
            }
        };
        let mut paths: Vec<PathBuf> = entries.flatten().map(|e| e.path()).collect();
        paths.sort();

        for path in paths {
            if self.by_stem.len() >= max_files {
                warn!(
                    "image index truncated at {max_files} files; ignoring the rest of {}",
                    dir.display()
                );
                return;
            }
            if path.is_dir() {
                self.walk(&path, max_files);
            } else if is_image(&path)
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                // First file found for a stem wins; later duplicates are
                // ignored.
                self.by_stem.entry(stem.to_lowercase()).or_insert(path);
            }
        }
    }

    /// Exact lookup by normalized stem.
    pub fn get(&self, stem: &str) -> Option<&Path> {
        self.by_stem.get(stem).map(PathBuf::as_path)
    }

    /// All paths whose stem starts with `prefix + "_"`, interpreted as a
    /// numbered photo set (`token_1`, `token_2`, …), sorted by the numeric
    /// suffix ascending. A missing or non-numeric suffix sorts as 0; ties
    /// break on the stem so the order is fully deterministic.
    pub fn prefix_matches(&self, prefix: &str) -> Vec<&Path> {
        let wanted = format!("{prefix}_");
        let mut matches: Vec<(&str, &PathBuf)> = self
            .by_stem
            .iter()
            .filter(|(stem, _)| stem.starts_with(&wanted))
            .map(|(stem, path)| (stem.as_str(), path))
            .collect();
        matches.sort_by(|(a, _), (b, _)| {
            numeric_suffix(a, &wanted)
                .cmp(&numeric_suffix(b, &wanted))
                .then_with(|| a.cmp(b))
        });
        matches.into_iter().map(|(_, path)| path.as_path()).collect()
    }

    pub fn len(&self) -> usize {
        self.by_stem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_stem.is_empty()
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let lower = e.to_lowercase();
            IMAGE_EXTENSIONS.iter().any(|known| *known == lower)
        })
        .unwrap_or(false)
}

fn numeric_suffix(stem: &str, prefix: &str) -> u64 {
    stem.strip_prefix(prefix)
        .and_then(|rest| rest.parse::<u64>().ok())
        .unwrap_or(0)
}
