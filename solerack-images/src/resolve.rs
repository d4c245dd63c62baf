//! Token/SKU photo resolution with placeholder fallback.
//!
//! Resolution never fails and never returns an empty list: a product with
//! no matching photo gets the configured placeholder, because the catalog
//! must always render something.

use std::path::{Path, PathBuf};

use crate::index::{IMAGE_EXTENSIONS, ImageIndex};

/// Resolves image cell tokens (and SKU fallbacks) against an [`ImageIndex`].
#[derive(Debug)]
pub struct ImageResolver {
    index: ImageIndex,
    placeholder: PathBuf,
}

impl ImageResolver {
    pub fn new(index: ImageIndex, placeholder: PathBuf) -> ImageResolver {
        ImageResolver { index, placeholder }
    }

    pub fn index(&self) -> &ImageIndex {
        &self.index
    }

    /// Resolve image tokens to actual photo paths, in token order.
    ///
    /// Each token tries an exact stem match first, then a `token_<n>`
    /// numbered-set prefix match. If no token matches anything and a SKU is
    /// given, the same two-step search runs on the SKU. The result is
    /// deduplicated preserving first-seen order and is never empty; the
    /// placeholder stands in when nothing matched.
    pub fn resolve(&self, tokens: &[String], sku: Option<&str>) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = Vec::new();
        for token in tokens {
            push_unique(&mut paths, self.lookup(token));
        }
        if paths.is_empty()
            && let Some(sku) = sku
        {
            push_unique(&mut paths, self.lookup(sku));
        }
        if paths.is_empty() {
            paths.push(self.placeholder.clone());
        }
        paths
    }

    /// Two-step lookup for one token: exact stem, then numbered prefix set.
    fn lookup(&self, token: &str) -> Vec<&Path> {
        let key = normalize_token(token);
        if key.is_empty() {
            return Vec::new();
        }
        if let Some(path) = self.index.get(&key) {
            return vec![path];
        }
        self.index.prefix_matches(&key)
    }
}

/// Lower-case a token and drop a trailing image extension; image cells
/// sometimes hold full filenames rather than bare basenames.
fn normalize_token(token: &str) -> String {
    let lower = token.trim().to_lowercase();
    for ext in IMAGE_EXTENSIONS {
        if let Some(stem) = lower.strip_suffix(&format!(".{ext}")) {
            return stem.to_string();
        }
    }
    lower
}

fn push_unique(paths: &mut Vec<PathBuf>, found: Vec<&Path>) {
    for path in found {
        if !paths.iter().any(|p| p == path) {
            paths.push(path.to_path_buf());
        }
    }
}
