//! The swappable catalog store.

use std::sync::{Arc, PoisonError, RwLock};

use solerack_catalog::filter::VariantFilter;
use solerack_catalog::types::Variant;
use solerack_import::CatalogLoadError;

use crate::config::StoreConfig;
use crate::snapshot::{CatalogSnapshot, build_snapshot};

/// Holds the current immutable catalog snapshot and swaps in new ones with
/// a single assignment.
///
/// Concurrent readers only ever observe a complete snapshot. A failed
/// refresh leaves the previous good snapshot installed and serving; there
/// is no retry logic here; when to try again is the caller's policy.
#[derive(Debug)]
pub struct CatalogStore {
    config: StoreConfig,
    current: RwLock<Option<Arc<CatalogSnapshot>>>,
}

impl CatalogStore {
    pub fn new(config: StoreConfig) -> CatalogStore {
        CatalogStore {
            config,
            current: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Build an entirely new snapshot and swap it in.
    pub fn refresh(&self) -> Result<Arc<CatalogSnapshot>, CatalogLoadError> {
        let snapshot = Arc::new(build_snapshot(&self.config)?);
        let mut slot = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// The current snapshot, or `None` before the first successful refresh.
    pub fn snapshot(&self) -> Option<Arc<CatalogSnapshot>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Filter the current snapshot's variants, preserving catalog order.
    /// Empty before the first successful refresh.
    pub fn search(&self, filter: &VariantFilter) -> Vec<Variant> {
        match self.snapshot() {
            Some(snapshot) => snapshot
                .variants
                .iter()
                .filter(|v| filter.matches(v))
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }
}
