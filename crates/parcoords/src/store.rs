//! The currently loaded dataset.
//!
//! Readers take a cheap snapshot and keep working on it while a reload builds
//! the next dataset outside the lock. The swap happens only after loading and
//! normalization both succeed.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::Result;
use crate::input::SourceMetadata;
use crate::normalize::NormalizationReport;
use crate::table::Table;

/// A normalized table with where it came from.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub table: Table,
    pub source: Option<SourceMetadata>,
    pub report: Option<NormalizationReport>,
}

impl Dataset {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            source: None,
            report: None,
        }
    }
}

/// Single owner of the current dataset.
#[derive(Debug, Default)]
pub struct DatasetStore {
    current: RwLock<Arc<Dataset>>,
    generation: RwLock<u64>,
}

impl DatasetStore {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            current: RwLock::new(Arc::new(dataset)),
            generation: RwLock::new(0),
        }
    }

    /// The current dataset. Later swaps do not affect the returned snapshot.
    pub fn snapshot(&self) -> Arc<Dataset> {
        Arc::clone(&self.current.read())
    }

    /// Number of successful swaps so far.
    pub fn generation(&self) -> u64 {
        *self.generation.read()
    }

    /// Swap in a new dataset.
    pub fn replace(&self, dataset: Dataset) -> Arc<Dataset> {
        let next = Arc::new(dataset);
        {
            let mut current = self.current.write();
            *current = Arc::clone(&next);
            *self.generation.write() += 1;
        }
        tracing::debug!(
            rows = next.table.row_count(),
            columns = next.table.column_count(),
            "dataset replaced"
        );
        next
    }

    /// Build a dataset with `build` and swap it in on success.
    ///
    /// `build` runs without holding the lock. On error the previous dataset
    /// stays in place and the error is returned.
    pub fn replace_with<F>(&self, build: F) -> Result<Arc<Dataset>>
    where
        F: FnOnce() -> Result<Dataset>,
    {
        match build() {
            Ok(dataset) => Ok(self.replace(dataset)),
            Err(e) => {
                tracing::warn!(error = %e, "reload failed, keeping previous dataset");
                Err(e)
            }
        }
    }
}
