//! Snapshot publication for concurrent readers.
//!
//! # Responsibility
//! - Hold the latest complete `RegimenSnapshot` behind an `Arc`.
//! - Build each load into fresh structures and swap them in wholesale.
//!
//! # Invariants
//! - Readers see either the previous or the new complete snapshot, never a
//!   partially built one.
//! - A failed source read leaves the previous snapshot visible.

use crate::engine::{build_snapshot_with, BuildOptions, RegimenSnapshot};
use crate::model::entry::RawEntry;
use crate::source::{parse_plan_json, read_plan_file, PlanSourceResult};
use log::warn;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Shared holder of the current regimen snapshot.
#[derive(Debug)]
pub struct RegimenStore {
    current: RwLock<Arc<RegimenSnapshot>>,
    options: BuildOptions,
}

impl Default for RegimenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RegimenStore {
    /// Creates a store holding an empty snapshot.
    pub fn new() -> Self {
        Self::with_options(BuildOptions::default())
    }

    pub fn with_options(options: BuildOptions) -> Self {
        Self {
            current: RwLock::new(Arc::new(RegimenSnapshot::empty())),
            options,
        }
    }

    /// Returns the currently published snapshot.
    pub fn snapshot(&self) -> Arc<RegimenSnapshot> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Builds a snapshot from `rows` and publishes it.
    pub fn load(&self, rows: &[RawEntry]) -> Arc<RegimenSnapshot> {
        let fresh = Arc::new(build_snapshot_with(rows, &self.options));
        self.publish(Arc::clone(&fresh));
        fresh
    }

    /// Decodes JSON text and publishes the result. Keeps the old snapshot on error.
    pub fn reload_from_json(&self, text: &str) -> PlanSourceResult<Arc<RegimenSnapshot>> {
        let rows = parse_plan_json(text).inspect_err(|_| {
            warn!("event=store_reload module=store status=error source=json kept_previous=true");
        })?;
        Ok(self.load(&rows))
    }

    /// Reads a plan file and publishes the result. Keeps the old snapshot on error.
    pub fn reload_from_path(&self, path: impl AsRef<Path>) -> PlanSourceResult<Arc<RegimenSnapshot>> {
        let rows = read_plan_file(path).inspect_err(|_| {
            warn!("event=store_reload module=store status=error source=file kept_previous=true");
        })?;
        Ok(self.load(&rows))
    }

    fn publish(&self, snapshot: Arc<RegimenSnapshot>) {
        match self.current.write() {
            Ok(mut guard) => *guard = snapshot,
            Err(poisoned) => *poisoned.into_inner() = snapshot,
        }
    }
}
