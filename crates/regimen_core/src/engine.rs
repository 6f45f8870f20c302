//! Single-pass regimen build.
//!
//! # Responsibility
//! - Run the normalizer once per row and feed the schedule indexer, item
//!   registry and schedule table from the same pass.
//! - Produce an immutable `RegimenSnapshot` plus a `BuildReport`.
//!
//! # Invariants
//! - Building never fails; malformed fields yield fewer items.
//! - Every build starts from empty structures (no incremental state).
//! - Rows are processed in input order.

use crate::index::registry::{FoldOutcome, ItemRegistry, ItemView, Occurrence};
use crate::index::schedule::{DaySchedule, ScheduleIndex, ScheduleIndexer};
use crate::index::table::{push_rows, ScheduleRow};
use crate::ingest::normalize::RowItems;
use crate::model::entry::RawEntry;
use crate::model::period::PeriodKey;
use log::{debug, info, warn};

/// Handling of rows whose period is missing or not `morning|midday|night`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownPeriodPolicy {
    /// Keep the row under a slot keyed by the literal period value.
    #[default]
    BucketLiteral,
    /// Drop the row entirely.
    SkipRow,
}

/// Build configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildOptions {
    pub unknown_period: UnknownPeriodPolicy,
}

/// Counters collected during one build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub rows_seen: usize,
    pub rows_indexed: usize,
    pub rows_skipped: usize,
    /// Rows whose period did not resolve (bucketed or skipped).
    pub unknown_period_rows: usize,
    /// Item appearances after normalization.
    pub item_appearances: usize,
    /// Appearances folded into a record of another first-seen category.
    pub category_conflicts: usize,
}

/// Immutable output of one full load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegimenSnapshot {
    schedule: ScheduleIndex,
    registry: ItemRegistry,
    items: Vec<ItemView>,
    table: Vec<ScheduleRow>,
    report: BuildReport,
}

impl RegimenSnapshot {
    /// Snapshot of an empty dataset, visible before the first load.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn day_schedule(&self, date: &str) -> Option<&DaySchedule> {
        self.schedule.get(date)
    }

    pub fn schedule(&self) -> &ScheduleIndex {
        &self.schedule
    }

    /// Dates present in the schedule, ascending.
    pub fn dates(&self) -> impl Iterator<Item = &str> + '_ {
        self.schedule.keys().map(String::as_str)
    }

    pub fn item_list(&self) -> &[ItemView] {
        &self.items
    }

    pub fn registry(&self) -> &ItemRegistry {
        &self.registry
    }

    pub fn occurrences_of(&self, name: &str) -> &[Occurrence] {
        self.registry.occurrences_of(name)
    }

    pub fn occurrence_count_of(&self, name: &str) -> usize {
        self.registry.occurrence_count_of(name)
    }

    pub fn table(&self) -> &[ScheduleRow] {
        &self.table
    }

    pub fn report(&self) -> &BuildReport {
        &self.report
    }
}

/// Builds a snapshot with default options.
pub fn build_snapshot(rows: &[RawEntry]) -> RegimenSnapshot {
    build_snapshot_with(rows, &BuildOptions::default())
}

/// Builds a snapshot from the complete row sequence of one load.
pub fn build_snapshot_with(rows: &[RawEntry], options: &BuildOptions) -> RegimenSnapshot {
    let mut indexer = ScheduleIndexer::new();
    let mut registry = ItemRegistry::new();
    let mut table = Vec::new();
    let mut report = BuildReport {
        rows_seen: rows.len(),
        ..BuildReport::default()
    };

    for (row_index, row) in rows.iter().enumerate() {
        let period = PeriodKey::resolve(row.period());
        if let PeriodKey::Literal(raw) = period {
            report.unknown_period_rows += 1;
            match options.unknown_period {
                UnknownPeriodPolicy::SkipRow => {
                    report.rows_skipped += 1;
                    debug!(
                        "event=row_skipped module=engine reason=unknown_period row={} period_len={}",
                        row_index,
                        raw.len()
                    );
                    continue;
                }
                UnknownPeriodPolicy::BucketLiteral => {
                    warn!(
                        "event=unknown_period module=engine status=bucketed row={} period_len={}",
                        row_index,
                        raw.len()
                    );
                }
            }
        }

        let items = RowItems::extract(row);
        report.rows_indexed += 1;
        report.item_appearances += items.len();

        indexer.fold(row.date(), period, &items);
        for outcome in registry.fold_row(row, period, &items) {
            if let FoldOutcome::CategoryConflict { kept, seen } = outcome {
                report.category_conflicts += 1;
                warn!(
                    "event=category_conflict module=engine status=kept_first row={} kept={} seen={}",
                    row_index, kept, seen
                );
            }
        }
        push_rows(&mut table, row, &items);
    }

    let schedule = indexer.finish();
    let items = registry.to_item_list();
    info!(
        "event=regimen_build module=engine status=ok rows={} skipped={} dates={} items={} conflicts={}",
        report.rows_seen,
        report.rows_skipped,
        schedule.len(),
        items.len(),
        report.category_conflicts
    );

    RegimenSnapshot {
        schedule,
        registry,
        items,
        table,
        report,
    }
}
