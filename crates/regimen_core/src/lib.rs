//! Core data engine for the daily regimen viewer.
//! This crate is the single source of truth for schedule and item invariants.

pub mod engine;
pub mod index;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod query;
pub mod source;
pub mod store;

pub use engine::{
    build_snapshot, build_snapshot_with, BuildOptions, BuildReport, RegimenSnapshot,
    UnknownPeriodPolicy,
};
pub use index::registry::{
    build_registry, FoldOutcome, ItemRecord, ItemRegistry, ItemView, Occurrence,
};
pub use index::schedule::{index_by_date, DaySchedule, DaySlot, ScheduleIndex, ScheduleIndexer};
pub use index::table::{build_table, ScheduleRow};
pub use ingest::normalize::{normalize_name, split_items, RowItems};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::category::Category;
pub use model::entry::RawEntry;
pub use model::period::{Period, PeriodKey, PeriodSet};
pub use query::day::{activity_for_date, has_entries};
pub use query::filter::{filter_items, matches, Filterable, TimeFilter, TypeFilter};
pub use query::search::search_rows;
pub use source::{
    parse_plan_json, read_plan, read_plan_file, PlanSourceError, PlanSourceResult,
    DEFAULT_PLAN_FILE,
};
pub use store::RegimenStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
