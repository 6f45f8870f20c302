//! Derived indexes built from raw rows.
//!
//! # Responsibility
//! - `schedule`: date -> period -> category buckets.
//! - `registry`: deduplicated item catalog with period sets and occurrences.
//! - `table`: flat per-item rows for the full schedule view.
//!
//! # Invariants
//! - Indexes are rebuilt from scratch per load and never mutated afterwards.

pub mod registry;
pub mod schedule;
pub mod table;
