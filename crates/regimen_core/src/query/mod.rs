//! Read-only queries used by presentation collaborators.
//!
//! # Responsibility
//! - Card filter predicate over item views.
//! - Calendar day activity lookups.
//! - Schedule table text search.
//!
//! # Invariants
//! - Queries never mutate the indexes they read.

pub mod day;
pub mod filter;
pub mod search;
