//! Regimen domain model.
//!
//! # Responsibility
//! - Define the raw row shape consumed by the engine.
//! - Define the closed `Category` and `Period` enums and the period bitset.
//!
//! # Invariants
//! - Category and period domains are closed; dispatch over them is exhaustive.

pub mod category;
pub mod entry;
pub mod period;
