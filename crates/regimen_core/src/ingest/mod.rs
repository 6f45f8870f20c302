//! Ingestion normalizer for raw schedule rows.

pub mod normalize;
