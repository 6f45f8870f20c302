//! Flutter-facing bindings for the regimen core.

pub mod api;
