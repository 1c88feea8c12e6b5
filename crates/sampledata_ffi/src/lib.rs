//! Flutter-facing bindings over `sampledata_core`.

pub mod api;
