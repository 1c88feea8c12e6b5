//! Content providers feeding the bindable model.
//!
//! # Responsibility
//! - Own the group collection exposed to views.
//! - Keep placeholder content separate from lookup logic.

pub mod data_source;
mod seed;
