//! Observable ordered collections for UI binding.
//!
//! # Responsibility
//! - Provide a change-notifying list primitive.
//! - Maintain bounded preview windows derived from a master list.
//!
//! # Invariants
//! - Collections are single-threaded; handlers run synchronously.

pub mod observable;
pub mod preview;
