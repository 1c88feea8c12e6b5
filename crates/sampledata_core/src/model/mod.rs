//! Bindable group/item data model.
//!
//! # Responsibility
//! - Define the records a grouped-items UI binds to.
//! - Raise property and collection notifications on every change.
//!
//! # Invariants
//! - Items are shared by identity (`Rc`) between a group's lists.
//! - A group's preview list is derived, never edited directly.

pub mod common;
pub mod group;
pub mod item;
pub mod notify;
pub mod view;
