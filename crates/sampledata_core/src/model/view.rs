//! Serializable projections of groups and items.
//!
//! # Responsibility
//! - Give UI/FFI/CLI consumers a plain, owned copy of the bindable model.
//!
//! # Invariants
//! - Views are snapshots; mutating a view never touches the model.
//! - `top_item_ids` preserves preview order.

use crate::model::common::ImageSource;
use serde::{Deserialize, Serialize};

/// Owned snapshot of one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemView {
    pub unique_id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Resolved image URI, serialized as a plain string.
    pub image: Option<ImageSource>,
    pub content: String,
    /// Owning group id; `None` for detached items.
    pub group_id: Option<String>,
}

/// Owned snapshot of one group and its items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupView {
    pub unique_id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: Option<ImageSource>,
    pub items: Vec<ItemView>,
    /// Ids of the preview window, in display order.
    pub top_item_ids: Vec<String>,
}
