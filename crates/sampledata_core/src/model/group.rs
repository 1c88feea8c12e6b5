//! Group data model with a bounded "top items" preview.
//!
//! # Responsibility
//! - Own the full item list of one group.
//! - Keep `top_items` equal to the first `PREVIEW_CAPACITY` items so grid
//!   layouts can bind a small, fixed-size subset.
//!
//! # Invariants
//! - Items can only be mutated through group methods, which route every
//!   change through the preview mirror.
//! - `items()` and `top_items()` are read-only views.

use crate::collection::observable::{CollectionChange, ListResult, ObservableList, SubscriptionId};
use crate::collection::preview::MirroredList;
use crate::model::common::CommonFields;
use crate::model::item::SharedItem;
use crate::model::view::GroupView;
use std::cell::RefCell;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Group handle shared by the data source and its consumers.
pub type SharedGroup = Rc<RefCell<SampleDataGroup>>;

/// Generic bindable group.
#[derive(Debug)]
pub struct SampleDataGroup {
    common: CommonFields,
    items: MirroredList<SharedItem>,
}

impl SampleDataGroup {
    pub fn new(common: CommonFields) -> Self {
        Self {
            common,
            items: MirroredList::new(),
        }
    }

    /// Wraps this group into a shared handle.
    pub fn into_shared(self) -> SharedGroup {
        Rc::new(RefCell::new(self))
    }

    pub fn common(&self) -> &CommonFields {
        &self.common
    }

    pub fn common_mut(&mut self) -> &mut CommonFields {
        &mut self.common
    }

    pub fn unique_id(&self) -> &str {
        self.common.unique_id()
    }

    pub fn title(&self) -> &str {
        self.common.title()
    }

    /// Full ordered item list.
    pub fn items(&self) -> &ObservableList<SharedItem> {
        self.items.items()
    }

    /// Leading subset of `items()`, at most `PREVIEW_CAPACITY` long.
    pub fn top_items(&self) -> &ObservableList<SharedItem> {
        self.items.preview()
    }

    /// Looks up one item of this group by id.
    pub fn find_item(&self, unique_id: &str) -> Option<SharedItem> {
        self.items()
            .iter()
            .find(|item| item.borrow().unique_id() == unique_id)
            .cloned()
    }

    pub fn push_item(&mut self, item: SharedItem) {
        self.items.push(item);
    }

    pub fn insert_item(&mut self, index: usize, item: SharedItem) -> ListResult<()> {
        self.items.insert(index, item)
    }

    pub fn remove_item(&mut self, index: usize) -> ListResult<SharedItem> {
        self.items.remove(index)
    }

    pub fn move_item(&mut self, old_index: usize, new_index: usize) -> ListResult<()> {
        self.items.move_item(old_index, new_index)
    }

    pub fn replace_item(&mut self, index: usize, item: SharedItem) -> ListResult<SharedItem> {
        self.items.replace(index, item)
    }

    pub fn clear_items(&mut self) {
        self.items.clear();
    }

    /// Replaces every item in one step; the preview is rebuilt from scratch.
    pub fn reset_items(&mut self, items: Vec<SharedItem>) {
        self.items.reset(items);
    }

    pub fn subscribe_items(
        &mut self,
        handler: impl FnMut(&CollectionChange<SharedItem>) + 'static,
    ) -> SubscriptionId {
        self.items.subscribe_items(handler)
    }

    pub fn unsubscribe_items(&mut self, id: SubscriptionId) -> bool {
        self.items.unsubscribe_items(id)
    }

    pub fn subscribe_top_items(
        &mut self,
        handler: impl FnMut(&CollectionChange<SharedItem>) + 'static,
    ) -> SubscriptionId {
        self.items.subscribe_preview(handler)
    }

    pub fn unsubscribe_top_items(&mut self, id: SubscriptionId) -> bool {
        self.items.unsubscribe_preview(id)
    }

    /// Registers a property-changed handler for group-level fields.
    pub fn subscribe(&mut self, handler: impl FnMut(&str) + 'static) -> SubscriptionId {
        self.common.subscribe(handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.common.unsubscribe(id)
    }

    pub fn to_view(&self) -> GroupView {
        GroupView {
            unique_id: self.common.unique_id().to_string(),
            title: self.common.title().to_string(),
            subtitle: self.common.subtitle().to_string(),
            description: self.common.description().to_string(),
            image: self.common.image(),
            items: self
                .items()
                .iter()
                .map(|item| item.borrow().to_view())
                .collect(),
            top_item_ids: self
                .top_items()
                .iter()
                .map(|item| item.borrow().unique_id().to_string())
                .collect(),
        }
    }
}

impl Display for SampleDataGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.common, f)
    }
}
