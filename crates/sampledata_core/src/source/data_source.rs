//! Static content provider for groups and items.
//!
//! # Responsibility
//! - Build the hard-coded group/item content.
//! - Provide id-based lookups used by navigation pages.
//!
//! # Invariants
//! - `get_groups` only serves the `AllGroups` collection id.
//! - `get_group`/`get_item` return a value only for exactly one match.
//! - The shared instance is per thread; model handles are `!Send`.

use crate::collection::observable::{CollectionChange, ObservableList, SubscriptionId};
use crate::model::common::CommonFields;
use crate::model::group::{SampleDataGroup, SharedGroup};
use crate::model::item::{SampleDataItem, SharedItem};
use crate::model::view::GroupView;
use crate::source::seed::{GroupSeed, SEED_GROUPS};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Collection id accepted by `SampleDataSource::get_groups`.
pub const ALL_GROUPS_ID: &str = "AllGroups";

/// Result type for data source lookups.
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors from data source lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Only `AllGroups` is supported as a collection of groups.
    UnsupportedGroupCollection(String),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedGroupCollection(id) => write!(
                f,
                "unsupported group collection `{id}`; only `{ALL_GROUPS_ID}` is supported"
            ),
        }
    }
}

impl Error for SourceError {}

/// Owner of every group exposed to views.
#[derive(Debug, Default)]
pub struct SampleDataSource {
    all_groups: ObservableList<SharedGroup>,
}

impl SampleDataSource {
    /// Creates a source populated with the hard-coded content.
    pub fn new() -> Self {
        let mut source = Self::empty();
        for seed in SEED_GROUPS {
            source.add_group(build_group(seed));
        }
        info!(
            "event=source_init module=source status=ok groups={} items={}",
            source.all_groups.len(),
            source.item_count()
        );
        source
    }

    /// Creates a source without any groups.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn all_groups(&self) -> &ObservableList<SharedGroup> {
        &self.all_groups
    }

    pub fn add_group(&mut self, group: SharedGroup) {
        self.all_groups.push(group);
    }

    pub fn subscribe_groups(
        &mut self,
        handler: impl FnMut(&CollectionChange<SharedGroup>) + 'static,
    ) -> SubscriptionId {
        self.all_groups.subscribe(handler)
    }

    pub fn unsubscribe_groups(&mut self, id: SubscriptionId) -> bool {
        self.all_groups.unsubscribe(id)
    }

    /// Returns the group collection named by `unique_id`.
    ///
    /// # Errors
    /// - Returns `UnsupportedGroupCollection` for any id except `AllGroups`.
    pub fn get_groups(&self, unique_id: &str) -> SourceResult<&ObservableList<SharedGroup>> {
        if unique_id != ALL_GROUPS_ID {
            warn!(
                "event=get_groups module=source status=rejected collection_id={}",
                unique_id
            );
            return Err(SourceError::UnsupportedGroupCollection(
                unique_id.to_string(),
            ));
        }
        Ok(&self.all_groups)
    }

    /// Finds one group by id. Linear search is fine for this data size.
    pub fn get_group(&self, unique_id: &str) -> Option<SharedGroup> {
        let mut matches = self
            .all_groups
            .iter()
            .filter(|group| group.borrow().unique_id() == unique_id);
        single(&mut matches).cloned()
    }

    /// Finds one item by id across every group.
    pub fn get_item(&self, unique_id: &str) -> Option<SharedItem> {
        let mut matches = Vec::new();
        for group in &self.all_groups {
            let group = group.borrow();
            matches.extend(
                group
                    .items()
                    .iter()
                    .filter(|item| item.borrow().unique_id() == unique_id)
                    .cloned(),
            );
        }
        if matches.len() == 1 {
            matches.pop()
        } else {
            None
        }
    }

    /// Total number of items across every group.
    pub fn item_count(&self) -> usize {
        self.all_groups
            .iter()
            .map(|group| group.borrow().items().len())
            .sum()
    }

    /// Owned, serializable copy of every group.
    pub fn snapshot(&self) -> Vec<GroupView> {
        self.all_groups
            .iter()
            .map(|group| group.borrow().to_view())
            .collect()
    }
}

fn single<'a, T>(matches: &mut impl Iterator<Item = &'a T>) -> Option<&'a T>
where
    T: 'a,
{
    let first = matches.next()?;
    if matches.next().is_some() {
        return None;
    }
    Some(first)
}

fn build_group(seed: &GroupSeed) -> SharedGroup {
    let mut group = SampleDataGroup::new(CommonFields::new(
        seed.unique_id,
        seed.title,
        seed.subtitle,
        Some(seed.image_path.to_string()),
        seed.description,
    ));
    for item in seed.items {
        let item = SampleDataItem::new(
            CommonFields::new(
                item.unique_id,
                item.title,
                item.subtitle,
                Some(item.image_path.to_string()),
                item.description,
            ),
            item.content,
            Some(seed.unique_id.to_string()),
        );
        group.push_item(item.into_shared());
    }
    group.into_shared()
}

thread_local! {
    static SHARED_SOURCE: SampleDataSource = SampleDataSource::new();
}

/// Runs `f` against this thread's design-time source instance.
pub fn with_shared_source<R>(f: impl FnOnce(&SampleDataSource) -> R) -> R {
    SHARED_SOURCE.with(f)
}

#[cfg(test)]
mod tests {
    use super::{single, SampleDataSource, SourceError};
    use crate::model::common::CommonFields;
    use crate::model::group::SampleDataGroup;

    #[test]
    fn single_requires_exactly_one_match() {
        let empty: Vec<u8> = Vec::new();
        assert_eq!(single(&mut empty.iter()), None);
        assert_eq!(single(&mut [1].iter()), Some(&1));
        assert_eq!(single(&mut [1, 2].iter()), None);
    }

    #[test]
    fn duplicate_group_ids_are_not_resolved() {
        let mut source = SampleDataSource::empty();
        for _ in 0..2 {
            source.add_group(
                SampleDataGroup::new(CommonFields::new("Group-X", "Dup", "", None, ""))
                    .into_shared(),
            );
        }
        assert!(source.get_group("Group-X").is_none());
    }

    #[test]
    fn unknown_collection_id_is_rejected() {
        let source = SampleDataSource::empty();
        assert_eq!(
            source.get_groups("Everything").unwrap_err(),
            SourceError::UnsupportedGroupCollection("Everything".to_string())
        );
        assert!(source.get_groups("AllGroups").unwrap().is_empty());
    }
}
