//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose group/item lookups to Dart via FRB as flat, owned records.
//! - Keep error semantics simple: empty string or `None` instead of panics.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Lookups read the calling thread's shared source.

use sampledata_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    with_shared_source, GroupView, ItemView, ALL_GROUPS_ID,
};

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory for rolling logs.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Group tile data for hub/grid pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    pub unique_id: String,
    pub title: String,
    pub subtitle: String,
    /// Resolved image URI, empty when the group has no image.
    pub image_uri: String,
    pub item_count: u32,
    /// Preview tiles, at most twelve.
    pub top_items: Vec<ItemSummary>,
}

/// Item tile data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSummary {
    pub unique_id: String,
    pub title: String,
    pub subtitle: String,
    pub image_uri: String,
}

/// Item detail data for the item page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDetail {
    pub unique_id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image_uri: String,
    pub content: String,
    pub group_id: String,
}

/// Group detail data for the group page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDetail {
    pub unique_id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image_uri: String,
    pub items: Vec<ItemSummary>,
}

/// Lists every group with its preview tiles.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics; an unsupported collection id yields an empty list.
#[flutter_rust_bridge::frb(sync)]
pub fn list_groups() -> Vec<GroupSummary> {
    with_shared_source(|source| match source.get_groups(ALL_GROUPS_ID) {
        Ok(groups) => groups
            .iter()
            .map(|group| to_group_summary(&group.borrow().to_view()))
            .collect(),
        Err(err) => {
            log::warn!(
                "event=ffi_list_groups module=ffi status=error message={}",
                err
            );
            Vec::new()
        }
    })
}

/// Loads one group with every item.
#[flutter_rust_bridge::frb(sync)]
pub fn get_group(unique_id: String) -> Option<GroupDetail> {
    with_shared_source(|source| {
        let group = source.get_group(unique_id.trim())?;
        let view = group.borrow().to_view();
        Some(GroupDetail {
            items: view.items.iter().map(to_item_summary).collect(),
            unique_id: view.unique_id,
            title: view.title,
            subtitle: view.subtitle,
            description: view.description,
            image_uri: image_uri(&view.image),
        })
    })
}

/// Loads one item by id across every group.
#[flutter_rust_bridge::frb(sync)]
pub fn get_item(unique_id: String) -> Option<ItemDetail> {
    with_shared_source(|source| {
        let item = source.get_item(unique_id.trim())?;
        let view = item.borrow().to_view();
        Some(ItemDetail {
            image_uri: image_uri(&view.image),
            unique_id: view.unique_id,
            title: view.title,
            subtitle: view.subtitle,
            description: view.description,
            content: view.content,
            group_id: view.group_id.unwrap_or_default(),
        })
    })
}

fn to_group_summary(view: &GroupView) -> GroupSummary {
    let top_items = view
        .top_item_ids
        .iter()
        .filter_map(|id| view.items.iter().find(|item| &item.unique_id == id))
        .map(to_item_summary)
        .collect();
    GroupSummary {
        unique_id: view.unique_id.clone(),
        title: view.title.clone(),
        subtitle: view.subtitle.clone(),
        image_uri: image_uri(&view.image),
        item_count: u32::try_from(view.items.len()).unwrap_or(u32::MAX),
        top_items,
    }
}

fn to_item_summary(view: &ItemView) -> ItemSummary {
    ItemSummary {
        unique_id: view.unique_id.clone(),
        title: view.title.clone(),
        subtitle: view.subtitle.clone(),
        image_uri: image_uri(&view.image),
    }
}

fn image_uri(image: &Option<sampledata_core::ImageSource>) -> String {
    image
        .as_ref()
        .map(|image| image.uri().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{core_version, get_group, get_item, init_logging, list_groups, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn list_groups_returns_seeded_tiles() {
        let groups = list_groups();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].title, "Introduction");
        assert_eq!(groups[0].item_count, 5);
        assert_eq!(groups[0].top_items.len(), 5);
        assert_eq!(groups[2].top_items[6].unique_id, "Group-3-Item-7");
        assert_eq!(groups[1].image_uri, "ms-appx:///Assets/20.png");
    }

    #[test]
    fn detail_lookups_trim_ids_and_miss_cleanly() {
        let group = get_group(" Group-2 ".to_string()).expect("group exists");
        assert_eq!(group.items.len(), 3);
        assert!(get_group("nope".to_string()).is_none());

        let item = get_item("Group-1-Item-5".to_string()).expect("item exists");
        assert_eq!(item.title, "The Art of Loving");
        assert_eq!(item.group_id, "Group-1");
        assert!(get_item(String::new()).is_none());
    }
}
