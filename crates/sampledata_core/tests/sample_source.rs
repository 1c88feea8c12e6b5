use sampledata_core::{
    with_shared_source, CollectionChange, CommonFields, GroupView, SampleDataItem,
    SampleDataSource, SourceError, PREVIEW_CAPACITY,
};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn seeded_source_has_three_groups_with_expected_items() {
    let source = SampleDataSource::new();
    let groups = source.get_groups("AllGroups").unwrap();

    let summary = groups
        .iter()
        .map(|group| {
            let group = group.borrow();
            (
                group.unique_id().to_string(),
                group.title().to_string(),
                group.items().len(),
            )
        })
        .collect::<Vec<_>>();
    assert_eq!(
        summary,
        vec![
            ("Group-1".to_string(), "Introduction".to_string(), 5),
            ("Group-2".to_string(), "Impact".to_string(), 3),
            ("Group-3".to_string(), "Directions".to_string(), 7),
        ]
    );
    assert_eq!(source.item_count(), 15);
}

#[test]
fn seeded_items_point_back_to_their_group() {
    let source = SampleDataSource::new();
    for group in source.all_groups() {
        let group = group.borrow();
        for item in group.items() {
            assert_eq!(item.borrow().group_id(), Some(group.unique_id()));
        }
        assert_eq!(group.top_items().len(), group.items().len());
    }
}

#[test]
fn get_groups_rejects_other_collection_ids() {
    let source = SampleDataSource::new();
    let err = source.get_groups("Group-1").unwrap_err();
    assert_eq!(
        err,
        SourceError::UnsupportedGroupCollection("Group-1".to_string())
    );
    assert!(err.to_string().contains("AllGroups"));
}

#[test]
fn lookups_resolve_groups_and_items_by_id() {
    let source = SampleDataSource::new();

    let group = source.get_group("Group-2").expect("group 2 exists");
    assert_eq!(group.borrow().title(), "Impact");
    assert!(source.get_group("Group-4").is_none());

    let item = source.get_item("Group-3-Item-7").expect("item exists");
    let item = item.borrow();
    assert_eq!(item.title(), "Mania");
    assert_eq!(
        item.common().image().map(|image| image.uri().to_string()),
        Some("ms-appx:///Assets/37.png".to_string())
    );
    assert!(source.get_item("Group-3-Item-8").is_none());
}

#[test]
fn get_item_ignores_ambiguous_ids() {
    let source = SampleDataSource::new();
    let group = source.get_group("Group-1").unwrap();
    group.borrow_mut().push_item(
        SampleDataItem::new(
            CommonFields::new("Group-2-Item-1", "Copy", "", None, ""),
            "",
            Some("Group-1".to_string()),
        )
        .into_shared(),
    );

    assert!(source.get_item("Group-2-Item-1").is_none());
}

#[test]
fn group_growth_past_capacity_keeps_top_items_capped() {
    let source = SampleDataSource::new();
    let group = source.get_group("Group-3").unwrap();
    let added = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&added);
    group.borrow_mut().subscribe_top_items(move |change| {
        if matches!(change, CollectionChange::Added { .. }) {
            *sink.borrow_mut() += 1;
        }
    });

    for index in 8..=20 {
        group.borrow_mut().push_item(
            SampleDataItem::new(
                CommonFields::new(format!("Group-3-Item-{index}"), "Extra", "", None, ""),
                "",
                Some("Group-3".to_string()),
            )
            .into_shared(),
        );
    }

    let group = group.borrow();
    assert_eq!(group.items().len(), 20);
    assert_eq!(group.top_items().len(), PREVIEW_CAPACITY);
    assert_eq!(*added.borrow(), PREVIEW_CAPACITY - 7);
    assert_eq!(
        group.top_items()[PREVIEW_CAPACITY - 1].borrow().unique_id(),
        "Group-3-Item-12"
    );
}

#[test]
fn snapshot_serializes_with_snake_case_fields() {
    let source = SampleDataSource::new();
    let snapshot = source.snapshot();
    let json = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(json[0]["unique_id"], "Group-1");
    assert_eq!(json[0]["image"], "ms-appx:///Assets/10.png");
    assert_eq!(json[0]["items"][0]["title"], "Love");
    assert_eq!(json[0]["items"][0]["group_id"], "Group-1");
    assert_eq!(json[1]["top_item_ids"][2], "Group-2-Item-3");

    let decoded: Vec<GroupView> = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, snapshot);
}

#[test]
fn shared_source_is_stable_within_a_thread() {
    let first = with_shared_source(|source| source.get_group("Group-1").unwrap());
    let second = with_shared_source(|source| source.get_group("Group-1").unwrap());
    assert!(Rc::ptr_eq(&first, &second));
}
