//! Item data model.
//!
//! # Invariants
//! - `group_id` refers to the owning group by id, never by pointer.
//! - Content and group changes raise property notifications like the
//!   common fields do.

use crate::collection::observable::SubscriptionId;
use crate::model::common::CommonFields;
use crate::model::view::ItemView;
use std::cell::RefCell;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Item handle shared between a group's master and preview lists.
pub type SharedItem = Rc<RefCell<SampleDataItem>>;

/// Generic bindable item.
#[derive(Debug)]
pub struct SampleDataItem {
    common: CommonFields,
    content: String,
    group_id: Option<String>,
}

impl SampleDataItem {
    pub fn new(
        common: CommonFields,
        content: impl Into<String>,
        group_id: Option<String>,
    ) -> Self {
        Self {
            common,
            content: content.into(),
            group_id,
        }
    }

    /// Wraps this item into a shared handle.
    pub fn into_shared(self) -> SharedItem {
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

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    pub fn set_content(&mut self, value: impl Into<String>) -> bool {
        self.common
            .notifier_mut()
            .set_property(&mut self.content, value.into(), "content")
    }

    pub fn set_group_id(&mut self, value: Option<String>) -> bool {
        self.common
            .notifier_mut()
            .set_property(&mut self.group_id, value, "group")
    }

    /// Registers a property-changed handler covering every item property.
    pub fn subscribe(&mut self, handler: impl FnMut(&str) + 'static) -> SubscriptionId {
        self.common.subscribe(handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.common.unsubscribe(id)
    }

    pub fn to_view(&self) -> ItemView {
        ItemView {
            unique_id: self.common.unique_id().to_string(),
            title: self.common.title().to_string(),
            subtitle: self.common.subtitle().to_string(),
            description: self.common.description().to_string(),
            image: self.common.image(),
            content: self.content.clone(),
            group_id: self.group_id.clone(),
        }
    }
}

impl Display for SampleDataItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.common, f)
    }
}

#[cfg(test)]
mod tests {
    use super::SampleDataItem;
    use crate::model::common::CommonFields;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn item() -> SampleDataItem {
        SampleDataItem::new(
            CommonFields::new(
                "Group-2-Item-1",
                "Emotion",
                "",
                Some("Assets/21.png".to_string()),
                "short",
            ),
            "long",
            Some("Group-2".to_string()),
        )
    }

    #[test]
    fn content_and_group_changes_notify() {
        let mut item = item();
        let seen = Rc::new(RefCell::new(Vec::<String>::new()));
        let sink = Rc::clone(&seen);
        item.subscribe(move |name| sink.borrow_mut().push(name.to_string()));

        assert!(item.set_content("longer"));
        assert!(!item.set_content("longer"));
        assert!(item.set_group_id(None));
        assert!(item.common_mut().set_title("Feeling"));

        assert_eq!(*seen.borrow(), vec!["content", "group", "title"]);
        assert_eq!(item.to_string(), "Feeling");
    }

    #[test]
    fn view_copies_resolved_fields() {
        let view = item().to_view();
        assert_eq!(view.unique_id, "Group-2-Item-1");
        assert_eq!(view.group_id.as_deref(), Some("Group-2"));
        assert_eq!(
            view.image.as_ref().map(|image| image.uri()),
            Some("ms-appx:///Assets/21.png")
        );
    }
}
