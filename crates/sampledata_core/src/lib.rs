//! Core data model for the grouped-items sample app.
//! Owns the bindable group/item records, their change notifications and the
//! hard-coded content source.

pub mod collection;
pub mod logging;
pub mod model;
pub mod source;

pub use collection::observable::{
    CollectionChange, ListError, ListResult, ObservableList, SubscriptionId,
};
pub use collection::preview::{apply_change, MirroredList, PREVIEW_CAPACITY};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::common::{CommonFields, ImageSource, APP_BASE_URI};
pub use model::group::{SampleDataGroup, SharedGroup};
pub use model::item::{SampleDataItem, SharedItem};
pub use model::notify::PropertyNotifier;
pub use model::view::{GroupView, ItemView};
pub use source::data_source::{
    with_shared_source, SampleDataSource, SourceError, SourceResult, ALL_GROUPS_ID,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
