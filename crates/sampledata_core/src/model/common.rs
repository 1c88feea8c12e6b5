//! Fields shared by groups and items.
//!
//! # Responsibility
//! - Hold identity and display text common to every bindable record.
//! - Resolve asset image paths against the application base URI.
//!
//! # Invariants
//! - Every setter goes through `PropertyNotifier::set_property`.
//! - At most one of "image path" or "explicit image" is active at a time.

use crate::collection::observable::SubscriptionId;
use crate::model::notify::PropertyNotifier;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Base URI for packaged application assets.
pub const APP_BASE_URI: &str = "ms-appx:///";

static URI_SCHEME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").expect("valid uri scheme regex"));

/// Resolved image reference that a view can load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageSource {
    uri: String,
}

impl ImageSource {
    /// Wraps an absolute URI.
    pub fn from_uri(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    /// Resolves an asset path relative to `APP_BASE_URI`.
    ///
    /// Paths that already carry a URI scheme are kept verbatim.
    pub fn resolve(path: &str) -> Self {
        let trimmed = path.trim();
        if URI_SCHEME_RE.is_match(trimmed) {
            return Self::from_uri(trimmed);
        }
        Self::from_uri(format!(
            "{APP_BASE_URI}{}",
            trimmed.trim_start_matches(['/', '\\'])
        ))
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ImageState {
    None,
    Path(String),
    Explicit(ImageSource),
}

/// Identity, display text and image shared by groups and items.
#[derive(Debug)]
pub struct CommonFields {
    unique_id: String,
    title: String,
    subtitle: String,
    description: String,
    image: ImageState,
    notifier: PropertyNotifier,
}

impl CommonFields {
    pub fn new(
        unique_id: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        image_path: Option<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            unique_id: unique_id.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            description: description.into(),
            image: image_path.map_or(ImageState::None, ImageState::Path),
            notifier: PropertyNotifier::new(),
        }
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_unique_id(&mut self, value: impl Into<String>) -> bool {
        self.notifier.set_property(&mut self.unique_id, value.into(), "unique_id")
    }

    pub fn set_title(&mut self, value: impl Into<String>) -> bool {
        self.notifier.set_property(&mut self.title, value.into(), "title")
    }

    pub fn set_subtitle(&mut self, value: impl Into<String>) -> bool {
        self.notifier.set_property(&mut self.subtitle, value.into(), "subtitle")
    }

    pub fn set_description(&mut self, value: impl Into<String>) -> bool {
        self.notifier.set_property(&mut self.description, value.into(), "description")
    }

    /// Current image, resolving a pending asset path on demand.
    pub fn image(&self) -> Option<ImageSource> {
        match &self.image {
            ImageState::None => None,
            ImageState::Path(path) => Some(ImageSource::resolve(path)),
            ImageState::Explicit(source) => Some(source.clone()),
        }
    }

    /// Unresolved asset path, if the image was set by path.
    pub fn image_path(&self) -> Option<&str> {
        match &self.image {
            ImageState::Path(path) => Some(path.as_str()),
            _ => None,
        }
    }

    /// Sets an explicit image and forgets any asset path.
    pub fn set_image(&mut self, source: Option<ImageSource>) -> bool {
        let next = source.map_or(ImageState::None, ImageState::Explicit);
        self.notifier.set_property(&mut self.image, next, "image")
    }

    /// Points the image at an asset path; always raises `image`.
    pub fn set_image_path(&mut self, path: impl Into<String>) {
        self.image = ImageState::Path(path.into());
        self.notifier.notify("image");
    }

    /// Registers a property-changed handler.
    pub fn subscribe(&mut self, handler: impl FnMut(&str) + 'static) -> SubscriptionId {
        self.notifier.subscribe(handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    pub(crate) fn notifier_mut(&mut self) -> &mut PropertyNotifier {
        &mut self.notifier
    }
}

impl Display for CommonFields {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title)
    }
}
