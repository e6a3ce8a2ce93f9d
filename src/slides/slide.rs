//! Slide and image reference types.

use std::fmt;
use std::path::Path;

use uuid::Uuid;

/// Default display duration for a slide, in seconds.
pub const DEFAULT_SLIDE_SECONDS: f64 = 3.0;

/// File extensions accepted as slide images.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "avif", "tif", "tiff"];

/// Label shown for an image locator that has no file name component.
const FALLBACK_LABEL: &str = "image";

/// Opaque, unique slide identifier.
///
/// Stays the same when the slide moves within the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlideId(Uuid);

impl SlideId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SlideId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Locator of an image resource.
///
/// The engine never opens, decodes or frees the resource behind it; the
/// hosting environment resolves it when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    pub fn from_path(path: &Path) -> Self {
        Self(path.to_string_lossy().into_owned())
    }

    /// The raw locator string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display label: the last path segment of the locator.
    pub fn label(&self) -> &str {
        self.0
            .rsplit(|c: char| c == '/' || c == '\\')
            .find(|segment| !segment.is_empty())
            .unwrap_or(FALLBACK_LABEL)
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One image plus its display duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub(crate) id: SlideId,
    pub(crate) image: ImageRef,
    pub(crate) duration: f64,
}

impl Slide {
    pub(crate) fn new(image: ImageRef, duration: f64) -> Self {
        Self {
            id: SlideId::new(),
            image,
            duration,
        }
    }

    pub fn id(&self) -> SlideId {
        self.id
    }

    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    /// Display duration in seconds (always finite and > 0).
    pub fn duration(&self) -> f64 {
        self.duration
    }
}

/// Check that a duration is usable on the timeline.
pub fn is_valid_duration(seconds: f64) -> bool {
    seconds.is_finite() && seconds > 0.0
}

/// Check whether `path` has a known image file extension.
pub fn is_image_path(path: &Path) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}
