//! Input data model: slides, analyzed content, and export settings.
//!
//! Everything here is treated as an immutable snapshot for the duration of
//! one export call. The engine never mutates a [`Slide`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, stable identifier for a slide.
///
/// Useful for UI diffing and reordering; the export engine never consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideId(Uuid);

impl SlideId {
    /// Generate a fresh unique id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SlideId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SlideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Raw image bytes plus their MIME tag, as supplied by the caller.
#[derive(Debug, Clone)]
pub struct SlideImage {
    /// Encoded image data (JPEG, PNG, ...)
    pub bytes: Vec<u8>,
    /// MIME type tag, e.g. `image/jpeg`
    pub mime: String,
}

impl SlideImage {
    /// Create a new image resource.
    pub fn new(bytes: Vec<u8>, mime: impl Into<String>) -> Self {
        Self {
            bytes,
            mime: mime.into(),
        }
    }
}

/// Analyzed slide content: a title plus ordered bullet points.
///
/// Produced by the external image-analysis collaborator; arrives as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideContent {
    /// Slide title
    pub title: String,
    /// Ordered bullet points
    #[serde(default)]
    pub points: Vec<String>,
}

/// One unit of export: an image plus optional analyzed content.
#[derive(Debug, Clone)]
pub struct Slide {
    /// Stable identity for UI purposes
    pub id: SlideId,
    /// The image to place on the page
    pub image: SlideImage,
    /// Analyzed content, if the analysis step has run for this slide
    pub content: Option<SlideContent>,
}

impl Slide {
    /// Create a slide with no analyzed content yet.
    pub fn new(image: SlideImage) -> Self {
        Self {
            id: SlideId::new(),
            image,
            content: None,
        }
    }

    /// Create a slide with content already attached.
    pub fn with_content(image: SlideImage, content: SlideContent) -> Self {
        Self {
            id: SlideId::new(),
            image,
            content: Some(content),
        }
    }
}

/// Geometric recipe governing image and text placement on a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutPreset {
    /// Image on the left half, text on the right
    Left,
    /// Image on the right half, text on the left
    Right,
    /// Image covering the whole slide, text over a dark bottom panel
    Fullscreen,
}

impl std::str::FromStr for LayoutPreset {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "left" => Ok(LayoutPreset::Left),
            "right" => Ok(LayoutPreset::Right),
            "fullscreen" => Ok(LayoutPreset::Fullscreen),
            other => Err(format!("unknown layout preset: {other}")),
        }
    }
}

/// Export settings.
///
/// Always fully specified; taken by value at the export boundary so that
/// caller-side mutation cannot be observed by an in-flight export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Layout preset applied to every slide
    pub layout: LayoutPreset,
    /// Whether slide titles are rendered
    pub include_title: bool,
    /// Whether bullet points are rendered
    pub include_points: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layout: LayoutPreset::Left,
            include_title: true,
            include_points: true,
        }
    }
}
