//! Boundary to the external image-analysis collaborator.
//!
//! From the engine's perspective analysis is a pure function
//! `image -> {title, points}` that may fail. The composition engine never
//! calls it; it only consumes whatever content is already attached to each
//! slide at export time. This module defines the trait seam, the fixed
//! fallback used when analysis fails, and the caller-side loop that attaches
//! results with per-slide fault isolation.

use log::warn;

use crate::error::Result;
use crate::model::{Slide, SlideContent, SlideImage};

/// Produces slide content from an image.
///
/// Implementations typically call a generative AI service and parse its JSON
/// response into [`SlideContent`]; they are free to retry internally.
pub trait ImageAnalyzer {
    /// Analyze one image into a title and bullet points.
    fn analyze(&mut self, image: &SlideImage) -> Result<SlideContent>;
}

/// Fixed substitute content used when analysis fails, so the slide stays
/// exportable.
pub fn fallback_content() -> SlideContent {
    SlideContent {
        title: "Slide Image".to_string(),
        points: vec![
            "Image analysis failed".to_string(),
            "Visual content included".to_string(),
        ],
    }
}

/// Run the analyzer over every slide that has no content yet.
///
/// A failed analysis substitutes [`fallback_content`] for that slide and the
/// loop continues; one bad slide never aborts the batch. Slides that already
/// carry content are left untouched.
pub fn annotate_slides<A: ImageAnalyzer>(slides: &mut [Slide], analyzer: &mut A) {
    for slide in slides.iter_mut().filter(|s| s.content.is_none()) {
        slide.content = Some(match analyzer.analyze(&slide.image) {
            Ok(content) => content,
            Err(err) => {
                warn!("analysis failed for slide {}: {err}", slide.id);
                fallback_content()
            },
        });
    }
}
