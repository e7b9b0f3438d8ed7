//! Page composition: slides in, drawing instructions out.
//!
//! [`compose`] walks the ordered slide collection and emits one strictly
//! ordered instruction stream. The stream is the sole contract between the
//! composition engine and the export adapters; instruction order equals
//! paint order equals page order.

pub mod layout;
pub mod textflow;

use std::io::Cursor;

use log::{debug, warn};

use crate::geometry::{ImageFit, Point, Rect};
use crate::model::{Settings, Slide};

pub use layout::{Color, LayoutPlan, Overlay, TextAlign, TextStyle};

/// Reference to a slide's image within the composed stream.
///
/// Holds the index of the slide in the input sequence; adapters resolve it
/// against the same slice that was composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef(pub usize);

/// One drawing instruction.
///
/// The stream is append-only and strictly ordered. Adapters must realize
/// instructions in sequence: for a slide, the image paints first, then the
/// overlay (if any), then text.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Page/slide boundary. Emitted between slides only; the first page is
    /// implicit in the target, so N slides produce N-1 markers.
    NewPage,
    /// Place a slide image into a rectangle
    PlaceImage {
        /// Target rectangle in layout inches
        rect: Rect,
        /// Scaling mode
        fit: ImageFit,
        /// Which slide's image to place
        image: ImageRef,
    },
    /// Fill a rectangle, optionally translucent
    FillRect {
        /// Rectangle in layout inches
        rect: Rect,
        /// Fill color
        color: Color,
        /// Opacity in `0.0..=1.0`
        opacity: f32,
    },
    /// Set the style applied to subsequent text blocks
    SetTextStyle(TextStyle),
    /// Draw pre-wrapped text lines stacked by the current style's advance
    DrawTextBlock {
        /// First-line baseline
        origin: Point,
        /// Wrapped lines, in order
        lines: Vec<String>,
        /// Width of the block, in layout inches
        width: f32,
        /// Line alignment within the block
        align: TextAlign,
    },
}

/// Compose the ordered slide collection into a drawing instruction stream.
///
/// Pure with respect to its inputs: composing the same snapshot twice yields
/// identical streams. A slide whose image cannot be decoded degrades to a
/// visible placeholder; composition always continues with remaining slides.
pub fn compose(slides: &[Slide], settings: Settings) -> Vec<DrawOp> {
    let mut ops = Vec::new();

    for (index, slide) in slides.iter().enumerate() {
        if index > 0 {
            ops.push(DrawOp::NewPage);
        }
        compose_slide(&mut ops, slide, index, settings);
    }

    debug!("composed {} slides into {} instructions", slides.len(), ops.len());
    ops
}

fn compose_slide(ops: &mut Vec<DrawOp>, slide: &Slide, index: usize, settings: Settings) {
    let fallback_title;
    let (title, points): (&str, &[String]) = match &slide.content {
        Some(content) => (content.title.trim(), &content.points),
        None => {
            fallback_title = format!("Slide {}", index + 1);
            (fallback_title.as_str(), &[])
        },
    };

    let has_title = settings.include_title && !title.is_empty();
    let has_points = settings.include_points && !points.is_empty();
    let plan = layout::resolve(settings.layout, has_title, has_points);

    match probe_dimensions(&slide.image.bytes) {
        Ok(_) => ops.push(DrawOp::PlaceImage {
            rect: plan.image_rect,
            fit: plan.image_fit,
            image: ImageRef(index),
        }),
        Err(err) => {
            warn!("slide {}: image unusable, drawing placeholder: {err}", index + 1);
            push_image_placeholder(ops, plan.image_rect);
        },
    }

    if let Some(overlay) = plan.overlay {
        ops.push(DrawOp::FillRect {
            rect: overlay.rect,
            color: overlay.color,
            opacity: overlay.opacity,
        });
    }

    let mut cursor = plan.text_origin.y;

    if has_title {
        let lines = textflow::wrap(title, plan.text_width, plan.title.size, plan.title.weight);
        let height = textflow::measured_height(lines.len(), plan.title.line_advance);
        ops.push(DrawOp::SetTextStyle(plan.title));
        ops.push(DrawOp::DrawTextBlock {
            origin: Point::new(plan.text_origin.x, cursor),
            lines,
            width: plan.text_width,
            align: plan.align,
        });
        cursor += height + plan.title_gap;
    }

    if has_points {
        ops.push(DrawOp::SetTextStyle(plan.body));
        for point in points {
            let lines = textflow::wrap_point(point, plan.text_width, plan.body.size, plan.body.weight);
            let height = textflow::measured_height(lines.len(), plan.body.line_advance);
            ops.push(DrawOp::DrawTextBlock {
                origin: Point::new(plan.text_origin.x, cursor),
                lines,
                width: plan.text_width,
                align: plan.align,
            });
            cursor += height;
        }
    }
}

/// Substitute instruction for an image that could not be decoded.
fn push_image_placeholder(ops: &mut Vec<DrawOp>, image_rect: Rect) {
    ops.push(DrawOp::SetTextStyle(TextStyle {
        size: 24.0,
        weight: crate::metrics::FontWeight::Bold,
        color: layout::PLACEHOLDER_GRAY,
        line_advance: 0.5,
    }));
    ops.push(DrawOp::DrawTextBlock {
        origin: Point::new(image_rect.x, image_rect.center().y),
        lines: vec!["Image Error".to_string()],
        width: image_rect.width,
        align: TextAlign::Center,
    });
}

/// Header-only decode of the image dimensions.
///
/// Cheap and deterministic; a slide that fails this probe is the one case
/// the composer degrades to a placeholder.
fn probe_dimensions(bytes: &[u8]) -> std::result::Result<(u32, u32), image::ImageError> {
    image::io::Reader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()
}
