//! Layout resolution: preset-keyed geometry for one slide.
//!
//! Each preset is a fixed recipe over the normalized 10 x 5.625 inch canvas.
//! Resolution is a pure function of the preset and the content-presence
//! flags; plans are computed fresh per slide because the flags shift
//! vertical offsets.

use crate::geometry::{ImageFit, Point, Rect};
use crate::metrics::FontWeight;
use crate::model::LayoutPreset;

/// Canvas width in layout inches (16:9).
pub const CANVAS_WIDTH: f32 = 10.0;
/// Canvas height in layout inches.
pub const CANVAS_HEIGHT: f32 = 5.625;

/// An opaque RGB color role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
}

impl Color {
    /// Create a color from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase hex form without a leading `#`, e.g. `0F172A`.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Near-black title color for the light side layouts.
pub const TITLE_DARK: Color = Color::new(15, 23, 42);
/// Dark gray body color for the light side layouts.
pub const BODY_DARK: Color = Color::new(51, 65, 85);
/// Text color over the fullscreen overlay panel.
pub const TEXT_LIGHT: Color = Color::new(255, 255, 255);
/// Overlay panel fill.
pub const OVERLAY_FILL: Color = Color::new(0, 0, 0);
/// Mid-gray used by the image-failure placeholder, visible on both palettes.
pub const PLACEHOLDER_GRAY: Color = Color::new(100, 116, 139);

/// Horizontal alignment of wrapped lines within a text block's width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Lines start at the block's left edge
    #[default]
    Left,
    /// Lines are centered within the block's width
    Center,
}

/// Resolved text style for a block tier (title or body).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Nominal font size in points
    pub size: f32,
    /// Font weight
    pub weight: FontWeight,
    /// Fill color
    pub color: Color,
    /// Fixed vertical advance per line, in layout inches
    /// (nominal size times the tier's spacing factor)
    pub line_advance: f32,
}

/// Semi-transparent panel drawn behind text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    /// Panel rectangle
    pub rect: Rect,
    /// Fill color
    pub color: Color,
    /// Fill opacity in `0.0..=1.0`
    pub opacity: f32,
}

/// The geometric plan for one slide.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlan {
    /// Where the image goes
    pub image_rect: Rect,
    /// How the image is scaled into its rectangle
    pub image_fit: ImageFit,
    /// First-line baseline of the text region
    pub text_origin: Point,
    /// Available text width in layout inches
    pub text_width: f32,
    /// Line alignment within the text region
    pub align: TextAlign,
    /// Overlay panel, if this preset draws one behind text
    pub overlay: Option<Overlay>,
    /// Title tier style
    pub title: TextStyle,
    /// Body tier style
    pub body: TextStyle,
    /// Extra vertical gap between the title block and the first point
    pub title_gap: f32,
}

const TITLE_SIZE: f32 = 24.0;
const TITLE_ADVANCE: f32 = 0.5;
const SIDE_BODY_SIZE: f32 = 16.0;
const SIDE_BODY_ADVANCE: f32 = 0.35;
const SIDE_TITLE_GAP: f32 = 0.7;
const FULL_BODY_SIZE: f32 = 14.0;
const FULL_BODY_ADVANCE: f32 = 0.25;

/// Resolve the layout plan for one slide.
///
/// `has_title` / `has_points` are the effective presence flags (settings
/// already combined with the slide's content); the fullscreen overlay is
/// suppressed when neither text block will be drawn.
pub fn resolve(preset: LayoutPreset, has_title: bool, has_points: bool) -> LayoutPlan {
    match preset {
        LayoutPreset::Left => side_plan(Rect::new(0.5, 0.5625, 4.5, 4.5), Point::new(5.5, 1.0)),
        LayoutPreset::Right => side_plan(Rect::new(5.0, 0.5625, 4.5, 4.5), Point::new(0.5, 1.0)),
        LayoutPreset::Fullscreen => {
            let has_text = has_title || has_points;
            LayoutPlan {
                image_rect: Rect::new(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT),
                image_fit: ImageFit::Exact,
                text_origin: Point::new(0.5, 4.1),
                text_width: 9.0,
                align: TextAlign::Center,
                overlay: has_text.then_some(Overlay {
                    rect: Rect::new(0.0, 3.65, CANVAS_WIDTH, 1.975),
                    color: OVERLAY_FILL,
                    opacity: 0.7,
                }),
                title: TextStyle {
                    size: TITLE_SIZE,
                    weight: FontWeight::Bold,
                    color: TEXT_LIGHT,
                    line_advance: TITLE_ADVANCE,
                },
                body: TextStyle {
                    size: FULL_BODY_SIZE,
                    weight: FontWeight::Regular,
                    color: TEXT_LIGHT,
                    line_advance: FULL_BODY_ADVANCE,
                },
                title_gap: 0.0,
            }
        },
    }
}

/// The two side presets are mirror images sharing every vertical measure.
fn side_plan(image_rect: Rect, text_origin: Point) -> LayoutPlan {
    LayoutPlan {
        image_rect,
        image_fit: ImageFit::Contain,
        text_origin,
        text_width: 4.0,
        align: TextAlign::Left,
        overlay: None,
        title: TextStyle {
            size: TITLE_SIZE,
            weight: FontWeight::Bold,
            color: TITLE_DARK,
            line_advance: TITLE_ADVANCE,
        },
        body: TextStyle {
            size: SIDE_BODY_SIZE,
            weight: FontWeight::Regular,
            color: BODY_DARK,
            line_advance: SIDE_BODY_ADVANCE,
        },
        title_gap: SIDE_TITLE_GAP,
    }
}
