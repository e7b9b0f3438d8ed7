//! Fixed-page (PDF) export adapter.
//!
//! Walks the composed instruction stream once, in order, translating layout
//! inches into page points (1 in = 72 pt) and flipping the top-down layout
//! y-axis into PDF's bottom-up space. All layout decisions were made by the
//! composer; this adapter only converts units and emits operators.

pub mod content_stream;
pub mod writer;

use log::warn;

use crate::compose::layout::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::compose::{textflow, Color, DrawOp, TextAlign, TextStyle};
use crate::error::{Error, Result};
use crate::export::media;
use crate::geometry::fit_rect;
use crate::metrics::FontWeight;
use crate::model::Slide;

use writer::{PdfWriter, PdfWriterConfig};

const POINTS_PER_INCH: f32 = 72.0;
/// Page width in points (10in canvas).
pub const PAGE_WIDTH: f32 = CANVAS_WIDTH * POINTS_PER_INCH;
/// Page height in points (5.625in canvas).
pub const PAGE_HEIGHT: f32 = CANVAS_HEIGHT * POINTS_PER_INCH;

/// Render a composed instruction stream against its slide snapshot.
pub fn render(slides: &[Slide], ops: &[DrawOp]) -> Result<Vec<u8>> {
    let mut writer = PdfWriter::new(PAGE_WIDTH, PAGE_HEIGHT, PdfWriterConfig::default());
    writer.add_page();
    let mut style: Option<TextStyle> = None;

    for op in ops {
        match op {
            DrawOp::NewPage => {
                writer.add_page();
            },
            DrawOp::PlaceImage { rect, fit, image } => {
                let slide = slides.get(image.0).ok_or_else(|| {
                    Error::Export(format!("instruction references missing slide {}", image.0))
                })?;
                match media::prepare(&slide.image) {
                    Ok(prepared) => {
                        let dest = fit_rect(prepared.width, prepared.height, *rect, *fit);
                        let name = writer.register_image(prepared);
                        writer.current_page().draw_image(
                            &name,
                            dest.x * POINTS_PER_INCH,
                            (CANVAS_HEIGHT - dest.bottom()) * POINTS_PER_INCH,
                            dest.width * POINTS_PER_INCH,
                            dest.height * POINTS_PER_INCH,
                        );
                    },
                    // The composer already probed this image; a late decode
                    // failure degrades to an empty image slot, not an abort.
                    Err(err) => warn!("skipping unreadable image for slide {}: {err}", image.0 + 1),
                }
            },
            DrawOp::FillRect { rect, color, opacity } => {
                let gstate = (*opacity < 1.0).then(|| writer.register_opacity(*opacity));
                let (r, g, b) = normalized(*color);
                let page = writer.current_page();
                page.save_state();
                if let Some(name) = &gstate {
                    page.set_ext_gstate(name);
                }
                page.set_fill_color(r, g, b);
                page.fill_rect(
                    rect.x * POINTS_PER_INCH,
                    (CANVAS_HEIGHT - rect.bottom()) * POINTS_PER_INCH,
                    rect.width * POINTS_PER_INCH,
                    rect.height * POINTS_PER_INCH,
                );
                page.restore_state();
            },
            DrawOp::SetTextStyle(new_style) => style = Some(*new_style),
            DrawOp::DrawTextBlock {
                origin,
                lines,
                width,
                align,
            } => {
                let style = style
                    .ok_or_else(|| Error::Export("text block precedes any text style".to_string()))?;
                let font = match style.weight {
                    FontWeight::Regular => "F1",
                    FontWeight::Bold => "F2",
                };
                let (r, g, b) = normalized(style.color);

                // Line x positions depend only on measurement; compute them
                // before borrowing the page builder.
                let placed: Vec<(f32, f32, &String)> = lines
                    .iter()
                    .enumerate()
                    .map(|(i, line)| {
                        let baseline = origin.y + i as f32 * style.line_advance;
                        let x = match align {
                            TextAlign::Left => origin.x,
                            TextAlign::Center => {
                                origin.x
                                    + (width - textflow::width_in(line, style.size, style.weight))
                                        / 2.0
                            },
                        };
                        (x, baseline, line)
                    })
                    .collect();

                let page = writer.current_page();
                page.set_fill_color(r, g, b);
                for (x, baseline, line) in placed {
                    page.text(
                        line,
                        font,
                        style.size,
                        x * POINTS_PER_INCH,
                        (CANVAS_HEIGHT - baseline) * POINTS_PER_INCH,
                    );
                }
            },
        }
    }

    writer.finish()
}

fn normalized(color: Color) -> (f32, f32, f32) {
    (
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_dimensions() {
        assert_eq!(PAGE_WIDTH, 720.0);
        assert_eq!(PAGE_HEIGHT, 405.0);
    }

    #[test]
    fn test_normalized_color() {
        let (r, g, b) = normalized(Color::new(255, 0, 51));
        assert_eq!(r, 1.0);
        assert_eq!(g, 0.0);
        assert!((b - 0.2).abs() < 1e-4);
    }

    #[test]
    fn test_text_block_without_style_is_an_error() {
        let ops = vec![DrawOp::DrawTextBlock {
            origin: crate::geometry::Point::new(0.5, 1.0),
            lines: vec!["orphan".to_string()],
            width: 4.0,
            align: TextAlign::Left,
        }];
        assert!(render(&[], &ops).is_err());
    }
}
