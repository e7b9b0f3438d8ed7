//! Integration tests for the instruction stream contract.

use std::io::Cursor;

use slidesmith::compose::{compose, DrawOp};
use slidesmith::model::{LayoutPreset, Settings, Slide, SlideContent, SlideImage};

fn test_png() -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    let img = image::RgbImage::from_pixel(4, 3, image::Rgb([120, 90, 200]));
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, image::ImageOutputFormat::Png)
        .unwrap();
    buf.into_inner()
}

fn slide_with(title: &str, points: &[&str]) -> Slide {
    Slide::with_content(
        SlideImage::new(test_png(), "image/png"),
        SlideContent {
            title: title.to_string(),
            points: points.iter().map(|p| p.to_string()).collect(),
        },
    )
}

fn settings(layout: LayoutPreset, title: bool, points: bool) -> Settings {
    Settings {
        layout,
        include_title: title,
        include_points: points,
    }
}

mod stream_shape {
    use super::*;

    #[test]
    fn test_image_only_slide_emits_exactly_one_instruction() {
        for layout in [LayoutPreset::Left, LayoutPreset::Right, LayoutPreset::Fullscreen] {
            let slides = vec![slide_with("Title", &["point"])];
            let ops = compose(&slides, settings(layout, false, false));
            assert_eq!(ops.len(), 1, "layout {layout:?}");
            assert!(matches!(ops[0], DrawOp::PlaceImage { .. }));
        }
    }

    #[test]
    fn test_n_slides_have_n_minus_one_boundaries() {
        for n in 1..=5 {
            let slides: Vec<Slide> = (0..n).map(|_| slide_with("T", &[])).collect();
            let ops = compose(&slides, settings(LayoutPreset::Left, true, true));
            let boundaries = ops.iter().filter(|op| matches!(op, DrawOp::NewPage)).count();
            assert_eq!(boundaries, n - 1);
        }
    }

    #[test]
    fn test_slide_order_is_preserved() {
        let slides = vec![
            slide_with("Alpha", &[]),
            slide_with("Beta", &[]),
            slide_with("Gamma", &[]),
        ];
        let ops = compose(&slides, settings(LayoutPreset::Left, true, false));
        let titles: Vec<&str> = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::DrawTextBlock { lines, .. } => Some(lines[0].as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(titles, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_per_slide_paint_order() {
        let slides = vec![slide_with("Title", &["one", "two"])];
        let ops = compose(&slides, settings(LayoutPreset::Fullscreen, true, true));

        let image_at = ops.iter().position(|op| matches!(op, DrawOp::PlaceImage { .. })).unwrap();
        let overlay_at = ops.iter().position(|op| matches!(op, DrawOp::FillRect { .. })).unwrap();
        let first_text = ops
            .iter()
            .position(|op| matches!(op, DrawOp::DrawTextBlock { .. }))
            .unwrap();
        assert!(image_at < overlay_at);
        assert!(overlay_at < first_text);
    }

    #[test]
    fn test_points_keep_their_order() {
        let slides = vec![slide_with("T", &["first", "second", "third"])];
        let ops = compose(&slides, settings(LayoutPreset::Right, false, true));
        let bullets: Vec<String> = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::DrawTextBlock { lines, .. } => Some(lines[0].clone()),
                _ => None,
            })
            .collect();
        assert_eq!(bullets, vec!["\u{2022} first", "\u{2022} second", "\u{2022} third"]);
    }

    #[test]
    fn test_composing_twice_is_identical() {
        let slides = vec![
            slide_with("Deterministic", &["same input", "same output"]),
            Slide::new(SlideImage::new(test_png(), "image/png")),
        ];
        let config = settings(LayoutPreset::Fullscreen, true, true);
        assert_eq!(compose(&slides, config), compose(&slides, config));
    }
}

mod fallbacks {
    use super::*;

    #[test]
    fn test_unanalyzed_slide_gets_positional_title() {
        let slides = vec![
            Slide::new(SlideImage::new(test_png(), "image/png")),
            Slide::new(SlideImage::new(test_png(), "image/png")),
        ];
        let ops = compose(&slides, settings(LayoutPreset::Left, true, true));

        let blocks: Vec<&DrawOp> = ops
            .iter()
            .filter(|op| matches!(op, DrawOp::DrawTextBlock { .. }))
            .collect();
        // One title block per slide, zero point blocks.
        assert_eq!(blocks.len(), 2);
        match blocks[1] {
            DrawOp::DrawTextBlock { lines, .. } => assert_eq!(lines[0], "Slide 2"),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_bad_image_degrades_slide_but_not_batch() {
        let slides = vec![
            Slide::new(SlideImage::new(b"not an image".to_vec(), "image/jpeg")),
            slide_with("Survivor", &[]),
        ];
        let ops = compose(&slides, settings(LayoutPreset::Left, true, true));

        let placed = ops.iter().filter(|op| matches!(op, DrawOp::PlaceImage { .. })).count();
        assert_eq!(placed, 1);
        let has_placeholder = ops.iter().any(|op| {
            matches!(op, DrawOp::DrawTextBlock { lines, .. } if lines[0] == "Image Error")
        });
        assert!(has_placeholder);
        let has_survivor = ops.iter().any(|op| {
            matches!(op, DrawOp::DrawTextBlock { lines, .. } if lines[0] == "Survivor")
        });
        assert!(has_survivor);
    }
}

mod mirrored_presets {
    use super::*;

    #[test]
    fn test_left_and_right_mirror_x_share_y_and_line_counts() {
        let content_slides = |_| {
            vec![slide_with(
                "A title long enough to wrap onto a second line in the side column",
                &["short point", "a noticeably longer point that will wrap as well"],
            )]
        };

        let left_ops = compose(&content_slides(()), settings(LayoutPreset::Left, true, true));
        let right_ops = compose(&content_slides(()), settings(LayoutPreset::Right, true, true));
        assert_eq!(left_ops.len(), right_ops.len());

        for (l, r) in left_ops.iter().zip(right_ops.iter()) {
            match (l, r) {
                (
                    DrawOp::PlaceImage { rect: lr, .. },
                    DrawOp::PlaceImage { rect: rr, .. },
                ) => {
                    assert!((lr.x - (10.0 - rr.x - rr.width)).abs() < 1e-4);
                    assert_eq!(lr.y, rr.y);
                    assert_eq!(lr.width, rr.width);
                    assert_eq!(lr.height, rr.height);
                },
                (
                    DrawOp::DrawTextBlock {
                        origin: lo,
                        lines: ll,
                        width: lw,
                        ..
                    },
                    DrawOp::DrawTextBlock {
                        origin: ro,
                        lines: rl,
                        width: rw,
                        ..
                    },
                ) => {
                    assert!((lo.x - (10.0 - ro.x - rw)).abs() < 1e-4);
                    assert_eq!(lo.y, ro.y);
                    assert_eq!(lw, rw);
                    assert_eq!(ll, rl, "equal widths must wrap identically");
                },
                (a, b) => assert_eq!(a, b),
            }
        }
    }
}
