//! Integration tests for deterministic text flow.

use slidesmith::compose::textflow::{measured_height, width_in, wrap, wrap_point};
use slidesmith::metrics::FontWeight;

mod wrapping {
    use super::*;

    #[test]
    fn test_every_line_fits_the_budget() {
        let text = "Deterministic layout requires measurement without any rendering backend at all";
        for width in [1.0_f32, 2.0, 4.0, 9.0] {
            let lines = wrap(text, width, 16.0, FontWeight::Regular);
            for line in &lines {
                let measured = width_in(line, 16.0, FontWeight::Regular);
                assert!(
                    measured <= width + 1e-6,
                    "line {line:?} measured {measured} > budget {width}"
                );
            }
        }
    }

    #[test]
    fn test_rejoining_lines_reproduces_normalized_text() {
        let text = "  one\t two  three \n four ";
        let lines = wrap(text, 0.8, 14.0, FontWeight::Regular);
        assert_eq!(lines.join(" "), "one two three four");
    }

    #[test]
    fn test_no_mid_word_hyphenation() {
        let lines = wrap("supercalifragilisticexpialidocious", 0.4, 16.0, FontWeight::Regular);
        assert_eq!(lines, vec!["supercalifragilisticexpialidocious"]);
    }

    #[test]
    fn test_wrapping_depends_on_weight() {
        // Bold glyphs are wider, so at a width right at the regular fit
        // boundary the bold rendition needs at least as many lines.
        let text = "mill fill jilt till";
        let regular = wrap(text, 0.9, 16.0, FontWeight::Regular);
        let bold = wrap(text, 0.9, 16.0, FontWeight::Bold);
        assert!(bold.len() >= regular.len());
    }
}

mod bullet_points {
    use super::*;

    #[test]
    fn test_long_point_wraps_with_single_leading_glyph() {
        // Fullscreen body: 14pt at most of the canvas width.
        let point = "A very long bullet point that definitely needs wrapping across \
                     multiple lines at the given width because it keeps going and going \
                     well past any single line";
        let lines = wrap_point(point, 4.0, 14.0, FontWeight::Regular);
        assert!(lines.len() >= 2);
        assert!(lines[0].starts_with("\u{2022} "));
        assert!(lines[1..].iter().all(|l| !l.contains('\u{2022}')));
    }

    #[test]
    fn test_glyph_counts_toward_first_line_budget() {
        // The same text without the glyph may need fewer lines; it must
        // never need more.
        let point = "tightly packed words here";
        let with_bullet = wrap_point(point, 1.2, 14.0, FontWeight::Regular);
        let without = wrap(point, 1.2, 14.0, FontWeight::Regular);
        assert!(with_bullet.len() >= without.len());
    }

    #[test]
    fn test_vertical_advance_is_lines_times_advance() {
        let point = "A very long bullet point that definitely needs wrapping across \
                     multiple lines at the given width";
        let lines = wrap_point(point, 2.0, 14.0, FontWeight::Regular);
        let height = measured_height(lines.len(), 0.25);
        assert!((height - lines.len() as f32 * 0.25).abs() < 1e-6);
        assert!(height >= 0.5, "expected at least two wrapped lines");
    }
}
