//! Deterministic text flow.
//!
//! Wraps a text string into width-bounded lines using measured Helvetica
//! advances, with no rendering involved: the same `(text, width, size,
//! weight)` always yields the same line sequence, which is what makes
//! composed layouts reproducible and testable.

use crate::metrics::{self, FontWeight};

/// Bullet glyph prefix applied to the first line of a point.
pub const BULLET_PREFIX: &str = "\u{2022} ";

/// Wrap `text` into lines no wider than `max_width` (layout inches).
///
/// Splits on whitespace; a line accumulates words while the measured width
/// stays within budget, and a single word wider than the budget stands alone
/// on its own line (no mid-word hyphenation). Whitespace runs collapse to
/// single spaces, so re-joining the returned lines with spaces reproduces the
/// whitespace-normalized input.
pub fn wrap(text: &str, max_width: f32, size_pt: f32, weight: FontWeight) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0;
    let space_width = width_in(" ", size_pt, weight);

    for word in text.split_whitespace() {
        let word_width = width_in(word, size_pt, weight);

        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + space_width + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += space_width + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Wrap one bullet point, prefixing the glyph to the first line only.
///
/// The glyph and its trailing space count toward the first line's width
/// budget; continuation lines are never re-prefixed.
pub fn wrap_point(point: &str, max_width: f32, size_pt: f32, weight: FontWeight) -> Vec<String> {
    let mut text = String::with_capacity(BULLET_PREFIX.len() + point.len());
    text.push_str(BULLET_PREFIX);
    text.push_str(point);
    wrap(&text, max_width, size_pt, weight)
}

/// Vertical extent of a rendered text block, in layout inches.
///
/// `line_advance` is the fixed per-line advance the resolved style carries
/// (nominal font size times its spacing factor, pre-converted to inches).
pub fn measured_height(line_count: usize, line_advance: f32) -> f32 {
    line_count as f32 * line_advance
}

/// Measured width of `text` in layout inches.
pub fn width_in(text: &str, size_pt: f32, weight: FontWeight) -> f32 {
    metrics::text_width(text, size_pt, weight) / 72.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "The quick brown fox jumps over the lazy dog near the riverbank";

    #[test]
    fn test_lines_respect_width_budget() {
        let lines = wrap(SAMPLE, 1.5, 14.0, FontWeight::Regular);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(
                width_in(line, 14.0, FontWeight::Regular) <= 1.5,
                "line too wide: {line:?}"
            );
        }
    }

    #[test]
    fn test_rejoin_reproduces_normalized_text() {
        let messy = "  spaced   out\ttext \n across lines ";
        let lines = wrap(messy, 1.0, 14.0, FontWeight::Regular);
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, "spaced out text across lines");
    }

    #[test]
    fn test_overlong_word_stands_alone() {
        let lines = wrap("a Pneumonoultramicroscopicsilicovolcanoconiosis b", 0.5, 14.0, FontWeight::Regular);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "Pneumonoultramicroscopicsilicovolcanoconiosis");
        assert!(width_in(&lines[1], 14.0, FontWeight::Regular) > 0.5);
    }

    #[test]
    fn test_single_short_text_is_one_line() {
        let lines = wrap("Hello world", 9.0, 24.0, FontWeight::Bold);
        assert_eq!(lines, vec!["Hello world"]);
    }

    #[test]
    fn test_empty_text_has_no_lines() {
        assert!(wrap("", 4.0, 16.0, FontWeight::Regular).is_empty());
        assert!(wrap("   ", 4.0, 16.0, FontWeight::Regular).is_empty());
    }

    #[test]
    fn test_bullet_on_first_line_only() {
        let point = "A very long bullet point that definitely needs wrapping across multiple lines at the given width";
        let lines = wrap_point(point, 2.0, 14.0, FontWeight::Regular);
        assert!(lines.len() >= 2);
        assert!(lines[0].starts_with('\u{2022}'));
        for line in &lines[1..] {
            assert!(!line.contains('\u{2022}'));
        }
    }

    #[test]
    fn test_wrap_is_deterministic() {
        let a = wrap(SAMPLE, 2.3, 16.0, FontWeight::Regular);
        let b = wrap(SAMPLE, 2.3, 16.0, FontWeight::Regular);
        assert_eq!(a, b);
    }

    #[test]
    fn test_measured_height() {
        assert_eq!(measured_height(3, 0.35), 1.05);
        assert_eq!(measured_height(0, 0.5), 0.0);
    }
}
