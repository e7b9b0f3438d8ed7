//! Font metrics for deterministic text measurement.
//!
//! Layout runs without any rasterizer, so line wrapping relies on the
//! Base-14 Helvetica advance widths (1/1000 em units) embedded here. Both
//! output formats render the same two faces, which keeps measured widths
//! honest for PDF and close enough for PPTX viewers substituting Arial.

/// Font weight used by slide text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    /// Regular weight
    #[default]
    Regular,
    /// Bold weight
    Bold,
}

/// PostScript name of the face backing a weight.
pub fn postscript_name(weight: FontWeight) -> &'static str {
    match weight {
        FontWeight::Regular => "Helvetica",
        FontWeight::Bold => "Helvetica-Bold",
    }
}

/// Ascender height above the baseline, in points, at `size_pt`.
///
/// Helvetica's AFM ascender is 718/1000 em for both weights.
pub fn ascent(size_pt: f32) -> f32 {
    718.0 * size_pt / 1000.0
}

/// Calculate the width of a string in points at the given size and weight.
pub fn text_width(text: &str, size_pt: f32, weight: FontWeight) -> f32 {
    let units: f32 = text.chars().map(|c| advance_units(c, weight)).sum();
    units * size_pt / 1000.0
}

/// Advance width of a single character in 1/1000 em units.
///
/// Unknown characters fall back to 500 units.
pub fn advance_units(ch: char, weight: FontWeight) -> f32 {
    // Weight-sensitive characters first; everything else shares one table.
    if weight == FontWeight::Bold {
        match ch {
            ':' => return 333.0,
            'f' => return 333.0,
            'i' | 'j' | 'l' => return 278.0,
            'm' => return 889.0,
            _ => {},
        }
    }

    match ch {
        ' ' | '.' | ',' | ':' | ';' | '/' | '\\' => 278.0,
        '-' | '!' | '(' | ')' | '[' | ']' | '{' | '}' | '`' => 333.0,
        '?' | '^' => 500.0,
        '\'' => 222.0,
        '"' => 400.0,
        '@' => 800.0,
        '#' | '$' | '_' => 556.0,
        '%' => 889.0,
        '&' => 722.0,
        '*' => 389.0,
        '+' | '=' | '<' | '>' | '~' => 584.0,
        '|' => 280.0,
        '0'..='9' => 556.0,

        'A' | 'B' | 'C' | 'D' | 'H' | 'K' | 'N' | 'R' | 'U' => 722.0,
        'E' | 'P' | 'S' | 'V' | 'X' | 'Y' => 667.0,
        'F' | 'L' | 'T' | 'Z' => 611.0,
        'G' | 'O' | 'Q' => 778.0,
        'I' => 278.0,
        'J' => 556.0,
        'M' => 833.0,
        'W' => 944.0,

        'a' | 'c' | 'e' | 'k' | 's' | 'v' | 'x' | 'y' => 556.0,
        'b' | 'd' | 'g' | 'h' | 'n' | 'o' | 'p' | 'q' | 'u' => 611.0,
        'f' => 278.0,
        'i' | 'j' | 'l' => 222.0,
        'm' => 833.0,
        'r' => 389.0,
        't' => 333.0,
        'w' => 778.0,
        'z' => 500.0,

        '\u{2022}' => 350.0, // bullet
        _ => 500.0,
    }
}
