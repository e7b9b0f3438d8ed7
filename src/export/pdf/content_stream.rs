//! Page content stream generation.
//!
//! Builds the operator sequence for one page: graphics state, rectangle
//! fills, image XObject placement, and text showing. Operators are collected
//! as values and rendered to bytes in one pass, so a page's stream can be
//! compressed or measured as a unit.

use std::io::Write;

use crate::error::Result;

/// A PDF content stream operation.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentOp {
    /// Push graphics state (q)
    SaveState,
    /// Pop graphics state (Q)
    RestoreState,
    /// Concatenate transformation matrix (cm)
    Transform(f32, f32, f32, f32, f32, f32),
    /// Set graphics state from an ExtGState resource (gs)
    SetExtGState(String),
    /// Set fill color in DeviceRGB (rg)
    SetFillColorRgb(f32, f32, f32),
    /// Append rectangle to path (re)
    Rectangle(f32, f32, f32, f32),
    /// Fill current path (f)
    Fill,
    /// Paint a named XObject (Do)
    PaintXObject(String),
    /// Begin text object (BT)
    BeginText,
    /// End text object (ET)
    EndText,
    /// Set font and size (Tf)
    SetFont(String, f32),
    /// Move text position (Td)
    MoveText(f32, f32),
    /// Show a text string (Tj), WinAnsi-encoded
    ShowText(String),
}

/// Builder collecting content stream operations for one page.
#[derive(Debug, Default)]
pub struct ContentStreamBuilder {
    operations: Vec<ContentOp>,
}

impl ContentStreamBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            operations: Vec::new(),
        }
    }

    /// Append a raw operation.
    pub fn op(&mut self, op: ContentOp) -> &mut Self {
        self.operations.push(op);
        self
    }

    /// Push graphics state.
    pub fn save_state(&mut self) -> &mut Self {
        self.op(ContentOp::SaveState)
    }

    /// Pop graphics state.
    pub fn restore_state(&mut self) -> &mut Self {
        self.op(ContentOp::RestoreState)
    }

    /// Set an ExtGState resource by name.
    pub fn set_ext_gstate(&mut self, name: &str) -> &mut Self {
        self.op(ContentOp::SetExtGState(name.to_string()))
    }

    /// Set the fill color.
    pub fn set_fill_color(&mut self, r: f32, g: f32, b: f32) -> &mut Self {
        self.op(ContentOp::SetFillColorRgb(r, g, b))
    }

    /// Fill a rectangle at the given position.
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> &mut Self {
        self.op(ContentOp::Rectangle(x, y, width, height));
        self.op(ContentOp::Fill)
    }

    /// Paint an image XObject scaled into the given rectangle.
    ///
    /// The unit square maps onto `(x, y, width, height)` in page points.
    pub fn draw_image(&mut self, name: &str, x: f32, y: f32, width: f32, height: f32) -> &mut Self {
        self.op(ContentOp::SaveState);
        self.op(ContentOp::Transform(width, 0.0, 0.0, height, x, y));
        self.op(ContentOp::PaintXObject(name.to_string()));
        self.op(ContentOp::RestoreState)
    }

    /// Show one line of text at a baseline position.
    pub fn text(&mut self, text: &str, font: &str, size: f32, x: f32, y: f32) -> &mut Self {
        self.op(ContentOp::BeginText);
        self.op(ContentOp::SetFont(font.to_string(), size));
        self.op(ContentOp::MoveText(x, y));
        self.op(ContentOp::ShowText(text.to_string()));
        self.op(ContentOp::EndText)
    }

    /// Render the collected operations to stream bytes.
    pub fn build(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        for op in &self.operations {
            write_op(&mut buf, op)?;
            writeln!(buf)?;
        }
        Ok(buf)
    }

    /// Number of collected operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

fn write_op<W: Write>(w: &mut W, op: &ContentOp) -> std::io::Result<()> {
    match op {
        ContentOp::SaveState => write!(w, "q"),
        ContentOp::RestoreState => write!(w, "Q"),
        ContentOp::Transform(a, b, c, d, e, f) => {
            write!(w, "{} {} {} {} {} {} cm", a, b, c, d, e, f)
        },
        ContentOp::SetExtGState(name) => write!(w, "/{} gs", name),
        ContentOp::SetFillColorRgb(r, g, b) => write!(w, "{} {} {} rg", r, g, b),
        ContentOp::Rectangle(x, y, width, height) => {
            write!(w, "{} {} {} {} re", x, y, width, height)
        },
        ContentOp::Fill => write!(w, "f"),
        ContentOp::PaintXObject(name) => write!(w, "/{} Do", name),
        ContentOp::BeginText => write!(w, "BT"),
        ContentOp::EndText => write!(w, "ET"),
        ContentOp::SetFont(name, size) => write!(w, "/{} {} Tf", name, size),
        ContentOp::MoveText(x, y) => write!(w, "{} {} Td", x, y),
        ContentOp::ShowText(text) => {
            write!(w, "(")?;
            write_win_ansi_escaped(w, text)?;
            write!(w, ") Tj")
        },
    }
}

/// Write a string as a WinAnsi-encoded PDF literal, escaping delimiters.
///
/// Characters outside WinAnsi degrade to `?` rather than corrupting the
/// stream.
fn write_win_ansi_escaped<W: Write>(w: &mut W, text: &str) -> std::io::Result<()> {
    for ch in text.chars() {
        let byte = win_ansi_byte(ch);
        match byte {
            b'(' | b')' | b'\\' => {
                w.write_all(&[b'\\', byte])?;
            },
            _ => w.write_all(&[byte])?,
        }
    }
    Ok(())
}

/// Map a char to its WinAnsi (CP1252) code point.
fn win_ansi_byte(ch: char) -> u8 {
    let code = ch as u32;
    match code {
        0x20..=0x7E => code as u8,
        0xA0..=0xFF => code as u8,
        _ => match ch {
            '\u{2022}' => 0x95, // bullet
            '\u{2013}' => 0x96, // en dash
            '\u{2014}' => 0x97, // em dash
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2026}' => 0x85, // ellipsis
            '\u{20AC}' => 0x80, // euro
            '\u{2122}' => 0x99, // trademark
            _ => b'?',
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_renders_re_f() {
        let mut builder = ContentStreamBuilder::new();
        builder.set_fill_color(0.0, 0.0, 0.0).fill_rect(0.0, 0.0, 720.0, 142.2);
        let bytes = builder.build().unwrap();
        let stream = String::from_utf8(bytes).unwrap();
        assert!(stream.contains("0 0 0 rg"));
        assert!(stream.contains("0 0 720 142.2 re"));
        assert!(stream.contains("\nf\n"));
    }

    #[test]
    fn test_draw_image_brackets_state() {
        let mut builder = ContentStreamBuilder::new();
        builder.draw_image("Im1", 36.0, 40.5, 324.0, 324.0);
        let stream = String::from_utf8(builder.build().unwrap()).unwrap();
        assert!(stream.starts_with("q\n"));
        assert!(stream.contains("324 0 0 324 36 40.5 cm"));
        assert!(stream.contains("/Im1 Do"));
        assert!(stream.trim_end().ends_with('Q'));
    }

    #[test]
    fn test_text_run() {
        let mut builder = ContentStreamBuilder::new();
        builder.text("Hello", "F2", 24.0, 396.0, 333.0);
        let stream = String::from_utf8(builder.build().unwrap()).unwrap();
        assert!(stream.contains("BT"));
        assert!(stream.contains("/F2 24 Tf"));
        assert!(stream.contains("396 333 Td"));
        assert!(stream.contains("(Hello) Tj"));
        assert!(stream.contains("ET"));
    }

    #[test]
    fn test_parens_are_escaped() {
        let mut builder = ContentStreamBuilder::new();
        builder.text("a(b)c\\d", "F1", 12.0, 0.0, 0.0);
        let bytes = builder.build().unwrap();
        let stream = String::from_utf8_lossy(&bytes);
        assert!(stream.contains(r"(a\(b\)c\\d) Tj"));
    }

    #[test]
    fn test_bullet_encodes_as_winansi() {
        let mut builder = ContentStreamBuilder::new();
        builder.text("\u{2022} point", "F1", 14.0, 0.0, 0.0);
        let bytes = builder.build().unwrap();
        assert!(bytes.windows(2).any(|w| w == [b'(', 0x95]));
    }

    #[test]
    fn test_unmappable_char_degrades() {
        assert_eq!(win_ansi_byte('\u{4E2D}'), b'?');
        assert_eq!(win_ansi_byte('é'), 0xE9);
    }
}
