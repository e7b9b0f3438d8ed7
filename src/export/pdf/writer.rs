//! PDF document assembly.
//!
//! Collects pages, image XObjects, and graphics states, then serializes the
//! complete document: header, body objects, xref table, and trailer. Content
//! streams are Flate-compressed; images embed as `DCTDecode` JPEG streams.

use std::io::Write;

use super::content_stream::ContentStreamBuilder;
use crate::error::Result;
use crate::export::media::EmbeddedImage;
use crate::metrics::{postscript_name, FontWeight};

/// Configuration for PDF generation.
#[derive(Debug, Clone)]
pub struct PdfWriterConfig {
    /// PDF version
    pub version: String,
    /// Document title
    pub title: Option<String>,
    /// Producer application
    pub producer: String,
    /// Whether to compress content streams
    pub compress: bool,
}

impl Default for PdfWriterConfig {
    fn default() -> Self {
        Self {
            version: "1.7".to_string(),
            title: None,
            producer: "slidesmith".to_string(),
            compress: true,
        }
    }
}

/// Compress data for a FlateDecode stream.
fn compress_data(data: &[u8]) -> std::io::Result<Vec<u8>> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// A registered image resource.
struct ImageResource {
    name: String,
    image: EmbeddedImage,
}

/// PDF document writer.
///
/// All pages share one fixed size and one resource dictionary (the two
/// Helvetica faces, every registered image, every registered opacity state).
pub struct PdfWriter {
    config: PdfWriterConfig,
    page_width: f32,
    page_height: f32,
    pages: Vec<ContentStreamBuilder>,
    images: Vec<ImageResource>,
    /// (resource name, fill alpha)
    gstates: Vec<(String, f32)>,
}

impl PdfWriter {
    /// Create a writer producing pages of the given size in points.
    pub fn new(page_width: f32, page_height: f32, config: PdfWriterConfig) -> Self {
        Self {
            config,
            page_width,
            page_height,
            pages: Vec::new(),
            images: Vec::new(),
            gstates: Vec::new(),
        }
    }

    /// Start a new page and return its content builder.
    pub fn add_page(&mut self) -> &mut ContentStreamBuilder {
        self.pages.push(ContentStreamBuilder::new());
        self.pages.last_mut().unwrap()
    }

    /// Content builder of the current page, opening the first page if needed.
    pub fn current_page(&mut self) -> &mut ContentStreamBuilder {
        if self.pages.is_empty() {
            self.pages.push(ContentStreamBuilder::new());
        }
        self.pages.last_mut().unwrap()
    }

    /// Register an image for embedding; returns its XObject resource name.
    pub fn register_image(&mut self, image: EmbeddedImage) -> String {
        let name = format!("Im{}", self.images.len() + 1);
        self.images.push(ImageResource {
            name: name.clone(),
            image,
        });
        name
    }

    /// Register a fill-opacity graphics state; returns its resource name.
    ///
    /// States are deduplicated, so repeated overlays share one object.
    pub fn register_opacity(&mut self, alpha: f32) -> String {
        if let Some((name, _)) = self.gstates.iter().find(|(_, a)| (a - alpha).abs() < 1e-6) {
            return name.clone();
        }
        let name = format!("GS{}", self.gstates.len() + 1);
        self.gstates.push((name.clone(), alpha));
        name
    }

    /// Serialize the complete document.
    pub fn finish(self) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        let mut xref: Vec<(u32, usize)> = Vec::new();

        writeln!(output, "%PDF-{}", self.config.version)?;
        output.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");

        // Fixed object ids: catalog 1, pages 2, fonts 3-4, then graphics
        // states, images, per-page pairs, and finally the info object.
        let catalog_id = 1u32;
        let pages_id = 2u32;
        let helvetica_id = 3u32;
        let helvetica_bold_id = 4u32;
        let mut next_id = 5u32;

        let gstate_ids: Vec<u32> = self
            .gstates
            .iter()
            .map(|_| {
                let id = next_id;
                next_id += 1;
                id
            })
            .collect();
        let image_ids: Vec<u32> = self
            .images
            .iter()
            .map(|_| {
                let id = next_id;
                next_id += 1;
                id
            })
            .collect();
        let page_ids: Vec<(u32, u32)> = self
            .pages
            .iter()
            .map(|_| {
                let page_id = next_id;
                let content_id = next_id + 1;
                next_id += 2;
                (page_id, content_id)
            })
            .collect();
        let info_id = next_id;
        next_id += 1;

        // Catalog and page tree.
        xref.push((catalog_id, output.len()));
        writeln!(
            output,
            "{} 0 obj\n<< /Type /Catalog /Pages {} 0 R >>\nendobj",
            catalog_id, pages_id
        )?;

        let kids: Vec<String> = page_ids.iter().map(|(id, _)| format!("{} 0 R", id)).collect();
        xref.push((pages_id, output.len()));
        writeln!(
            output,
            "{} 0 obj\n<< /Type /Pages /Kids [ {} ] /Count {} >>\nendobj",
            pages_id,
            kids.join(" "),
            self.pages.len()
        )?;

        // Base-14 fonts, one per text weight.
        for (id, base) in [
            (helvetica_id, postscript_name(FontWeight::Regular)),
            (helvetica_bold_id, postscript_name(FontWeight::Bold)),
        ] {
            xref.push((id, output.len()));
            writeln!(
                output,
                "{} 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>\nendobj",
                id, base
            )?;
        }

        // Fill-opacity graphics states.
        for (i, (_, alpha)) in self.gstates.iter().enumerate() {
            xref.push((gstate_ids[i], output.len()));
            writeln!(
                output,
                "{} 0 obj\n<< /Type /ExtGState /ca {} >>\nendobj",
                gstate_ids[i], alpha
            )?;
        }

        // Image XObjects.
        for (i, resource) in self.images.iter().enumerate() {
            xref.push((image_ids[i], output.len()));
            writeln!(
                output,
                "{} 0 obj\n<< /Type /XObject /Subtype /Image /Width {} /Height {} /ColorSpace /DeviceRGB /BitsPerComponent 8 /Filter /DCTDecode /Length {} >>\nstream",
                image_ids[i],
                resource.image.width,
                resource.image.height,
                resource.image.jpeg.len()
            )?;
            output.extend_from_slice(&resource.image.jpeg);
            writeln!(output, "\nendstream\nendobj")?;
        }

        // Shared resource dictionary, inlined into each page.
        let resources = self.resource_dict(&gstate_ids, &image_ids);

        // Pages and their content streams.
        for (i, builder) in self.pages.iter().enumerate() {
            let (page_id, content_id) = page_ids[i];

            xref.push((page_id, output.len()));
            writeln!(
                output,
                "{} 0 obj\n<< /Type /Page /Parent {} 0 R /MediaBox [ 0 0 {} {} ] /Contents {} 0 R /Resources {} >>\nendobj",
                page_id, pages_id, self.page_width, self.page_height, content_id, resources
            )?;

            let raw = builder.build()?;
            let (data, filter) = if self.config.compress {
                match compress_data(&raw) {
                    Ok(compressed) => (compressed, " /Filter /FlateDecode"),
                    Err(_) => (raw, ""),
                }
            } else {
                (raw, "")
            };

            xref.push((content_id, output.len()));
            writeln!(
                output,
                "{} 0 obj\n<< /Length {}{} >>\nstream",
                content_id,
                data.len(),
                filter
            )?;
            output.extend_from_slice(&data);
            writeln!(output, "\nendstream\nendobj")?;
        }

        // Document info.
        xref.push((info_id, output.len()));
        let creation = chrono::Utc::now().format("D:%Y%m%d%H%M%SZ");
        write!(output, "{} 0 obj\n<<", info_id)?;
        if let Some(title) = &self.config.title {
            write!(output, " /Title ({})", escape_pdf_string(title))?;
        }
        writeln!(
            output,
            " /Producer ({}) /CreationDate ({}) >>\nendobj",
            escape_pdf_string(&self.config.producer),
            creation
        )?;

        // Cross-reference table and trailer.
        let xref_start = output.len();
        writeln!(output, "xref")?;
        writeln!(output, "0 {}", next_id)?;
        writeln!(output, "0000000000 65535 f ")?;
        xref.sort_by_key(|(id, _)| *id);
        for (_, offset) in &xref {
            writeln!(output, "{:010} 00000 n ", offset)?;
        }
        writeln!(
            output,
            "trailer\n<< /Size {} /Root {} 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF",
            next_id, catalog_id, info_id, xref_start
        )?;

        Ok(output)
    }

    fn resource_dict(&self, gstate_ids: &[u32], image_ids: &[u32]) -> String {
        let mut dict = String::from("<< /Font << /F1 3 0 R /F2 4 0 R >>");
        if !self.images.is_empty() {
            dict.push_str(" /XObject <<");
            for (i, resource) in self.images.iter().enumerate() {
                dict.push_str(&format!(" /{} {} 0 R", resource.name, image_ids[i]));
            }
            dict.push_str(" >>");
        }
        if !self.gstates.is_empty() {
            dict.push_str(" /ExtGState <<");
            for (i, (name, _)) in self.gstates.iter().enumerate() {
                dict.push_str(&format!(" /{} {} 0 R", name, gstate_ids[i]));
            }
            dict.push_str(" >>");
        }
        dict.push_str(" >>");
        dict
    }
}

fn escape_pdf_string(s: &str) -> String {
    s.chars()
        .flat_map(|c| match c {
            '(' => vec!['\\', '('],
            ')' => vec!['\\', ')'],
            '\\' => vec!['\\', '\\'],
            other => vec![other],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_jpeg() -> EmbeddedImage {
        let mut buf = std::io::Cursor::new(Vec::new());
        let img = image::RgbImage::from_pixel(2, 2, image::Rgb([0, 0, 255]));
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut buf, image::ImageOutputFormat::Jpeg(90))
            .unwrap();
        EmbeddedImage {
            width: 2,
            height: 2,
            jpeg: buf.into_inner(),
        }
    }

    #[test]
    fn test_header_and_trailer() {
        let mut writer = PdfWriter::new(720.0, 405.0, PdfWriterConfig::default());
        writer.add_page().text("Hi", "F1", 12.0, 10.0, 10.0);
        let bytes = writer.finish().unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
        let tail = String::from_utf8_lossy(&bytes[bytes.len().saturating_sub(200)..]).to_string();
        assert!(tail.contains("trailer"));
        assert!(tail.trim_end().ends_with("%%EOF"));
    }

    #[test]
    fn test_page_count_matches() {
        let mut writer = PdfWriter::new(720.0, 405.0, PdfWriterConfig::default());
        writer.add_page();
        writer.add_page();
        writer.add_page();
        let bytes = writer.finish().unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Count 3"));
    }

    #[test]
    fn test_image_embeds_as_dctdecode() {
        let mut writer = PdfWriter::new(720.0, 405.0, PdfWriterConfig::default());
        let name = writer.register_image(tiny_jpeg());
        writer.add_page().draw_image(&name, 0.0, 0.0, 100.0, 100.0);
        let bytes = writer.finish().unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Filter /DCTDecode"));
        assert!(text.contains("/XObject << /Im1"));
    }

    #[test]
    fn test_opacity_states_are_deduplicated() {
        let mut writer = PdfWriter::new(720.0, 405.0, PdfWriterConfig::default());
        let a = writer.register_opacity(0.7);
        let b = writer.register_opacity(0.7);
        let c = writer.register_opacity(0.4);
        assert_eq!(a, b);
        assert_ne!(a, c);
        writer.add_page();
        let text = String::from_utf8_lossy(&writer.finish().unwrap()).to_string();
        assert!(text.contains("/ca 0.7"));
        assert!(text.contains("/ca 0.4"));
    }

    #[test]
    fn test_title_is_escaped() {
        let config = PdfWriterConfig {
            title: Some("Q3 (draft)".to_string()),
            ..Default::default()
        };
        let mut writer = PdfWriter::new(720.0, 405.0, config);
        writer.add_page();
        let text = String::from_utf8_lossy(&writer.finish().unwrap()).to_string();
        assert!(text.contains(r"/Title (Q3 \(draft\))"));
    }
}
