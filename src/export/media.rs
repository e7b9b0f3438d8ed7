//! Image preparation for embedding.
//!
//! Both output containers embed JPEG: PDF passes JPEG data straight through
//! as a `DCTDecode` stream, and the deck format stores the same bytes as a
//! media part. Uploads that already are JPEG embed untouched; anything else
//! is decoded and re-encoded once here, so the two adapters always see
//! identical bytes for a given input.

use std::io::Cursor;

use image::io::Reader as ImageReader;

use crate::error::{Error, Result};
use crate::model::SlideImage;

const JPEG_QUALITY: u8 = 85;

/// An image readied for embedding: pixel dimensions plus JPEG bytes.
#[derive(Debug, Clone)]
pub struct EmbeddedImage {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Baseline JPEG data
    pub jpeg: Vec<u8>,
}

/// Prepare a slide image for embedding.
pub fn prepare(image: &SlideImage) -> Result<EmbeddedImage> {
    if is_jpeg(&image.bytes) {
        let (width, height) = ImageReader::new(Cursor::new(&image.bytes))
            .with_guessed_format()?
            .into_dimensions()
            .map_err(|e| Error::Image(e.to_string()))?;
        return Ok(EmbeddedImage {
            width,
            height,
            jpeg: image.bytes.clone(),
        });
    }

    let decoded = image::load_from_memory(&image.bytes)?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut jpeg = Vec::new();
    let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY);
    encoder
        .encode_image(&rgb)
        .map_err(|e| Error::Image(e.to_string()))?;

    Ok(EmbeddedImage { width, height, jpeg })
}

fn is_jpeg(data: &[u8]) -> bool {
    data.len() >= 2 && data[0] == 0xFF && data[1] == 0xD8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(w: u32, h: u32) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        let img = image::RgbImage::from_pixel(w, h, image::Rgb([10, 200, 30]));
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut buf, image::ImageOutputFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    fn jpeg_bytes(w: u32, h: u32) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        let img = image::RgbImage::from_pixel(w, h, image::Rgb([10, 200, 30]));
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut buf, image::ImageOutputFormat::Jpeg(90))
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_png_is_transcoded_to_jpeg() {
        let prepared = prepare(&SlideImage::new(png_bytes(8, 4), "image/png")).unwrap();
        assert_eq!((prepared.width, prepared.height), (8, 4));
        assert!(is_jpeg(&prepared.jpeg));
    }

    #[test]
    fn test_jpeg_passes_through_unchanged() {
        let original = jpeg_bytes(6, 6);
        let prepared = prepare(&SlideImage::new(original.clone(), "image/jpeg")).unwrap();
        assert_eq!(prepared.jpeg, original);
        assert_eq!((prepared.width, prepared.height), (6, 6));
    }

    #[test]
    fn test_garbage_is_an_error() {
        let result = prepare(&SlideImage::new(vec![1, 2, 3, 4], "image/png"));
        assert!(result.is_err());
    }
}
