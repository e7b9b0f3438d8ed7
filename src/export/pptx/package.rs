//! OPC package assembly.
//!
//! A PPTX file is a ZIP archive of XML parts plus media. This writer owns
//! the archive structure; callers add named parts in any order and receive
//! the finished container bytes.

use std::io::{Cursor, Write};

use zip::write::{SimpleFileOptions, ZipWriter};
use zip::CompressionMethod;

use crate::error::Result;

/// Builder for an Open Packaging Conventions archive.
pub struct OpcPackage {
    zip: ZipWriter<Cursor<Vec<u8>>>,
}

impl OpcPackage {
    /// Create a new in-memory package.
    pub fn new() -> Self {
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Add one part under its package path, e.g. `ppt/slides/slide1.xml`.
    pub fn add_part(&mut self, name: &str, data: &[u8]) -> Result<()> {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        self.zip.start_file(name, options)?;
        self.zip.write_all(data)?;
        Ok(())
    }

    /// Finish the archive and return the container bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.zip.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_round_trip_parts() {
        let mut package = OpcPackage::new();
        package.add_part("[Content_Types].xml", b"<Types/>").unwrap();
        package.add_part("ppt/slides/slide1.xml", b"<p:sld/>").unwrap();
        let bytes = package.finish().unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);
        let mut content = String::new();
        archive
            .by_name("ppt/slides/slide1.xml")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "<p:sld/>");
    }
}
