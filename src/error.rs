//! Error types for slidesmith.
//!
//! One crate-wide error enum covers composition, media handling, and both
//! export backends.

/// Result type alias for slidesmith operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while composing or exporting a deck.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Image data could not be decoded or re-encoded
    #[error("Image error: {0}")]
    Image(String),

    /// Slide content analysis failed
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Export serialization failure (artifact is discarded)
    #[error("Export error: {0}")]
    Export(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP container error while writing the slide-deck package
    #[error("Package error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// XML generation error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// JSON error while reading analysis content
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}
