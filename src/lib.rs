//! # slidesmith
//!
//! Turns an ordered collection of images, each optionally annotated with an
//! AI-generated title and bullet points, into paginated visual documents.
//! One deterministic composition engine drives two structurally different
//! outputs: a PPTX slide deck and a fixed-page PDF.
//!
//! ## How it fits together
//!
//! - [`model`] holds the immutable inputs: slides, their optional analyzed
//!   content, and the export [`Settings`](model::Settings).
//! - [`compose`] is the engine core: it resolves a layout preset per slide,
//!   flows text into width-bounded lines, and emits an ordered
//!   [`DrawOp`](compose::DrawOp) stream. Paint order in the stream is
//!   semantically load-bearing (image, then overlay, then text).
//! - [`export`] realizes the instruction stream into target bytes; the
//!   adapters carry no layout knowledge of their own.
//! - [`analysis`] specifies the boundary to the external image-analysis
//!   collaborator. The engine never calls it; it only consumes whatever
//!   content is already attached to each slide.
//!
//! ## Quick start
//!
//! ```ignore
//! use slidesmith::model::{Settings, Slide, SlideImage};
//! use slidesmith::export::{export_pdf, export_pptx};
//!
//! # fn main() -> slidesmith::Result<()> {
//! let slides = vec![Slide::new(SlideImage::new(std::fs::read("photo.jpg")?, "image/jpeg"))];
//! let settings = Settings::default();
//! std::fs::write("deck.pptx", export_pptx(&slides, settings)?)?;
//! std::fs::write("deck.pdf", export_pdf(&slides, settings)?)?;
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod compose;
pub mod error;
pub mod export;
pub mod geometry;
pub mod metrics;
pub mod model;

pub use error::{Error, Result};
pub use export::{export_pdf, export_pptx};
