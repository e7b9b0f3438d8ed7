//! Export entry points and shared media handling.
//!
//! Both artifact formats are driven by the same composed instruction stream;
//! the adapters differ only in how they realize it. An adapter failure
//! surfaces as `Err` and no partial artifact escapes.

pub mod media;
pub mod pdf;
pub mod pptx;

use log::info;

use crate::compose::compose;
use crate::error::Result;
use crate::model::{Settings, Slide};

/// Export the slide collection as a PPTX slide deck.
pub fn export_pptx(slides: &[Slide], settings: Settings) -> Result<Vec<u8>> {
    let ops = compose(slides, settings);
    let bytes = pptx::render(slides, &ops)?;
    info!("exported {} slides as PPTX ({} bytes)", slides.len(), bytes.len());
    Ok(bytes)
}

/// Export the slide collection as a fixed-page PDF.
pub fn export_pdf(slides: &[Slide], settings: Settings) -> Result<Vec<u8>> {
    let ops = compose(slides, settings);
    let bytes = pdf::render(slides, &ops)?;
    info!("exported {} slides as PDF ({} bytes)", slides.len(), bytes.len());
    Ok(bytes)
}
