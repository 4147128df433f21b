mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

mod content;
pub use content::*;

mod font;
pub use font::*;

mod format;
pub use format::*;

/// Breaking text into lines and positioning those lines within a box
pub mod layout;

mod rect;
pub use rect::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

#[cfg(test)]
mod testing;

/// Re-export PDF-writer functionality, mostly for assembling the rest of a document around
/// a [PdfCanvas] content stream
pub use pdf_writer;
