//! Wrapping, justifying, and positioning text within a box.
//!
//! Text comes in as either a plain string or a list of [Word]s that may each carry
//! their own [TextFormat](crate::TextFormat). It is segmented into words and whitespace,
//! wrapped greedily to the box width, optionally justified with hair spaces, and then
//! positioned into a [RenderSpec] of absolute coordinates. All measurement goes through
//! a [Canvas](crate::Canvas), memoized in a [MeasureCache].
//!
//! # Layout Functions
//!
//! - [`layout_text`] - lays text out, returning where every word goes
//! - [`draw_text`] - lays text out and paints it onto a [Paint](crate::Paint) surface
//! - [`split_text`] - wraps plain text, returning each line as a string
//!
//! A [TextLayout] does the same while keeping its measurements between calls.
//!
//! # Example
//!
//! ```no_run
//! use boxed_text::{Font, FontBook, PdfCanvas, Rect, TextFormat};
//! use boxed_text::layout::{draw_text, Align, Text, TextConfig, VerticalAlign};
//!
//! let bytes = std::fs::read("assets/FiraSans-Regular.ttf").expect("can read font");
//! let mut fonts = FontBook::new();
//! fonts.add(Font::load(bytes).expect("can load font"));
//!
//! let mut canvas = PdfCanvas::new(&fonts, 792);
//! let config = TextConfig::new(Rect::new(72, 72, 468, 200))
//!     .align(Align::Left)
//!     .vertical_align(VerticalAlign::Top)
//!     .justify(true)
//!     .format(TextFormat::new().family("Fira Sans").size(12.0).clone())
//!     .clone();
//!
//! let spec = draw_text(&mut canvas, &Text::from("Hello, world!"), &config)
//!     .expect("can draw text");
//! assert_eq!(spec.lines.len(), 1);
//! let content = canvas.finish();
//! ```

mod config;
mod justify;
mod measure;
mod position;
mod segment;
mod text;
mod word;
mod wrap;

pub use config::*;
pub use justify::*;
pub use measure::*;
pub use position::*;
pub use segment::*;
pub use text::*;
pub use word::*;
pub use wrap::*;
