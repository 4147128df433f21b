use super::position::{Align, VerticalAlign};
use crate::format::TextFormat;
use crate::rect::Rect;
use crate::units::Px;

/// Everything about how a piece of text should be laid out, other than the text itself
#[derive(Debug, Clone, PartialEq)]
pub struct TextConfig {
    /// The box to lay text out in. Its width wraps the text; its height is only used
    /// for vertical alignment and never clips anything.
    pub bounds: Rect,
    /// Defaults to [Align::Center]
    pub align: Align,
    /// Defaults to [VerticalAlign::Middle]
    pub vertical_align: VerticalAlign,
    /// Stretch lines to the full box width. The last line of the text is never
    /// stretched.
    pub justify: bool,
    /// When justifying, whether the last line before a hard break is stretched too.
    /// Defaults to true.
    pub justify_paragraph_ends: bool,
    /// Base format for the text, and for any word that doesn't have its own
    pub format: TextFormat,
    /// Forces every line to this height instead of deriving it from font metrics
    pub line_height: Option<Px>,
    /// For word lists only: insert a space between visible words that have no whitespace
    /// between them. Defaults to true.
    pub infer_whitespace: bool,
    /// Draw the box outline and alignment guides behind the text
    pub debug: bool,
}

impl TextConfig {
    /// Lay text out in `bounds` with the default settings
    pub fn new(bounds: Rect) -> TextConfig {
        TextConfig {
            bounds,
            align: Align::default(),
            vertical_align: VerticalAlign::default(),
            justify: false,
            justify_paragraph_ends: true,
            format: TextFormat::default(),
            line_height: None,
            infer_whitespace: true,
            debug: false,
        }
    }

    /// Set the horizontal alignment, modifying `self`
    pub fn align(&mut self, align: Align) -> &mut Self {
        self.align = align;
        self
    }

    /// Set the vertical alignment, modifying `self`
    pub fn vertical_align(&mut self, vertical_align: VerticalAlign) -> &mut Self {
        self.vertical_align = vertical_align;
        self
    }

    /// Turn justification on or off, modifying `self`
    pub fn justify(&mut self, justify: bool) -> &mut Self {
        self.justify = justify;
        self
    }

    /// Choose whether lines ending a hard line are justified, modifying `self`
    pub fn justify_paragraph_ends(&mut self, justify: bool) -> &mut Self {
        self.justify_paragraph_ends = justify;
        self
    }

    /// Set the base format, modifying `self`
    pub fn format(&mut self, format: TextFormat) -> &mut Self {
        self.format = format;
        self
    }

    /// Force a line height, modifying `self`
    pub fn line_height<P: Into<Px>>(&mut self, line_height: P) -> &mut Self {
        self.line_height = Some(line_height.into());
        self
    }

    /// Turn whitespace inference for word lists on or off, modifying `self`
    pub fn infer_whitespace(&mut self, infer: bool) -> &mut Self {
        self.infer_whitespace = infer;
        self
    }

    /// Turn the debug overlay on or off, modifying `self`
    pub fn debug(&mut self, debug: bool) -> &mut Self {
        self.debug = debug;
        self
    }
}
