//! The capabilities a host drawing surface lends to the layout engine.
//!
//! Layout only ever *measures* through a [Canvas]; painting goes through the separate
//! [Paint] trait so that surfaces which can't draw (or callers who want to draw the
//! [RenderSpec](crate::layout::RenderSpec) themselves) only have to implement measurement.

use crate::colour::Colour;
use crate::rect::Rect;
use crate::units::Px;
use crate::LayoutError;
use std::ops::{Deref, DerefMut};

/// Horizontal anchoring of text drawn at an x-coordinate
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Which part of the text sits on the y-coordinate it is drawn at
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum TextBaseline {
    /// The top of the font's ascent
    Top,
    Middle,
    #[default]
    Alphabetic,
    /// The bottom of the font's descent
    Bottom,
}

/// What a surface reports for a run of text under its current font
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct TextMetrics {
    /// Advance width of the whole run
    pub width: Px,
    /// Ascent of the font (not of the glyphs in the run), if the surface knows it
    pub font_ascent: Option<Px>,
    /// Descent of the font as a positive distance below the baseline, if the surface
    /// knows it
    pub font_descent: Option<Px>,
    /// Distance from the baseline to the top of the tallest glyph actually in the run
    pub actual_ascent: Px,
}

/// A drawing surface that can measure text. Font, alignment, and baseline are mutable
/// state on the surface, the way 2D canvas APIs work, and [Canvas::save] /
/// [Canvas::restore] snapshot that state on a stack.
///
/// Prefer [CanvasGuard] over calling `save`/`restore` directly.
pub trait Canvas {
    /// The current font shorthand, see [ResolvedFormat::font](crate::ResolvedFormat::font)
    fn font(&self) -> &str;
    fn set_font(&mut self, font: &str);

    fn text_align(&self) -> TextAlign;
    fn set_text_align(&mut self, align: TextAlign);

    fn text_baseline(&self) -> TextBaseline;
    fn set_text_baseline(&mut self, baseline: TextBaseline);

    /// Push the current font, alignment, and baseline
    fn save(&mut self);
    /// Pop the most recently saved state, if any
    fn restore(&mut self);

    /// Measure `text` using the current font
    fn measure_text(&mut self, text: &str) -> TextMetrics;
}

/// A surface that can also draw. Coordinates follow the surface's current alignment and
/// baseline settings.
pub trait Paint: Canvas {
    fn set_fill_colour(&mut self, colour: Colour);
    fn fill_text(&mut self, text: &str, x: Px, y: Px) -> Result<(), LayoutError>;
    fn stroke_rect(&mut self, rect: Rect, colour: Colour);
    fn stroke_line(&mut self, from: (Px, Px), to: (Px, Px), colour: Colour);
}

/// Saves the canvas state when created and restores it when dropped, so every path out of
/// a scope (including `?` and early returns) leaves the caller's state untouched.
pub struct CanvasGuard<'c, C: Canvas + ?Sized> {
    canvas: &'c mut C,
}

impl<'c, C: Canvas + ?Sized> CanvasGuard<'c, C> {
    pub fn new(canvas: &'c mut C) -> Self {
        canvas.save();
        CanvasGuard { canvas }
    }
}

impl<C: Canvas + ?Sized> Deref for CanvasGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> DerefMut for CanvasGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> Drop for CanvasGuard<'_, C> {
    fn drop(&mut self) {
        self.canvas.restore();
    }
}
