//! A [Canvas] that measures with real font files and paints into a PDF content stream.

use crate::canvas::{Canvas, Paint, TextAlign, TextBaseline, TextMetrics};
use crate::colour::Colour;
use crate::font::{Font, FontBook};
use crate::format::{FontSpec, DEFAULT_FONT_SIZE};
use crate::rect::Rect;
use crate::units::Px;
use crate::LayoutError;
use id_arena::Id;
use pdf_writer::{Content, Name, Str};

#[derive(Debug, Clone, PartialEq)]
struct State {
    font: String,
    align: TextAlign,
    baseline: TextBaseline,
    fill: Colour,
}

/// A saved [State], plus whether a `q` has been written for it yet
#[derive(Debug, Clone)]
struct Saved {
    state: State,
    opened: bool,
}

/// Draws onto a single PDF page `page_height` points tall. Surface coordinates have
/// their origin at the top-left of the page with y growing downwards, and one [Px] is
/// one point.
///
/// Saving and restoring only write `q`/`Q` to the content stream when something in
/// between changes the PDF graphics state, so measuring leaves the stream untouched.
///
/// Text is shown with `/F{index}` font resources, where `index` is the font's index in
/// the [FontBook]; [FontBook::embed] writes fonts under the matching names.
pub struct PdfCanvas<'f> {
    fonts: &'f FontBook,
    page_height: Px,
    content: Content,
    state: State,
    stack: Vec<Saved>,
}

impl<'f> PdfCanvas<'f> {
    pub fn new<H: Into<Px>>(fonts: &'f FontBook, page_height: H) -> PdfCanvas<'f> {
        PdfCanvas {
            fonts,
            page_height: page_height.into(),
            content: Content::new(),
            state: State {
                font: format!("{DEFAULT_FONT_SIZE}px sans-serif"),
                align: TextAlign::default(),
                baseline: TextBaseline::default(),
                fill: Colour::default(),
            },
            stack: Vec::new(),
        }
    }

    /// The finished content stream
    pub fn finish(self) -> Vec<u8> {
        self.content.finish()
    }

    fn current_font(&self) -> Option<(Id<Font>, &'f Font, f32)> {
        let spec = FontSpec::parse(&self.state.font)?;
        let (id, font) = self.fonts.select(&spec)?;
        Some((id, font, spec.size))
    }

    /// Writes the `q` for the innermost saved state if it hasn't been written yet. Call
    /// before emitting anything that changes the graphics state.
    fn open_scope(&mut self) {
        if let Some(saved) = self.stack.last_mut() {
            if !saved.opened {
                self.content.save_state();
                saved.opened = true;
            }
        }
    }

    /// Flips a surface y-coordinate into PDF space
    fn flip(&self, y: Px) -> f32 {
        (self.page_height - y).into()
    }

    fn set_stroke_colour(&mut self, colour: Colour) {
        match colour {
            Colour::RGB { r, g, b } => self.content.set_stroke_rgb(r, g, b),
            Colour::CMYK { c, m, y, k } => self.content.set_stroke_cmyk(c, m, y, k),
            Colour::Grey { g } => self.content.set_stroke_gray(g),
        };
    }
}

impl Canvas for PdfCanvas<'_> {
    fn font(&self) -> &str {
        &self.state.font
    }

    fn set_font(&mut self, font: &str) {
        self.state.font = font.to_string();
    }

    fn text_align(&self) -> TextAlign {
        self.state.align
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.state.align = align;
    }

    fn text_baseline(&self) -> TextBaseline {
        self.state.baseline
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.state.baseline = baseline;
    }

    fn save(&mut self) {
        self.stack.push(Saved {
            state: self.state.clone(),
            opened: false,
        });
    }

    fn restore(&mut self) {
        if let Some(saved) = self.stack.pop() {
            if saved.opened {
                self.content.restore_state();
            }
            self.state = saved.state;
        }
    }

    fn measure_text(&mut self, text: &str) -> TextMetrics {
        let Some((_, font, size)) = self.current_font() else {
            log::debug!("no font to measure {text:?} with in {:?}", self.state.font);
            return TextMetrics::default();
        };

        TextMetrics {
            width: font.width_of_text(text, size),
            font_ascent: Some(font.ascent(size)),
            font_descent: Some(font.descent(size)),
            actual_ascent: font.ink_ascent(text, size),
        }
    }
}

impl Paint for PdfCanvas<'_> {
    fn set_fill_colour(&mut self, colour: Colour) {
        if colour == self.state.fill {
            return;
        }
        self.open_scope();
        match colour {
            Colour::RGB { r, g, b } => self.content.set_fill_rgb(r, g, b),
            Colour::CMYK { c, m, y, k } => self.content.set_fill_cmyk(c, m, y, k),
            Colour::Grey { g } => self.content.set_fill_gray(g),
        };
        self.state.fill = colour;
    }

    fn fill_text(&mut self, text: &str, x: Px, y: Px) -> Result<(), LayoutError> {
        let (id, font, size) = self
            .current_font()
            .ok_or_else(|| LayoutError::NoFont(self.state.font.clone()))?;

        let mut glyphs: Vec<u8> = Vec::with_capacity(text.len() * 2);
        for ch in text.chars() {
            glyphs.extend(font.glyph_or_fallback(ch)?.to_be_bytes());
        }

        let width = font.width_of_text(text, size);
        let x = match self.state.align {
            TextAlign::Left => x,
            TextAlign::Center => x - width / 2.0,
            TextAlign::Right => x - width,
        };
        let (ascent, descent) = (font.ascent(size), font.descent(size));
        let baseline = match self.state.baseline {
            TextBaseline::Top => y + ascent,
            TextBaseline::Middle => y + (ascent - descent) / 2.0,
            TextBaseline::Alphabetic => y,
            TextBaseline::Bottom => y - descent,
        };

        // the font set by Tf outlives the text object
        self.open_scope();
        let resource = format!("F{}", id.index());
        let flipped = self.flip(baseline);
        self.content
            .begin_text()
            .set_font(Name(resource.as_bytes()), size)
            .next_line(x.into(), flipped)
            .show(Str(&glyphs))
            .end_text();
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, colour: Colour) {
        let pdf = rect.to_pdf(self.page_height);
        self.content.save_state();
        self.set_stroke_colour(colour);
        self.content
            .set_line_width(0.5)
            .rect(pdf.x1, pdf.y1, pdf.x2 - pdf.x1, pdf.y2 - pdf.y1)
            .stroke()
            .restore_state();
    }

    fn stroke_line(&mut self, from: (Px, Px), to: (Px, Px), colour: Colour) {
        let (from_y, to_y) = (self.flip(from.1), self.flip(to.1));
        self.content.save_state();
        self.set_stroke_colour(colour);
        self.content
            .set_line_width(0.5)
            .move_to(from.0.into(), from_y)
            .line_to(to.0.into(), to_y)
            .stroke()
            .restore_state();
    }
}
