//! Deterministic surfaces for unit tests.

use crate::canvas::{Canvas, Paint, TextAlign, TextBaseline, TextMetrics};
use crate::colour::Colour;
use crate::format::{FontSpec, DEFAULT_FONT_SIZE};
use crate::rect::Rect;
use crate::units::Px;
use crate::LayoutError;

#[derive(Debug, Clone, PartialEq)]
struct State {
    font: String,
    align: TextAlign,
    baseline: TextBaseline,
}

/// Something [GridCanvas] was asked to paint
#[derive(Debug, Clone, PartialEq)]
pub enum Painted {
    Text {
        text: String,
        x: Px,
        y: Px,
        font: String,
        colour: Colour,
        align: TextAlign,
        baseline: TextBaseline,
    },
    Rect(Rect),
    Line((Px, Px), (Px, Px)),
}

/// A fake surface where every character advances `size / 2`, except U+200A which
/// advances `size / 20`. Fonts have an ascent of `0.8 * size` and a descent of
/// `0.2 * size`; any visible glyph rises `0.7 * size` above the baseline.
///
/// At size 20 that is 10 per character, 1 per hair space, and lines 20 tall.
pub struct GridCanvas {
    state: State,
    stack: Vec<State>,
    fill: Colour,
    /// When false, measurements omit font-wide ascent and descent
    pub font_metrics: bool,
    /// Number of times `measure_text` has been called
    pub measure_calls: usize,
    pub painted: Vec<Painted>,
}

impl GridCanvas {
    pub fn new() -> GridCanvas {
        GridCanvas {
            state: State {
                font: "10px sans-serif".to_string(),
                align: TextAlign::Left,
                baseline: TextBaseline::Alphabetic,
            },
            stack: Vec::new(),
            fill: Colour::default(),
            font_metrics: true,
            measure_calls: 0,
            painted: Vec::new(),
        }
    }

    /// A surface that can't report font-wide metrics
    pub fn without_font_metrics() -> GridCanvas {
        GridCanvas {
            font_metrics: false,
            ..GridCanvas::new()
        }
    }

    /// How many saved states are on the stack
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The texts painted so far, in order
    pub fn painted_text(&self) -> Vec<&str> {
        self.painted
            .iter()
            .filter_map(|p| match p {
                Painted::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn size(&self) -> f32 {
        FontSpec::parse(&self.state.font)
            .map(|spec| spec.size)
            .unwrap_or(DEFAULT_FONT_SIZE)
    }
}

impl Canvas for GridCanvas {
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
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn measure_text(&mut self, text: &str) -> TextMetrics {
        self.measure_calls += 1;
        let size = self.size();
        let width: f32 = text
            .chars()
            .map(|ch| if ch == '\u{200a}' { size / 20.0 } else { size / 2.0 })
            .sum();
        let visible = text.chars().any(|ch| !ch.is_whitespace());
        TextMetrics {
            width: Px(width),
            font_ascent: self.font_metrics.then(|| Px(size * 4.0 / 5.0)),
            font_descent: self.font_metrics.then(|| Px(size / 5.0)),
            actual_ascent: if visible {
                Px(size * 7.0 / 10.0)
            } else {
                Px::ZERO
            },
        }
    }
}

impl Paint for GridCanvas {
    fn set_fill_colour(&mut self, colour: Colour) {
        self.fill = colour;
    }

    fn fill_text(&mut self, text: &str, x: Px, y: Px) -> Result<(), LayoutError> {
        self.painted.push(Painted::Text {
            text: text.to_string(),
            x,
            y,
            font: self.state.font.clone(),
            colour: self.fill,
            align: self.state.align,
            baseline: self.state.baseline,
        });
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, _colour: Colour) {
        self.painted.push(Painted::Rect(rect));
    }

    fn stroke_line(&mut self, from: (Px, Px), to: (Px, Px), _colour: Colour) {
        self.painted.push(Painted::Line(from, to));
    }
}
