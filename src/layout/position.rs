use super::word::Word;
use crate::canvas::{TextAlign, TextBaseline};
use crate::format::ResolvedFormat;
use crate::rect::Rect;
use crate::units::Px;

/// Horizontal alignment of each line within the box
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical alignment of the block of lines within the box
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// A word along with where to draw it. Coordinates are absolute, on the same surface as
/// the layout box.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedWord {
    /// The word, with its metrics attached
    pub word: Word,
    /// The complete format used to measure the word, if it had a format of its own. Use
    /// this rather than `word.format` when drawing; [None] means the base format.
    pub format: Option<ResolvedFormat>,
    /// Left edge
    pub x: Px,
    /// Top of the word's extent; draw with [TextBaseline::Top]
    pub y: Px,
    pub width: Px,
    pub height: Px,
    /// Whitespace takes up room on the line but doesn't need to be drawn
    pub is_whitespace: bool,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PositionedLine {
    pub words: Vec<PositionedWord>,
    /// Left edge of the first word
    pub x: Px,
    /// Top of the line
    pub y: Px,
    pub width: Px,
    pub height: Px,
}

/// A finished layout
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSpec {
    pub lines: Vec<PositionedLine>,
    /// Total height of all lines
    pub height: Px,
    /// Baseline to set on the surface before drawing words at their coordinates
    pub baseline: TextBaseline,
    /// Alignment to set on the surface before drawing words at their coordinates
    pub align: TextAlign,
}

impl Default for RenderSpec {
    fn default() -> Self {
        RenderSpec::empty()
    }
}

impl RenderSpec {
    /// A layout with nothing in it and no height
    pub fn empty() -> RenderSpec {
        RenderSpec {
            lines: Vec::new(),
            height: Px::ZERO,
            baseline: TextBaseline::Top,
            align: TextAlign::Left,
        }
    }

    /// Iterates every word that actually needs drawing
    pub fn visible_words(&self) -> impl Iterator<Item = &PositionedWord> {
        self.lines
            .iter()
            .flat_map(|line| line.words.iter())
            .filter(|word| !word.is_whitespace)
    }
}

/// Where and how to place wrapped lines
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub bounds: Rect,
    pub align: Align,
    pub vertical_align: VerticalAlign,
    /// Forces every line to this height instead of the height of its tallest word
    pub line_height: Option<Px>,
    /// Height of lines with no words in them, when `line_height` isn't forced
    pub empty_line_height: Px,
}

/// Positions measured, wrapped lines within `placement.bounds`.
///
/// Each line is as tall as its tallest word and is aligned within the box width on its own.
/// Each word is centred vertically within its line so mixed sizes share a centre line.
/// The block of lines is aligned within the box height but never clipped by it.
pub fn position_lines(
    lines: Vec<Vec<Word>>,
    base: &ResolvedFormat,
    placement: &Placement,
) -> RenderSpec {
    let bounds = placement.bounds;

    let heights: Vec<Px> = lines
        .iter()
        .map(|line| match placement.line_height {
            Some(height) => height,
            None if line.is_empty() => placement.empty_line_height,
            None => line
                .iter()
                .map(|word| word.metrics.unwrap_or_default().height())
                .fold(Px::ZERO, Px::max),
        })
        .collect();
    let total_height: Px = heights.iter().copied().sum();

    let mut y = match placement.vertical_align {
        VerticalAlign::Top => bounds.y,
        VerticalAlign::Middle => bounds.y + (bounds.height - total_height) / 2.0,
        VerticalAlign::Bottom => bounds.y2() - total_height,
    };

    let mut positioned: Vec<PositionedLine> = Vec::with_capacity(lines.len());
    for (line, height) in lines.into_iter().zip(heights) {
        let width: Px = line
            .iter()
            .map(|word| word.metrics.unwrap_or_default().width)
            .sum();
        let x0 = match placement.align {
            Align::Left => bounds.x,
            Align::Center => bounds.x + (bounds.width - width) / 2.0,
            Align::Right => bounds.x2() - width,
        };

        let mut x = x0;
        let words = line
            .into_iter()
            .map(|word| {
                let metrics = word.metrics.unwrap_or_default();
                let placed = PositionedWord {
                    format: word.format.as_ref().map(|format| format.resolve(base)),
                    x,
                    y: y + (height - metrics.height()) / 2.0,
                    width: metrics.width,
                    height: metrics.height(),
                    is_whitespace: word.is_whitespace(),
                    word,
                };
                x += metrics.width;
                placed
            })
            .collect();

        positioned.push(PositionedLine {
            words,
            x: x0,
            y,
            width,
            height,
        });
        y += height;
    }

    RenderSpec {
        lines: positioned,
        height: total_height,
        baseline: TextBaseline::Top,
        align: TextAlign::Left,
    }
}
