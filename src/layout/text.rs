use super::config::TextConfig;
use super::justify::{justify_line, HAIR_SPACE};
use super::measure::{MeasureCache, Measurer};
use super::position::{position_lines, Align, Placement, RenderSpec, VerticalAlign};
use super::segment::{infer_whitespace, segment};
use super::word::{Text, Word};
use super::wrap::{wrap_words, WrappedLine};
use crate::canvas::{Canvas, CanvasGuard, Paint};
use crate::colour::colours;
use crate::format::{ResolvedFormat, TextFormat};
use crate::units::Px;
use crate::LayoutError;

/// Lays out text, keeping measurements around between layouts.
///
/// Reusing one `TextLayout` across many layouts on the same surface avoids measuring the
/// same words over and over. Call [TextLayout::invalidate] if the fonts behind the surface
/// change.
#[derive(Debug, Default)]
pub struct TextLayout {
    cache: MeasureCache,
}

impl TextLayout {
    pub fn new() -> TextLayout {
        TextLayout::default()
    }

    /// Measurements made so far
    pub fn cache(&self) -> &MeasureCache {
        &self.cache
    }

    /// Forget all measurements
    pub fn invalidate(&mut self) {
        self.cache.clear();
    }

    /// Wraps, optionally justifies, and positions `text` within `config.bounds`.
    ///
    /// A box with no area, or a base font size that isn't positive, results in an empty
    /// layout with no height.
    pub fn layout<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        text: &Text,
        config: &TextConfig,
    ) -> RenderSpec {
        let base = config.format.resolve_default();
        if !config.bounds.has_area() || base.size <= 0.0 {
            log::debug!(
                "nothing to lay out in {:?} at size {}",
                config.bounds,
                base.size
            );
            return RenderSpec::empty();
        }

        let words = match text {
            Text::Plain(text) => segment(text),
            Text::Words(words) => infer_whitespace(words.clone(), config.infer_whitespace),
        };

        let mut measurer = Measurer::new(canvas, &mut self.cache, base.clone());
        let lines = wrap_and_justify(words, config, &mut measurer);
        let placement = Placement {
            bounds: config.bounds,
            align: config.align,
            vertical_align: config.vertical_align,
            line_height: config.line_height,
            empty_line_height: config
                .line_height
                .unwrap_or_else(|| measurer.line_height()),
        };

        let spec = position_lines(lines, &base, &placement);
        log::debug!(
            "laid out {} lines, {} tall, in {:?}",
            spec.lines.len(),
            spec.height,
            config.bounds
        );
        spec
    }

    /// Lays out `text` like [TextLayout::layout], then paints it, along with the debug
    /// overlay if it is turned on. The canvas state is restored before returning.
    pub fn draw<C: Paint + ?Sized>(
        &mut self,
        canvas: &mut C,
        text: &Text,
        config: &TextConfig,
    ) -> Result<RenderSpec, LayoutError> {
        let spec = self.layout(canvas, text, config);
        let base = config.format.resolve_default();

        let mut canvas = CanvasGuard::new(canvas);
        canvas.set_text_baseline(spec.baseline);
        canvas.set_text_align(spec.align);

        if config.debug && config.bounds.has_area() {
            draw_debug(&mut *canvas, config);
        }

        for word in spec.visible_words() {
            let format = word.format.as_ref().unwrap_or(&base);
            canvas.set_font(&format.font());
            canvas.set_fill_colour(format.colour);
            canvas.fill_text(&word.word.text, word.x, word.y)?;
        }

        Ok(spec)
    }

    /// Wraps (and justifies, if configured) plain text, returning each line as a string.
    /// Fails for word lists, which can't be flattened to strings without losing their
    /// formatting.
    pub fn split<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        text: &Text,
        config: &TextConfig,
    ) -> Result<Vec<String>, LayoutError> {
        let Text::Plain(plain) = text else {
            return Err(LayoutError::UnsupportedInput {
                entry_point: "split_text",
                shape: text.shape(),
            });
        };

        let base = config.format.resolve_default();
        if !config.bounds.has_area() || base.size <= 0.0 {
            return Ok(Vec::new());
        }

        let mut measurer = Measurer::new(canvas, &mut self.cache, base);
        let lines = wrap_and_justify(segment(plain), config, &mut measurer);
        Ok(lines
            .into_iter()
            .map(|line| line.into_iter().map(|word| word.text).collect())
            .collect())
    }
}

fn wrap_and_justify<C: Canvas + ?Sized>(
    words: Vec<Word>,
    config: &TextConfig,
    measurer: &mut Measurer<'_, C>,
) -> Vec<Vec<Word>> {
    let box_width = config.bounds.width;
    let wrapped = wrap_words(words, box_width, measurer);
    if !config.justify {
        return wrapped.into_iter().map(|line| line.words).collect();
    }

    let space = Word::new(HAIR_SPACE);
    let last = wrapped.len().saturating_sub(1);
    wrapped
        .into_iter()
        .enumerate()
        .map(|(i, WrappedLine { words, paragraph_end })| {
            let stretch = i < last && (!paragraph_end || config.justify_paragraph_ends);
            if stretch {
                justify_line(words, box_width, measurer, &space)
            } else {
                words
            }
        })
        .collect()
}

fn draw_debug<C: Paint + ?Sized>(canvas: &mut C, config: &TextConfig) {
    let bounds = config.bounds;
    canvas.stroke_rect(bounds, colours::DEBUG_BOX);

    let anchor = match config.align {
        Align::Left => bounds.x,
        Align::Center => bounds.centre().0,
        Align::Right => bounds.x2(),
    };
    canvas.stroke_line((anchor, bounds.y), (anchor, bounds.y2()), colours::DEBUG_ANCHOR);

    let reference = match config.vertical_align {
        VerticalAlign::Top => bounds.y,
        VerticalAlign::Middle => bounds.centre().1,
        VerticalAlign::Bottom => bounds.y2(),
    };
    canvas.stroke_line(
        (bounds.x, reference),
        (bounds.x2(), reference),
        colours::DEBUG_BASELINE,
    );
}

/// Lays out text once; see [TextLayout::layout]
pub fn layout_text<C: Canvas + ?Sized>(
    canvas: &mut C,
    text: &Text,
    config: &TextConfig,
) -> RenderSpec {
    TextLayout::new().layout(canvas, text, config)
}

/// Lays out and paints text once; see [TextLayout::draw]
pub fn draw_text<C: Paint + ?Sized>(
    canvas: &mut C,
    text: &Text,
    config: &TextConfig,
) -> Result<RenderSpec, LayoutError> {
    TextLayout::new().draw(canvas, text, config)
}

/// Wraps plain text into lines of strings once; see [TextLayout::split]
pub fn split_text<C: Canvas + ?Sized>(
    canvas: &mut C,
    text: &Text,
    config: &TextConfig,
) -> Result<Vec<String>, LayoutError> {
    TextLayout::new().split(canvas, text, config)
}

/// Height (ascent plus descent) of `text` rendered in `format`, without changing the
/// canvas state
pub fn text_height<C: Canvas + ?Sized>(canvas: &mut C, text: &str, format: &TextFormat) -> Px {
    let base = format.resolve_default();
    let mut cache = MeasureCache::new();
    Measurer::new(canvas, &mut cache, base.clone())
        .measure(text, &base)
        .height()
}

/// Height of a word, with its own format resolved against `base`
pub fn word_height<C: Canvas + ?Sized>(canvas: &mut C, word: &Word, base: &TextFormat) -> Px {
    let base: ResolvedFormat = base.resolve_default();
    let mut cache = MeasureCache::new();
    let mut measurer = Measurer::new(canvas, &mut cache, base);
    let format = measurer.resolve(word);
    measurer.measure(&word.text, &format).height()
}
