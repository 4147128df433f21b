use super::word::{Metrics, Word};
use crate::canvas::{Canvas, CanvasGuard, TextBaseline};
use crate::format::ResolvedFormat;
use crate::units::Px;
use std::collections::HashMap;

/// How vertical metrics are derived for every measurement made through one cache
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum MetricsMode {
    /// The surface reports font-wide ascent and descent
    Font,
    /// The surface doesn't; ascent is approximated by the ascent of an "M" in the same
    /// font and descent is zero
    Derived,
}

/// Memoized measurements, keyed by the text and the font shorthand it was measured with.
///
/// A cache may be kept across layouts but must be [cleared](MeasureCache::clear) whenever
/// the fonts available to the surface change.
#[derive(Debug, Default)]
pub struct MeasureCache {
    entries: HashMap<(String, String), Metrics>,
    em_ascents: HashMap<String, Px>,
    mode: Option<MetricsMode>,
}

impl MeasureCache {
    pub fn new() -> MeasureCache {
        MeasureCache::default()
    }

    /// Forget every measurement
    pub fn clear(&mut self) {
        self.entries.clear();
        self.em_ascents.clear();
        self.mode = None;
    }

    /// Number of distinct (text, font) pairs measured
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Measures words on a [Canvas], leaving the canvas state as it found it, and without
/// asking the canvas twice about the same text in the same font.
pub struct Measurer<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
    cache: &'a mut MeasureCache,
    base: ResolvedFormat,
}

impl<'a, C: Canvas + ?Sized> Measurer<'a, C> {
    /// `base` is the format words without their own formatting are measured with
    pub fn new(canvas: &'a mut C, cache: &'a mut MeasureCache, base: ResolvedFormat) -> Self {
        Measurer {
            canvas,
            cache,
            base,
        }
    }

    pub fn base(&self) -> &ResolvedFormat {
        &self.base
    }

    /// The full format a word is rendered with
    pub fn resolve(&self, word: &Word) -> ResolvedFormat {
        match &word.format {
            Some(format) => format.resolve(&self.base),
            None => self.base.clone(),
        }
    }

    /// Measure `text` rendered in `format`
    pub fn measure(&mut self, text: &str, format: &ResolvedFormat) -> Metrics {
        let key = (text.to_string(), format.font());
        if let Some(metrics) = self.cache.entries.get(&key) {
            log::trace!("measure cache hit for {:?} in {:?}", key.0, key.1);
            return *metrics;
        }

        log::trace!("measuring {:?} in {:?}", key.0, key.1);
        let metrics = self.measure_uncached(&key.0, &key.1);
        self.cache.entries.insert(key, metrics);
        metrics
    }

    /// Measure a word, reusing the metrics already attached to it if there are any, and
    /// attaching them if not
    pub fn measure_word(&mut self, word: &mut Word) -> Metrics {
        if let Some(metrics) = word.metrics {
            return metrics;
        }
        let format = self.resolve(word);
        let metrics = self.measure(&word.text, &format);
        word.metrics = Some(metrics);
        metrics
    }

    /// Measure every word, returning their combined width
    pub fn measure_words(&mut self, words: &mut [Word]) -> Px {
        words.iter_mut().map(|word| self.measure_word(word).width).sum()
    }

    /// Height of a line of text in the base format
    pub fn line_height(&mut self) -> Px {
        let base = self.base.clone();
        self.measure("M", &base).height()
    }

    fn measure_uncached(&mut self, text: &str, font: &str) -> Metrics {
        let raw = {
            let mut canvas = CanvasGuard::new(&mut *self.canvas);
            canvas.set_font(font);
            canvas.set_text_baseline(TextBaseline::Alphabetic);
            canvas.measure_text(text)
        };

        // the first measurement decides for every later one, so heights stay comparable
        let mode = *self.cache.mode.get_or_insert_with(|| {
            if raw.font_ascent.is_some() && raw.font_descent.is_some() {
                MetricsMode::Font
            } else {
                log::warn!("canvas does not report font ascent/descent, approximating");
                MetricsMode::Derived
            }
        });

        match mode {
            MetricsMode::Font => Metrics {
                width: raw.width,
                ascent: raw.font_ascent.unwrap_or(raw.actual_ascent),
                descent: raw.font_descent.unwrap_or_default(),
            },
            MetricsMode::Derived => Metrics {
                width: raw.width,
                ascent: self.em_ascent(font),
                descent: Px::ZERO,
            },
        }
    }

    fn em_ascent(&mut self, font: &str) -> Px {
        if let Some(ascent) = self.cache.em_ascents.get(font) {
            return *ascent;
        }
        let ascent = {
            let mut canvas = CanvasGuard::new(&mut *self.canvas);
            canvas.set_font(font);
            canvas.set_text_baseline(TextBaseline::Alphabetic);
            canvas.measure_text("M").actual_ascent
        };
        self.cache.em_ascents.insert(font.to_string(), ascent);
        ascent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::TextFormat;
    use crate::testing::GridCanvas;

    fn base() -> ResolvedFormat {
        TextFormat::new().size(20.0).clone().resolve_default()
    }

    #[test]
    fn measures_with_font_metrics() {
        let mut canvas = GridCanvas::new();
        let mut cache = MeasureCache::new();
        let mut measurer = Measurer::new(&mut canvas, &mut cache, base());
        let metrics = measurer.measure("hello", &base());
        assert_eq!(metrics.width, Px(50.0));
        assert_eq!(metrics.ascent, Px(16.0));
        assert_eq!(metrics.descent, Px(4.0));
        assert_eq!(metrics.height(), Px(20.0));
    }

    #[test]
    fn same_text_and_format_is_measured_once() {
        let mut canvas = GridCanvas::new();
        let mut cache = MeasureCache::new();
        {
            let mut measurer = Measurer::new(&mut canvas, &mut cache, base());
            let mut words = vec![Word::new("cat"), Word::new("cat"), Word::new("dog")];
            measurer.measure_words(&mut words);
            assert!(words.iter().all(|w| w.metrics.is_some()));
        }
        assert_eq!(canvas.measure_calls, 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn different_formats_are_measured_separately() {
        let mut canvas = GridCanvas::new();
        let mut cache = MeasureCache::new();
        let mut measurer = Measurer::new(&mut canvas, &mut cache, base());
        let mut small = Word::new("cat");
        let mut big = Word::formatted("cat", TextFormat::new().size(40.0).clone());
        assert_eq!(measurer.measure_word(&mut small).width, Px(30.0));
        assert_eq!(measurer.measure_word(&mut big).width, Px(60.0));
        drop(measurer);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn attached_metrics_are_trusted_until_invalidated() {
        let mut canvas = GridCanvas::new();
        let mut cache = MeasureCache::new();
        let mut measurer = Measurer::new(&mut canvas, &mut cache, base());
        let mut word = Word::new("cat");
        word.metrics = Some(Metrics {
            width: Px(1.0),
            ascent: Px(2.0),
            descent: Px(3.0),
        });
        assert_eq!(measurer.measure_word(&mut word).width, Px(1.0));

        word.text = "horse".to_string();
        word.invalidate();
        assert_eq!(measurer.measure_word(&mut word).width, Px(50.0));
    }

    #[test]
    fn leaves_canvas_state_alone() {
        let mut canvas = GridCanvas::new();
        canvas.set_font("bold 99px Courier");
        let mut cache = MeasureCache::new();
        Measurer::new(&mut canvas, &mut cache, base()).measure("x", &base());
        assert_eq!(canvas.font(), "bold 99px Courier");
        assert_eq!(canvas.depth(), 0);
    }

    #[test]
    fn derives_ascent_without_font_metrics() {
        let mut canvas = GridCanvas::without_font_metrics();
        let mut cache = MeasureCache::new();
        let mut measurer = Measurer::new(&mut canvas, &mut cache, base());
        // whitespace has no visible ascent of its own but still gets the em ascent
        let space = measurer.measure(" ", &base());
        let word = measurer.measure("word", &base());
        assert_eq!(space.ascent, Px(14.0));
        assert_eq!(word.ascent, Px(14.0));
        assert_eq!(word.descent, Px::ZERO);
        assert_eq!(measurer.line_height(), Px(14.0));
    }

    #[test]
    fn clearing_forgets_everything() {
        let mut canvas = GridCanvas::new();
        let mut cache = MeasureCache::new();
        Measurer::new(&mut canvas, &mut cache, base()).measure("x", &base());
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
        Measurer::new(&mut canvas, &mut cache, base()).measure("x", &base());
        assert_eq!(canvas.measure_calls, 2);
    }
}
