use super::measure::Measurer;
use super::segment::{trim_line, TrimSide};
use super::word::Word;
use crate::canvas::Canvas;
use crate::units::Px;

/// A line of words produced by wrapping
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WrappedLine {
    pub words: Vec<Word>,
    /// True if this is the last line of its hard line, i.e. it is followed by a hard break
    /// or by nothing at all
    pub paragraph_end: bool,
}

/// Splits words into hard lines at every newline. `n` newlines always produce `n + 1` hard
/// lines, some of which may be empty.
pub fn split_hard_lines(words: Vec<Word>) -> Vec<Vec<Word>> {
    let mut lines: Vec<Vec<Word>> = vec![Vec::new()];
    for word in words {
        match word.hard_breaks() {
            0 => {
                if let Some(line) = lines.last_mut() {
                    line.push(word);
                }
            }
            breaks => lines.extend((0..breaks).map(|_| Vec::new())),
        }
    }
    lines
}

/// Breaks words into lines no wider than `box_width`, measuring each word through
/// `measurer` (and attaching the measurements to the words).
///
/// Lines are only ever broken between words where one side is whitespace, unless a single
/// run of visible words is wider than the box on its own. Every line has at least
/// one word, so a word wider than the box gets a line to itself and overflows it. Hard
/// lines that are empty (or all whitespace) become empty lines.
pub fn wrap_words<C: Canvas + ?Sized>(
    words: Vec<Word>,
    box_width: Px,
    measurer: &mut Measurer<'_, C>,
) -> Vec<WrappedLine> {
    let mut lines: Vec<WrappedLine> = Vec::new();
    for hard_line in split_hard_lines(words) {
        let start = lines.len();
        wrap_hard_line(hard_line, box_width, measurer, &mut lines);
        if lines.len() == start {
            lines.push(WrappedLine::default());
        }
        if let Some(last) = lines.last_mut() {
            last.paragraph_end = true;
        }
    }
    lines
}

fn wrap_hard_line<C: Canvas + ?Sized>(
    line: Vec<Word>,
    box_width: Px,
    measurer: &mut Measurer<'_, C>,
    lines: &mut Vec<WrappedLine>,
) {
    let mut remaining = trim(line, TrimSide::Both);
    measurer.measure_words(&mut remaining);

    while !remaining.is_empty() {
        if line_width(&remaining) <= box_width {
            lines.push(WrappedLine {
                words: remaining,
                paragraph_end: false,
            });
            return;
        }

        let split = split_point(&remaining, box_width);
        let rest = remaining.split_off(split);
        lines.push(WrappedLine {
            words: trim(remaining, TrimSide::Right),
            paragraph_end: false,
        });
        remaining = trim(rest, TrimSide::Left);
    }
}

/// Number of leading words to put on the line. Always at least one, and always less than
/// `words.len()` when the words overflow the box.
fn split_point(words: &[Word], box_width: Px) -> usize {
    let prefix: Vec<Px> = words
        .iter()
        .scan(Px::ZERO, |total, word| {
            *total += width(word);
            Some(*total)
        })
        .collect();
    let fits = prefix.partition_point(|&w| w <= box_width).max(1);
    if fits >= words.len() {
        return words.len();
    }

    // back up to a whitespace boundary so visible words stay whole
    let mut split = fits;
    while split > 0 && !words[split - 1].is_whitespace() && !words[split].is_whitespace() {
        split -= 1;
    }
    if split == 0 {
        fits
    } else {
        split
    }
}

fn trim(line: Vec<Word>, side: TrimSide) -> Vec<Word> {
    let trimmed = trim_line(&line, side);
    let (start, len) = (trimmed.left.len(), trimmed.line.len());
    line.into_iter().skip(start).take(len).collect()
}

pub(crate) fn width(word: &Word) -> Px {
    word.metrics.map(|m| m.width).unwrap_or_default()
}

/// Combined width of measured words; unmeasured words count as zero
pub fn line_width(words: &[Word]) -> Px {
    words.iter().map(width).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{ResolvedFormat, TextFormat};
    use crate::layout::measure::MeasureCache;
    use crate::layout::segment::segment;
    use crate::testing::GridCanvas;

    fn base() -> ResolvedFormat {
        TextFormat::new().size(20.0).clone().resolve_default()
    }

    fn wrap(words: Vec<Word>, box_width: f32) -> Vec<WrappedLine> {
        let mut canvas = GridCanvas::new();
        let mut cache = MeasureCache::new();
        let mut measurer = Measurer::new(&mut canvas, &mut cache, base());
        wrap_words(words, Px(box_width), &mut measurer)
    }

    fn strings(lines: &[WrappedLine]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.words.iter().map(|w| w.text.as_str()).collect())
            .collect()
    }

    #[test]
    fn short_text_is_one_line() {
        let lines = wrap(segment("Hello World"), 500.0);
        assert_eq!(strings(&lines), ["Hello World"]);
        assert!(lines[0].paragraph_end);
    }

    #[test]
    fn breaks_every_three_words() {
        let lines = wrap(segment("a b c d e f g h"), 50.0);
        assert_eq!(strings(&lines), ["a b c", "d e f", "g h"]);
        assert_eq!(
            lines.iter().map(|l| l.paragraph_end).collect::<Vec<_>>(),
            [false, false, true]
        );
    }

    #[test]
    fn over_wide_word_gets_its_own_line() {
        let lines = wrap(segment("supercalifragilisticexpialidocious"), 100.0);
        assert_eq!(lines.len(), 1);
        assert!(line_width(&lines[0].words) > Px(100.0));

        let lines = wrap(segment("a supercalifragilisticexpialidocious b"), 100.0);
        assert_eq!(
            strings(&lines),
            ["a", "supercalifragilisticexpialidocious", "b"]
        );
    }

    #[test]
    fn never_splits_inside_a_word_with_a_space_available() {
        let words = vec![
            Word::new("aa"),
            Word::new(" "),
            Word::new("Hel"),
            Word::new("lo"),
        ];
        let lines = wrap(words, 65.0);
        assert_eq!(strings(&lines), ["aa", "Hello"]);
    }

    #[test]
    fn splits_inside_a_word_without_any_space() {
        let words = vec![
            Word::new("Hel"),
            Word::new("lo"),
            Word::new(" "),
            Word::new("wor"),
            Word::new("ld"),
        ];
        let lines = wrap(words, 40.0);
        assert_eq!(strings(&lines), ["Hel", "lo", "wor", "ld"]);
    }

    #[test]
    fn hard_breaks_start_new_lines() {
        let lines = wrap(segment("one\n\ntwo three"), 50.0);
        assert_eq!(strings(&lines), ["one", "", "two", "three"]);
        assert_eq!(
            lines.iter().map(|l| l.paragraph_end).collect::<Vec<_>>(),
            [true, true, false, true]
        );
    }

    #[test]
    fn hard_lines_are_trimmed() {
        let words = vec![
            Word::new("a"),
            Word::new(" \n  "),
            Word::new("b"),
            Word::new("   "),
        ];
        let lines = wrap(words, 100.0);
        assert_eq!(strings(&lines), ["a", "b"]);
    }

    #[test]
    fn whitespace_runs_are_kept_inside_lines() {
        let lines = wrap(segment("a   b    c"), 60.0);
        assert_eq!(strings(&lines), ["a   b", "c"]);
    }

    #[test]
    fn lines_with_several_words_fit() {
        let text = lipsum::lipsum(300);
        for box_width in [35.0, 80.0, 123.0, 400.0] {
            let lines = wrap(segment(&text), box_width);
            assert!(!lines.is_empty());
            for line in &lines {
                assert!(!line.words.is_empty());
                if line.words.len() > 1 {
                    assert!(line_width(&line.words) <= Px(box_width));
                }
                assert!(!line.words[0].is_whitespace());
                assert!(!line.words[line.words.len() - 1].is_whitespace());
            }
        }
    }

    #[test]
    fn wrapping_keeps_every_word_in_order() {
        let text = format!("{}\n{}", lipsum::lipsum(120), lipsum::lipsum(60));
        let words: Vec<String> = text.split_whitespace().map(String::from).collect();
        let lines = wrap(segment(&text), 90.0);
        let wrapped: Vec<String> = lines
            .iter()
            .flat_map(|line| line.words.iter())
            .filter(|w| !w.is_whitespace())
            .map(|w| w.text.clone())
            .collect();
        assert_eq!(wrapped, words);
    }
}
