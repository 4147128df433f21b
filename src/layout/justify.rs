use super::measure::Measurer;
use super::word::Word;
use crate::canvas::Canvas;
use crate::units::Px;

/// U+200A HAIR SPACE, the filler used to stretch lines when justifying
pub const HAIR_SPACE: &str = "\u{200a}";

/// The most hair spaces any one gap is stretched by; lines needing more stay ragged
pub const MAX_SPACES_PER_GAP: usize = 1024;

/// Stretches a line to `box_width` by spacing its visible words apart with copies of
/// `space`.
///
/// The line's own whitespace is dropped and replaced with as many whole copies of `space`
/// as fit in the slack. They are spread evenly over the gaps between words, with any
/// leftovers going to the leftmost gaps, so the widest gaps are never at the end of the
/// line. Nothing is inserted before the first word or after the last.
///
/// Lines with fewer than two visible words, without room for even one `space`, or that
/// would need more than [MAX_SPACES_PER_GAP] in a gap, are returned as they are.
pub fn justify_line<C: Canvas + ?Sized>(
    mut line: Vec<Word>,
    box_width: Px,
    measurer: &mut Measurer<'_, C>,
    space: &Word,
) -> Vec<Word> {
    let word_count = line.iter().filter(|word| !word.is_whitespace()).count();
    if word_count < 2 {
        return line;
    }

    let mut space = space.clone();
    let space_width = measurer.measure_word(&mut space).width;
    if !space_width.is_positive() {
        return line;
    }

    let words_width: Px = line
        .iter_mut()
        .filter(|word| !word.is_whitespace())
        .map(|word| measurer.measure_word(word).width)
        .sum();
    let slack = box_width - words_width;
    let gaps = word_count - 1;
    let spaces = (slack / space_width).floor();
    if !spaces.is_finite() || spaces < 1.0 || spaces > (gaps * MAX_SPACES_PER_GAP) as f32 {
        return line;
    }
    let spaces = spaces as usize;

    let per_gap = spaces / gaps;
    let extra = spaces % gaps;

    line.retain(|word| !word.is_whitespace());
    let mut justified: Vec<Word> = Vec::with_capacity(word_count.saturating_add(spaces));
    for (i, word) in line.into_iter().enumerate() {
        justified.push(word);
        if i < gaps {
            let count = per_gap + usize::from(i < extra);
            justified.extend(std::iter::repeat(&space).take(count).cloned());
        }
    }
    justified
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{ResolvedFormat, TextFormat};
    use crate::layout::measure::MeasureCache;
    use crate::layout::segment::segment;
    use crate::layout::wrap::line_width;
    use crate::testing::GridCanvas;

    fn base() -> ResolvedFormat {
        TextFormat::new().size(20.0).clone().resolve_default()
    }

    fn justify(text: &str, box_width: f32) -> Vec<Word> {
        let mut canvas = GridCanvas::new();
        let mut cache = MeasureCache::new();
        let mut measurer = Measurer::new(&mut canvas, &mut cache, base());
        justify_line(
            segment(text),
            Px(box_width),
            &mut measurer,
            &Word::new(HAIR_SPACE),
        )
    }

    /// Number of hair spaces in each gap between visible words
    fn gaps(line: &[Word]) -> Vec<usize> {
        let mut gaps = Vec::new();
        for word in line {
            if word.text == HAIR_SPACE {
                if let Some(last) = gaps.last_mut() {
                    *last += 1;
                }
            } else {
                gaps.push(0);
            }
        }
        gaps.pop();
        gaps
    }

    #[test]
    fn two_words_share_one_gap() {
        // 30 + 30 of words in a 64 wide box leaves room for 4 hair spaces
        let line = justify("cat dog", 64.0);
        assert_eq!(gaps(&line), [4]);
        assert_eq!(line.first().unwrap().text, "cat");
        assert_eq!(line.last().unwrap().text, "dog");
        assert_eq!(line_width(&line), Px(64.0));
    }

    #[test]
    fn leftovers_go_to_the_leftmost_gaps() {
        // 4 words of 10 in a 51 wide box: 11 hair spaces over 3 gaps
        let line = justify("a b c d", 51.0);
        assert_eq!(gaps(&line), [4, 4, 3]);
        assert!(line_width(&line) <= Px(51.0));
    }

    #[test]
    fn even_slack_is_spread_evenly() {
        let line = justify("a b c d", 49.0);
        assert_eq!(gaps(&line), [3, 3, 3]);
    }

    #[test]
    fn original_whitespace_is_replaced() {
        let line = justify("a    b", 40.0);
        assert!(line.iter().all(|w| w.text != "    "));
        assert_eq!(gaps(&line), [20]);
    }

    #[test]
    fn huge_slack_leaves_the_line_ragged() {
        for width in [1e30, f32::INFINITY] {
            let line = justify("a b", width);
            assert_eq!(line.len(), 3);
            assert_eq!(line[1].text, " ");
        }
    }

    #[test]
    fn slack_up_to_the_limit_is_still_filled() {
        // 20 of words leaves exactly MAX_SPACES_PER_GAP hair spaces of slack
        let line = justify("a b", 20.0 + MAX_SPACES_PER_GAP as f32);
        assert_eq!(gaps(&line), [MAX_SPACES_PER_GAP]);
    }

    #[test]
    fn single_word_is_untouched() {
        let line = justify("alone", 100.0);
        assert_eq!(line.len(), 1);
    }

    #[test]
    fn no_room_for_a_space_is_untouched() {
        let line = justify("cat dog", 60.5);
        assert_eq!(line.len(), 3);
        assert_eq!(line[1].text, " ");
    }

    #[test]
    fn justified_lines_widen_but_fit() {
        let text = "lorem ipsum dolor sit";
        let unjustified = {
            let mut canvas = GridCanvas::new();
            let mut cache = MeasureCache::new();
            let mut measurer = Measurer::new(&mut canvas, &mut cache, base());
            let mut words = segment(text);
            measurer.measure_words(&mut words)
        };
        for box_width in [220.0, 233.0, 301.0] {
            let line = justify(text, box_width);
            let width = line_width(&line);
            assert!(width <= Px(box_width));
            assert!(width > unjustified);
            assert_eq!(line.first().unwrap().text, "lorem");
            assert_eq!(line.last().unwrap().text, "sit");
            assert!(line.iter().all(|w| w.metrics.is_some()));
        }
    }
}
