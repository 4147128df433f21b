use super::word::Word;

/// True if `text` is one or more characters, all of them whitespace
pub fn is_whitespace(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_whitespace)
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum CharClass {
    Newline,
    Space,
    Visible,
}

impl CharClass {
    fn of(ch: char) -> CharClass {
        if ch == '\n' {
            CharClass::Newline
        } else if ch.is_whitespace() {
            CharClass::Space
        } else {
            CharClass::Visible
        }
    }
}

/// Splits plain text into words: maximal runs of visible characters, maximal runs of
/// whitespace, and one `"\n"` word per newline. Whitespace on either end of the text is
/// dropped; everything in between is preserved, so concatenating the words gives back
/// the trimmed text.
pub fn segment(text: &str) -> Vec<Word> {
    let text = text.trim();
    let mut words: Vec<Word> = Vec::new();
    let mut start = 0usize;
    let mut class: Option<CharClass> = None;

    for (i, ch) in text.char_indices() {
        let next = CharClass::of(ch);
        match class {
            Some(current) if current == next && next != CharClass::Newline => {}
            Some(_) => {
                words.push(Word::new(&text[start..i]));
                start = i;
            }
            None => {}
        }
        class = Some(next);
    }
    if start < text.len() {
        words.push(Word::new(&text[start..]));
    }

    words
}

/// Prepares caller-supplied words for layout. Empty words are dropped and, if `infer` is
/// set, a single space (in the base format) is inserted between any two visible words that
/// have no whitespace between them.
pub fn infer_whitespace(words: Vec<Word>, infer: bool) -> Vec<Word> {
    let mut out: Vec<Word> = Vec::with_capacity(if infer { words.len() * 2 } else { words.len() });
    for word in words.into_iter().filter(|word| !word.text.is_empty()) {
        if infer
            && !word.is_whitespace()
            && out.last().is_some_and(|prev| !prev.is_whitespace())
        {
            out.push(Word::new(" "));
        }
        out.push(word);
    }
    out
}

/// Which end(s) of a line [trim_line] should trim
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum TrimSide {
    Left,
    Right,
    #[default]
    Both,
}

/// A line split into its leading whitespace, its content, and its trailing whitespace
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrimmedLine<'a> {
    pub left: &'a [Word],
    pub line: &'a [Word],
    pub right: &'a [Word],
}

/// Splits leading and/or trailing whitespace words off a line. A line of nothing but
/// whitespace trims to an empty `line`.
pub fn trim_line(line: &[Word], side: TrimSide) -> TrimmedLine<'_> {
    let start = match side {
        TrimSide::Left | TrimSide::Both => line
            .iter()
            .position(|word| !word.is_whitespace())
            .unwrap_or(line.len()),
        TrimSide::Right => 0,
    };
    let end = match side {
        TrimSide::Right | TrimSide::Both => line
            .iter()
            .rposition(|word| !word.is_whitespace())
            .map(|i| i + 1)
            .unwrap_or(0),
        TrimSide::Left => line.len(),
    };

    if start >= end {
        // all whitespace; attribute it to whichever side was asked for first
        return match side {
            TrimSide::Right => TrimmedLine {
                left: &[],
                line: &[],
                right: line,
            },
            _ => TrimmedLine {
                left: line,
                line: &[],
                right: &[],
            },
        };
    }

    TrimmedLine {
        left: &line[..start],
        line: &line[start..end],
        right: &line[end..],
    }
}
