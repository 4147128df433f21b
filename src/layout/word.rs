use crate::format::TextFormat;
use crate::units::Px;

/// Measured extents of a word
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Metrics {
    /// Advance width
    pub width: Px,
    /// Distance from the baseline up to the top of the word's extent
    pub ascent: Px,
    /// Distance from the baseline down to the bottom of the word's extent
    pub descent: Px,
}

impl Metrics {
    /// Full vertical extent of the word
    pub fn height(&self) -> Px {
        self.ascent + self.descent
    }
}

/// The atomic unit of layout: a visible word, a run of whitespace, or one or more
/// newlines (each newline is one hard line break).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Word {
    pub text: String,
    /// Overrides the layout's base format; [None] inherits it completely
    pub format: Option<TextFormat>,
    /// Filled in the first time the word is measured and trusted from then on. Layouts
    /// measure their own copy of the input, so the filled-in slot is found on
    /// [PositionedWord::word](super::PositionedWord::word); resubmit those words to skip
    /// measuring them again. Cleared by [Word::invalidate].
    pub metrics: Option<Metrics>,
}

impl Word {
    /// A word rendered with the base format
    pub fn new<S: ToString>(text: S) -> Word {
        Word {
            text: text.to_string(),
            format: None,
            metrics: None,
        }
    }

    /// A word with its own formatting
    pub fn formatted<S: ToString>(text: S, format: TextFormat) -> Word {
        Word {
            text: text.to_string(),
            format: Some(format),
            metrics: None,
        }
    }

    /// Drop any cached metrics. Must be called when `text` or `format` change, and when
    /// the word is laid out again under a different base format, since the base fills in
    /// whatever `format` leaves unset.
    pub fn invalidate(&mut self) {
        self.metrics = None;
    }

    /// True if the word is one or more characters of whitespace only
    pub fn is_whitespace(&self) -> bool {
        super::is_whitespace(&self.text)
    }

    /// Number of hard line breaks this word represents: one per newline in a whitespace
    /// word, zero for anything visible
    pub fn hard_breaks(&self) -> usize {
        if self.is_whitespace() {
            self.text.matches('\n').count()
        } else {
            0
        }
    }
}

/// Text handed to a layout: either a plain string that gets segmented into words, or words
/// that can each carry their own formatting
///
/// Layouts work on a copy of [Text::Words] and never write metrics back into it.
#[derive(Debug, Clone, PartialEq)]
pub enum Text {
    Plain(String),
    Words(Vec<Word>),
}

impl Text {
    pub(crate) fn shape(&self) -> &'static str {
        match self {
            Text::Plain(_) => "plain text",
            Text::Words(_) => "word list",
        }
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Text::Plain(text.to_string())
    }
}

impl From<String> for Text {
    fn from(text: String) -> Self {
        Text::Plain(text)
    }
}

impl From<Vec<Word>> for Text {
    fn from(words: Vec<Word>) -> Self {
        Text::Words(words)
    }
}
