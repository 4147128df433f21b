use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("{entry_point} does not accept {shape} input")]
    /// The input shape is not supported by the entry point it was given to, i.e. a
    /// word list handed to a plain-text-only code path
    UnsupportedInput {
        entry_point: &'static str,
        shape: &'static str,
    },

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error("font has no glyph for {0:?} and no replacement glyph")]
    /// A glyph could not be found for a character, nor any fallback glyph
    MissingGlyph(char),

    #[error("no font available for {0:?}")]
    /// A surface was asked to draw with a font shorthand it has no font for
    NoFont(String),

    #[error("unrecognized colour {0:?}")]
    /// A colour string could not be parsed
    InvalidColour(String),
}
