use crate::element::Content;

/// Paired inline delimiters whose content is itself inline markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delim {
    /// `*x*` or `_x_`.
    Emph(char),
    /// `**x**` or `__x__`.
    Strong(char),
    /// `~~x~~`.
    Strike,
    /// `"x"` with smart punctuation.
    DoubleQuote,
    /// `'x'` with smart punctuation.
    SingleQuote,
}

impl Delim {
    pub const STRIKE: &'static str = "~~";

    pub fn open(self) -> String {
        match self {
            Delim::Emph(c) => c.to_string(),
            Delim::Strong(c) => [c, c].iter().collect(),
            Delim::Strike => Self::STRIKE.to_string(),
            Delim::DoubleQuote => "\"".to_string(),
            Delim::SingleQuote => "'".to_string(),
        }
    }

    pub fn content(self) -> Content {
        match self {
            Delim::Emph(_) => Content::Emph,
            Delim::Strong(_) => Content::Strong,
            Delim::Strike => Content::Strike,
            Delim::DoubleQuote => Content::DoubleQuoted,
            Delim::SingleQuote => Content::SingleQuoted,
        }
    }

    /// Whether the closer must follow non-whitespace.
    pub fn flanking_close(self) -> bool {
        !matches!(self, Delim::SingleQuote | Delim::DoubleQuote)
    }
}
