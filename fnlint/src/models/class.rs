// src/models/class.rs
use anyhow::anyhow;
use std::fmt;
use std::str::FromStr;

/// One named group of troublesome characters, treated as a single concern.
///
/// Square brackets, number sign, caret, pipe and colon break `[[link]]`
/// syntax; asterisk, question mark, double quote and angle brackets are
/// invalid in filenames on some host platforms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    SquareBrackets,
    NumberSign,
    Caret,
    Pipe,
    Colon,
    Asterisk,
    QuestionMark,
    DoubleQuote,
    AngleBrackets,
}

impl CharacterClass {
    /// Every class, in the order rules are applied.
    pub const ALL: [Self; 9] = [
        Self::SquareBrackets,
        Self::NumberSign,
        Self::Caret,
        Self::Pipe,
        Self::Colon,
        Self::Asterisk,
        Self::QuestionMark,
        Self::DoubleQuote,
        Self::AngleBrackets,
    ];

    /// The literal characters belonging to this class.
    #[must_use]
    pub const fn chars(self) -> &'static [char] {
        match self {
            Self::SquareBrackets => &['[', ']'],
            Self::NumberSign => &['#'],
            Self::Caret => &['^'],
            Self::Pipe => &['|'],
            Self::Colon => &[':'],
            Self::Asterisk => &['*'],
            Self::QuestionMark => &['?'],
            Self::DoubleQuote => &['"'],
            Self::AngleBrackets => &['<', '>'],
        }
    }

    /// Config-file key and `--set` name for this class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SquareBrackets => "square-brackets",
            Self::NumberSign => "number-sign",
            Self::Caret => "caret",
            Self::Pipe => "pipe",
            Self::Colon => "colon",
            Self::Asterisk => "asterisk",
            Self::QuestionMark => "question-mark",
            Self::DoubleQuote => "double-quote",
            Self::AngleBrackets => "angle-brackets",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharacterClass {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "square-brackets" => Ok(Self::SquareBrackets),
            "number-sign" => Ok(Self::NumberSign),
            "caret" => Ok(Self::Caret),
            "pipe" => Ok(Self::Pipe),
            "colon" => Ok(Self::Colon),
            "asterisk" => Ok(Self::Asterisk),
            "question-mark" => Ok(Self::QuestionMark),
            "double-quote" => Ok(Self::DoubleQuote),
            "angle-brackets" => Ok(Self::AngleBrackets),
            _ => Err(anyhow!(
                "unknown character class '{s}' (expected one of: square-brackets, \
                 number-sign, caret, pipe, colon, asterisk, question-mark, \
                 double-quote, angle-brackets)"
            )),
        }
    }
}
