//! Symbolic names for the registered alphabets.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::charset;
use crate::AlphabetError;

/// Stable identifier of a registered alphabet.
///
/// Renders, parses and serializes as the upper snake case constant name,
/// e.g. `HEXADECIMAL`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlphabetName {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
    Lowercase,
    Uppercase,
    DecimalAndLetters,
    Base64,
    DecimalAndLowercaseLettersDistinguishable,
}

impl AlphabetName {
    /// Every name, in registry order.
    pub const ALL: [AlphabetName; 9] = [
        AlphabetName::Binary,
        AlphabetName::Octal,
        AlphabetName::Decimal,
        AlphabetName::Hexadecimal,
        AlphabetName::Lowercase,
        AlphabetName::Uppercase,
        AlphabetName::DecimalAndLetters,
        AlphabetName::Base64,
        AlphabetName::DecimalAndLowercaseLettersDistinguishable,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            AlphabetName::Binary => "BINARY",
            AlphabetName::Octal => "OCTAL",
            AlphabetName::Decimal => "DECIMAL",
            AlphabetName::Hexadecimal => "HEXADECIMAL",
            AlphabetName::Lowercase => "LOWERCASE",
            AlphabetName::Uppercase => "UPPERCASE",
            AlphabetName::DecimalAndLetters => "DECIMAL_AND_LETTERS",
            AlphabetName::Base64 => "BASE64",
            AlphabetName::DecimalAndLowercaseLettersDistinguishable => {
                "DECIMAL_AND_LOWERCASE_LETTERS_DISTINGUISHABLE"
            }
        }
    }

    /// Case-insensitive; `-` is accepted in place of `_`.
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL.into_iter().find(|name| name.as_str() == wanted)
    }

    /// The characters of this alphabet, in order.
    pub const fn characters(&self) -> &'static str {
        match self {
            AlphabetName::Binary => charset::BINARY,
            AlphabetName::Octal => charset::OCTAL,
            AlphabetName::Decimal => charset::DECIMAL,
            AlphabetName::Hexadecimal => charset::HEXADECIMAL,
            AlphabetName::Lowercase => charset::LOWERCASE,
            AlphabetName::Uppercase => charset::UPPERCASE,
            AlphabetName::DecimalAndLetters => charset::DECIMAL_AND_LETTERS,
            AlphabetName::Base64 => charset::BASE64,
            AlphabetName::DecimalAndLowercaseLettersDistinguishable => {
                charset::DECIMAL_AND_LOWERCASE_LETTERS_DISTINGUISHABLE
            }
        }
    }

    // Every set is ASCII, so byte length == character count and byte
    // offsets are character positions.

    pub const fn len(&self) -> usize {
        self.characters().len()
    }

    /// Always false for a registered alphabet.
    pub const fn is_empty(&self) -> bool {
        self.characters().is_empty()
    }

    pub fn char_at(&self, index: usize) -> Option<char> {
        self.characters().as_bytes().get(index).copied().map(char::from)
    }

    pub fn index_of(&self, ch: char) -> Option<usize> {
        self.characters().find(ch)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.characters().contains(ch)
    }
}

impl Display for AlphabetName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlphabetName {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| AlphabetError::UnknownAlphabet(s.to_string()))
    }
}
