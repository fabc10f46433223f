//! Named character alphabets for string generation.
//!
//! Every alphabet is a `&'static str` of distinct, printable ASCII characters,
//! fixed at compile time. They are available as crate-level constants and as
//! associated constants of [`Alphabet`]:
//!
//! ```
//! use alphabet::{Alphabet, HEXADECIMAL};
//!
//! assert_eq!(HEXADECIMAL, "0123456789ABCDEF");
//! assert_eq!(Alphabet::BASE64.len(), 64);
//! assert_eq!(Alphabet::lookup("binary"), Ok("01"));
//! ```
//!
//! Nothing here is mutable, so any number of threads may read concurrently.
//! Sampling from an alphabet is left to the caller.

use tracing::debug;

pub mod charset;
pub mod name;
pub mod validate;

pub use charset::{
    AMBIGUOUS, BASE64, BINARY, DECIMAL, DECIMAL_AND_LETTERS,
    DECIMAL_AND_LOWERCASE_LETTERS_DISTINGUISHABLE, HEXADECIMAL, LOWERCASE, OCTAL, UPPERCASE,
};
pub use name::AlphabetName;

/// Registry of the named alphabets.
///
/// `Alphabet` is a namespace: it has no values, so it can never be
/// instantiated. Any attempt is rejected by the compiler.
///
/// ```compile_fail
/// let registry = alphabet::Alphabet {};
/// ```
///
/// ```compile_fail
/// let registry: alphabet::Alphabet = Default::default();
/// ```
///
/// ```compile_fail
/// let registry = alphabet::Alphabet::new();
/// ```
pub enum Alphabet {}

impl Alphabet {
    pub const BINARY: &'static str = charset::BINARY;
    pub const OCTAL: &'static str = charset::OCTAL;
    pub const DECIMAL: &'static str = charset::DECIMAL;
    pub const HEXADECIMAL: &'static str = charset::HEXADECIMAL;
    pub const LOWERCASE: &'static str = charset::LOWERCASE;
    pub const UPPERCASE: &'static str = charset::UPPERCASE;
    pub const DECIMAL_AND_LETTERS: &'static str = charset::DECIMAL_AND_LETTERS;
    pub const BASE64: &'static str = charset::BASE64;
    pub const DECIMAL_AND_LOWERCASE_LETTERS_DISTINGUISHABLE: &'static str =
        charset::DECIMAL_AND_LOWERCASE_LETTERS_DISTINGUISHABLE;

    /// Resolve an alphabet by its constant name (case-insensitive).
    pub fn lookup(name: &str) -> Result<&'static str, AlphabetError> {
        let parsed: AlphabetName = name.parse()?;
        debug!(alphabet = %parsed, len = parsed.len(), "alphabet lookup");
        Ok(parsed.characters())
    }

    /// All registered names, in registry order.
    pub fn names() -> &'static [AlphabetName] {
        &AlphabetName::ALL
    }
}

/// Errors from name resolution and membership checks.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("unknown alphabet: {0}")]
    UnknownAlphabet(String),
    #[error("character {ch:?} at position {position} is not in {alphabet}")]
    ForeignCharacter {
        alphabet: AlphabetName,
        ch: char,
        position: usize,
    },
}

/// Return a short about/version line for binaries to print.
pub fn about() -> String {
    let pkg = env!("CARGO_PKG_NAME");
    let ver = env!("CARGO_PKG_VERSION");
    format!("{} v{} ({} alphabets)", pkg, ver, AlphabetName::ALL.len())
}
