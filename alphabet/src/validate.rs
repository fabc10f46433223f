//! Membership checks of caller input against a registered alphabet.

use tracing::trace;

use crate::AlphabetError;
use crate::AlphabetName;

/// Check that every character of `input` belongs to `alphabet`.
///
/// Empty input conforms. On failure the first foreign character is reported
/// along with its position, counted in characters.
pub fn check(alphabet: AlphabetName, input: &str) -> Result<(), AlphabetError> {
    match input.chars().enumerate().find(|(_, ch)| !alphabet.contains(*ch)) {
        Some((position, ch)) => {
            trace!(%alphabet, position, "input contains a foreign character");
            Err(AlphabetError::ForeignCharacter {
                alphabet,
                ch,
                position,
            })
        }
        None => Ok(()),
    }
}

/// Like [`check`], resolving the alphabet by name first.
pub fn check_named(name: &str, input: &str) -> Result<(), AlphabetError> {
    check(name.parse()?, input)
}
