//! Character sets backing every named alphabet.
//!
//! Composite sets are spelled with `concat!` over the same literal fragments as
//! their parts, so `DECIMAL_AND_LETTERS` and `BASE64` always match
//! `UPPERCASE + LOWERCASE + DECIMAL`. Each set is checked at compile time for
//! duplicate or non-printable characters.

macro_rules! decimal {
    () => {
        "0123456789"
    };
}

macro_rules! lowercase {
    () => {
        "abcdefghijklmnopqrstuvwxyz"
    };
}

macro_rules! uppercase {
    () => {
        "ABCDEFGHIJKLMNOPQRSTUVWXYZ"
    };
}

macro_rules! decimal_and_letters {
    () => {
        concat!(uppercase!(), lowercase!(), decimal!())
    };
}

/// The binary alphabet { 0, 1 }.
pub const BINARY: &str = "01";

/// The octal alphabet { 0, 1, 2, 3, 4, 5, 6, 7 }.
pub const OCTAL: &str = "01234567";

/// The decimal alphabet { 0, 1, ..., 9 }.
pub const DECIMAL: &str = decimal!();

/// The hexadecimal alphabet { 0, ..., 9, A, ..., F }, uppercase digits.
pub const HEXADECIMAL: &str = "0123456789ABCDEF";

/// The lowercase alphabet { a, b, c, ..., z }.
pub const LOWERCASE: &str = lowercase!();

/// The uppercase alphabet { A, B, C, ..., Z }.
pub const UPPERCASE: &str = uppercase!();

/// Uppercase letters, then lowercase letters, then decimal digits.
///
/// The order is positional: index 0 is `A`, index 52 is `0`.
pub const DECIMAL_AND_LETTERS: &str = decimal_and_letters!();

/// The base-64 alphabet (64 characters): [`DECIMAL_AND_LETTERS`] followed by `+/`.
pub const BASE64: &str = concat!(decimal_and_letters!(), "+/");

/// Digits and lowercase letters without the look-alikes `0`, `1`, `l` and `o`.
///
/// Meant for codes a person has to read back, such as verification codes.
pub const DECIMAL_AND_LOWERCASE_LETTERS_DISTINGUISHABLE: &str = "23456789abcdefghijkmnpqrstuvwxyz";

/// Characters removed from [`DECIMAL_AND_LOWERCASE_LETTERS_DISTINGUISHABLE`].
pub const AMBIGUOUS: &str = "01lo";

/// Non-empty, printable ASCII, no character twice.
const fn is_distinct_printable(set: &str) -> bool {
    let bytes = set.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    let mut seen = [false; 128];
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if !b.is_ascii_graphic() || seen[b as usize] {
            return false;
        }
        seen[b as usize] = true;
        i += 1;
    }
    true
}

const fn shares_any(set: &str, banned: &str) -> bool {
    let set = set.as_bytes();
    let banned = banned.as_bytes();
    let mut i = 0;
    while i < set.len() {
        let mut j = 0;
        while j < banned.len() {
            if set[i] == banned[j] {
                return true;
            }
            j += 1;
        }
        i += 1;
    }
    false
}

const _: () = assert!(is_distinct_printable(BINARY), "BINARY repeats a character");
const _: () = assert!(is_distinct_printable(OCTAL), "OCTAL repeats a character");
const _: () = assert!(is_distinct_printable(DECIMAL), "DECIMAL repeats a character");
const _: () = assert!(is_distinct_printable(HEXADECIMAL), "HEXADECIMAL repeats a character");
const _: () = assert!(is_distinct_printable(LOWERCASE), "LOWERCASE repeats a character");
const _: () = assert!(is_distinct_printable(UPPERCASE), "UPPERCASE repeats a character");
const _: () = assert!(
    is_distinct_printable(DECIMAL_AND_LETTERS),
    "DECIMAL_AND_LETTERS repeats a character"
);
const _: () = assert!(is_distinct_printable(BASE64), "BASE64 repeats a character");
const _: () = assert!(BASE64.len() == 64, "BASE64 must hold 64 characters");
const _: () = assert!(
    is_distinct_printable(DECIMAL_AND_LOWERCASE_LETTERS_DISTINGUISHABLE),
    "DECIMAL_AND_LOWERCASE_LETTERS_DISTINGUISHABLE repeats a character"
);
const _: () = assert!(
    !shares_any(DECIMAL_AND_LOWERCASE_LETTERS_DISTINGUISHABLE, AMBIGUOUS),
    "DECIMAL_AND_LOWERCASE_LETTERS_DISTINGUISHABLE contains an ambiguous character"
);
