use std::collections::HashSet;
use std::thread;

use alphabet::{Alphabet, AlphabetName, AMBIGUOUS, DECIMAL, LOWERCASE};

#[test]
fn every_alphabet_matches_its_literal() {
    let expected = [
        (AlphabetName::Binary, "01"),
        (AlphabetName::Octal, "01234567"),
        (AlphabetName::Decimal, "0123456789"),
        (AlphabetName::Hexadecimal, "0123456789ABCDEF"),
        (AlphabetName::Lowercase, "abcdefghijklmnopqrstuvwxyz"),
        (AlphabetName::Uppercase, "ABCDEFGHIJKLMNOPQRSTUVWXYZ"),
        (
            AlphabetName::DecimalAndLetters,
            "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
        ),
        (
            AlphabetName::Base64,
            "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
        ),
        (
            AlphabetName::DecimalAndLowercaseLettersDistinguishable,
            "23456789abcdefghijkmnpqrstuvwxyz",
        ),
    ];
    assert_eq!(expected.len(), AlphabetName::ALL.len());
    for (name, literal) in expected {
        assert_eq!(name.characters(), literal, "{name}");
        assert_eq!(Alphabet::lookup(name.as_str()), Ok(literal));
    }
}

#[test]
fn every_alphabet_is_duplicate_free() {
    for name in Alphabet::names() {
        let chars = name.characters();
        let unique: HashSet<char> = chars.chars().collect();
        assert!(!chars.is_empty(), "{name} is empty");
        assert_eq!(unique.len(), chars.chars().count(), "{name} repeats a character");
    }
}

#[test]
fn distinguishable_is_decimal_and_lowercase_minus_look_alikes() {
    let set = Alphabet::DECIMAL_AND_LOWERCASE_LETTERS_DISTINGUISHABLE;
    assert_eq!(set.len(), 32);
    for ch in AMBIGUOUS.chars() {
        assert!(!set.contains(ch), "{ch:?} should be excluded");
    }
    for ch in DECIMAL.chars().chain(LOWERCASE.chars()) {
        if AMBIGUOUS.contains(ch) {
            continue;
        }
        assert_eq!(set.matches(ch).count(), 1, "{ch:?} should appear once");
    }
}

#[test]
fn ambiguous_helper_is_not_a_registered_alphabet() {
    assert_eq!(AMBIGUOUS, "01lo");
    assert!(Alphabet::lookup("AMBIGUOUS").is_err());
}

#[test]
fn hexadecimal_scenario() {
    let hex = Alphabet::HEXADECIMAL;
    assert_eq!(hex, "0123456789ABCDEF");
    assert_eq!(hex.len(), 16);
}

#[test]
fn base64_scenario() {
    assert_eq!(Alphabet::BASE64.len(), 64);
    assert!(Alphabet::BASE64.ends_with("+/"));
    assert_eq!(
        Alphabet::BASE64,
        format!("{}+/", Alphabet::DECIMAL_AND_LETTERS)
    );
}

#[test]
fn reads_are_stable_across_threads() {
    let first: Vec<&'static str> = Alphabet::names().iter().map(|n| n.characters()).collect();
    thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                s.spawn(|| {
                    (0..100)
                        .map(|_| Alphabet::names().iter().map(|n| n.characters()).collect())
                        .collect::<Vec<Vec<&'static str>>>()
                })
            })
            .collect();
        for h in handles {
            for read in h.join().expect("reader thread panicked") {
                assert_eq!(read, first);
            }
        }
    });
}
