//! Centralized configuration for alphabet-cli.
//!
//! Environment variables are read once at startup so a bad value fails before
//! any command runs.

use std::env;
use std::fmt;

use alphabet::AlphabetName;

/// Log output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn from_str(s: &str) -> Self {
        if s.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Configuration error.
#[derive(Debug)]
pub struct ConfigError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration error for {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// CLI configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log format (default: pretty)
    pub log_format: LogFormat,
    /// Alphabet used by `show` when no name is given (default: DECIMAL_AND_LETTERS)
    pub default_alphabet: AlphabetName,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var("LOG_FORMAT").ok().as_deref(),
            env::var("ALPHABET_DEFAULT").ok().as_deref(),
        )
    }

    fn from_vars(
        log_format: Option<&str>,
        default_alphabet: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let log_format = LogFormat::from_str(log_format.unwrap_or("pretty"));

        let default_alphabet = match default_alphabet.filter(|s| !s.trim().is_empty()) {
            Some(raw) => raw.parse::<AlphabetName>().map_err(|e| ConfigError {
                field: "ALPHABET_DEFAULT",
                message: format!("{}", e),
            })?,
            None => AlphabetName::DecimalAndLetters,
        };

        Ok(Self {
            log_format,
            default_alphabet,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_parsing() {
        assert_eq!(LogFormat::from_str("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str("json"), LogFormat::Json);
        assert_eq!(LogFormat::from_str("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::from_str("anything"), LogFormat::Pretty);
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::from_vars(None, None).expect("defaults are valid");
        assert_eq!(cfg.log_format, LogFormat::Pretty);
        assert_eq!(cfg.default_alphabet, AlphabetName::DecimalAndLetters);

        let cfg = Config::from_vars(None, Some("  ")).expect("blank falls back");
        assert_eq!(cfg.default_alphabet, AlphabetName::DecimalAndLetters);
    }

    #[test]
    fn default_alphabet_is_parsed() {
        let cfg = Config::from_vars(Some("json"), Some("hexadecimal")).expect("valid");
        assert_eq!(cfg.log_format, LogFormat::Json);
        assert_eq!(cfg.default_alphabet, AlphabetName::Hexadecimal);
    }

    #[test]
    fn unknown_default_alphabet_fails_fast() {
        let err = Config::from_vars(None, Some("klingon")).unwrap_err();
        assert_eq!(err.field, "ALPHABET_DEFAULT");
        assert_eq!(
            err.to_string(),
            "Configuration error for ALPHABET_DEFAULT: unknown alphabet: klingon"
        );
    }
}
