extern crate thiserror;

use std::io;

use thiserror::Error;

use crate::language::Language;

/// Error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing Column: {0:?}")]
    MissingColumn(String),

    #[error("Malformed Row: line {line} has more fields than the header")]
    MalformedRow { line: u64 },

    #[error("{0}")]
    Dictionary(#[from] DictionaryError),

    #[error("Length Mismatch: {values} values, {lemmas} lemmas")]
    LengthMismatch { values: usize, lemmas: usize },

    #[error("I/O Error: {0}")]
    Io(io::ErrorKind),
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error.kind())
    }
}

/// Dictionary loading error.
#[derive(Debug, Error, PartialEq)]
pub enum DictionaryError {
    #[error("Dictionary Error: malformed entry on line {line}")]
    Malformed { line: usize },

    #[error("Dictionary Error: {0}")]
    Reader(io::ErrorKind),
}

/// Failure of a single lemmatization call.
///
/// Every variant is recovered the same way by [`crate::lemmatize_all`]: the
/// original token is used as its own lemma.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LemmatizeError {
    #[error("Lemmatize Error: empty token")]
    EmptyToken,

    #[error("Lemmatize Error: unknown token {0:?}")]
    UnknownToken(String),

    #[error("Lemmatize Error: unsupported language, expected {expected}, found {found}")]
    UnsupportedLanguage { expected: Language, found: Language },

    #[error("Lemmatize Error: backend failure, {0}")]
    Backend(String),
}

/// Language code error.
#[derive(Debug, Error, PartialEq)]
#[error("Invalid language code: {0:?}")]
pub struct LanguageError(pub String);

#[cfg(test)]
mod tests {
    use crate::{error::LemmatizeError, language::Language};

    #[test]
    fn test_lemmatize_error_display() {
        assert_eq!(
            LemmatizeError::EmptyToken.to_string(),
            "Lemmatize Error: empty token"
        );
        assert_eq!(
            LemmatizeError::UnknownToken("xyz123".into()).to_string(),
            "Lemmatize Error: unknown token \"xyz123\""
        );
        assert_eq!(
            LemmatizeError::UnsupportedLanguage {
                expected: Language::czech(),
                found: "sk".parse().unwrap(),
            }
            .to_string(),
            "Lemmatize Error: unsupported language, expected cs, found sk"
        );
    }
}
