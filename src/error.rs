extern crate thiserror;

use std::io;

use thiserror::Error;

/// Error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] IoError),

    #[error("{0}")]
    Lemmata(#[from] lemmata::Error),
}

/// Configuration error.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("File I/O Error: {0}")]
    File(io::ErrorKind),

    #[error("Serialization Error: {0}")]
    Serialization(String),

    #[error("Delimiter Error: {0:?} is not a single ASCII character")]
    Delimiter(char),

    #[error("Language Error: {0}")]
    Language(#[from] lemmata::error::LanguageError),
}

/// I/O errors.
#[derive(Debug, Error, PartialEq)]
pub enum IoError {
    #[error("File Error: {0}")]
    File(io::ErrorKind),

    #[error("Reader Error: {0}")]
    Reader(io::ErrorKind),

    #[error("Writer Error: {0}")]
    Writer(io::ErrorKind),
}

impl From<lemmata::DictionaryError> for Error {
    fn from(error: lemmata::DictionaryError) -> Self {
        Error::Lemmata(error.into())
    }
}
