pub mod error;
pub mod language;
pub mod lemmatizer;
pub mod table;
pub mod token;
pub mod util;
pub mod vocabulary;

pub use {
    error::{DictionaryError, Error, LemmatizeError},
    language::Language,
    lemmatizer::{lemmatize_all, DictionaryLemmatizer, Greedy, Lemmatize, LemmatizeOptions},
    table::LemmaTable,
    token::{Token, Tokens},
    vocabulary::{Vocabulary, VocabularyOptions},
};
