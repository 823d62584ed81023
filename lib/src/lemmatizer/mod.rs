mod dictionary;
mod greedy;

pub use {dictionary::DictionaryLemmatizer, greedy::Greedy};

use crate::{
    error::LemmatizeError,
    language::Language,
    token::{Token, Tokens},
};

/// A lemmatization backend.
///
/// Implementations are free to fail for any token; callers are expected to
/// decide what a failure means for them. [`lemmatize_all`] falls back to the
/// original token.
pub trait Lemmatize {
    fn lemmatize(
        &self,
        token: &str,
        language: &Language,
        greedy: bool,
    ) -> Result<String, LemmatizeError>;
}

impl<F> Lemmatize for F
where
    F: Fn(&str, &Language, bool) -> Result<String, LemmatizeError>,
{
    fn lemmatize(
        &self,
        token: &str,
        language: &Language,
        greedy: bool,
    ) -> Result<String, LemmatizeError> {
        self(token, language, greedy)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LemmatizeOptions {
    pub language: Language,
    pub greedy: bool,
}

impl LemmatizeOptions {
    pub fn new(language: Language, greedy: bool) -> Self {
        Self { language, greedy }
    }
}

impl Default for LemmatizeOptions {
    fn default() -> Self {
        Self {
            language: Language::czech(),
            greedy: true,
        }
    }
}

/// Lemmatizes every token, in order, one call per token.
///
/// The result always has the same length as `tokens`. A token whose call
/// fails, for whatever reason, is carried over verbatim.
pub fn lemmatize_all<L>(lemmatizer: &L, tokens: &Tokens, options: &LemmatizeOptions) -> Tokens
where
    L: Lemmatize + ?Sized,
{
    let mut lemmas = Tokens::with_capacity(tokens.len());

    for token in tokens {
        let lemma = match lemmatizer.lemmatize(token, &options.language, options.greedy) {
            Ok(lemma) => Token::from(lemma),
            Err(_) => token.clone(),
        };
        lemmas.push(lemma);
    }

    lemmas
}
