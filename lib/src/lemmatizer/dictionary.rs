extern crate hashbrown;

use std::io::BufRead;

use hashbrown::HashMap;

use crate::{
    error::{DictionaryError, LemmatizeError},
    language::Language,
    lemmatizer::{Greedy, Lemmatize},
};

/// Form-to-lemma lookup table for a single language.
///
/// Entries are read from `lemma<TAB>form` lines; the first entry for a form
/// wins.
#[derive(Clone, Debug)]
pub struct DictionaryLemmatizer {
    language: Language,
    entries: HashMap<String, String>,
    greedy: Greedy,
}

impl DictionaryLemmatizer {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            entries: HashMap::new(),
            greedy: Greedy::default(),
        }
    }

    pub fn from_entries<I, F, L>(language: Language, entries: I) -> Self
    where
        I: IntoIterator<Item = (F, L)>,
        F: Into<String>,
        L: Into<String>,
    {
        let mut dictionary = Self::new(language);
        entries
            .into_iter()
            .for_each(|(form, lemma)| dictionary.insert(form.into(), lemma.into()));
        dictionary
    }

    pub fn from_reader<R: BufRead>(language: Language, reader: R) -> Result<Self, DictionaryError> {
        let mut dictionary = Self::new(language);

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|error| DictionaryError::Reader(error.kind()))?;
            let line = line.strip_suffix('\r').unwrap_or(&line);

            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            match line.split_once('\t') {
                Some((lemma, form)) if !lemma.is_empty() && !form.is_empty() => {
                    dictionary.insert(form.to_string(), lemma.to_string());
                }
                _ => return Err(DictionaryError::Malformed { line: index + 1 }),
            }
        }

        Ok(dictionary)
    }

    pub fn with_greedy(mut self, greedy: Greedy) -> Self {
        self.greedy = greedy;
        self
    }

    #[inline]
    pub fn insert(&mut self, form: String, lemma: String) {
        self.entries.entry(form).or_insert(lemma);
    }

    #[inline]
    pub fn language(&self) -> &Language {
        &self.language
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_known(&self, token: &str) -> bool {
        self.lookup(token).is_some()
    }

    #[inline]
    fn get(&self, form: &str) -> Option<&str> {
        self.entries.get(form).map(String::as_str)
    }

    /// Exact form first, then its lowercase variant.
    fn lookup(&self, token: &str) -> Option<&str> {
        self.get(token).or_else(|| {
            let lowered = token.to_lowercase();
            if lowered != token {
                self.get(&lowered)
            } else {
                None
            }
        })
    }

    /// Lemmatizes the last segment of a hyphenated compound.
    fn hyphenated(&self, token: &str) -> Option<String> {
        let (head, tail) = token.rsplit_once('-')?;

        if head.is_empty() || tail.is_empty() || head.split('-').any(str::is_empty) {
            return None;
        }

        self.lookup(tail).map(|lemma| format!("{head}-{lemma}"))
    }
}

impl Lemmatize for DictionaryLemmatizer {
    fn lemmatize(
        &self,
        token: &str,
        language: &Language,
        greedy: bool,
    ) -> Result<String, LemmatizeError> {
        if *language != self.language {
            return Err(LemmatizeError::UnsupportedLanguage {
                expected: self.language.clone(),
                found: language.clone(),
            });
        }

        if token.is_empty() {
            return Err(LemmatizeError::EmptyToken);
        }

        let lookup = |form: &str| self.lookup(form);

        let candidate = self
            .lookup(token)
            .map(str::to_string)
            .or_else(|| self.hyphenated(token))
            .or_else(|| greedy.then(|| self.greedy.decompose(token, lookup)).flatten());

        match candidate {
            Some(lemma) if greedy => Ok(self.greedy.refine(lemma, lookup)),
            Some(lemma) => Ok(lemma),
            None => Err(LemmatizeError::UnknownToken(token.to_string())),
        }
    }
}
