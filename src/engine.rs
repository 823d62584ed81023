use lemmata::{
    lemmatize_all, DictionaryLemmatizer, Language, LemmaTable, Lemmatize, LemmatizeError, Tokens,
    Vocabulary,
};
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    error::Error,
    read::{read_file, Sink},
};

/// Stand-in backend when no dictionary is configured: every call fails.
fn without_dictionary(_: &str, _: &Language, _: bool) -> Result<String, LemmatizeError> {
    Err(LemmatizeError::Backend("no dictionary configured".into()))
}

/// One run: vocabulary in, `value`/`lemma` table out.
#[derive(Debug)]
pub struct Engine {
    config: Config,
}

impl Engine {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Parses the configured vocabulary column.
    ///
    /// Runs before the dictionary is loaded, so a malformed input aborts the
    /// run before any token is lemmatized.
    pub async fn vocabulary(&self) -> Result<Tokens, Error> {
        let options = self.config.vocabulary_options()?;
        let buffer = read_file(&self.config.input).await?;

        let tokens = Vocabulary::from_reader(buffer.as_slice(), &options)?;
        info!(
            input = %self.config.input.display(),
            column = %options.column,
            tokens = tokens.len(),
            "read vocabulary"
        );

        Ok(tokens)
    }

    pub async fn dictionary(&self) -> Result<Option<DictionaryLemmatizer>, Error> {
        let Some(path) = &self.config.dictionary else {
            warn!("no dictionary configured, tokens are kept as their own lemmas");
            return Ok(None);
        };

        let buffer = read_file(path).await?;
        let dictionary =
            DictionaryLemmatizer::from_reader(self.config.language.clone(), buffer.as_slice())?;

        info!(
            dictionary = %path.display(),
            language = %dictionary.language(),
            entries = dictionary.len(),
            "loaded dictionary"
        );

        Ok(Some(dictionary))
    }

    /// Lemmatizes `tokens` and pairs every token with its lemma.
    pub fn table<L>(&self, lemmatizer: &L, tokens: Tokens) -> Result<LemmaTable, Error>
    where
        L: Lemmatize + ?Sized,
    {
        let options = self.config.lemmatize_options();
        debug!(language = %options.language, greedy = options.greedy, "lemmatizing");

        let lemmas = lemmatize_all(lemmatizer, &tokens, &options);
        Ok(LemmaTable::new(tokens, lemmas)?)
    }

    pub async fn write(&self, table: &LemmaTable) -> Result<(), Error> {
        let mut buffer = Vec::new();
        table.write_csv(&mut buffer, self.config.delimiter_byte()?)?;

        let sink = Sink::new(self.config.output.as_deref());
        sink.write(&buffer).await?;

        info!(sink = ?sink, rows = table.len(), "wrote lemma table");
        Ok(())
    }

    pub async fn run(&self) -> Result<LemmaTable, Error> {
        let tokens = self.vocabulary().await?;
        let table = match self.dictionary().await? {
            Some(dictionary) => self.table(&dictionary, tokens)?,
            None => self.table(&without_dictionary, tokens)?,
        };
        self.write(&table).await?;

        Ok(table)
    }
}
