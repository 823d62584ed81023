extern crate serde;
extern crate serde_json;

use std::path::{Path, PathBuf};

use lemmata::{Language, LemmatizeOptions, VocabularyOptions};
use serde::Deserialize;

use crate::{cli::Cli, error::ConfigError};

pub const DEFAULT_INPUT: &str = "media_vocabulary_cz.csv";

/// Run configuration.
///
/// Layered as defaults, then an optional JSON file, then command line flags.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub input: PathBuf,

    /// Lemma dictionary. Without one every token is its own lemma.
    pub dictionary: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub delimiter: char,
    pub column: String,
    pub language: Language,
    pub greedy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            dictionary: None,
            output: None,
            delimiter: ';',
            column: lemmata::vocabulary::DEFAULT_COLUMN.to_string(),
            language: Language::czech(),
            greedy: true,
        }
    }
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|error| ConfigError::Serialization(error.to_string()))
    }

    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|error| ConfigError::File(error.kind()))?;

        Self::from_json(&text)
    }

    /// Builds the configuration for a command line invocation.
    pub async fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let config = match &cli.config {
            Some(path) => Self::load(path).await?,
            None => Self::default(),
        };

        config.merge(cli)
    }

    /// Overrides every field the command line sets.
    pub fn merge(mut self, cli: &Cli) -> Result<Self, ConfigError> {
        if let Some(input) = &cli.input {
            self.input = input.clone();
        }

        if let Some(dictionary) = &cli.dictionary {
            self.dictionary = Some(dictionary.clone());
        }

        if let Some(output) = &cli.output {
            self.output = Some(output.clone());
        }

        if let Some(delimiter) = cli.delimiter {
            self.delimiter = delimiter;
        }

        if let Some(column) = &cli.column {
            self.column = column.clone();
        }

        if let Some(language) = &cli.language {
            self.language = language.parse()?;
        }

        if cli.no_greedy {
            self.greedy = false;
        }

        self.delimiter_byte()?;
        Ok(self)
    }

    /// The delimiter as a byte; quotes and line terminators are rejected.
    pub fn delimiter_byte(&self) -> Result<u8, ConfigError> {
        if self.delimiter.is_ascii() && !matches!(self.delimiter, '"' | '\n' | '\r') {
            Ok(self.delimiter as u8)
        } else {
            Err(ConfigError::Delimiter(self.delimiter))
        }
    }

    pub fn vocabulary_options(&self) -> Result<VocabularyOptions, ConfigError> {
        Ok(VocabularyOptions {
            delimiter: self.delimiter_byte()?,
            column: self.column.clone(),
        })
    }

    pub fn lemmatize_options(&self) -> LemmatizeOptions {
        LemmatizeOptions::new(self.language.clone(), self.greedy)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;
    use lemmata::{error::LanguageError, Language};

    use crate::{
        cli::Cli,
        config::{Config, DEFAULT_INPUT},
        error::ConfigError,
    };

    #[test]
    fn test_config_defaults() {
        let config = Config::default();

        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(config.dictionary, None);
        assert_eq!(config.output, None);
        assert_eq!(config.delimiter_byte(), Ok(b';'));
        assert_eq!(config.column, "value");
        assert_eq!(config.language, Language::czech());
        assert!(config.greedy);
    }

    #[test]
    fn test_config_from_json_partial() {
        let config = Config::from_json(r#"{ "input": "words.csv", "greedy": false }"#).unwrap();

        assert_eq!(config.input, PathBuf::from("words.csv"));
        assert!(!config.greedy);
        assert_eq!(config.column, "value");
    }

    #[test]
    fn test_config_from_json_rejects_unknown_fields() {
        let result = Config::from_json(r#"{ "inptu": "words.csv" }"#);
        assert!(matches!(result, Err(ConfigError::Serialization(_))));

        let result = Config::from_json(r#"{ "language": "Czech" }"#);
        assert!(matches!(result, Err(ConfigError::Serialization(_))));
    }

    #[test]
    fn test_config_merge_cli() {
        let cli = Cli::try_parse_from([
            "lemmata",
            "-o",
            "lemmas.csv",
            "-d",
            "cs.tsv",
            "--column",
            "token",
            "--no-greedy",
        ])
        .unwrap();
        let base = Config::from_json(r#"{ "input": "words.csv", "column": "word" }"#).unwrap();
        let config = base.merge(&cli).unwrap();

        assert_eq!(config.input, PathBuf::from("words.csv"));
        assert_eq!(config.output, Some(PathBuf::from("lemmas.csv")));
        assert_eq!(config.dictionary, Some(PathBuf::from("cs.tsv")));
        assert_eq!(config.column, "token");
        assert!(!config.greedy);
        assert!(!config.lemmatize_options().greedy);
    }

    #[test]
    fn test_config_merge_invalid_values() {
        let cli = Cli::try_parse_from(["lemmata", "--delimiter", "§"]).unwrap();
        assert_eq!(
            Config::default().merge(&cli),
            Err(ConfigError::Delimiter('§'))
        );

        for delimiter in ['"', '\n', '\r'] {
            let config = Config {
                delimiter,
                ..Config::default()
            };
            assert_eq!(config.delimiter_byte(), Err(ConfigError::Delimiter(delimiter)));
            assert_eq!(
                config.vocabulary_options(),
                Err(ConfigError::Delimiter(delimiter))
            );
        }

        let cli = Cli::try_parse_from(["lemmata", "-l", "CZ"]).unwrap();
        assert_eq!(
            Config::default().merge(&cli),
            Err(ConfigError::Language(LanguageError("CZ".into())))
        );
    }

    #[tokio::test]
    async fn test_config_load_missing_file() {
        let result = Config::load("does/not/exist.json").await;
        assert_eq!(
            result,
            Err(ConfigError::File(std::io::ErrorKind::NotFound))
        );
    }

    #[tokio::test]
    async fn test_config_resolve_from_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), r#"{ "delimiter": ",", "language": "sk" }"#).unwrap();

        let path = file.path().to_string_lossy().to_string();
        let cli = Cli::try_parse_from(["lemmata", "-c", path.as_str()]).unwrap();
        let config = Config::resolve(&cli).await.unwrap();

        assert_eq!(config.delimiter_byte(), Ok(b','));
        assert_eq!(config.language.code(), "sk");
    }
}
