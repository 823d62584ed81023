use std::io::Read;

use csv::ReaderBuilder;

use crate::{
    error::Error,
    token::{Token, Tokens},
};

pub const DEFAULT_DELIMITER: u8 = b';';
pub const DEFAULT_COLUMN: &str = "value";

const BOM: char = '\u{feff}';

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VocabularyOptions {
    pub delimiter: u8,
    pub column: String,
}

impl Default for VocabularyOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            column: DEFAULT_COLUMN.to_string(),
        }
    }
}

/// Token column of a delimited vocabulary file.
pub struct Vocabulary;

impl Vocabulary {
    /// Reads the configured column of a headed, delimiter-separated table.
    ///
    /// Fails with [`Error::MissingColumn`] before any row is read when the
    /// header lacks the column. Empty cells are kept as empty tokens; short
    /// rows yield an empty token, rows wider than the header are rejected.
    pub fn from_reader<R: Read>(reader: R, options: &VocabularyOptions) -> Result<Tokens, Error> {
        let mut reader = ReaderBuilder::new()
            .delimiter(options.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?;
        let width = headers.len();
        let position = headers
            .iter()
            .position(|header| header.trim_start_matches(BOM) == options.column)
            .ok_or_else(|| Error::MissingColumn(options.column.clone()))?;

        let mut tokens = Tokens::new();

        for record in reader.records() {
            let record = record?;

            if record.len() > width {
                let line = record.position().map_or(0, |position| position.line());
                return Err(Error::MalformedRow { line });
            }

            tokens.push(Token::from(record.get(position).unwrap_or_default()));
        }

        Ok(tokens)
    }

    pub fn from_text(text: &str, options: &VocabularyOptions) -> Result<Tokens, Error> {
        Self::from_reader(text.as_bytes(), options)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::Error,
        tokens,
        vocabulary::{Vocabulary, VocabularyOptions},
    };

    #[test]
    fn test_vocabulary_value_column() {
        let text = "id;value;count\n1;psa;10\n2;domu;4\n3;xyz123;1\n";
        let tokens = Vocabulary::from_text(text, &VocabularyOptions::default()).unwrap();

        assert_eq!(tokens, tokens!["psa", "domu", "xyz123"]);
    }

    #[test]
    fn test_vocabulary_keeps_empty_and_duplicate_cells() {
        let text = "value;count\npsa;1\n;2\npsa;3\n";
        let tokens = Vocabulary::from_text(text, &VocabularyOptions::default()).unwrap();

        assert_eq!(tokens, tokens!["psa", "", "psa"]);
    }

    #[test]
    fn test_vocabulary_short_row() {
        let text = "id;value\n1;psa\n2\n";
        let tokens = Vocabulary::from_text(text, &VocabularyOptions::default()).unwrap();

        assert_eq!(tokens, tokens!["psa", ""]);
    }

    #[test]
    fn test_vocabulary_long_row() {
        let text = "id;value\n1;psa\n2;domu;extra\n3;xyz123\n";
        let error = Vocabulary::from_text(text, &VocabularyOptions::default()).unwrap_err();

        assert!(matches!(error, Error::MalformedRow { line: 3 }));
    }

    #[test]
    fn test_vocabulary_missing_column() {
        let text = "id;token\n1;psa\n";
        let error = Vocabulary::from_text(text, &VocabularyOptions::default()).unwrap_err();

        assert!(matches!(error, Error::MissingColumn(column) if column == "value"));
    }

    #[test]
    fn test_vocabulary_header_only() {
        let text = "value\n";
        let tokens = Vocabulary::from_text(text, &VocabularyOptions::default()).unwrap();

        assert!(tokens.is_empty());
    }

    #[test]
    fn test_vocabulary_bom_and_custom_options() {
        let text = "\u{feff}slovo,value\nkočky,ignored\n\"psa, domu\",x\n";
        let options = VocabularyOptions {
            delimiter: b',',
            column: "slovo".into(),
        };
        let tokens = Vocabulary::from_text(text, &options).unwrap();

        assert_eq!(tokens, tokens!["kočky", "psa, domu"]);
    }

    #[test]
    fn test_vocabulary_invalid_utf8() {
        let bytes: &[u8] = b"value\n\xff\xfe\n";
        let error = Vocabulary::from_reader(bytes, &VocabularyOptions::default()).unwrap_err();

        assert!(matches!(error, Error::Csv(_)));
    }
}
