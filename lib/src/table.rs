use std::io::Write;

use csv::WriterBuilder;
use serde::Serialize;

use crate::{error::Error, token::Tokens};

#[derive(Debug, Serialize)]
struct Row<'r> {
    value: &'r str,
    lemma: &'r str,
}

/// Two-column `value`/`lemma` table, row-aligned by input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LemmaTable {
    values: Tokens,
    lemmas: Tokens,
}

impl LemmaTable {
    pub fn new(values: Tokens, lemmas: Tokens) -> Result<Self, Error> {
        if values.len() != lemmas.len() {
            return Err(Error::LengthMismatch {
                values: values.len(),
                lemmas: lemmas.len(),
            });
        }

        Ok(Self { values, lemmas })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn values(&self) -> &Tokens {
        &self.values
    }

    #[inline]
    pub fn lemmas(&self) -> &Tokens {
        &self.lemmas
    }

    pub fn rows(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.values
            .iter()
            .zip(self.lemmas.iter())
            .map(|(value, lemma)| (value.as_str(), lemma.as_str()))
    }

    /// Writes the header and every row, in order.
    pub fn write_csv<W: Write>(&self, writer: W, delimiter: u8) -> Result<(), Error> {
        let mut writer = WriterBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .from_writer(writer);

        // Serializing a header-only table writes nothing; emit it explicitly.
        if self.is_empty() {
            writer.write_record(["value", "lemma"])?;
        }

        for (value, lemma) in self.rows() {
            writer.serialize(Row { value, lemma })?;
        }

        writer.flush()?;
        Ok(())
    }
}
