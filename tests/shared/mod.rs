use lemmata::{DictionaryLemmatizer, Language};

pub(crate) const VOCABULARY: &str = "tests/data/vocabulary.csv";
pub(crate) const DICTIONARY: &str = "tests/data/cs.tsv";
pub(crate) const NO_VALUE_COLUMN: &str = "tests/data/no_value.csv";

pub(crate) fn czech_dictionary() -> DictionaryLemmatizer {
    let text = std::fs::read_to_string(DICTIONARY).unwrap();
    DictionaryLemmatizer::from_reader(Language::czech(), text.as_bytes()).unwrap()
}

pub(crate) fn lemmata_command() -> std::process::Command {
    std::process::Command::new(env!("CARGO_BIN_EXE_lemmata"))
}
