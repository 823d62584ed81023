extern crate clap;

use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(name = "lemmata", version, about = "Lemmatize a vocabulary column into a value/lemma table")]
pub struct Cli {
    /// JSON configuration file.
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Vocabulary CSV.
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Lemma dictionary, one `lemma<TAB>form` entry per line.
    #[arg(long, short = 'd')]
    pub dictionary: Option<PathBuf>,

    /// Output CSV; stdout when omitted.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub delimiter: Option<char>,

    /// Name of the token column.
    #[arg(long)]
    pub column: Option<String>,

    #[arg(long, short = 'l')]
    pub language: Option<String>,

    /// Disable greedy lemmatization.
    #[arg(long)]
    pub no_greedy: bool,

    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}
