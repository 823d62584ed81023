extern crate clap;
extern crate tokio;
extern crate tracing;
extern crate tracing_subscriber;

mod cli;
mod config;
mod engine;
mod error;
mod read;

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

use crate::{cli::Cli, config::Config, engine::Engine};

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout is reserved for the table.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(cli.verbose))
        .with_writer(std::io::stderr)
        .finish();

    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install logger: {error}");
    }

    let config = match Config::resolve(&cli).await {
        Ok(config) => config,
        Err(error) => {
            error!(%error, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    match Engine::new(config).run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, "run failed");
            ExitCode::FAILURE
        }
    }
}
