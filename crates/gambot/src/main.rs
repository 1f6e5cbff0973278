mod ask;
mod cli;
mod config;
mod logging;
mod search;
mod shell;
mod status;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose || logging::env_flag());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    match cli.command {
        Command::Search { question } => search::run(&cli.data_dir, &question, cli.json),
        Command::Ask {
            question,
            api_key,
            model,
            max_tokens,
        } => ask::run(&cli.data_dir, &question, api_key, model, max_tokens),
        Command::Status => status::run(&cli.data_dir),
        Command::Shell => shell::run(&cli.data_dir),
    }
}
