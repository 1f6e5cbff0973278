use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gambot", about = "Busca e perguntas sobre os regulamentos em PDF")]
pub struct Cli {
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    pub verbose: bool,
    /// Directory scanned for PDF documents on every query.
    #[arg(long, global = true, default_value = "data")]
    pub data_dir: String,
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ranks corpus pages against the question and prints excerpts.
    Search { question: String },
    /// Ranks, assembles a context block and asks the model service.
    Ask {
        question: String,
        #[arg(long)]
        api_key: Option<String>,
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        max_tokens: Option<u32>,
    },
    /// Reports corpus contents and AI availability.
    Status,
    /// Interactive session with counters and a clear action.
    Shell,
}
