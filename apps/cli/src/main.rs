mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(name = "talkcut", about = "Transcript-driven trimming for recorded talks")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a review timeline from a transcription result.
    Timeline(commands::timeline::TimelineArgs),
    /// Apply a delete list to a recording.
    Cut(commands::cut::CutArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Timeline(args) => commands::timeline::run(args),
        Command::Cut(args) => commands::cut::run(args),
    }
}
