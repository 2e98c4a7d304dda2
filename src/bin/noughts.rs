//! noughts CLI - move selection and strategy analysis for N-in-a-line games

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Adversarial move selection for N-in-a-line grid games", long_about = None)]
struct Cli {
    /// Log search details (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Select a move for a board position
    Select(noughts::cli::commands::select::SelectArgs),

    /// Play a match between two strategies
    Play(noughts::cli::commands::play::PlayArgs),

    /// Compare minimax and best-first over all 3x3 positions
    Compare(noughts::cli::commands::compare::CompareArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "noughts=debug" } else { "noughts=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Select(args) => noughts::cli::commands::select::execute(args),
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::Compare(args) => noughts::cli::commands::compare::execute(args),
    }
}
