use crate::errors::AppResult;
use clap::{Parser, Subcommand};
use tracing_subscriber;

pub mod commands;

/// Wallet Transaction History Synthesiser
#[derive(Parser)]
#[command(name = "tx-history-synth")]
#[command(about = "Wallet transaction history synthesiser and OP_RETURN protocol decoder")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Decode a single OP_RETURN output script (SLP, alias, messages, airdrop)
    Decode(commands::decode::DecodeCommand),
    /// Merge, sort and classify a dumped per-address history into a feed
    Parse(commands::parse::ParseCommand),
    /// Resolve the alias registry from a dumped history
    Aliases(commands::aliases::AliasesCommand),
    /// Show the merged feed order with confirmation summaries
    Feed(commands::feed::FeedCommand),
}

pub fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decode(command) => command.run(),
        Commands::Parse(command) => command.run(),
        Commands::Aliases(command) => command.run(),
        Commands::Feed(command) => command.run(),
    }
}
