mod config;
mod error;
mod interact;
mod state;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::Config;
use interact::PromVotingInteract;

/// Deploys a PromVoting registry and drives its endpoints
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Gateway URI (overrides config file)
    #[arg(long)]
    gateway: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Deploy a fresh registry and remember its address
    Deploy,
    /// Register the candidate of the last deployed registry
    AddCandidate {
        #[arg(short, long)]
        name: String,
    },
    /// Cast one vote for the registered candidate
    Vote,
    /// Show the registered candidate
    Candidate,
    /// Show the current vote count
    VoteCount,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(args.verbose))
        .with_target(true)
        .init();

    if let Err(err) = run(args).await {
        error!("{err}");
        std::process::exit(1);
    }
}

/// `--verbose` forces debug output; otherwise `RUST_LOG` applies, falling back to info.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

async fn run(args: Args) -> error::Result<()> {
    info!("Loading configuration from {:?}", args.config);
    let mut config = Config::from_file(&args.config)?;

    if let Some(gateway) = args.gateway {
        info!("Overriding gateway: {}", gateway);
        config.gateway_uri = gateway;
    }

    let mut interact = PromVotingInteract::new(&config).await?;
    match args.command {
        Command::Deploy => interact.deploy().await,
        Command::AddCandidate { name } => interact.add_candidate(&name).await,
        Command::Vote => interact.vote().await,
        Command::Candidate => interact.candidate().await,
        Command::VoteCount => interact.vote_count().await,
    }
}
