use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use common_sense::{DeckLoader, GameConfig, RoundController};
use tracing_subscriber::EnvFilter;

mod session;

#[derive(Parser, Debug)]
#[command(name = "common-sense", version, about = "Draw a card, describe it, see if you agree")]
struct Args {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Load a deck file and print its statistics")]
    Stats { decks: PathBuf },

    #[command(about = "Play an interactive two-player session")]
    Play {
        decks: PathBuf,

        /// Seed for card draws; random when omitted
        #[arg(long)]
        seed: Option<u64>,

        /// TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        Commands::Stats { decks } => {
            let loaded = DeckLoader::for_path(&decks)
                .load_path(&decks)
                .with_context(|| format!("loading decks from {}", decks.display()))?;
            println!("{}", loaded.stats());
        }
        Commands::Play {
            decks,
            seed,
            config,
        } => {
            let mut game_config = match config {
                Some(path) => GameConfig::load(&path)
                    .with_context(|| format!("loading config from {}", path.display()))?,
                None => GameConfig::new(),
            };
            if let Some(seed) = seed {
                game_config = game_config.with_seed(seed);
            }

            let loaded = DeckLoader::for_path(&decks)
                .load_path(&decks)
                .with_context(|| format!("loading decks from {}", decks.display()))?;
            if !loaded.is_playable() {
                tracing::warn!("at least one deck is empty; draws will do nothing");
            }

            let mut round = RoundController::new(loaded, game_config)?;
            println!("Session seed: {}", round.seed());

            let stdin = io::stdin();
            let mut stdout = io::stdout();
            session::run(&mut round, stdin.lock(), &mut stdout)?;
        }
    }
    Ok(())
}
