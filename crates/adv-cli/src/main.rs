//! Terminal front end for the adventure engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "adv",
    about = "A small choice-based text adventure",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a world file
    Check {
        /// Path to the world JSON file
        world: PathBuf,
    },

    /// List the rooms of a world
    Rooms {
        /// World JSON file (default: built-in demo world)
        #[arg(short, long)]
        world: Option<PathBuf>,
    },

    /// Play a world interactively
    Play {
        /// World JSON file (default: built-in demo world)
        #[arg(short, long)]
        world: Option<PathBuf>,

        /// List exits in room descriptions
        #[arg(long)]
        exits: bool,

        /// Do not record the choice history
        #[arg(long)]
        no_history: bool,

        /// Write the choice history as JSON when the game ends
        #[arg(short, long)]
        transcript: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { world } => commands::check::run(&world),
        Commands::Rooms { world } => commands::rooms::run(world.as_deref()),
        Commands::Play {
            world,
            exits,
            no_history,
            transcript,
        } => commands::play::run(
            world.as_deref(),
            exits,
            !no_history,
            transcript.as_deref(),
        ),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
