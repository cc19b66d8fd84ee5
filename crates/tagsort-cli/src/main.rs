//! tagsort CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tagsort", version, about = "Terminal tag-sorting exercise")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an exercise interactively
    Play {
        /// Path to the catalog JSON file
        #[arg(long)]
        catalog: PathBuf,

        /// Answer set to play
        #[arg(long, default_value = "default")]
        answer_set: String,

        /// RNG seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,

        /// Save the last evaluation result as JSON to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Validate a catalog JSON file
    Validate {
        /// Path to the catalog JSON file
        #[arg(long)]
        catalog: PathBuf,
    },

    /// List answer sets in a catalog
    ListSets {
        /// Path to the catalog JSON file
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Create a starter catalog file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tagsort=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            catalog,
            answer_set,
            seed,
            report,
        } => commands::play::execute(catalog, answer_set, seed, report),
        Commands::Validate { catalog } => commands::validate::execute(catalog),
        Commands::ListSets { catalog } => commands::list_sets::execute(catalog),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
