//! CLI frontend for the sortilege divination engine.

mod commands;
mod persist;
mod render;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sortilege",
    about = "sortilege — deterministic divination from hash-derived entropy",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a hexagram for a question
    Hexagram {
        /// The question to divine
        #[arg(short, long)]
        query: String,

        /// Fix the casting moment (RFC 3339) instead of using now
        #[arg(long)]
        timestamp: Option<String>,

        /// Omit the nuclear hexagram
        #[arg(long)]
        no_nuclear: bool,

        /// Stretching iterations per entropy slot
        #[arg(long, default_value_t = sortilege_core::DEFAULT_ITERATIONS)]
        iterations: u32,

        /// Derivation method: pbkdf2 or iterated
        #[arg(long, default_value = "pbkdf2")]
        digest: String,

        /// Save the reading to a JSON file (a .jsonl path appends)
        #[arg(long)]
        save: Option<PathBuf>,

        /// Print the reading as JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Draw a tarot spread for a question
    Tarot {
        /// The question to divine
        #[arg(short, long)]
        query: String,

        /// Number of cards: 1, 3 or 10
        #[arg(short, long, default_value_t = 3)]
        spread: u32,

        /// Draw every card upright
        #[arg(long)]
        no_reversals: bool,

        /// Fix the drawing moment (RFC 3339) instead of using now
        #[arg(long)]
        timestamp: Option<String>,

        /// Stretching iterations per entropy slot
        #[arg(long, default_value_t = sortilege_core::DEFAULT_ITERATIONS)]
        iterations: u32,

        /// Derivation method: pbkdf2 or iterated
        #[arg(long, default_value = "pbkdf2")]
        digest: String,

        /// Save the reading to a JSON file (a .jsonl path appends)
        #[arg(long)]
        save: Option<PathBuf>,

        /// Print the reading as JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Lay the deck out as a hash pool and reveal cards by prefix
    Pool {
        /// The question that shapes the deck
        #[arg(short, long)]
        query: String,

        /// Number of cards to reveal: 1, 3 or 10
        #[arg(short, long, default_value_t = 3)]
        spread: u32,

        /// Enable card reversals, doubling the hash pool
        #[arg(long)]
        reversals: bool,

        /// Stretching iterations per entropy slot
        #[arg(long, default_value_t = sortilege_core::DEFAULT_ITERATIONS)]
        iterations: u32,

        /// Derivation method: pbkdf2 or iterated
        #[arg(long, default_value = "pbkdf2")]
        digest: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Hexagram {
            query,
            timestamp,
            no_nuclear,
            iterations,
            digest,
            save,
            json,
        } => commands::build_config(iterations, &digest).and_then(|config| {
            commands::hexagram::run(
                &query,
                timestamp.as_deref(),
                no_nuclear,
                config,
                save.as_deref(),
                json,
            )
        }),
        Commands::Tarot {
            query,
            spread,
            no_reversals,
            timestamp,
            iterations,
            digest,
            save,
            json,
        } => commands::build_config(iterations, &digest).and_then(|config| {
            commands::tarot::run(
                &query,
                spread,
                no_reversals,
                timestamp.as_deref(),
                config,
                save.as_deref(),
                json,
            )
        }),
        Commands::Pool {
            query,
            spread,
            reversals,
            iterations,
            digest,
        } => commands::build_config(iterations, &digest)
            .and_then(|config| commands::pool::run(&query, spread, reversals, config)),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
