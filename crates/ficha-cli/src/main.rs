//! CLI frontend for the Ficha character-sheet toolkit.

mod commands;

use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ficha",
    about = "Ficha: character sheets and random tables for d20 games",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine activity to stderr (overridden by FICHA_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute modifiers, proficiency, skill totals, and point-buy cost
    Stats(StatsArgs),

    /// Generate a set of attribute scores
    Roll {
        /// Method: roll (4d6 drop lowest), standard, or reset
        #[arg(short, long, default_value = "roll")]
        method: String,

        /// RNG seed for reproducible rolls (default: random)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// List the eighteen skills and their governing attributes
    Skills,

    /// List characters in the sample roster
    List {
        /// Search name, race, or class (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by edition (5e or 3.5)
        #[arg(short, long)]
        edition: Option<String>,

        /// Filter by exact class name
        #[arg(short, long)]
        class: Option<String>,
    },

    /// Roll on a random table (names, locations, treasures)
    Table {
        /// Table key
        name: String,

        /// Number of rolls
        #[arg(short, long, default_value = "1")]
        times: u32,

        /// RNG seed for reproducible rolls
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

#[derive(Args)]
struct StatsArgs {
    /// Strength score
    #[arg(long = "str", default_value = "10", allow_negative_numbers = true)]
    strength: i32,

    /// Dexterity score
    #[arg(long = "dex", default_value = "10", allow_negative_numbers = true)]
    dexterity: i32,

    /// Constitution score
    #[arg(long = "con", default_value = "10", allow_negative_numbers = true)]
    constitution: i32,

    /// Intelligence score
    #[arg(long = "int", default_value = "10", allow_negative_numbers = true)]
    intelligence: i32,

    /// Wisdom score
    #[arg(long = "wis", default_value = "10", allow_negative_numbers = true)]
    wisdom: i32,

    /// Charisma score
    #[arg(long = "cha", default_value = "10", allow_negative_numbers = true)]
    charisma: i32,

    /// Character level
    #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
    level: i32,

    /// Skill bonus as NAME=BONUS (repeatable), e.g. --skill stealth=2
    #[arg(long = "skill")]
    skills: Vec<String>,

    /// Print JSON instead of tables
    #[arg(long)]
    json: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("FICHA_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Stats(args) => commands::stats::run(&commands::stats::StatsInput {
            scores: [
                args.strength,
                args.dexterity,
                args.constitution,
                args.intelligence,
                args.wisdom,
                args.charisma,
            ],
            level: args.level,
            skills: args.skills,
            json: args.json,
        }),
        Commands::Roll { method, seed } => commands::roll::run(&method, seed),
        Commands::Skills => commands::skills::run(),
        Commands::List {
            search,
            edition,
            class,
        } => commands::list::run(search.as_deref(), edition.as_deref(), class.as_deref()),
        Commands::Table { name, times, seed } => commands::table::run(&name, times, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
