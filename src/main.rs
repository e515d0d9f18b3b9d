//! # BRC Dungeon Command Line
//!
//! Generates dungeon layouts from the command line and checks saved layouts.

use brc_dungeon::config::{DEFAULT_DUNGEON_SIZE, MAX_CLI_SIZE};
use brc_dungeon::generation::utils::{create_rng, entropy_rng};
use brc_dungeon::{
    load_catalog_or_fallback, Catalog, Difficulty, DungeonGenerator, DungeonLayout,
    DungeonResult, GenerationRequest,
};
use clap::{Parser, Subcommand};
use log::{error, info};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Command line arguments for the dungeon generator.
#[derive(Parser, Debug)]
#[command(name = "brc-dungeon")]
#[command(about = "Procedural dungeon layouts with branching paths, enemies and items")]
#[command(version)]
struct Args {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a layout and print it as JSON
    Generate(GenerateArgs),
    /// Validate a previously generated layout file
    Check {
        /// Layout JSON file to check
        layout: PathBuf,
    },
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Steps from start to the boss arena
    #[arg(short, long, default_value_t = DEFAULT_DUNGEON_SIZE)]
    #[arg(value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_CLI_SIZE)))]
    size: u32,

    /// Difficulty (easy, medium, hard)
    #[arg(short, long, default_value = "medium")]
    difficulty: Difficulty,

    /// Label stored with the layout; a UUID is generated when omitted
    #[arg(long)]
    seed: Option<String>,

    /// Seed for the random number generator, for reproducible layouts
    #[arg(long)]
    rng_seed: Option<u64>,

    /// Registry JSON file with enemy and item records
    #[arg(long)]
    registry: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Write the layout to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting brc-dungeon v{}", brc_dungeon::VERSION);

    let result = match args.command {
        Command::Generate(generate) => run_generate(generate),
        Command::Check { layout } => run_check(&layout),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .target(env_logger::Target::Stderr)
        .init();
}

fn run_generate(args: GenerateArgs) -> DungeonResult<()> {
    let catalog = match &args.registry {
        Some(path) => load_catalog_or_fallback(path),
        None => Catalog::fallback(),
    };

    let mut request = GenerationRequest::new(args.size, args.difficulty, catalog);
    request.seed = args.seed;

    let mut rng = match args.rng_seed {
        Some(seed) => {
            info!("Using random number generator seed {}", seed);
            create_rng(seed)
        }
        None => entropy_rng(),
    };

    let layout = DungeonGenerator::validating().generate_layout(&request, &mut rng)?;
    layout.validate()?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&layout)?
    } else {
        serde_json::to_string(&layout)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, json)?;
            info!("Wrote layout to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }

    Ok(())
}

fn run_check(path: &Path) -> DungeonResult<()> {
    let contents = fs::read_to_string(path)?;
    let layout: DungeonLayout = serde_json::from_str(&contents)?;
    layout.validate()?;

    info!(
        "Layout '{}' is valid: {} positions, boss {}",
        layout.seed,
        layout.paths.len(),
        layout.boss().unwrap_or("absent")
    );

    Ok(())
}
