//! Hangman - CLI
//!
//! Word-guessing game with TUI and CLI modes, plus a strategy simulator.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{SimulationConfig, run_simple, run_simulation},
    core::{GuessEngine, WordPool},
    logging::{LogTarget, init_tracing},
    output::{print_pool_summary, print_simulation_result},
    solver::StrategyType,
    wordlists::{WORDS, loader::pool_from_slice},
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the secret word one letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a text or JSON file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for reproducible word selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log filter, e.g. 'debug' or 'hangman=trace' (RUST_LOG takes precedence)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without the TUI
    Simple,

    /// Let a letter strategy play many rounds and report statistics
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "1000")]
        rounds: usize,

        /// Strategy: frequency (default), alphabetical, random
        #[arg(short, long, default_value = "frequency")]
        strategy: String,
    },

    /// Show a summary of the selected word pool
    Pool,
}

/// Load the word pool based on the -w flag
///
/// - "embedded": the pool compiled into the binary
/// - "<path>": one word per line, or a JSON file with a `words`/`palabras` array
fn load_pool(wordlist: &str) -> Result<WordPool> {
    use hangman::wordlists::loader::load_from_file;

    match wordlist {
        "embedded" => Ok(pool_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("cannot load word list '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let owns_terminal = matches!(command, Commands::Play);
    init_tracing(
        &cli.log_level,
        LogTarget::select(cli.log_file.as_deref(), owns_terminal),
    )?;

    let pool = load_pool(&cli.wordlist)?;
    info!(source = %cli.wordlist, words = pool.len(), "word pool loaded");

    match command {
        Commands::Play => run_play_command(cli.seed, &pool),
        Commands::Simple => run_simple_command(cli.seed, &pool),
        Commands::Simulate { rounds, strategy } => {
            run_simulate_command(&strategy, rounds, cli.seed, &pool)
        }
        Commands::Pool => {
            print_pool_summary(&pool, &cli.wordlist);
            Ok(())
        }
    }
}

fn run_simulate_command(
    strategy_name: &str,
    rounds: usize,
    seed: Option<u64>,
    pool: &WordPool,
) -> Result<()> {
    let strategy = StrategyType::from_name(strategy_name);
    let seed = seed.unwrap_or_else(rand::random);

    println!(
        "Simulating {rounds} rounds with the {} strategy (seed {seed})...",
        strategy.name()
    );

    let result = run_simulation(&strategy, pool, &SimulationConfig::new(rounds, seed))?;
    print_simulation_result(&result, strategy.name());
    Ok(())
}

fn run_simple_command(seed: Option<u64>, pool: &WordPool) -> Result<()> {
    let mut engine = GuessEngine::from_seed(seed);
    run_simple(&mut engine, pool).map(|_| ())
}

fn run_play_command(seed: Option<u64>, pool: &WordPool) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(GuessEngine::from_seed(seed), pool);
    run_tui(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_embedded_pool_and_play() {
        let cli = Cli::parse_from(["hangman"]);
        assert_eq!(cli.wordlist, "embedded");
        assert_eq!(cli.log_level, "warn");
        assert!(cli.command.is_none());
    }

    #[test]
    fn simulate_flags_parse() {
        let cli = Cli::parse_from(["hangman", "--seed", "3", "simulate", "-n", "20", "-s", "alpha"]);
        assert_eq!(cli.seed, Some(3));
        match cli.command {
            Some(Commands::Simulate { rounds, strategy }) => {
                assert_eq!(rounds, 20);
                assert_eq!(strategy, "alpha");
            }
            _ => panic!("expected simulate"),
        }
    }

    #[test]
    fn embedded_pool_loads() {
        let pool = load_pool("embedded").unwrap();
        assert!(!pool.is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_pool("/nonexistent/words.txt").is_err());
    }
}
