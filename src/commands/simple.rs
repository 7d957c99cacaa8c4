//! Simple interactive CLI mode
//!
//! Line-based Hangman without the TUI

use super::SessionStats;
use crate::core::{GuessEngine, WordPool, submit_letter};
use crate::output::display::{write_outcome, write_round};
use crate::solver::{FrequencyStrategy, Strategy};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

enum RoundEnd {
    Again,
    Quit,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if the pool is empty or on an I/O error reading input.
pub fn run_simple<R: Rng>(engine: &mut GuessEngine<R>, pool: &WordPool) -> Result<SessionStats> {
    let stdin = io::stdin();
    run_simple_with(engine, pool, &mut stdin.lock(), &mut io::stdout())
}

/// Run the simple mode over arbitrary input and output streams
///
/// End of input quits the session.
///
/// # Errors
///
/// Returns an error if the pool is empty or on an I/O error.
pub fn run_simple_with<R: Rng, I: BufRead, O: Write>(
    engine: &mut GuessEngine<R>,
    pool: &WordPool,
    input: &mut I,
    out: &mut O,
) -> Result<SessionStats> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                     Hangman - Simple Mode                    ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the word one letter at a time.")?;
    writeln!(out, "Commands: 'hint' for a suggestion, 'new' for a new word, 'quit' to exit\n")?;

    let mut stats = SessionStats::default();

    loop {
        match play_round(engine, pool, input, out, &mut stats)? {
            RoundEnd::Again => {
                writeln!(out, "\n🔄 New round started!")?;
            }
            RoundEnd::Quit => {
                writeln!(
                    out,
                    "\n👋 Thanks for playing! Rounds: {} | Won: {} | Lost: {}\n",
                    stats.rounds, stats.won, stats.lost
                )?;
                return Ok(stats);
            }
        }
    }
}

fn play_round<R: Rng, I: BufRead, O: Write>(
    engine: &mut GuessEngine<R>,
    pool: &WordPool,
    input: &mut I,
    out: &mut O,
    stats: &mut SessionStats,
) -> Result<RoundEnd> {
    let mut state = engine.start_round(pool)?;

    loop {
        write_round(out, &state)?;

        let Some(line) = get_user_input(input, out, "Letter")? else {
            return Ok(RoundEnd::Quit);
        };

        match line.to_lowercase().as_str() {
            "quit" | "exit" => return Ok(RoundEnd::Quit),
            "new" => return Ok(RoundEnd::Again),
            "hint" => {
                if let Some(letter) =
                    FrequencyStrategy.select_letter(&state, pool, engine.rng_mut())
                {
                    writeln!(out, "💡 Try '{}'", letter.to_string().bright_cyan().bold())?;
                }
            }
            _ => {
                let (next, outcome) = submit_letter(&state, &line);
                state = next;
                write_outcome(out, &outcome)?;

                if state.is_over() {
                    stats.record(state.status());
                    write_round(out, &state)?;

                    return match get_user_input(input, out, "Play again? (yes/no)")? {
                        Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                            Ok(RoundEnd::Again)
                        }
                        _ => Ok(RoundEnd::Quit),
                    };
                }
            }
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input<I: BufRead, O: Write>(
    input: &mut I,
    out: &mut O,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
