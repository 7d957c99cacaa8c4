//! Display functions for game rounds and command results

use super::formatters::{attempts_bar, describe_outcome, format_letters};
use crate::commands::SimulationResult;
use crate::core::{GameState, MAX_ATTEMPTS, Outcome, WordPool, render_mask};
use colored::Colorize;
use std::io::{self, Write};

/// Write the visible part of a round: mask, attempts and misses
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_round<W: Write>(out: &mut W, state: &GameState) -> io::Result<()> {
    let mask = render_mask(state).to_string().to_uppercase();

    writeln!(out, "\n  {}", mask.bright_yellow().bold())?;
    writeln!(
        out,
        "  Failed attempts: [{}] {} of {}",
        attempts_bar(state.failed_attempts(), state.max_attempts(), 10).red(),
        state.failed_attempts(),
        state.max_attempts()
    )?;
    writeln!(out, "  Misses: {}\n", format_letters(&state.wrong_letters()))
}

/// Write a guess outcome, colored by how it went
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome) -> io::Result<()> {
    let text = describe_outcome(outcome);
    let styled = match outcome {
        Outcome::CorrectLetter(_) => text.green(),
        Outcome::WordComplete(_) => format!("🎉 {text}").green().bold(),
        Outcome::WrongLetter { .. } => text.yellow(),
        Outcome::OutOfAttempts { .. } => format!("💀 {text}").red().bold(),
        Outcome::RepeatedOrEmptyGuess | Outcome::RoundOver(_) => text.bright_black(),
    };
    writeln!(out, "{styled}")
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult, strategy: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {strategy}");
    println!("   Rounds played:    {}", result.total_rounds);
    println!(
        "   Won:              {} {}",
        result.won,
        format!("({:.1}%)", result.win_rate()).green()
    );
    if result.lost > 0 {
        println!(
            "   Lost:             {} {}",
            result.lost,
            format!("({:.1}%)", 100.0 - result.win_rate()).red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    if result.won > 0 {
        println!(
            "\n📈 {}",
            "Failed attempts in won rounds:".bright_cyan().bold()
        );
        for failed in 0..MAX_ATTEMPTS {
            let count = result.failed_distribution.get(&failed).copied().unwrap_or(0);
            let pct = count as f64 / result.won as f64 * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {failed}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.lost_words.is_empty() {
        println!("\n😰 {}", "Words that won against the strategy".yellow().bold());
        for word in result.lost_words.iter().take(10) {
            println!("   {}", word.to_uppercase().yellow());
        }
        if result.lost_words.len() > 10 {
            println!("   ... and {} more", result.lost_words.len() - 10);
        }
    }
}

/// Print a summary of the loaded word pool
pub fn print_pool_summary(pool: &WordPool, source: &str) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Word pool: {}", source.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    println!("   Words:    {}", pool.len());
    match pool.length_range() {
        Some((min, max)) => println!("   Lengths:  {min}-{max} letters"),
        None => println!("   {}", "The pool is empty: no round can be played.".red()),
    }

    let preview: Vec<&str> = pool.iter().take(8).map(|w| w.text()).collect();
    if !preview.is_empty() {
        println!("   Sample:   {}", preview.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GuessEngine, submit_letter};

    fn render(state: &GameState) -> String {
        let mut out = Vec::new();
        write_round(&mut out, state).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn round_shows_mask_and_misses() {
        let state = GuessEngine::seeded(0)
            .start_round(&WordPool::from_strs(["gato"]))
            .unwrap();
        let (state, _) = submit_letter(&state, "g");
        let (state, _) = submit_letter(&state, "x");

        let text = render(&state);
        assert!(text.contains("G _ _ _"));
        assert!(text.contains("1 of 5"));
        assert!(text.contains("Misses: x"));
    }

    #[test]
    fn outcome_text_written() {
        let mut out = Vec::new();
        write_outcome(&mut out, &Outcome::CorrectLetter('g')).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("The letter 'g' is in the word."));
    }
}
