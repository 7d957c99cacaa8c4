//! Formatting utilities for terminal output

use crate::core::{Outcome, Status};

/// Turn a guess outcome into the message shown to the player
#[must_use]
pub fn describe_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::RepeatedOrEmptyGuess => {
            "You already tried that letter or didn't enter one.".to_string()
        }
        Outcome::CorrectLetter(letter) => format!("The letter '{letter}' is in the word."),
        Outcome::WordComplete(_) => "Congratulations! You guessed the word.".to_string(),
        Outcome::WrongLetter { letter, remaining } => format!(
            "The letter '{letter}' is not in the word, {remaining} {} left.",
            if *remaining == 1 { "attempt" } else { "attempts" }
        ),
        Outcome::OutOfAttempts { secret, .. } => format!("You lost :( The word was: {secret}"),
        Outcome::RoundOver(Status::Won) => {
            "You already won this round. Start a new one to keep playing.".to_string()
        }
        Outcome::RoundOver(_) => {
            "This round is over. Start a new one to keep playing.".to_string()
        }
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how many attempts have been used
#[must_use]
pub fn attempts_bar(failed: u8, max: u8, width: usize) -> String {
    create_progress_bar(f64::from(failed), f64::from(max), width)
}

/// Comma-separated letters, or `-` when there are none
#[must_use]
pub fn format_letters(letters: &[char]) -> String {
    if letters.is_empty() {
        return "-".to_string();
    }

    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_wrong_letter_pluralizes() {
        let many = Outcome::WrongLetter {
            letter: 'x',
            remaining: 3,
        };
        assert_eq!(
            describe_outcome(&many),
            "The letter 'x' is not in the word, 3 attempts left."
        );

        let one = Outcome::WrongLetter {
            letter: 'y',
            remaining: 1,
        };
        assert_eq!(
            describe_outcome(&one),
            "The letter 'y' is not in the word, 1 attempt left."
        );
    }

    #[test]
    fn describe_loss_reveals_word() {
        let outcome = Outcome::OutOfAttempts {
            letter: 'k',
            secret: "sol".to_string(),
        };
        assert!(describe_outcome(&outcome).ends_with("sol"));
    }

    #[test]
    fn describe_correct_letter() {
        assert_eq!(
            describe_outcome(&Outcome::CorrectLetter('g')),
            "The letter 'g' is in the word."
        );
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn attempts_bar_fills_per_attempt() {
        assert_eq!(attempts_bar(0, 5, 5), "░░░░░");
        assert_eq!(attempts_bar(2, 5, 5), "██░░░");
        assert_eq!(attempts_bar(5, 5, 5), "█████");
    }

    #[test]
    fn format_letters_joins() {
        assert_eq!(format_letters(&[]), "-");
        assert_eq!(format_letters(&['a', 'x']), "a, x");
    }
}
