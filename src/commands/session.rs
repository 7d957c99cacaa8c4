//! Per-session round statistics shared by the play front-ends

use crate::core::Status;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub rounds: usize,
    pub won: usize,
    pub lost: usize,
}

impl SessionStats {
    /// Record a finished round; in-progress rounds are ignored
    pub fn record(&mut self, status: Status) {
        match status {
            Status::Won => self.won += 1,
            Status::Lost => self.lost += 1,
            Status::InProgress => return,
        }
        self.rounds += 1;
    }

    /// Percentage of finished rounds that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.won as f64 / self.rounds as f64 * 100.0
        }
    }
}
