//! Win/loss statistics across the games of one run

use super::session::GameStatus;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    /// `guess_distribution[n - 1]` counts wins in `n` attempts
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    /// Record a finished game; in-progress games are ignored
    pub fn record(&mut self, status: GameStatus, attempts: usize) {
        match status {
            GameStatus::InProgress => {}
            GameStatus::Lost => self.games_played += 1,
            GameStatus::Won => {
                self.games_played += 1;
                self.games_won += 1;
                if attempts > 0 {
                    if self.guess_distribution.len() < attempts {
                        self.guess_distribution.resize(attempts, 0);
                    }
                    self.guess_distribution[attempts - 1] += 1;
                }
            }
        }
    }

    /// Percentage of played games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_counts_wins_and_losses() {
        let mut stats = Statistics::default();
        stats.record(GameStatus::Won, 3);
        stats.record(GameStatus::Lost, 10);
        stats.record(GameStatus::Won, 3);
        stats.record(GameStatus::Won, 1);

        assert_eq!(stats.games_played, 4);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.guess_distribution, vec![1, 0, 2]);
        assert!((stats.win_rate() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn in_progress_not_recorded() {
        let mut stats = Statistics::default();
        stats.record(GameStatus::InProgress, 2);
        assert_eq!(stats, Statistics::default());
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }
}
