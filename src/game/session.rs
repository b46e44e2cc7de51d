//! Game session state machine
//!
//! A session owns the secret code and the scored rows of one game:
//!
//! ```text
//! InProgress --(guess scores all exact)----------> Won
//! InProgress --(last attempt used without a win)--> Lost
//! Won | Lost --(reset)---------------------------> InProgress
//! ```
//!
//! Terminal sessions reject guesses with [`GameError::GameOver`] and leave
//! their rows untouched.

use super::buffer::GuessBuffer;
use super::config::GameConfig;
use crate::core::{Code, Color, FeedbackSequence, GameError, Result, ScoreResult, score};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One scored attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptRow {
    pub guess: Code,
    pub score: ScoreResult,
    pub feedback: FeedbackSequence,
}

/// What a successful `submit_guess` reports back to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub score: ScoreResult,
    pub feedback: FeedbackSequence,
    pub status: GameStatus,
    /// 1-based number of the attempt just scored
    pub attempt: usize,
    /// The secret, revealed only once the game is over
    pub secret: Option<Code>,
}

/// A single game of Mastermind
///
/// Single-owner state: callers sharing a session across threads must wrap it
/// in their own lock.
#[derive(Debug)]
pub struct GameSession<R = StdRng> {
    config: GameConfig,
    secret: Code,
    rows: Vec<AttemptRow>,
    attempt: usize,
    status: GameStatus,
    rng: R,
}

impl GameSession<StdRng> {
    /// Start a game with an OS-seeded random generator
    #[must_use]
    pub fn start(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Start a reproducible game from a fixed seed
    #[must_use]
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSession<R> {
    /// Start a game drawing its secret codes from `rng`
    #[must_use]
    pub fn with_rng(config: GameConfig, mut rng: R) -> Self {
        let secret = draw_secret(&config, &mut rng);
        debug!(
            code_length = config.code_length(),
            max_attempts = config.max_attempts(),
            palette = config.palette().len(),
            "game started"
        );

        Self {
            rows: Vec::with_capacity(config.max_attempts()),
            config,
            secret,
            attempt: 0,
            status: GameStatus::InProgress,
            rng,
        }
    }

    /// Score a complete guess and advance the game
    ///
    /// # Errors
    /// - `GameOver` if the game already ended
    /// - `IncompleteGuess` if fewer colors than the code length are given
    /// - `LengthMismatch` if more colors than the code length are given
    /// - `UnknownColor` if a color is not in the palette
    ///
    /// No state changes on error.
    pub fn submit_guess(&mut self, guess: &[Color]) -> Result<SubmitOutcome> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }

        let length = self.config.code_length();
        if guess.len() < length {
            return Err(GameError::IncompleteGuess {
                filled: guess.len(),
                length,
            });
        }
        if guess.len() > length {
            return Err(GameError::LengthMismatch {
                expected: length,
                actual: guess.len(),
            });
        }
        if let Some(unknown) = guess.iter().find(|c| !self.config.palette().contains(c)) {
            return Err(GameError::UnknownColor(unknown.name().to_string()));
        }

        let result = score(self.secret.colors(), guess)?;
        let feedback = FeedbackSequence::from_score(result, length)?;
        let attempt = self.attempt + 1;

        self.rows.push(AttemptRow {
            guess: Code::new(guess.to_vec()),
            score: result,
            feedback: feedback.clone(),
        });

        debug!(
            attempt,
            exact = result.exact,
            color_only = result.color_only,
            "guess scored"
        );

        if result.is_solved(length) {
            self.status = GameStatus::Won;
            info!(attempt, "code cracked");
        } else {
            self.attempt += 1;
            if self.attempt == self.config.max_attempts() {
                self.status = GameStatus::Lost;
                info!(attempts = self.attempt, "out of attempts");
            }
        }

        Ok(SubmitOutcome {
            score: result,
            feedback,
            status: self.status,
            attempt,
            secret: self.revealed_secret().cloned(),
        })
    }

    /// Submit the contents of a guess buffer
    ///
    /// # Errors
    /// Same as [`submit_guess`](Self::submit_guess); a buffer with empty slots
    /// fails with `IncompleteGuess`.
    pub fn submit_buffer(&mut self, buffer: &GuessBuffer) -> Result<SubmitOutcome> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }

        match buffer.to_guess() {
            Some(guess) => self.submit_guess(&guess),
            None => Err(GameError::IncompleteGuess {
                filled: buffer.filled(),
                length: self.config.code_length(),
            }),
        }
    }

    /// Start over with a freshly drawn secret and the same configuration
    pub fn reset(&mut self) {
        self.secret = draw_secret(&self.config, &mut self.rng);
        self.rows.clear();
        self.attempt = 0;
        self.status = GameStatus::InProgress;
        info!("game reset");
    }

    /// Start over with a new configuration
    pub fn reset_with(&mut self, config: GameConfig) {
        self.config = config;
        self.reset();
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// 0-based index of the row the next guess fills
    ///
    /// Stays on the winning row after a win and equals the attempt limit
    /// after a loss.
    #[inline]
    #[must_use]
    pub const fn attempt_index(&self) -> usize {
        self.attempt
    }

    /// Number of guesses scored so far
    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        if self.is_over() {
            0
        } else {
            self.config.max_attempts() - self.attempt
        }
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[AttemptRow] {
        &self.rows
    }

    /// The secret code, once the game is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Code> {
        self.is_over().then_some(&self.secret)
    }
}

fn draw_secret<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Code {
    Code::random(config.palette(), config.code_length(), rng)
        .expect("GameConfig guarantees a palette and a positive code length")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Palette;

    fn palette() -> Palette {
        Palette::new(vec![Color::new("A"), Color::new("B"), Color::new("C")]).unwrap()
    }

    fn colors(names: &str) -> Vec<Color> {
        names.chars().map(|c| Color::new(c.to_string())).collect()
    }

    /// A two-color session whose secret is forced to all "A"
    fn all_a_session(length: usize, max_attempts: usize) -> GameSession {
        let palette = Palette::new(vec![Color::new("A"), Color::new("B")]).unwrap();
        let config = GameConfig::new(palette, length, max_attempts).unwrap();
        let mut session = GameSession::seeded(config, 1);
        session.secret = Code::new(colors(&"A".repeat(length)));
        session
    }

    #[test]
    fn start_state() {
        let session = GameSession::seeded(GameConfig::default(), 7);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.attempt_index(), 0);
        assert!(session.rows().is_empty());
        assert_eq!(session.remaining_attempts(), 10);
        assert!(session.revealed_secret().is_none());
        assert_eq!(session.secret.len(), 4);
        assert!(
            session
                .secret
                .colors()
                .iter()
                .all(|c| session.config().palette().contains(c))
        );
    }

    #[test]
    fn winning_guess_ends_game_without_advancing() {
        let mut session = all_a_session(4, 10);
        session.submit_guess(&colors("BBBB")).unwrap();

        let outcome = session.submit_guess(&colors("AAAA")).unwrap();
        assert_eq!(outcome.status, GameStatus::Won);
        assert_eq!(outcome.score, ScoreResult::new(4, 0));
        assert_eq!(outcome.attempt, 2);
        assert_eq!(outcome.secret, Some(Code::new(colors("AAAA"))));
        assert_eq!(session.attempt_index(), 1);
        assert_eq!(session.attempts_used(), 2);
        assert_eq!(session.remaining_attempts(), 0);
    }

    #[test]
    fn win_on_first_attempt() {
        let mut session = all_a_session(3, 10);
        let outcome = session.submit_guess(&colors("AAA")).unwrap();
        assert_eq!(outcome.status, GameStatus::Won);
        assert_eq!(outcome.attempt, 1);
        assert_eq!(session.attempt_index(), 0);
    }

    #[test]
    fn win_on_last_attempt_is_not_a_loss() {
        let mut session = all_a_session(2, 3);
        session.submit_guess(&colors("BB")).unwrap();
        session.submit_guess(&colors("AB")).unwrap();
        let outcome = session.submit_guess(&colors("AA")).unwrap();
        assert_eq!(outcome.status, GameStatus::Won);
        assert_eq!(outcome.attempt, 3);
    }

    #[test]
    fn exhausting_attempts_loses() {
        let mut session = all_a_session(2, 3);
        for _ in 0..2 {
            let outcome = session.submit_guess(&colors("BB")).unwrap();
            assert_eq!(outcome.status, GameStatus::InProgress);
            assert!(outcome.secret.is_none());
        }

        let outcome = session.submit_guess(&colors("AB")).unwrap();
        assert_eq!(outcome.status, GameStatus::Lost);
        assert_eq!(outcome.attempt, 3);
        assert_eq!(outcome.score, ScoreResult::new(1, 0));
        assert_eq!(outcome.secret, Some(Code::new(colors("AA"))));
        assert_eq!(session.attempt_index(), 3);
        assert_eq!(session.rows().len(), 3);
    }

    #[test]
    fn single_attempt_game() {
        let mut session = all_a_session(1, 1);
        let outcome = session.submit_guess(&colors("B")).unwrap();
        assert_eq!(outcome.status, GameStatus::Lost);
    }

    #[test]
    fn guess_after_game_over_rejected_without_mutation() {
        let mut session = all_a_session(2, 1);
        session.submit_guess(&colors("BB")).unwrap();
        let rows_before = session.rows().to_vec();

        assert_eq!(
            session.submit_guess(&colors("AA")),
            Err(GameError::GameOver)
        );
        assert_eq!(session.rows(), rows_before.as_slice());
        assert_eq!(session.status(), GameStatus::Lost);
    }

    #[test]
    fn incomplete_guess_rejected() {
        let mut session = all_a_session(4, 10);
        assert_eq!(
            session.submit_guess(&colors("AA")),
            Err(GameError::IncompleteGuess {
                filled: 2,
                length: 4
            })
        );
        assert!(session.rows().is_empty());
        assert_eq!(session.attempt_index(), 0);
    }

    #[test]
    fn overlong_guess_rejected() {
        let mut session = all_a_session(2, 10);
        assert_eq!(
            session.submit_guess(&colors("AAA")),
            Err(GameError::LengthMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn unknown_color_rejected() {
        let mut session = all_a_session(2, 10);
        assert_eq!(
            session.submit_guess(&colors("AZ")),
            Err(GameError::UnknownColor("Z".to_string()))
        );
        assert!(session.rows().is_empty());
    }

    #[test]
    fn rows_record_guess_and_feedback() {
        let mut session = all_a_session(4, 10);
        session.submit_guess(&colors("ABBA")).unwrap();

        let row = &session.rows()[0];
        assert_eq!(row.guess, Code::new(colors("ABBA")));
        assert_eq!(row.score, ScoreResult::new(2, 0));
        assert_eq!(row.feedback.count(crate::core::Peg::Exact), 2);
        assert_eq!(row.feedback.len(), 4);
    }

    #[test]
    fn submit_buffer_requires_full_row() {
        let mut session = all_a_session(2, 10);
        let mut buffer = GuessBuffer::new(2);
        buffer.push(Color::new("A"));

        assert_eq!(
            session.submit_buffer(&buffer),
            Err(GameError::IncompleteGuess {
                filled: 1,
                length: 2
            })
        );

        buffer.push(Color::new("A"));
        let outcome = session.submit_buffer(&buffer).unwrap();
        assert_eq!(outcome.status, GameStatus::Won);
        assert_eq!(session.submit_buffer(&buffer), Err(GameError::GameOver));
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = all_a_session(2, 1);
        session.submit_guess(&colors("BB")).unwrap();
        assert!(session.is_over());

        session.reset();
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.attempt_index(), 0);
        assert!(session.rows().is_empty());
        assert!(session.revealed_secret().is_none());
        assert_eq!(session.remaining_attempts(), 1);
        assert_eq!(session.secret.len(), 2);
    }

    #[test]
    fn reset_draws_a_new_secret() {
        // Over many resets a 3-color, length-6 secret cannot stay fixed
        let config = GameConfig::new(palette(), 6, 10).unwrap();
        let mut session = GameSession::seeded(config, 11);
        let first = session.secret.clone();

        let changed = (0..20).any(|_| {
            session.reset();
            session.secret != first
        });
        assert!(changed);
    }

    #[test]
    fn reset_with_new_config() {
        let mut session = GameSession::seeded(GameConfig::default(), 3);
        let config = GameConfig::new(palette(), 6, 2).unwrap();
        session.reset_with(config);

        assert_eq!(session.config().code_length(), 6);
        assert_eq!(session.secret.len(), 6);
        assert_eq!(session.remaining_attempts(), 2);
    }

    #[test]
    fn seeded_sessions_share_secret() {
        let a = GameSession::seeded(GameConfig::default(), 99);
        let b = GameSession::seeded(GameConfig::default(), 99);
        assert_eq!(a.secret, b.secret);
    }

    #[test]
    fn one_color_palette_always_wins_first_try() {
        let palette = Palette::new(vec![Color::new("A")]).unwrap();
        let config = GameConfig::new(palette, 4, 10).unwrap();
        let mut session = GameSession::seeded(config, 5);

        let outcome = session.submit_guess(&colors("AAAA")).unwrap();
        assert_eq!(outcome.status, GameStatus::Won);
    }
}
