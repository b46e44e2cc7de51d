//! Game flow
//!
//! Configuration, the pending guess buffer and the session state machine
//! that scores guesses and decides when a game ends.

mod buffer;
mod config;
mod session;
mod stats;

pub use buffer::GuessBuffer;
pub use config::{DEFAULT_CODE_LENGTH, DEFAULT_MAX_ATTEMPTS, GameConfig};
pub use session::{AttemptRow, GameSession, GameStatus, SubmitOutcome};
pub use stats::Statistics;
