//! Score command
//!
//! Scores a guess against a given secret without starting a game. Tokens are
//! opaque: any comma-separated strings work, not only palette colors.

use crate::core::{FeedbackSequence, GameError, ScoreResult, score};

/// A scored secret/guess pair
pub struct ScoreReport {
    pub secret: Vec<String>,
    pub guess: Vec<String>,
    pub result: ScoreResult,
    pub feedback: FeedbackSequence,
}

/// Split a comma-separated token list, trimming each token
#[must_use]
pub fn parse_tokens(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Score `guess` against `secret`, both comma-separated token lists
///
/// # Errors
/// Returns `LengthMismatch` if the lists differ in length, or
/// `InvalidArgument` if they are empty.
pub fn score_codes(secret: &str, guess: &str) -> Result<ScoreReport, GameError> {
    let secret = parse_tokens(secret);
    let guess = parse_tokens(guess);

    if secret.is_empty() {
        return Err(GameError::InvalidArgument("secret is empty".to_string()));
    }

    let result = score(&secret, &guess)?;
    let feedback = FeedbackSequence::from_score(result, secret.len())?;

    Ok(ScoreReport {
        secret,
        guess,
        result,
        feedback,
    })
}
