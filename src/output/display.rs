//! Display functions for game results

use super::formatters::{color_swatch, colors_to_swatches, create_progress_bar, feedback_to_emoji};
use crate::core::{Code, FeedbackSequence, ScoreResult};
use crate::game::{GameSession, GameStatus, Statistics, SubmitOutcome};
use colored::Colorize;
use rand::Rng;

/// Print the palette with 1-based indices for input
pub fn print_palette<R: Rng>(session: &GameSession<R>) {
    let entries: Vec<String> = session
        .config()
        .palette()
        .iter()
        .enumerate()
        .map(|(i, color)| format!("{} {}", (i + 1).to_string().bright_black(), color_swatch(color)))
        .collect();
    println!("Palette: {}", entries.join("   "));
}

/// Print every scored row, oldest first
pub fn print_board<R: Rng>(session: &GameSession<R>) {
    let max = session.config().max_attempts();

    println!("\n{}", "─".repeat(60).cyan());
    for (i, row) in session.rows().iter().enumerate() {
        println!(
            "{}. {}   {}",
            format!("{:>3}", i + 1).bright_black(),
            colors_to_swatches(row.guess.colors()),
            feedback_to_emoji(&row.feedback)
        );
    }
    if session.rows().is_empty() {
        println!("     {}", "No guesses yet".bright_black());
    }
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Attempts: [{}] {}/{}",
        create_progress_bar(session.attempts_used(), max, 20),
        session.attempts_used(),
        max
    );
}

/// Print the feedback for one scored guess
pub fn print_outcome(outcome: &SubmitOutcome, max_attempts: usize) {
    println!(
        "Try {}/{}: {}  ({} exact, {} color only)",
        outcome.attempt,
        max_attempts,
        feedback_to_emoji(&outcome.feedback),
        outcome.score.exact.to_string().green().bold(),
        outcome.score.color_only.to_string().yellow().bold()
    );
}

/// Print the end-of-game banner with the revealed code
pub fn print_game_over(status: GameStatus, attempt: usize, max_attempts: usize, secret: &Code) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    match status {
        GameStatus::Won => {
            println!(
                "{}",
                "   🎉  Y O U   W I N   M A S T E R M I N D !  🎉"
                    .bright_green()
                    .bold()
            );
            println!(
                "\n  You cracked the code on try #{}!",
                attempt.to_string().bright_cyan().bold()
            );
        }
        GameStatus::Lost => {
            println!("{}", "   💀  G A M E   O V E R  💀".bright_red().bold());
            println!("\n  You used all {max_attempts} tries.");
        }
        GameStatus::InProgress => {}
    }
    println!("\n  The code was: {}", colors_to_swatches(secret.colors()));
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print statistics for the games played so far
pub fn print_statistics(stats: &Statistics) {
    println!(
        "\nGames: {} | Won: {} | Win rate: {:.0}%",
        stats.games_played,
        stats.games_won,
        stats.win_rate()
    );

    let total = stats.games_won;
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        if count > 0 {
            println!(
                "  {:>2}: {} {count}",
                i + 1,
                create_progress_bar(count, total, 30).green()
            );
        }
    }
}

/// Print a standalone score, as produced by the `score` command
pub fn print_score_result(
    secret: &[String],
    guess: &[String],
    result: ScoreResult,
    feedback: &FeedbackSequence,
) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Secret: {}", secret.join(", ").bright_yellow().bold());
    println!("Guess:  {}", guess.join(", ").bright_white().bold());
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Exact: {}   Color only: {}   Feedback: {}",
        result.exact.to_string().green().bold(),
        result.color_only.to_string().yellow().bold(),
        feedback_to_emoji(feedback)
    );
}
