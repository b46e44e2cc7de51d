//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one guess per line, typed as color names
//! or 1-based palette numbers.

use crate::core::{Color, GameError, Palette};
use crate::game::{GameSession, Statistics};
use crate::output::{
    print_board, print_game_over, print_outcome, print_palette, print_statistics,
};
use anyhow::Result;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Parse a guess like `cyan lime 3 3` or `1,2,3,4` against a palette
///
/// Tokens are separated by whitespace or commas. A token is either a color
/// name (case-insensitive) or a 1-based palette position.
///
/// # Errors
/// Returns `UnknownColor` for a token that names no palette color.
pub fn parse_guess(input: &str, palette: &Palette) -> Result<Vec<Color>, GameError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            let by_index = token
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| palette.get(i));

            by_index
                .or_else(|| palette.find(token))
                .cloned()
                .ok_or_else(|| GameError::UnknownColor(token.to_string()))
        })
        .collect()
}

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_simple<R: Rng>(session: &mut GameSession<R>) -> Result<Statistics> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    play_lines(session, &mut input)
}

/// Play games reading commands and guesses from `input` until it ends or the
/// player quits
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn play_lines<R: Rng, I: BufRead>(
    session: &mut GameSession<R>,
    input: &mut I,
) -> Result<Statistics> {
    let mut stats = Statistics::default();

    print_welcome(session);
    print_palette(session);

    loop {
        let prompt = format!(
            "\nGuess {}/{}",
            session.attempt_index() + 1,
            session.config().max_attempts()
        );
        let Some(line) = get_user_input(&prompt, input)? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                session.reset();
                println!("\n🔄 New game started!");
                print_palette(session);
                continue;
            }
            "board" | "b" => {
                print_board(session);
                continue;
            }
            "help" | "h" | "?" => {
                print_welcome(session);
                print_palette(session);
                continue;
            }
            _ => {}
        }

        let guess = match parse_guess(&line, session.config().palette()) {
            Ok(guess) => guess,
            Err(err) => {
                println!("❌ {err}");
                continue;
            }
        };

        let outcome = match session.submit_guess(&guess) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!(%err, "guess rejected");
                println!("❌ {err}");
                continue;
            }
        };

        print_outcome(&outcome, session.config().max_attempts());

        if let Some(secret) = &outcome.secret {
            stats.record(outcome.status, outcome.attempt);
            print_game_over(
                outcome.status,
                outcome.attempt,
                session.config().max_attempts(),
                secret,
            );
            print_statistics(&stats);

            let again = get_user_input("\nPlay again? (yes/no)", input)?.unwrap_or_default();
            if matches!(again.to_lowercase().as_str(), "yes" | "y") {
                session.reset();
                println!("\n🔄 New game started!");
                print_palette(session);
            } else {
                break;
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(stats)
}

fn print_welcome<R: Rng>(session: &GameSession<R>) {
    let config = session.config();
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Mastermind - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "A secret code of {} colors has been chosen. Colors may repeat.",
        config.code_length()
    );
    println!("Type a guess as color names or palette numbers, e.g. '1 2 3 4'.");
    println!("After each guess you get feedback:");
    println!("  🟢 correct color in the correct position");
    println!("  🟡 correct color in the wrong position");
    println!("  🔴 color not in the code");
    println!(
        "Crack the code within {} attempts!\n",
        config.max_attempts()
    );
    println!("Commands: 'board' to show guesses, 'new' for a new game, 'quit' to exit\n");
}

/// Read one trimmed line after printing a prompt; `None` at end of input
fn get_user_input<I: BufRead>(prompt: &str, input: &mut I) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use std::io::Cursor;

    fn one_color_session(length: usize, max_attempts: usize) -> GameSession {
        let palette = Palette::new(vec![Color::new("Red")]).unwrap();
        GameSession::seeded(GameConfig::new(palette, length, max_attempts).unwrap(), 1)
    }

    #[test]
    fn parse_guess_by_name_and_index() {
        let palette = Palette::classic();
        let guess = parse_guess("cyan 2, LIME  6", &palette).unwrap();
        let names: Vec<&str> = guess.iter().map(Color::name).collect();
        assert_eq!(names, ["Cyan", "Orange", "Lime", "Violet"]);
    }

    #[test]
    fn parse_guess_rejects_unknown_tokens() {
        let palette = Palette::classic();
        assert_eq!(
            parse_guess("cyan magenta", &palette),
            Err(GameError::UnknownColor("magenta".to_string()))
        );
        assert_eq!(
            parse_guess("0", &palette),
            Err(GameError::UnknownColor("0".to_string()))
        );
        assert_eq!(
            parse_guess("7", &palette),
            Err(GameError::UnknownColor("7".to_string()))
        );
    }

    #[test]
    fn parse_guess_empty_input() {
        assert_eq!(parse_guess("  ", &Palette::classic()), Ok(vec![]));
    }

    #[test]
    fn scripted_win_then_quit() {
        let mut session = one_color_session(3, 10);
        let mut input = Cursor::new("red red\nred red red\nno\n");

        let stats = play_lines(&mut session, &mut input).unwrap();
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert!(session.is_over());
    }

    #[test]
    fn scripted_play_again() {
        let mut session = one_color_session(2, 10);
        let mut input = Cursor::new("1 1\ny\nboard\nred red\nn\n");

        let stats = play_lines(&mut session, &mut input).unwrap();
        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.games_won, 2);
    }

    #[test]
    fn end_of_input_stops_loop() {
        let mut session = one_color_session(2, 10);
        let mut input = Cursor::new("red\n");

        let stats = play_lines(&mut session, &mut input).unwrap();
        assert_eq!(stats.games_played, 0);
        assert!(session.rows().is_empty());
    }
}
