//! Mastermind
//!
//! A code-breaking game: a secret sequence of colors is drawn, the player
//! submits guesses and each guess is scored by exact and color-only matches
//! until the code is cracked or the attempts run out.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::Palette;
//! use mastermind::game::{GameConfig, GameSession};
//!
//! let mut session = GameSession::seeded(GameConfig::default(), 42);
//! let palette = Palette::classic();
//! let guess: Vec<_> = palette.colors()[..4].to_vec();
//!
//! let outcome = session.submit_guess(&guess).unwrap();
//! assert!(outcome.score.exact + outcome.score.color_only <= 4);
//! assert_eq!(outcome.attempt, 1);
//! ```

// Core domain types
pub mod core;

// Session state machine and configuration
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
