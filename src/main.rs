//! Mastermind - CLI
//!
//! Code-breaking game with TUI and simple line modes, plus a standalone scorer.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use mastermind::{
    commands::{run_simple, score_codes},
    core::Palette,
    game::{DEFAULT_CODE_LENGTH, DEFAULT_MAX_ATTEMPTS, GameConfig, GameSession},
    output::{print_score_result, print_statistics},
};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Crack the secret color code within a limited number of attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Palette as comma-separated colors, each 'Name' or 'Name:#rrggbb' (default: 6 classic colors)
    #[arg(short, long, global = true)]
    colors: Option<String>,

    /// Number of colors in the secret code
    #[arg(short, long, global = true, default_value_t = DEFAULT_CODE_LENGTH)]
    length: usize,

    /// Guesses allowed before the game is lost
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,

    /// Seed for reproducible secret codes
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without the TUI
    Simple,

    /// Score a guess against a secret, both comma-separated (e.g. A,B,C,D A,C,B,X)
    Score {
        /// The secret code
        secret: String,

        /// The guess to score
        guess: String,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Build the game configuration from the global flags
fn build_config(cli: &Cli) -> Result<GameConfig> {
    let palette = match &cli.colors {
        Some(spec) => spec.parse::<Palette>()?,
        None => Palette::classic(),
    };

    Ok(GameConfig::new(palette, cli.length, cli.attempts)?)
}

fn new_session(config: GameConfig, seed: Option<u64>) -> GameSession {
    match seed {
        Some(seed) => GameSession::seeded(config, seed),
        None => GameSession::start(config),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Default to Play mode if no command given
    match &cli.command {
        None | Some(Commands::Play) => run_play_command(&cli),
        Some(Commands::Simple) => run_simple_command(&cli),
        Some(Commands::Score { secret, guess }) => run_score_command(secret, guess),
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let config = build_config(cli)?;
    info!(
        length = config.code_length(),
        attempts = config.max_attempts(),
        "starting TUI"
    );

    let app = App::new(new_session(config, cli.seed));
    let stats = run_tui(app)?;
    if stats.games_played > 0 {
        print_statistics(&stats);
    }
    Ok(())
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let config = build_config(cli)?;
    let mut session = new_session(config, cli.seed);
    run_simple(&mut session)?;
    Ok(())
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let report = score_codes(secret, guess)?;
    print_score_result(
        &report.secret,
        &report.guess,
        report.result,
        &report.feedback,
    );
    Ok(())
}
