//! TUI rendering with ratatui
//!
//! Board, palette and overlays for the Mastermind interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Color as PegColor, Peg};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Fallback colors for palette entries without an RGB value
const FALLBACK_COLORS: [Color; 8] = [
    Color::Cyan,
    Color::LightRed,
    Color::LightGreen,
    Color::Magenta,
    Color::Blue,
    Color::LightMagenta,
    Color::Yellow,
    Color::White,
];

const EMPTY_SLOT: Color = Color::DarkGray;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(4), // Palette
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Info
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_palette(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    match app.input_mode {
        InputMode::Help => render_help(f, app),
        InputMode::GameOver => render_game_over(f, app),
        InputMode::Playing => {}
    }
}

/// Terminal color for a palette color
fn display_color(app: &App, color: &PegColor) -> Color {
    match color.rgb() {
        Some((r, g, b)) => Color::Rgb(r, g, b),
        None => {
            let index = app.session.config().palette().position(color).unwrap_or(0);
            FALLBACK_COLORS[index % FALLBACK_COLORS.len()]
        }
    }
}

fn peg_color(peg: Peg) -> Color {
    match peg {
        Peg::Exact => Color::Rgb(0x39, 0xff, 0x14),
        Peg::ColorOnly => Color::Rgb(0xf8, 0xff, 0x00),
        Peg::None => Color::Rgb(0xff, 0x55, 0x55),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let config = app.session.config();
    let rows = app.session.rows();
    let current = (!app.session.is_over()).then(|| app.session.attempt_index());

    // Row 1 sits at the bottom of the board
    let lines: Vec<Line> = (0..config.max_attempts())
        .rev()
        .map(|index| {
            let mut spans = vec![Span::styled(
                format!("{:>3}  ", index + 1),
                if current == Some(index) {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                },
            )];

            if let Some(row) = rows.get(index) {
                for color in row.guess.colors() {
                    spans.push(Span::styled(
                        "● ",
                        Style::default().fg(display_color(app, color)),
                    ));
                }
                spans.push(Span::raw("   "));
                for &peg in &row.feedback {
                    spans.push(Span::styled("•", Style::default().fg(peg_color(peg))));
                }
            } else if current == Some(index) {
                for slot in app.buffer.slots() {
                    spans.push(match slot {
                        Some(color) => {
                            Span::styled("● ", Style::default().fg(display_color(app, color)))
                        }
                        None => Span::styled("○ ", Style::default().fg(Color::Gray)),
                    });
                }
            } else {
                for _ in 0..config.code_length() {
                    spans.push(Span::styled("○ ", Style::default().fg(EMPTY_SLOT)));
                }
            }

            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let max = app.session.config().max_attempts();
    let used = app.session.attempts_used();
    let percent = (used * 100 / max).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{max} used"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_palette(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for (i, color) in app.session.config().palette().iter().enumerate() {
        let mut style = Style::default().fg(display_color(app, color));
        if i == app.cursor {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }
        let label = if i < 9 {
            format!(" {} ● {} ", i + 1, color.name())
        } else {
            format!(" ● {} ", color.name())
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    let palette = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Palette | 1-9 or ←/→ + Space to pick, Backspace to undo ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(palette, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let max = app.session.config().max_attempts();
    let try_text = if app.session.is_over() {
        "Game over".to_string()
    } else {
        format!("Try {} / {max}", app.session.attempt_index() + 1)
    };
    f.render_widget(
        Paragraph::new(try_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.games_played,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help = Paragraph::new("q: Quit | n: New Game | h: Help")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_help(f: &mut Frame, app: &App) {
    let config = app.session.config();
    let lines = vec![
        Line::from(Span::styled(
            "Welcome to Mastermind!",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "- A secret code of {} colors has been chosen.",
            config.code_length()
        )),
        Line::from("- Colors may repeat, no blank slots."),
        Line::from("- Pick colors from the palette to build your guess."),
        Line::from("- After each guess you receive feedback:"),
        Line::from(vec![
            Span::styled("   • ", Style::default().fg(peg_color(Peg::Exact))),
            Span::raw("GREEN = correct color in the correct position"),
        ]),
        Line::from(vec![
            Span::styled("   • ", Style::default().fg(peg_color(Peg::ColorOnly))),
            Span::raw("YELLOW = correct color in the wrong position"),
        ]),
        Line::from(vec![
            Span::styled("   • ", Style::default().fg(peg_color(Peg::None))),
            Span::raw("RED = color not included in the code"),
        ]),
        Line::from(""),
        Line::from(format!(
            "Try to crack the code within {} attempts!",
            config.max_attempts()
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to start",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    render_popup(f, " How to Play ", lines, Color::Cyan);
}

fn render_game_over(f: &mut Frame, app: &App) {
    let Some(secret) = app.revealed_secret() else {
        return;
    };

    let (title, headline, color) = match app.last_outcome.as_ref() {
        Some(outcome) if outcome.status == crate::game::GameStatus::Won => (
            " 🎉 YOU WIN! 🎉 ",
            format!("You cracked the code on try #{}!", outcome.attempt),
            Color::Green,
        ),
        _ => (
            " GAME OVER ",
            format!(
                "You used all {} tries.",
                app.session.config().max_attempts()
            ),
            Color::Red,
        ),
    };

    let mut code_spans = vec![Span::raw("The code was: ")];
    for peg in secret.colors() {
        code_spans.push(Span::styled(
            format!("● {} ", peg.name()),
            Style::default().fg(display_color(app, peg)),
        ));
    }

    let lines = vec![
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(code_spans),
        Line::from(""),
        Line::from("Play again? y/n: new game | q: quit"),
    ];

    render_popup(f, title, lines, color);
}

fn render_popup(f: &mut Frame, title: &str, lines: Vec<Line>, color: Color) {
    let area = centered_rect(70, 60, f.area());
    f.render_widget(Clear, area);

    let popup = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(popup, area);
}

/// A rectangle of the given percentage size centered in `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Palette;
    use crate::game::{GameConfig, GameSession};
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        let palette = Palette::new(vec![PegColor::new("Red"), PegColor::new("Blue")]).unwrap();
        let config = GameConfig::new(palette, 2, 4).unwrap();
        App::new(GameSession::seeded(config, 1))
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn help_overlay_drawn_first() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let app = app();
        terminal.draw(|f| ui(f, &app)).unwrap();
        assert!(buffer_text(&terminal).contains("Welcome to Mastermind!"));
    }

    #[test]
    fn game_over_overlay_reveals_code() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut app = app();
        app.input_mode = InputMode::Playing;
        while !app.session.is_over() {
            app.pick_color(0);
            app.pick_color(0);
        }

        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("The code was:"));
        assert!(text.contains("Play again?"));
    }

    #[test]
    fn fallback_colors_follow_palette_position() {
        let app = app();
        let blue = app.session.config().palette().get(1).unwrap().clone();
        assert_eq!(display_color(&app, &blue), FALLBACK_COLORS[1]);

        let rgb = PegColor::with_rgb("Cyan", (1, 2, 3));
        assert_eq!(display_color(&app, &rgb), Color::Rgb(1, 2, 3));
    }

    #[test]
    fn centered_rect_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(70, 60, area);
        assert!(popup.x >= area.x && popup.right() <= area.right());
        assert!(popup.y >= area.y && popup.bottom() <= area.bottom());
        assert_eq!(popup.width, 70);
    }
}
