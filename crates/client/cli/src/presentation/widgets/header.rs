//! Header widget displaying the window title and roster position.

use brawler_core::{Command, Session};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme;

/// Render the header panel with the session title and the held command.
pub fn render(frame: &mut Frame, area: Rect, session: &Session, held: Option<Command>, ticks: u64) {
    let active = session.active();
    let held_text = held
        .map(|command| format!(" | Holding: {}", command))
        .unwrap_or_default();

    let text = vec![Line::from(vec![
        Span::styled(
            session.title(),
            Style::default()
                .fg(theme::variant_color(active.kind()))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Character: "),
        Span::styled(
            format!(
                "{} ({}/{})",
                active.name(),
                session.active_index() + 1,
                session.roster().len()
            ),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" | Tick: "),
        Span::styled(ticks.to_string(), Style::default().fg(Color::Yellow)),
        Span::styled(held_text, Style::default().fg(Color::Magenta)),
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Brawler"));

    frame.render_widget(paragraph, area);
}
