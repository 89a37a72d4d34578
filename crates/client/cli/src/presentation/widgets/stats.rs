//! Stats widget displaying tuning, state and resource pools.

use brawler_core::Character;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme;

const BAR_WIDTH: usize = 20;

/// Render the stats panel.
pub fn render(frame: &mut Frame, area: Rect, character: &Character) {
    let mut lines = vec![
        Line::from(Span::raw(character.stats())),
        Line::from(Span::raw(character.info())),
    ];

    if let Some(mana) = character.mana() {
        lines.push(pool_line("Mana:   ", mana.current(), mana.maximum(), ""));
    }
    if let Some(shield) = character.shield() {
        let status = if shield.is_raised() { " RAISED" } else { "" };
        lines.push(pool_line(
            "Shield: ",
            shield.duration(),
            shield.max_duration(),
            status,
        ));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(character.name().to_string()),
    );

    frame.render_widget(paragraph, area);
}

fn pool_line(label: &'static str, current: u32, maximum: u32, suffix: &'static str) -> Line<'static> {
    let style: Style = theme::style_meter(current, maximum);
    Line::from(vec![
        Span::styled(label, theme::style_label()),
        Span::styled(meter_bar(current, maximum, BAR_WIDTH), style),
        Span::styled(format!(" {}/{}", current, maximum), style),
        Span::raw(suffix),
    ])
}

/// Text gauge, e.g. `█████░░░░░` for half of ten cells.
pub fn meter_bar(current: u32, maximum: u32, width: usize) -> String {
    let filled = if maximum == 0 {
        0
    } else {
        (current.min(maximum) as usize * width) / maximum as usize
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
