//! Footer widget displaying key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the footer panel with key bindings help.
pub fn render(frame: &mut Frame, area: Rect) {
    let text = vec![Line::from(vec![
        Span::raw("[w] Walk | "),
        Span::raw("[r] Run | "),
        Span::raw("[a] Attack | "),
        Span::raw("[j] Jump | "),
        Span::raw("[s] Shield | "),
        Span::raw("[i] Idle | "),
        Span::raw("[m] Mana | "),
        Span::raw("[c] Switch | "),
        Span::raw("[Space] Reset | "),
        Span::raw("[q] Quit"),
    ])];

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
