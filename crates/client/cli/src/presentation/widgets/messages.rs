//! Messages widget displaying recent narration.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

use crate::message::{MessageEntry, MessageLog};

/// Render the message log panel.
///
/// Displays recent messages in bottom-to-top order (newest at bottom).
pub fn render(frame: &mut Frame, area: Rect, messages: &MessageLog) {
    let mut items: Vec<ListItem> = messages
        .recent(messages.capacity())
        .enumerate()
        .map(|(age, entry)| {
            let style = if age == 0 {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(format_message(entry)).style(style)
        })
        .collect();

    // Pad with empty lines to maintain consistent height
    let rows = usize::from(area.height.saturating_sub(2)).min(messages.capacity());
    while items.len() < rows {
        items.push(ListItem::new(""));
    }

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Messages"))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}

fn format_message(entry: &MessageEntry) -> String {
    format!("[{}] {}", entry.tick, entry.text)
}
