//! UI rendering with Ratatui.
//!
//! Composes the frame layout and delegates each panel to its widget.
use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::App;
use crate::presentation::{terminal::Tui, widgets};

/// Height of the stats panel in lines (including borders).
pub const STATS_PANEL_HEIGHT: u16 = 6;

pub fn render(terminal: &mut Tui, app: &App) -> Result<()> {
    terminal.draw(|ctx| render_frame(ctx, app))?;
    Ok(())
}

fn render_frame(frame: &mut Frame, app: &App) {
    let session = app.session();
    let message_height = u16::try_from(app.messages().capacity())
        .unwrap_or(u16::MAX)
        .saturating_add(2);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(STATS_PANEL_HEIGHT),
            Constraint::Length(message_height),
            Constraint::Length(3),
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], session, app.held(), app.ticks());
    widgets::stage::render(frame, chunks[1], session.active(), session.config());
    widgets::stats::render(frame, chunks[2], session.active());
    widgets::messages::render(frame, chunks[3], app.messages());
    widgets::footer::render(frame, chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use brawler_core::{GameConfig, Session, VariantCatalog};
    use ratatui::{Terminal, backend::TestBackend};

    use crate::config::CliConfig;

    fn app_with_capacity(message_capacity: usize) -> App {
        let session = Session::new(&VariantCatalog::reference(), GameConfig::default());
        let config = CliConfig {
            message_capacity,
            ..CliConfig::default()
        };
        App::new(session, &config, true)
    }

    #[test]
    fn draws_default_layout() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let app = app_with_capacity(CliConfig::DEFAULT_MESSAGE_CAPACITY);
        terminal.draw(|frame| render_frame(frame, &app)).unwrap();
    }

    #[test]
    fn huge_message_capacity_still_draws() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        for capacity in [65534, 65535, 70000, usize::MAX] {
            let app = app_with_capacity(capacity);
            terminal.draw(|frame| render_frame(frame, &app)).unwrap();
        }
    }
}
