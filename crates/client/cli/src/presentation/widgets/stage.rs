//! Stage widget: places the active character by its pixel position.

use brawler_core::{Character, GameConfig, Position};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme;

/// Horizontal pixels per terminal column.
pub const PIXELS_PER_COLUMN: i32 = 8;
/// Vertical pixels per terminal row.
pub const PIXELS_PER_ROW: i32 = 16;

/// Render the stage panel.
pub fn render(frame: &mut Frame, area: Rect, character: &Character, config: &GameConfig) {
    let title = format!(
        " {} | frame {}/{} ",
        character.action(),
        character.current_frame() + 1,
        character.frame_count()
    );
    let rect = character.frame_rect();
    let sprite = format!(
        " {} src ({}, {}) {}x{} ",
        character.sprite().relative_path(),
        rect.x,
        rect.y,
        rect.width,
        rect.height
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_bottom(sprite);

    let inner = block.inner(area);
    let width = inner.width as usize;
    let height = inner.height as usize;
    let (column, row) = cell_for(character.position(), inner.width, inner.height);
    let ground = ground_row(config.spawn, inner.height);

    let glyph = Span::styled(
        theme::action_glyph(character.action()),
        theme::style_character(character.kind(), character.action()),
    );

    let lines: Vec<Line> = (0..height)
        .map(|index| {
            let index = index as u16;
            if index == row {
                Line::from(vec![Span::raw(" ".repeat(column as usize)), glyph.clone()])
            } else if index == ground {
                Line::from(Span::styled(
                    "─".repeat(width),
                    Style::default().fg(Color::DarkGray),
                ))
            } else {
                Line::default()
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Terminal cell for a pixel position, clamped to a `width` x `height` grid.
pub fn cell_for(position: Position, width: u16, height: u16) -> (u16, u16) {
    let column = (position.x / PIXELS_PER_COLUMN).clamp(0, width.saturating_sub(1) as i32);
    let row = (position.y / PIXELS_PER_ROW).clamp(0, height.saturating_sub(2) as i32);
    (column as u16, row as u16)
}

/// Row drawn as the ground line: just below a character standing at spawn.
pub fn ground_row(spawn: Position, height: u16) -> u16 {
    let (_, row) = cell_for(spawn, 1, height);
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_maps_into_the_grid() {
        assert_eq!(cell_for(Position::new(100, 200), 80, 20), (12, 12));
        assert_eq!(ground_row(Position::new(100, 200), 20), 13);
    }

    #[test]
    fn jump_peak_is_above_ground() {
        let (_, grounded) = cell_for(Position::new(100, 200), 80, 20);
        let (_, airborne) = cell_for(Position::new(130, 160), 80, 20);
        assert!(airborne < grounded);
    }

    #[test]
    fn positions_clamp_to_small_areas() {
        assert_eq!(cell_for(Position::new(4000, 200), 30, 8), (29, 6));
        assert_eq!(cell_for(Position::new(-50, -50), 30, 8), (0, 0));
        assert_eq!(cell_for(Position::new(10, 10), 0, 0), (0, 0));
    }
}
