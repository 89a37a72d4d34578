//! Colors and glyphs for the terminal UI.
use brawler_core::{ActionKind, VariantKind};
use ratatui::style::{Color, Modifier, Style};

/// Glyph drawn on the stage for the current action.
pub fn action_glyph(action: ActionKind) -> &'static str {
    match action {
        ActionKind::Idle => "@",
        ActionKind::Walk => ">",
        ActionKind::Run => "»",
        ActionKind::Attack => "*",
        ActionKind::Jump => "^",
        ActionKind::Shield => "#",
    }
}

pub fn variant_color(kind: VariantKind) -> Color {
    match kind {
        VariantKind::Shinobi => Color::LightMagenta,
        VariantKind::Samurai => Color::LightRed,
        VariantKind::Fighter => Color::LightCyan,
    }
}

pub fn style_character(kind: VariantKind, action: ActionKind) -> Style {
    let style = Style::default()
        .fg(variant_color(kind))
        .add_modifier(Modifier::BOLD);
    if action.is_one_shot() {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

/// Green above half, yellow above a quarter, red below.
pub fn style_meter(current: u32, maximum: u32) -> Style {
    let color = if maximum == 0 || current * 4 <= maximum {
        Color::Red
    } else if current * 2 <= maximum {
        Color::Yellow
    } else {
        Color::Green
    };
    Style::default().fg(color)
}

pub fn style_label() -> Style {
    Style::default().fg(Color::White)
}
