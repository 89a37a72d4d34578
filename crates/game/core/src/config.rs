use crate::state::Position;

/// Timing and geometry constants shared by every character in a session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Ticks between two animation frame advances.
    pub frame_delay: u32,
    /// Peak height of the jump arc in pixels.
    pub jump_height: i32,
    /// Health every character starts with. Nothing in scope decrements it.
    pub base_health: u32,
    /// Position used on construction and on reset.
    pub spawn: Position,
    /// Width of one frame inside a sprite strip.
    pub frame_width: u32,
    /// Height of one frame inside a sprite strip.
    pub frame_height: u32,
    /// Extra pixels around the sprite bounds that must be redrawn on movement.
    pub redraw_margin: u32,
}

impl GameConfig {
    // ===== reference tuning (~60 Hz tick source) =====
    pub const DEFAULT_FRAME_DELAY: u32 = 4;
    pub const DEFAULT_JUMP_HEIGHT: i32 = 40;
    pub const DEFAULT_BASE_HEALTH: u32 = 100;
    pub const DEFAULT_SPAWN: Position = Position { x: 100, y: 200 };
    pub const DEFAULT_FRAME_SIZE: u32 = 128;
    pub const DEFAULT_REDRAW_MARGIN: u32 = 10;

    /// Nominal tick period the timing constants were balanced for.
    pub const TICK_INTERVAL_MS: u64 = 16;

    pub fn new() -> Self {
        Self {
            frame_delay: Self::DEFAULT_FRAME_DELAY,
            jump_height: Self::DEFAULT_JUMP_HEIGHT,
            base_health: Self::DEFAULT_BASE_HEALTH,
            spawn: Self::DEFAULT_SPAWN,
            frame_width: Self::DEFAULT_FRAME_SIZE,
            frame_height: Self::DEFAULT_FRAME_SIZE,
            redraw_margin: Self::DEFAULT_REDRAW_MARGIN,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
