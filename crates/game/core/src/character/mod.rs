//! The character model: one state machine per active character.
//!
//! A [`Character`] owns its position, its current action and animation
//! counters, and the optional capability components its variant was built
//! with. Action requests live in [`machine`]; this module holds construction,
//! queries and the human-readable summaries.
mod machine;
mod outcome;

pub use outcome::ActionOutcome;

use crate::action::ActionKind;
use crate::animation::AnimationClock;
use crate::capability::{ManaPool, ShieldState};
use crate::config::GameConfig;
use crate::state::{FrameRect, Position};
use crate::variant::{Capabilities, SpriteKey, VariantKind, VariantParams, VariantSpec};

/// Animated, controllable character.
///
/// Invariants held after every call:
/// - `current_frame() < frame_count()`
/// - `frame_timer() < frame_delay`
/// - a raised shield implies the action is `Shield` and no one-shot is running
/// - `jump_anchor()` is `Some` only while the action is `Jump`
#[derive(Clone, Debug)]
pub struct Character {
    name: String,
    kind: VariantKind,
    params: VariantParams,
    position: Position,
    spawn: Position,
    health: u32,
    action: ActionKind,
    frame: u32,
    frame_count: u32,
    clock: AnimationClock,
    one_shot: bool,
    completed_one_shot: bool,
    jump_anchor: Option<Position>,
    jump_height: i32,
    frame_width: u32,
    frame_height: u32,
    shield: Option<ShieldState>,
    mana: Option<ManaPool>,
}

impl Character {
    /// Creates an idle character at `(x, y)` with the default [`GameConfig`].
    pub fn new(name: impl Into<String>, x: i32, y: i32, spec: &VariantSpec) -> Self {
        Self::with_config(name, Position::new(x, y), spec, &GameConfig::default())
    }

    /// Creates the roster entry described by `spec` at the configured spawn.
    pub fn from_spec(spec: &VariantSpec, config: &GameConfig) -> Self {
        Self::with_config(spec.name.clone(), config.spawn, spec, config)
    }

    pub fn with_config(
        name: impl Into<String>,
        position: Position,
        spec: &VariantSpec,
        config: &GameConfig,
    ) -> Self {
        let mut character = Self {
            name: name.into(),
            kind: spec.kind,
            params: spec.params,
            position,
            spawn: config.spawn,
            health: config.base_health,
            action: ActionKind::Idle,
            frame: 0,
            frame_count: ActionKind::Idle.frame_count(),
            clock: AnimationClock::new(config.frame_delay),
            one_shot: false,
            completed_one_shot: false,
            jump_anchor: None,
            jump_height: config.jump_height,
            frame_width: config.frame_width,
            frame_height: config.frame_height,
            shield: spec.shield.map(ShieldState::new),
            mana: spec.mana.map(ManaPool::new),
        };
        character.set_action(ActionKind::Idle);

        tracing::debug!(
            name = %character.name,
            kind = %character.kind,
            position = %character.position,
            "character created"
        );
        character
    }

    // ===== identity =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> VariantKind {
        self.kind
    }

    pub fn params(&self) -> &VariantParams {
        &self.params
    }

    pub fn capabilities(&self) -> Capabilities {
        let mut caps = Capabilities::empty();
        caps.set(Capabilities::SHIELD, self.shield.is_some());
        caps.set(Capabilities::MANA, self.mana.is_some());
        caps
    }

    // ===== observable state =====

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn action(&self) -> ActionKind {
        self.action
    }

    pub fn current_frame(&self) -> u32 {
        self.frame
    }

    /// Frame count cached when the current action was entered.
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Ticks since the last frame boundary.
    pub fn frame_timer(&self) -> u32 {
        self.clock.elapsed()
    }

    pub fn is_one_shot(&self) -> bool {
        self.one_shot
    }

    pub fn has_completed_one_shot(&self) -> bool {
        self.completed_one_shot
    }

    /// True while a one-shot action is playing and must not be interrupted by
    /// a key release.
    pub fn is_in_one_shot_animation(&self) -> bool {
        self.one_shot && !self.completed_one_shot
    }

    pub fn jump_anchor(&self) -> Option<Position> {
        self.jump_anchor
    }

    /// Source region of the current frame inside the action's sprite strip.
    pub fn frame_rect(&self) -> FrameRect {
        FrameRect::new(
            (self.frame * self.frame_width) as i32,
            0,
            self.frame_width,
            self.frame_height,
        )
    }

    /// Screen area covered by the sprite at the current position.
    pub fn bounds(&self) -> FrameRect {
        FrameRect::new(
            self.position.x,
            self.position.y,
            self.frame_width,
            self.frame_height,
        )
    }

    pub fn sprite(&self) -> SpriteKey {
        self.kind.sprite(self.action)
    }

    // ===== capabilities =====

    pub fn mana(&self) -> Option<&ManaPool> {
        self.mana.as_ref()
    }

    pub fn shield(&self) -> Option<&ShieldState> {
        self.shield.as_ref()
    }

    pub fn is_shielding(&self) -> bool {
        self.shield.is_some_and(|shield| shield.is_raised())
    }

    // ===== summaries =====

    /// Tuning summary, e.g.
    /// `FIGHTER - Walk: 3, Run: 5, Attack: 60, Jump: 80, Mana: 100/100, Shield: INACTIVE (80/80)`.
    pub fn stats(&self) -> String {
        let mut out = format!(
            "{} - Walk: {}, Run: {}, Attack: {}, Jump: {}",
            self.kind.label(),
            self.params.walk_speed,
            self.params.run_speed,
            self.params.attack_power,
            self.params.jump_distance
        );
        if let Some(mana) = &self.mana {
            out.push_str(&format!(", Mana: {}", mana.meter()));
        }
        if let Some(shield) = &self.shield {
            let status = if shield.is_raised() {
                "ACTIVE"
            } else {
                "INACTIVE"
            };
            out.push_str(&format!(", Shield: {} ({})", status, shield.charge()));
        }
        out
    }

    /// State summary, e.g. `Shadow Ninja - Health: 100 - Action: Idle - Position: (100, 200)`.
    pub fn info(&self) -> String {
        let mana = self
            .mana
            .as_ref()
            .map(|mana| format!(" - Mana: {}", mana.meter()))
            .unwrap_or_default();
        format!(
            "{} - Health: {}{} - Action: {} - Position: {}",
            self.name, self.health, mana, self.action, self.position
        )
    }
}
