//! Action kinds and the static frame table.

/// Behaviour mode of a character. Exactly one is active at a time.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum ActionKind {
    /// Standing still. Looping.
    #[default]
    Idle,
    /// Continuous movement at walk speed. Looping.
    Walk,
    /// Continuous movement at run speed. Looping.
    Run,
    /// Single strike. Plays once, then returns to idle.
    Attack,
    /// Parabolic leap. Plays once, then returns to idle.
    Jump,
    /// Guard stance, only for shield-capable variants. Looping.
    Shield,
}

impl ActionKind {
    /// Frame count used when a name does not match any known action.
    pub const FALLBACK_FRAME_COUNT: u32 = 1;

    /// Number of frames in this action's sprite strip.
    pub const fn frame_count(self) -> u32 {
        match self {
            Self::Idle => 6,
            Self::Walk => 8,
            Self::Run => 8,
            Self::Attack => 5,
            Self::Jump => 12,
            Self::Shield => 4,
        }
    }

    /// One-shot actions play their strip once and then revert to idle.
    pub const fn is_one_shot(self) -> bool {
        matches!(self, Self::Attack | Self::Jump)
    }
}

/// Looks up the frame count for an action by its display name.
///
/// Unknown names map to [`ActionKind::FALLBACK_FRAME_COUNT`].
pub fn frame_count_by_name(name: &str) -> u32 {
    match name.parse::<ActionKind>() {
        Ok(kind) => kind.frame_count(),
        Err(_) => {
            tracing::warn!(action = name, "unknown action, using single-frame table");
            ActionKind::FALLBACK_FRAME_COUNT
        }
    }
}
