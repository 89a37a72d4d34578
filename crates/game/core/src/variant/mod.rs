//! Character variants: tuning data plus the capability set.
//!
//! Every variant runs the same state machine. What differs is data:
//! movement and combat numbers in [`VariantParams`] and which optional
//! components (shield, mana) the character is built with.
pub mod catalog;

pub use catalog::VariantCatalog;

use bitflags::bitflags;

use crate::action::ActionKind;
use crate::capability::{ManaSpec, ShieldSpec};
use crate::error::CatalogError;

/// Explicit variant tag. Asset loaders key sprite sets on it.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum VariantKind {
    /// Balanced all-rounder.
    Shinobi,
    /// Slow and strong, heavy shield.
    Samurai,
    /// Fast and light, light shield powered by mana.
    Fighter,
}

impl VariantKind {
    /// Type label shown in summaries and the title bar.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Shinobi => "NINJA",
            Self::Samurai => "SAMURAI",
            Self::Fighter => "FIGHTER",
        }
    }

    /// Name of the sprite directory holding this variant's strips.
    pub const fn sprite_set(self) -> &'static str {
        match self {
            Self::Shinobi => "Shinobi",
            Self::Samurai => "Samurai",
            Self::Fighter => "Fighter",
        }
    }

    pub fn sprite(self, action: ActionKind) -> SpriteKey {
        SpriteKey {
            variant: self,
            action,
        }
    }
}

/// Lookup key for one sprite strip. The core never loads images itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpriteKey {
    pub variant: VariantKind,
    pub action: ActionKind,
}

impl SpriteKey {
    pub fn file_name(&self) -> String {
        format!("{}.png", self.action)
    }

    /// Path relative to an asset root, e.g. `Samurai/Shield.png`.
    pub fn relative_path(&self) -> String {
        format!("{}/{}", self.variant.sprite_set(), self.file_name())
    }
}

/// Movement and combat numbers of a variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantParams {
    /// Pixels per walk request.
    pub walk_speed: i32,
    /// Pixels per run request.
    pub run_speed: i32,
    /// Reported by summaries; nothing consumes it as damage.
    pub attack_power: u32,
    /// Horizontal length of the jump arc.
    pub jump_distance: i32,
}

impl VariantParams {
    pub const fn new(walk_speed: i32, run_speed: i32, attack_power: u32, jump_distance: i32) -> Self {
        Self {
            walk_speed,
            run_speed,
            attack_power,
            jump_distance,
        }
    }
}

bitflags! {
    /// Optional components present on a variant.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Capabilities: u8 {
        const SHIELD = 1 << 0;
        const MANA   = 1 << 1;
    }
}

/// Full description of one roster entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantSpec {
    pub kind: VariantKind,
    /// Character name used when the roster is instantiated.
    pub name: String,
    pub params: VariantParams,
    #[cfg_attr(feature = "serde", serde(default))]
    pub shield: Option<ShieldSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mana: Option<ManaSpec>,
}

impl VariantSpec {
    pub fn new(kind: VariantKind, name: impl Into<String>, params: VariantParams) -> Self {
        Self {
            kind,
            name: name.into(),
            params,
            shield: None,
            mana: None,
        }
    }

    pub fn with_shield(mut self, shield: ShieldSpec) -> Self {
        self.shield = Some(shield);
        self
    }

    pub fn with_mana(mut self, mana: ManaSpec) -> Self {
        self.mana = Some(mana);
        self
    }

    pub fn capabilities(&self) -> Capabilities {
        let mut caps = Capabilities::empty();
        caps.set(Capabilities::SHIELD, self.shield.is_some());
        caps.set(Capabilities::MANA, self.mana.is_some());
        caps
    }

    /// Rejects tuning the state machine cannot run sensibly.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |reason| CatalogError::InvalidVariant {
            kind: self.kind,
            reason,
        };

        if self.params.walk_speed < 0 || self.params.run_speed < 0 {
            return Err(invalid("movement speeds must not be negative"));
        }
        if let Some(shield) = &self.shield {
            if shield.max_duration == 0 {
                return Err(invalid("shield max duration must be positive"));
            }
            if shield.activation_threshold >= shield.max_duration {
                return Err(invalid("shield threshold must be below its max duration"));
            }
        }
        if self.mana.is_some() && self.shield.is_none() {
            return Err(invalid("mana requires a shield to spend it on"));
        }
        if self.mana.is_some_and(|mana| mana.maximum == 0) {
            return Err(invalid("mana maximum must be positive"));
        }
        Ok(())
    }
}
