//! Optional resource components composed onto a character.
//!
//! A variant either carries a component or it does not; callers ask the
//! character for it ([`crate::Character::mana`], [`crate::Character::shield`])
//! and branch on `Option` instead of inspecting the variant kind.
pub mod mana;
pub mod shield;

pub use mana::{ManaPool, ManaSpec};
pub use shield::{ShieldSpec, ShieldState};

use std::fmt;

/// Bounded integer pool. `current` never exceeds `maximum`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Meter {
    current: u32,
    maximum: u32,
}

impl Meter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn maximum(&self) -> u32 {
        self.maximum
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// Removes `amount`, bottoming out at zero.
    pub fn drain(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    /// Removes `amount` only if the whole amount is available.
    pub fn try_spend(&mut self, amount: u32) -> bool {
        if self.current >= amount {
            self.current -= amount;
            true
        } else {
            false
        }
    }

    /// Adds `amount`, capped at the maximum.
    pub fn restore(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(self.maximum);
    }

    pub fn fill(&mut self) {
        self.current = self.maximum;
    }
}

impl fmt::Display for Meter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.maximum)
    }
}

/// What a character is doing when its pools settle after an action request.
///
/// All regeneration and drain goes through one step keyed on this value, so
/// the order is always: transition first, then settle, then auto-deactivation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Upkeep {
    /// Idle request (also reached through shield deactivation and one-shot completion).
    Rest,
    /// Walk or run without a raised shield.
    Move,
    /// Walk behind a raised shield.
    GuardedMove,
}
