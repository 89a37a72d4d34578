//! Animation timing and motion primitives.
//!
//! - [`AnimationClock`]: fixed-tick frame boundary detection
//! - [`trajectory`]: parabolic jump offsets
//! - [`FrameAdvance`]: what one tick did to a character's animation
pub mod clock;
pub mod trajectory;

pub use clock::AnimationClock;

use crate::action::ActionKind;

/// Result of feeding one tick into a character's animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameAdvance {
    /// No frame boundary on this tick.
    Waiting,
    /// A boundary moved the strip to the given frame.
    Frame(u32),
    /// A one-shot action finished on this boundary and the character is idle again.
    Completed(ActionKind),
}

impl FrameAdvance {
    pub fn is_boundary(&self) -> bool {
        !matches!(self, Self::Waiting)
    }
}
