/// What an action request did to the character.
///
/// Requests are total: anything that cannot apply is reported here instead
/// of failing. Callers are free to ignore the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionOutcome {
    /// The request applied.
    Performed,
    /// The request applied and paid `cost` mana for its powered form.
    Empowered { cost: u32 },
    /// The request applied in its weak form because mana ran short.
    Weakened,
    /// The request was a no-op in the current state (e.g. attack while attacking).
    Ignored,
    /// The capability exists but its preconditions are not met.
    Refused,
    /// The variant lacks the capability the request needs.
    Unsupported,
}

impl ActionOutcome {
    /// True when the state machine took the requested transition.
    pub fn is_applied(&self) -> bool {
        matches!(
            self,
            Self::Performed | Self::Empowered { .. } | Self::Weakened
        )
    }
}
