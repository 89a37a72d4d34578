//! Mana pool: gates the powered form of attack and jump, and pays for shields.
use super::{Meter, Upkeep};

/// Per-variant mana tuning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ManaSpec {
    pub maximum: u32,
    /// Spent by an attack to make it powered.
    pub attack_cost: u32,
    /// Spent by a jump to make it boosted.
    pub jump_cost: u32,
    /// Spent once when a shield is raised.
    pub shield_cost: u32,
    /// Drained per walk step behind a raised shield.
    pub guard_upkeep: u32,
    /// Regained per unshielded walk or run step.
    pub move_regen: u32,
    /// Regained per idle request.
    pub rest_regen: u32,
    /// Amount used by a restore request without an explicit amount.
    pub restore_amount: u32,
}

impl ManaSpec {
    pub const REFERENCE: Self = Self {
        maximum: 100,
        attack_cost: 15,
        jump_cost: 10,
        shield_cost: 15,
        guard_upkeep: 1,
        move_regen: 1,
        rest_regen: 2,
        restore_amount: 25,
    };
}

impl Default for ManaSpec {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Live mana state of one character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManaPool {
    meter: Meter,
    spec: ManaSpec,
}

impl ManaPool {
    pub fn new(spec: ManaSpec) -> Self {
        Self {
            meter: Meter::full(spec.maximum),
            spec,
        }
    }

    pub fn current(&self) -> u32 {
        self.meter.current()
    }

    pub fn maximum(&self) -> u32 {
        self.meter.maximum()
    }

    pub fn meter(&self) -> Meter {
        self.meter
    }

    pub fn spec(&self) -> &ManaSpec {
        &self.spec
    }

    pub fn is_empty(&self) -> bool {
        self.meter.is_empty()
    }

    pub fn can_afford(&self, cost: u32) -> bool {
        self.meter.current() >= cost
    }

    /// Spends `cost` if available. Never goes below zero.
    pub fn try_spend(&mut self, cost: u32) -> bool {
        self.meter.try_spend(cost)
    }

    pub fn restore(&mut self, amount: u32) {
        self.meter.restore(amount);
    }

    pub fn fill(&mut self) {
        self.meter.fill();
    }

    pub(crate) fn settle(&mut self, upkeep: Upkeep) {
        match upkeep {
            Upkeep::Rest => self.meter.restore(self.spec.rest_regen),
            Upkeep::Move => self.meter.restore(self.spec.move_regen),
            Upkeep::GuardedMove => self.meter.drain(self.spec.guard_upkeep),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_full() {
        let pool = ManaPool::new(ManaSpec::REFERENCE);
        assert_eq!(pool.current(), 100);
        assert_eq!(pool.maximum(), 100);
    }

    #[test]
    fn settle_applies_regen_and_upkeep() {
        let mut pool = ManaPool::new(ManaSpec::REFERENCE);
        assert!(pool.try_spend(50));

        pool.settle(Upkeep::Rest);
        assert_eq!(pool.current(), 52);
        pool.settle(Upkeep::Move);
        assert_eq!(pool.current(), 53);
        pool.settle(Upkeep::GuardedMove);
        assert_eq!(pool.current(), 52);
    }

    #[test]
    fn insufficient_mana_is_not_spent() {
        let mut pool = ManaPool::new(ManaSpec::REFERENCE);
        assert!(pool.try_spend(90));
        assert!(!pool.can_afford(15));
        assert!(!pool.try_spend(15));
        assert_eq!(pool.current(), 10);
    }
}
