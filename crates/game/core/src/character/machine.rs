//! Action requests and the per-tick animation step.
//!
//! Every request is total. Illegal requests (attack while attacking, shield
//! without charge) leave the state untouched and report it through
//! [`ActionOutcome`].
use super::{ActionOutcome, Character};
use crate::action::ActionKind;
use crate::animation::{FrameAdvance, trajectory};
use crate::capability::{ManaSpec, Upkeep};
use crate::state::Position;

impl Character {
    /// Returns to idle.
    ///
    /// While a shield is raised the action is kept; idle regeneration still
    /// applies.
    pub fn set_idle(&mut self) -> ActionOutcome {
        let outcome = if self.is_shielding() {
            ActionOutcome::Ignored
        } else {
            self.set_action(ActionKind::Idle);
            ActionOutcome::Performed
        };
        self.settle(Upkeep::Rest);
        outcome
    }

    /// Moves one step at walk speed, or at half speed behind a raised shield.
    pub fn walk(&mut self) -> ActionOutcome {
        if self.is_shielding() {
            return self.guarded_walk();
        }
        if self.action != ActionKind::Walk {
            self.set_action(ActionKind::Walk);
        }
        self.position.x += self.params.walk_speed;
        self.settle(Upkeep::Move);
        ActionOutcome::Performed
    }

    /// Moves one step at run speed. Running lowers a raised shield first.
    pub fn run(&mut self) -> ActionOutcome {
        if self.is_shielding() {
            self.deactivate_shield();
        }
        if self.action != ActionKind::Run {
            self.set_action(ActionKind::Run);
        }
        self.position.x += self.params.run_speed;
        self.settle(Upkeep::Move);
        ActionOutcome::Performed
    }

    /// Starts an attack unless a one-shot action is already playing.
    ///
    /// Mana-bearing variants pay for a powered attack when they can; without
    /// enough mana the attack still plays in its weak form.
    pub fn attack(&mut self) -> ActionOutcome {
        if self.is_shielding() {
            self.deactivate_shield();
        }
        if self.one_shot {
            return ActionOutcome::Ignored;
        }
        self.set_action(ActionKind::Attack);
        let outcome = self.pay_for_bonus(|mana| mana.attack_cost);

        tracing::debug!(
            name = %self.name,
            power = self.params.attack_power,
            ?outcome,
            "attack started"
        );
        outcome
    }

    /// Starts a jump from the current position unless a one-shot action is
    /// already playing.
    pub fn jump(&mut self) -> ActionOutcome {
        if self.is_shielding() {
            self.deactivate_shield();
        }
        if self.one_shot {
            return ActionOutcome::Ignored;
        }
        self.set_action(ActionKind::Jump);
        self.jump_anchor = Some(self.position);
        let outcome = self.pay_for_bonus(|mana| mana.jump_cost);

        tracing::debug!(
            name = %self.name,
            distance = self.params.jump_distance,
            anchor = %self.position,
            ?outcome,
            "jump started"
        );
        outcome
    }

    /// Raises the shield.
    ///
    /// Requires the shield capability, no one-shot in flight, charge above the
    /// activation threshold and, for mana-bearing variants, the activation cost.
    pub fn activate_shield(&mut self) -> ActionOutcome {
        let in_one_shot = self.is_in_one_shot_animation();
        let Some(shield) = self.shield.as_mut() else {
            return ActionOutcome::Unsupported;
        };
        if shield.is_raised() {
            return ActionOutcome::Ignored;
        }

        let affordable = self
            .mana
            .as_ref()
            .is_none_or(|mana| mana.can_afford(mana.spec().shield_cost));
        if in_one_shot || !shield.has_charge_to_raise() || !affordable {
            tracing::debug!(
                name = %self.name,
                charge = shield.duration(),
                in_one_shot,
                affordable,
                "shield refused"
            );
            return ActionOutcome::Refused;
        }

        shield.raise();
        if let Some(mana) = self.mana.as_mut() {
            let cost = mana.spec().shield_cost;
            mana.try_spend(cost);
        }
        self.set_action(ActionKind::Shield);

        tracing::debug!(name = %self.name, "shield raised");
        ActionOutcome::Performed
    }

    /// Lowers a raised shield and returns to idle.
    pub fn deactivate_shield(&mut self) -> ActionOutcome {
        let Some(shield) = self.shield.as_mut() else {
            return ActionOutcome::Unsupported;
        };
        if !shield.is_raised() {
            return ActionOutcome::Ignored;
        }
        shield.lower();
        self.set_idle();

        tracing::debug!(name = %self.name, "shield lowered");
        ActionOutcome::Performed
    }

    /// Adds `amount` mana, capped at the maximum.
    pub fn restore_mana(&mut self, amount: u32) -> ActionOutcome {
        let Some(mana) = self.mana.as_mut() else {
            return ActionOutcome::Unsupported;
        };
        mana.restore(amount);
        tracing::debug!(name = %self.name, mana = %mana.meter(), "mana restored");
        ActionOutcome::Performed
    }

    /// Moves the character without going through an action handler.
    pub fn teleport(&mut self, position: Position) {
        self.position = position;
    }

    /// Back to spawn, idle, shield lowered and every pool full.
    pub fn reset(&mut self) {
        self.position = self.spawn;
        if let Some(shield) = self.shield.as_mut() {
            shield.lower();
            shield.recharge();
        }
        if let Some(mana) = self.mana.as_mut() {
            mana.fill();
        }
        self.set_action(ActionKind::Idle);

        tracing::debug!(name = %self.name, position = %self.position, "character reset");
    }

    /// Feeds one external tick into the animation.
    ///
    /// On a frame boundary looping actions wrap around their strip. One-shot
    /// actions step forward (a jump also follows its arc); once the final
    /// frame has been shown for a full boundary the action completes and the
    /// character goes idle.
    pub fn advance_animation(&mut self) -> FrameAdvance {
        if !self.clock.advance() {
            return FrameAdvance::Waiting;
        }

        if !self.one_shot {
            self.frame = (self.frame + 1) % self.frame_count;
            tracing::trace!(name = %self.name, action = %self.action, frame = self.frame, "frame");
            return FrameAdvance::Frame(self.frame);
        }

        if self.frame + 1 < self.frame_count {
            self.frame += 1;
            if self.action == ActionKind::Jump {
                self.follow_jump_arc();
            }
            tracing::trace!(name = %self.name, action = %self.action, frame = self.frame, "frame");
            return FrameAdvance::Frame(self.frame);
        }

        let finished = self.action;
        self.completed_one_shot = true;
        self.set_idle();
        tracing::debug!(name = %self.name, action = %finished, "one-shot completed");
        FrameAdvance::Completed(finished)
    }

    // ===== internals =====

    pub(super) fn set_action(&mut self, action: ActionKind) {
        self.action = action;
        self.frame_count = action.frame_count();
        self.frame = 0;
        self.clock.reset();
        self.one_shot = action.is_one_shot();
        self.completed_one_shot = false;
        self.jump_anchor = None;
    }

    fn guarded_walk(&mut self) -> ActionOutcome {
        if self.action != ActionKind::Shield {
            self.set_action(ActionKind::Shield);
        }
        self.position.x += self.params.walk_speed / 2;
        self.settle(Upkeep::GuardedMove);

        let shield_empty = self.shield.is_some_and(|shield| shield.is_depleted());
        let mana_empty = self.mana.is_some_and(|mana| mana.is_empty());
        if shield_empty || mana_empty {
            tracing::debug!(name = %self.name, shield_empty, mana_empty, "shield collapsed");
            self.deactivate_shield();
        }
        ActionOutcome::Performed
    }

    fn follow_jump_arc(&mut self) {
        let Some(anchor) = self.jump_anchor else {
            return;
        };
        let (dx, dy) = trajectory::offset(
            self.frame,
            self.frame_count,
            self.params.jump_distance,
            self.jump_height,
        );
        self.position = Position::new(anchor.x + dx, anchor.y - dy);
    }

    /// Spends the bonus cost of a just-started one-shot on mana variants.
    fn pay_for_bonus(&mut self, cost_of: impl Fn(&ManaSpec) -> u32) -> ActionOutcome {
        match self.mana.as_mut() {
            None => ActionOutcome::Performed,
            Some(mana) => {
                let cost = cost_of(mana.spec());
                if mana.try_spend(cost) {
                    ActionOutcome::Empowered { cost }
                } else {
                    ActionOutcome::Weakened
                }
            }
        }
    }

    /// Single place where pools regenerate or drain after a request.
    fn settle(&mut self, upkeep: Upkeep) {
        if let Some(shield) = self.shield.as_mut() {
            shield.settle(upkeep);
        }
        if let Some(mana) = self.mana.as_mut() {
            mana.settle(upkeep);
        }
    }
}
