//! A play session: a roster of characters with one under control.
//!
//! The session is what a presentation shell drives. It forwards commands to
//! the active character, applies the hold/release rules for continuous
//! actions, swaps characters and reports which screen areas need redrawing.
//! It does no rendering, asset loading or key decoding of its own.
use crate::action::ActionKind;
use crate::animation::FrameAdvance;
use crate::character::{ActionOutcome, Character};
use crate::config::GameConfig;
use crate::state::{FrameRect, Position};
use crate::variant::VariantCatalog;

/// Requests a shell can make on behalf of the player.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Command {
    Idle,
    /// Continuous: repeat while held.
    Walk,
    /// Continuous: repeat while held.
    Run,
    Attack,
    Jump,
    ToggleShield,
    RestoreMana,
    Reset,
    Switch,
}

impl Command {
    /// Continuous commands return the character to idle on release.
    pub const fn is_continuous(self) -> bool {
        matches!(self, Self::Walk | Self::Run)
    }
}

/// What one tick changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickReport {
    pub advance: FrameAdvance,
    /// Sprite area before the tick, grown by the redraw margin.
    pub previous: FrameRect,
    /// Sprite area after the tick, grown by the redraw margin.
    pub current: FrameRect,
}

impl TickReport {
    pub fn moved(&self) -> bool {
        self.previous != self.current
    }
}

pub struct Session {
    config: GameConfig,
    roster: Vec<Character>,
    active: usize,
    last_position: Position,
}

impl Session {
    /// Instantiates every catalog entry at the configured spawn; the first
    /// one starts under control.
    pub fn new(catalog: &VariantCatalog, config: GameConfig) -> Self {
        let roster: Vec<Character> = catalog
            .iter()
            .map(|spec| Character::from_spec(spec, &config))
            .collect();

        tracing::info!(
            characters = roster.len(),
            spawn = %config.spawn,
            "session created"
        );

        Self {
            last_position: config.spawn,
            config,
            roster,
            active: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn active(&self) -> &Character {
        &self.roster[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn roster(&self) -> &[Character] {
        &self.roster
    }

    /// Advances the active character by one tick.
    pub fn tick(&mut self) -> TickReport {
        let previous = self.redraw_area(self.last_position);
        let advance = self.roster[self.active].advance_animation();
        let position = self.active().position();
        let current = self.redraw_area(position);
        self.last_position = position;

        TickReport {
            advance,
            previous,
            current,
        }
    }

    /// Applies a pressed (or repeated) command. Returns a narration line for
    /// commands worth telling the player about.
    pub fn press(&mut self, command: Command) -> Option<String> {
        match command {
            Command::Switch => return Some(self.switch()),
            Command::Reset => return Some(self.reset()),
            _ => {}
        }

        let character = &mut self.roster[self.active];
        match command {
            Command::Idle => {
                character.set_idle();
                None
            }
            Command::Walk => {
                character.walk();
                None
            }
            Command::Run => {
                character.run();
                None
            }
            Command::Attack => {
                let outcome = character.attack();
                narrate_attack(character, outcome)
            }
            Command::Jump => {
                let outcome = character.jump();
                narrate_jump(character, outcome)
            }
            Command::ToggleShield => Some(toggle_shield(character)),
            Command::RestoreMana => {
                let amount = character
                    .mana()
                    .map(|mana| mana.spec().restore_amount)
                    .unwrap_or_default();
                let outcome = character.restore_mana(amount);
                Some(narrate_restore(character, outcome))
            }
            Command::Switch | Command::Reset => None,
        }
    }

    /// Handles the release of a held command.
    ///
    /// Releasing a continuous command returns to idle unless a one-shot is in
    /// flight (it must finish) or a shield is raised (it stays up). Returns
    /// whether the character was sent idle.
    pub fn release(&mut self, command: Command) -> bool {
        if !command.is_continuous() {
            return false;
        }
        let character = &mut self.roster[self.active];
        if character.is_in_one_shot_animation() || character.is_shielding() {
            return false;
        }
        character.set_idle().is_applied()
    }

    /// Hands control to the next roster entry, carrying over the last observed
    /// position.
    pub fn switch(&mut self) -> String {
        self.active = (self.active + 1) % self.roster.len();
        let position = self.last_position;
        let character = &mut self.roster[self.active];
        character.teleport(position);
        character.set_idle();

        tracing::info!(
            name = character.name(),
            kind = %character.kind(),
            "switched character"
        );
        format!(
            "Switched to {} ({})",
            character.name(),
            character.kind().label()
        )
    }

    /// Sends the active character back to spawn with full resources.
    pub fn reset(&mut self) -> String {
        let character = &mut self.roster[self.active];
        character.reset();
        self.last_position = character.position();

        tracing::info!(name = character.name(), "session reset");
        format!(
            "{} returns to {}",
            self.active().name(),
            self.last_position
        )
    }

    /// Window title text, e.g. `SAMURAI [Shield Available]`.
    pub fn title(&self) -> String {
        let character = self.active();
        let shield = match character.shield() {
            Some(shield) if shield.is_raised() => "[SHIELDING]",
            Some(_) => "[Shield Available]",
            None => "[No Shield]",
        };
        format!("{} {}", character.kind().label(), shield)
    }

    fn redraw_area(&self, position: Position) -> FrameRect {
        FrameRect::new(
            position.x,
            position.y,
            self.config.frame_width,
            self.config.frame_height,
        )
        .inflate(self.config.redraw_margin)
    }
}

fn mana_suffix(character: &Character) -> String {
    character
        .mana()
        .map(|mana| mana.meter().to_string())
        .unwrap_or_default()
}

fn narrate_attack(character: &Character, outcome: ActionOutcome) -> Option<String> {
    let name = character.name();
    let power = character.params().attack_power;
    match outcome {
        ActionOutcome::Performed => Some(format!(
            "{} ({}) attacks with power {}!",
            name,
            character.kind().label(),
            power
        )),
        ActionOutcome::Empowered { .. } => Some(format!(
            "{} uses mana-powered attack! Power: {}, Mana: {}",
            name,
            power,
            mana_suffix(character)
        )),
        ActionOutcome::Weakened => Some(format!(
            "{} attacks weakly - low mana! Mana: {}",
            name,
            mana_suffix(character)
        )),
        _ => None,
    }
}

fn narrate_jump(character: &Character, outcome: ActionOutcome) -> Option<String> {
    let name = character.name();
    let distance = character.params().jump_distance;
    match outcome {
        ActionOutcome::Performed => Some(format!(
            "{} ({}) jumps {} pixels!",
            name,
            character.kind().label(),
            distance
        )),
        ActionOutcome::Empowered { .. } => Some(format!(
            "{} uses mana-boosted jump! Distance: {}, Mana: {}",
            name,
            distance,
            mana_suffix(character)
        )),
        ActionOutcome::Weakened => Some(format!(
            "{} normal jump - low mana! Mana: {}",
            name,
            mana_suffix(character)
        )),
        _ => None,
    }
}

fn toggle_shield(character: &mut Character) -> String {
    let name = character.name().to_string();
    if character.is_shielding() {
        character.deactivate_shield();
        return format!("{} lowers the shield", name);
    }

    match character.activate_shield() {
        ActionOutcome::Unsupported => format!(
            "{} ({}) does not have shield ability!",
            name,
            character.kind().label()
        ),
        ActionOutcome::Refused if character.mana().is_some() => {
            format!("{} cannot use shield - insufficient mana or energy!", name)
        }
        ActionOutcome::Refused => format!("{} cannot use shield - insufficient energy!", name),
        _ if character.mana().is_some() => format!(
            "{} raises a shield! (Mana: {})",
            name,
            mana_suffix(character)
        ),
        _ => format!("{} raises a shield!", name),
    }
}

fn narrate_restore(character: &Character, outcome: ActionOutcome) -> String {
    match outcome {
        ActionOutcome::Unsupported => format!("{} doesn't use mana!", character.name()),
        _ => format!(
            "{} restores mana! Current: {}",
            character.name(),
            mana_suffix(character)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(&VariantCatalog::reference(), GameConfig::default())
    }

    #[test]
    fn roster_follows_catalog_order() {
        let session = session();
        let names: Vec<&str> = session.roster().iter().map(Character::name).collect();
        assert_eq!(names, vec!["Shadow Ninja", "Blade Samurai", "Swift Fighter"]);
        assert!(
            session
                .roster()
                .iter()
                .all(|c| c.position() == GameConfig::DEFAULT_SPAWN)
        );
    }

    #[test]
    fn switch_cycles_and_carries_position() {
        let mut session = session();
        for _ in 0..5 {
            session.press(Command::Walk);
        }
        session.tick();
        assert_eq!(session.active().position(), Position::new(110, 200));

        let message = session.press(Command::Switch);
        assert_eq!(message.as_deref(), Some("Switched to Blade Samurai (SAMURAI)"));
        assert_eq!(session.active_index(), 1);
        assert_eq!(session.active().position(), Position::new(110, 200));
        assert_eq!(session.active().action(), ActionKind::Idle);

        session.press(Command::Switch);
        session.press(Command::Switch);
        assert_eq!(session.active_index(), 0);
    }

    #[test]
    fn release_forces_idle_for_continuous_actions() {
        let mut session = session();
        session.press(Command::Walk);
        assert!(session.release(Command::Walk));
        assert_eq!(session.active().action(), ActionKind::Idle);
    }

    #[test]
    fn release_does_not_interrupt_one_shot() {
        let mut session = session();
        session.press(Command::Attack);
        assert!(!session.release(Command::Run));
        assert_eq!(session.active().action(), ActionKind::Attack);
    }

    #[test]
    fn release_keeps_shield_raised() {
        let mut session = session();
        session.press(Command::Switch);
        session.press(Command::ToggleShield);
        session.press(Command::Walk);
        assert!(!session.release(Command::Walk));
        assert_eq!(session.active().action(), ActionKind::Shield);
        assert!(session.active().is_shielding());
    }

    #[test]
    fn release_of_one_shot_command_is_ignored() {
        let mut session = session();
        session.press(Command::Walk);
        assert!(!session.release(Command::Attack));
        assert_eq!(session.active().action(), ActionKind::Walk);
    }

    #[test]
    fn title_reflects_shield_capability() {
        let mut session = session();
        assert_eq!(session.title(), "NINJA [No Shield]");
        session.press(Command::Switch);
        assert_eq!(session.title(), "SAMURAI [Shield Available]");
        session.press(Command::ToggleShield);
        assert_eq!(session.title(), "SAMURAI [SHIELDING]");
        session.press(Command::ToggleShield);
        assert_eq!(session.title(), "SAMURAI [Shield Available]");
    }

    #[test]
    fn unsupported_capabilities_are_narrated() {
        let mut session = session();
        assert_eq!(
            session.press(Command::ToggleShield).as_deref(),
            Some("Shadow Ninja (NINJA) does not have shield ability!")
        );
        assert_eq!(
            session.press(Command::RestoreMana).as_deref(),
            Some("Shadow Ninja doesn't use mana!")
        );
        assert_eq!(session.active().action(), ActionKind::Idle);
    }

    #[test]
    fn fighter_narration_reports_mana() {
        let mut session = session();
        session.press(Command::Switch);
        session.press(Command::Switch);

        assert_eq!(
            session.press(Command::Attack).as_deref(),
            Some("Swift Fighter uses mana-powered attack! Power: 60, Mana: 85/100")
        );
        assert_eq!(session.press(Command::Attack), None);
        assert_eq!(
            session.press(Command::RestoreMana).as_deref(),
            Some("Swift Fighter restores mana! Current: 100/100")
        );
    }

    #[test]
    fn reset_restores_spawn_and_resources() {
        let mut session = session();
        session.press(Command::Switch);
        session.press(Command::Switch);
        session.press(Command::ToggleShield);
        for _ in 0..20 {
            session.press(Command::Walk);
            session.tick();
        }
        session.press(Command::Reset);

        let fighter = session.active();
        assert_eq!(fighter.position(), Position::new(100, 200));
        assert_eq!(fighter.action(), ActionKind::Idle);
        assert!(!fighter.is_shielding());
        assert_eq!(fighter.mana().map(|m| m.current()), Some(100));
        assert_eq!(fighter.shield().map(|s| s.duration()), Some(80));
    }

    #[test]
    fn tick_reports_redraw_regions() {
        let mut session = session();
        let report = session.tick();
        assert!(!report.moved());
        assert_eq!(report.current, FrameRect::new(90, 190, 148, 148));

        session.press(Command::Run);
        let report = session.tick();
        assert!(report.moved());
        assert_eq!(report.previous.x, 90);
        assert_eq!(report.current.x, 94);
    }

    #[test]
    fn command_names_parse() {
        assert_eq!("toggle_shield".parse::<Command>(), Ok(Command::ToggleShield));
        assert_eq!(Command::RestoreMana.to_string(), "restore_mana");
        assert!(Command::Walk.is_continuous());
        assert!(!Command::Jump.is_continuous());
    }
}
