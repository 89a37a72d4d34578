use brawler_core::{
    ActionKind, ActionOutcome, Character, Command, FrameAdvance, GameConfig, Position, Session,
    VariantCatalog, VariantKind, frame_count_by_name,
};
use strum::IntoEnumIterator;

fn roster() -> Vec<Character> {
    let config = GameConfig::default();
    VariantCatalog::reference()
        .iter()
        .map(|spec| Character::from_spec(spec, &config))
        .collect()
}

fn tick_n(character: &mut Character, n: u32) -> Vec<FrameAdvance> {
    (0..n).map(|_| character.advance_animation()).collect()
}

#[test]
fn frame_table_is_shared_by_every_variant() {
    let expected = [6, 8, 8, 5, 12, 4];
    let counts: Vec<u32> = ActionKind::iter().map(ActionKind::frame_count).collect();
    assert_eq!(counts, expected);

    for mut character in roster() {
        for action in [ActionKind::Walk, ActionKind::Run] {
            if action == ActionKind::Walk {
                character.walk();
            } else {
                character.run();
            }
            assert_eq!(character.frame_count(), action.frame_count());
        }
    }

    assert_eq!(frame_count_by_name("Crouch"), 1);
    assert_eq!(frame_count_by_name("jump"), 12);
}

#[test]
fn frame_index_stays_in_range_for_scripted_play() {
    let script = [
        Command::Walk,
        Command::Attack,
        Command::Run,
        Command::Jump,
        Command::ToggleShield,
        Command::Walk,
        Command::Jump,
        Command::RestoreMana,
        Command::Idle,
        Command::Switch,
    ];

    let mut session = Session::new(&VariantCatalog::reference(), GameConfig::default());
    for round in 0..30 {
        let command = script[round % script.len()];
        session.press(command);
        for _ in 0..(round % 7) {
            session.tick();
            let active = session.active();
            assert!(active.current_frame() < active.frame_count());
            assert!(active.frame_timer() < session.config().frame_delay);
            if active.is_shielding() {
                assert_eq!(active.action(), ActionKind::Shield);
            }
        }
    }
}

#[test]
fn attack_plays_once_then_returns_to_idle() {
    for mut character in roster() {
        character.attack();
        let steps = tick_n(&mut character, GameConfig::DEFAULT_FRAME_DELAY * 5);
        assert_eq!(
            steps.last(),
            Some(&FrameAdvance::Completed(ActionKind::Attack))
        );
        assert_eq!(character.action(), ActionKind::Idle);
        assert!(!character.has_completed_one_shot());
    }
}

#[test]
fn jump_lands_back_on_the_ground() {
    let mut ninja = Character::new("Shadow Ninja", 100, 200, &VariantCatalog::balanced());
    ninja.jump();
    tick_n(&mut ninja, GameConfig::DEFAULT_FRAME_DELAY * 5);
    assert_eq!(ninja.current_frame(), 5);
    assert_eq!(ninja.position(), Position::new(127, 160));

    let before = ninja.position();
    assert_eq!(ninja.jump(), ActionOutcome::Ignored);
    assert_eq!(ninja.current_frame(), 5);
    assert_eq!(ninja.jump_anchor(), Some(Position::new(100, 200)));
    assert_eq!(ninja.position(), before);

    tick_n(&mut ninja, GameConfig::DEFAULT_FRAME_DELAY * 7);
    assert_eq!(ninja.action(), ActionKind::Idle);
    assert_eq!(ninja.position(), Position::new(160, 200));
}

#[test]
fn low_mana_attack_is_weak_but_complete() {
    let mut session = Session::new(&VariantCatalog::reference(), GameConfig::default());
    session.press(Command::Switch);
    session.press(Command::Switch);
    assert_eq!(session.active().kind(), VariantKind::Fighter);

    for _ in 0..7 {
        session.press(Command::Attack);
        while session.active().action() == ActionKind::Attack {
            session.tick();
        }
    }
    assert_eq!(session.active().mana().map(|m| m.current()), Some(9));

    let line = session.press(Command::Attack);
    assert_eq!(
        line.as_deref(),
        Some("Swift Fighter attacks weakly - low mana! Mana: 9/100")
    );
    assert_eq!(session.active().action(), ActionKind::Attack);
    assert_eq!(session.active().mana().map(|m| m.current()), Some(9));
}

#[test]
fn shield_never_overlaps_a_jump() {
    let mut session = Session::new(&VariantCatalog::reference(), GameConfig::default());
    session.press(Command::Switch);
    session.press(Command::ToggleShield);
    assert!(session.active().is_shielding());

    session.press(Command::Jump);
    let samurai = session.active();
    assert!(!samurai.is_shielding());
    assert_eq!(samurai.action(), ActionKind::Jump);

    for _ in 0..GameConfig::DEFAULT_FRAME_DELAY * 12 {
        session.tick();
        let samurai = session.active();
        assert!(!(samurai.is_shielding() && samurai.action() == ActionKind::Jump));
    }
}

#[test]
fn reset_returns_every_variant_to_baseline() {
    let mut session = Session::new(&VariantCatalog::reference(), GameConfig::default());
    for _ in 0..3 {
        session.press(Command::ToggleShield);
        for _ in 0..40 {
            session.press(Command::Walk);
            session.tick();
        }
        session.press(Command::Jump);
        session.press(Command::Reset);

        let active = session.active();
        assert_eq!(active.position(), Position::new(100, 200));
        assert_eq!(active.action(), ActionKind::Idle);
        assert!(!active.is_shielding());
        if let Some(mana) = active.mana() {
            assert_eq!(mana.current(), mana.maximum());
        }
        if let Some(shield) = active.shield() {
            assert_eq!(shield.duration(), shield.max_duration());
        }
        session.press(Command::Switch);
    }
}
