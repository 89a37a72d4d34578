//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping and the hold bookkeeping
//! for continuous commands, so the rest of the application can remain
//! agnostic about concrete key bindings or the specifics of `crossterm`
//! events.

use std::time::{Duration, Instant};

use brawler_core::Command;
use crossterm::event::{KeyCode, KeyEvent};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Forward the command to the session.
    Command(Command),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into session commands using the fixed key map.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        let command = match raw.to_ascii_lowercase() {
            'q' => return KeyAction::Quit,
            'w' => Command::Walk,
            'r' => Command::Run,
            'a' => Command::Attack,
            'j' => Command::Jump,
            's' => Command::ToggleShield,
            'i' => Command::Idle,
            ' ' => Command::Reset,
            'c' => Command::Switch,
            'm' => Command::RestoreMana,
            _ => return KeyAction::None,
        };
        KeyAction::Command(command)
    }
}

/// Tracks the continuous command currently held down.
///
/// With `timeout` set, a hold lapses when no repeat arrives in time; without
/// it, only an explicit release ends the hold.
#[derive(Clone, Debug)]
pub struct HoldTracker {
    timeout: Option<Duration>,
    held: Option<(Command, Instant)>,
}

impl HoldTracker {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            timeout,
            held: None,
        }
    }

    pub fn held(&self) -> Option<Command> {
        self.held.map(|(command, _)| command)
    }

    /// Records a press or repeat. Discrete commands are not tracked.
    pub fn press(&mut self, command: Command, now: Instant) {
        if command.is_continuous() {
            self.held = Some((command, now));
        }
    }

    /// Ends the hold if `command` is the one held. Returns whether it was.
    pub fn release(&mut self, command: Command) -> bool {
        if self.held() == Some(command) {
            self.held = None;
            true
        } else {
            false
        }
    }

    /// Returns the held command once its repeat window has lapsed.
    pub fn expire(&mut self, now: Instant) -> Option<Command> {
        let timeout = self.timeout?;
        let (command, since) = self.held?;
        if now.saturating_duration_since(since) >= timeout {
            self.held = None;
            Some(command)
        } else {
            None
        }
    }
}
