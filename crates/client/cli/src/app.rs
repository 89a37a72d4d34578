//! Tick loop orchestrating keyboard input, the session and rendering.
use std::time::Instant;

use anyhow::Result;
use brawler_core::{Command, FrameAdvance, Session, TickReport};
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use tokio::time::{self, Duration, MissedTickBehavior};

use crate::config::CliConfig;
use crate::input::{HoldTracker, InputHandler, KeyAction};
use crate::message::MessageLog;
use crate::presentation::{terminal::Tui, ui};

pub struct App {
    session: Session,
    input: InputHandler,
    holds: HoldTracker,
    messages: MessageLog,
    tick: Duration,
    ticks: u64,
}

impl App {
    /// `key_release` tells whether the terminal reports key releases; without
    /// them holds lapse after the configured timeout.
    pub fn new(session: Session, config: &CliConfig, key_release: bool) -> Self {
        let timeout = (!key_release).then_some(config.hold);
        let mut messages = MessageLog::new(config.message_capacity);
        messages.push(format!("Playing as {}", session.active().name()), 0);

        Self {
            session,
            input: InputHandler,
            holds: HoldTracker::new(timeout),
            messages,
            tick: config.tick,
            ticks: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    pub fn held(&self) -> Option<Command> {
        self.holds.held()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        let mut interval = time::interval(self.tick);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        ui::render(terminal, &self)?;
        loop {
            interval.tick().await;

            if self.drain_input()? {
                tracing::info!(ticks = self.ticks, "quit requested");
                break;
            }
            self.step(Instant::now());
            ui::render(terminal, &self)?;
        }

        Ok(())
    }

    /// Applies every pending terminal event. Returns true on quit.
    fn drain_input(&mut self) -> Result<bool> {
        while term_event::poll(Duration::from_millis(0))? {
            if let TermEvent::Key(key) = term_event::read()? {
                if self.handle_key(key, Instant::now()) {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Routes one key event to the session. Returns true on quit.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        let action = self.input.handle_key(key);
        match (key.kind, action) {
            (KeyEventKind::Release, KeyAction::Command(command)) => {
                if self.holds.release(command) {
                    self.session.release(command);
                }
                false
            }
            (KeyEventKind::Release, _) => false,
            (_, KeyAction::Quit) => true,
            (_, KeyAction::Command(command)) => {
                self.holds.press(command, now);
                if let Some(line) = self.session.press(command) {
                    self.messages.push(line, self.ticks);
                }
                false
            }
            (_, KeyAction::None) => false,
        }
    }

    /// One tick: lapse stale holds, then advance the session.
    pub fn step(&mut self, now: Instant) -> TickReport {
        if let Some(command) = self.holds.expire(now) {
            self.session.release(command);
        }

        let report = self.session.tick();
        self.ticks += 1;
        if let FrameAdvance::Completed(action) = report.advance {
            tracing::debug!(tick = self.ticks, %action, "animation finished");
        }
        if report.moved() {
            tracing::trace!(
                tick = self.ticks,
                x = report.current.x,
                y = report.current.y,
                "sprite moved"
            );
        }
        report
    }
}
