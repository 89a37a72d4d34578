//! Message log backing the narration panel.
use std::collections::VecDeque;

/// One narration line, stamped with the tick it was produced on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    pub tick: u64,
}

/// Circular buffer of messages displayed to the player.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    /// Upper bound on kept lines; the panel reserves one row per line.
    pub const MAX_CAPACITY: usize = 64;

    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.clamp(1, Self::MAX_CAPACITY);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, text: impl Into<String>, tick: u64) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(MessageEntry {
            text: text.into(),
            tick,
        });
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }
}
