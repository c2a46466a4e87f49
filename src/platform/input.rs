//! Keyboard sampling
//!
//! Physical keys (DOM `KeyboardEvent.key` values) are tracked as a held set.
//! Movement keys are read as a snapshot once per frame; pause and reset fire
//! once per physical press.

use std::collections::HashSet;

use crate::sim::TickInput;

/// Abstract actions bound to one or more physical keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    Left,
    Right,
    Jump,
    Pause,
    Reset,
}

impl LogicalKey {
    /// Map a key identifier, ignoring case
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "arrowleft" | "a" => Some(LogicalKey::Left),
            "arrowright" | "d" => Some(LogicalKey::Right),
            "arrowup" | "w" | " " | "space" | "spacebar" => Some(LogicalKey::Jump),
            "p" => Some(LogicalKey::Pause),
            "r" => Some(LogicalKey::Reset),
            _ => None,
        }
    }
}

/// One-shot controls produced by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    Reset,
}

/// Physical keys currently held down
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press. Returns a command only on the initial press, so OS
    /// auto-repeat does not toggle pause over and over.
    pub fn key_down(&mut self, key: &str) -> Option<Command> {
        let key = key.to_lowercase();
        let logical = LogicalKey::from_key(&key);
        if !self.held.insert(key) {
            return None;
        }
        match logical {
            Some(LogicalKey::Pause) => Some(Command::TogglePause),
            Some(LogicalKey::Reset) => Some(Command::Reset),
            _ => None,
        }
    }

    pub fn key_up(&mut self, key: &str) {
        self.held.remove(&key.to_lowercase());
    }

    /// Forget everything held (focus lost, keyup events will never arrive)
    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// Whether any physical key bound to `action` is down
    pub fn is_held(&self, action: LogicalKey) -> bool {
        self.held
            .iter()
            .any(|key| LogicalKey::from_key(key) == Some(action))
    }

    /// Movement keys for this frame
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            left: self.is_held(LogicalKey::Left),
            right: self.is_held(LogicalKey::Right),
            jump: self.is_held(LogicalKey::Jump),
        }
    }
}
