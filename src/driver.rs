//! Per-frame driver
//!
//! Turns key events into engine input, runs one simulation step per frame
//! unless paused, and draws the result.

use crate::engine::Engine;
use crate::platform::{Command, InputState, LogicalKey};
use crate::renderer::{Surface, draw_frame};
use crate::tuning::Tuning;
use crate::ui::HudListener;

/// What happened during one [`Driver::frame`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub advanced: bool,
    pub drawn: bool,
}

pub struct Driver {
    engine: Engine,
    input: InputState,
    paused: bool,
}

impl Driver {
    pub fn new(tuning: Tuning, hud: Box<dyn HudListener>) -> Self {
        Self {
            engine: Engine::new(tuning, hud),
            input: InputState::new(),
            paused: false,
        }
    }

    /// Key pressed. Returns true if the key is bound to a game action, so the
    /// caller can suppress the browser default (page scroll).
    pub fn key_down(&mut self, key: &str) -> bool {
        let bound = LogicalKey::from_key(key).is_some();
        match self.input.key_down(key) {
            Some(Command::TogglePause) => self.toggle_pause(),
            Some(Command::Reset) => self.reset(),
            None => {}
        }
        bound
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.key_up(key);
    }

    /// Release all keys (window lost focus)
    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Update then draw. Paused or finished episodes are still drawn.
    /// Without a surface the whole frame is skipped, simulation included.
    pub fn frame(&mut self, surface: Option<&mut dyn Surface>) -> FrameReport {
        let Some(surface) = surface else {
            log::trace!("No drawing surface, frame skipped");
            return FrameReport {
                advanced: false,
                drawn: false,
            };
        };

        let advanced = !self.paused && !self.engine.is_terminal();
        if advanced {
            let input = self.input.snapshot();
            self.engine.advance(&input);
        }

        draw_frame(surface, self.engine.state(), self.paused);
        FrameReport {
            advanced,
            drawn: true,
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.engine.notify_paused(self.paused);
        log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
    }

    /// Start a fresh episode, unpaused
    pub fn reset(&mut self) {
        self.paused = false;
        self.engine.reset_episode();
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }
}
