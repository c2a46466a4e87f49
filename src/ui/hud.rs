//! HUD listener trait and a plain observed-state implementation

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

/// Receives display values whenever they change
pub trait HudListener {
    fn set_score(&mut self, score: u32);
    fn set_lives(&mut self, lives: u8);
    fn set_paused(&mut self, paused: bool);
}

/// Last values pushed to the HUD
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HudState {
    pub score: u32,
    pub lives: u8,
    pub paused: bool,
    /// Total notifications received
    pub updates: u32,
}

impl HudListener for HudState {
    fn set_score(&mut self, score: u32) {
        self.score = score;
        self.updates += 1;
    }

    fn set_lives(&mut self, lives: u8) {
        self.lives = lives;
        self.updates += 1;
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
        self.updates += 1;
    }
}

/// Shared listener: lets the caller keep a handle to what the engine reports
impl<T: HudListener + ?Sized> HudListener for Rc<RefCell<T>> {
    fn set_score(&mut self, score: u32) {
        self.borrow_mut().set_score(score);
    }

    fn set_lives(&mut self, lives: u8) {
        self.borrow_mut().set_lives(lives);
    }

    fn set_paused(&mut self, paused: bool) {
        self.borrow_mut().set_paused(paused);
    }
}
