//! Simulation engine
//!
//! Owns the episode state and the HUD listener. Every change to score, lives
//! or pause state reaches the listener through here.

use crate::sim::{GameEvent, GameState, TickInput, tick};
use crate::tuning::Tuning;
use crate::ui::HudListener;

pub struct Engine {
    state: GameState,
    tuning: Tuning,
    hud: Box<dyn HudListener>,
}

impl Engine {
    /// Start a fresh episode and announce it to the HUD
    pub fn new(tuning: Tuning, hud: Box<dyn HudListener>) -> Self {
        let mut engine = Self {
            state: GameState::new(),
            tuning,
            hud,
        };
        engine.reset_episode();
        engine
    }

    /// Throw away the current episode and start over
    pub fn reset_episode(&mut self) {
        self.state = GameState::new();
        self.hud.set_score(self.state.score);
        self.hud.set_lives(self.state.lives);
        self.hud.set_paused(false);
        log::info!("Episode reset ({} lives)", self.state.lives);
    }

    /// Advance one frame. Won or lost episodes stay as they are.
    pub fn advance(&mut self, input: &TickInput) {
        tick(&mut self.state, input, &self.tuning);

        for event in self.state.drain_events() {
            match event {
                GameEvent::CoinCollected { index, score } => {
                    log::info!("Coin {} collected (score {})", index, score);
                    self.hud.set_score(score);
                }
                GameEvent::LifeLost { lives } => {
                    log::info!("Fell off the world ({} lives left)", lives);
                    self.hud.set_lives(lives);
                }
                GameEvent::Respawned => log::debug!("Respawned at spawn point"),
                GameEvent::Won => log::info!(
                    "All coins collected in {} ticks, score {}",
                    self.state.time_ticks,
                    self.state.score
                ),
                GameEvent::Lost => log::info!("Game over, final score {}", self.state.score),
            }
        }
    }

    /// Forward a pause change; the engine itself has no pause state
    pub fn notify_paused(&mut self, paused: bool) {
        self.hud.set_paused(paused);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for scripted setups (tests, demos)
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn is_terminal(&self) -> bool {
        self.state.outcome.is_terminal()
    }
}
