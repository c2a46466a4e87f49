//! Episode state and core simulation types
//!
//! Everything the engine mutates during an episode lives in [`GameState`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::{Level, build_level};
use super::rect::Rect;
use crate::consts::*;
use crate::spawn_point;

/// How the current episode stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Active gameplay
    #[default]
    Running,
    /// Every coin collected
    Won,
    /// Ran out of lives
    Lost,
}

impl Outcome {
    /// Won or lost: the simulation no longer advances
    pub fn is_terminal(self) -> bool {
        self != Outcome::Running
    }
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A coin was picked up; `score` is the new total
    CoinCollected { index: usize, score: u32 },
    /// The player fell off the world; `lives` is what remains
    LifeLost { lives: u8 },
    /// Player moved back to the spawn point after a fall
    Respawned,
    Won,
    Lost,
}

/// The player sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub on_ground: bool,
    /// +1 facing right, -1 facing left
    pub facing: i8,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: spawn_point(),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            vel: Vec2::ZERO,
            on_ground: false,
            facing: 1,
        }
    }
}

impl Player {
    /// Current hitbox
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Put the player back at spawn, at rest and airborne
    pub fn respawn(&mut self) {
        self.pos = spawn_point();
        self.vel = Vec2::ZERO;
        self.on_ground = false;
    }
}

/// Complete episode state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    pub level: Level,
    pub score: u32,
    pub lives: u8,
    pub outcome: Outcome,
    /// Ticks advanced this episode
    pub time_ticks: u64,
    /// Events from the most recent tick, drained by the engine
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh episode: player at spawn, untouched level, full lives
    pub fn new() -> Self {
        Self {
            player: Player::default(),
            level: build_level(),
            score: 0,
            lives: STARTING_LIVES,
            outcome: Outcome::Running,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn won(&self) -> bool {
        self.outcome == Outcome::Won
    }

    pub fn lost(&self) -> bool {
        self.outcome == Outcome::Lost
    }

    pub fn is_running(&self) -> bool {
        self.outcome == Outcome::Running
    }

    pub fn coins_taken(&self) -> usize {
        self.level.coins.iter().filter(|c| c.taken).count()
    }

    pub fn all_coins_taken(&self) -> bool {
        self.level.coins.iter().all(|c| c.taken)
    }

    /// Take the events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
