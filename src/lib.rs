//! Coin Dash - A single-screen pixel platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, episode state)
//! - `engine`: Owns the episode and pushes HUD notifications
//! - `driver`: Per-frame update-then-draw cycle with pause/reset controls
//! - `renderer`: Drawing surface contract and scene layering
//! - `platform`: Keyboard mapping and frame scheduling
//! - `tuning`: Data-driven movement constants
//! - `ui`: HUD notification contract

pub mod driver;
pub mod engine;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use driver::{Driver, FrameReport};
pub use engine::Engine;
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// World dimensions (logical canvas units)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 450.0;

    /// Player hitbox
    pub const PLAYER_WIDTH: f32 = 18.0;
    pub const PLAYER_HEIGHT: f32 = 22.0;

    /// Spawn point (top-left of the player rectangle)
    pub const SPAWN_X: f32 = 40.0;
    pub const SPAWN_Y: f32 = WORLD_HEIGHT - 90.0;

    /// Coin radius
    pub const COIN_RADIUS: f32 = 6.0;

    /// Score per coin
    pub const COIN_VALUE: u32 = 100;

    /// Lives at the start of an episode
    pub const STARTING_LIVES: u8 = 3;
}

/// Spawn position as a vector
#[inline]
pub fn spawn_point() -> Vec2 {
    Vec2::new(consts::SPAWN_X, consts::SPAWN_Y)
}
