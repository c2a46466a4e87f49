//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame, no wall-clock time
//! - Fixed level geometry
//! - Stable iteration order (platform and coin list order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{AxisResolution, resolve_x, resolve_y};
pub use level::{Coin, Level, Platform, PlatformKind, build_level};
pub use rect::Rect;
pub use state::{GameEvent, GameState, Outcome, Player};
pub use tick::{TickInput, tick};
