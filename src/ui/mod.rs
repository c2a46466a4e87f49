//! HUD notification contract
//!
//! The engine pushes score, lives and pause changes to a [`HudListener`].
//! Listeners only display; they never write back into the simulation.

pub mod hud;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use hud::{HudListener, HudState};

#[cfg(target_arch = "wasm32")]
pub use dom::DomHud;
