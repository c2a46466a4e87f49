//! The fixed level layout
//!
//! One full-width ground strip, four floating brick ledges and one coin
//! hovering above each ledge.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Platform look (render-only, no effect on collisions)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformKind {
    Ground,
    Brick,
}

/// A static platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    pub kind: PlatformKind,
}

impl Platform {
    pub const fn new(x: f32, y: f32, w: f32, h: f32, kind: PlatformKind) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            kind,
        }
    }
}

/// A collectible coin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub pos: Vec2,
    pub radius: f32,
    /// Only flips false -> true; a rebuilt level starts with fresh coins
    pub taken: bool,
}

impl Coin {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            radius: COIN_RADIUS,
            taken: false,
        }
    }

    /// Bounding square used for pickup tests
    pub fn bounds(&self) -> Rect {
        Rect::around_circle(self.pos, self.radius)
    }

    /// Whether `hitbox` overlaps the coin's bounding square
    pub fn touches(&self, hitbox: &Rect) -> bool {
        hitbox.overlaps(&self.bounds())
    }
}

/// Platforms and coins for one episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
}

impl Level {
    /// Collision rectangles in platform order
    pub fn platform_rects(&self) -> Vec<Rect> {
        self.platforms.iter().map(|p| p.rect).collect()
    }
}

/// Build a fresh copy of the level
pub fn build_level() -> Level {
    const H: f32 = WORLD_HEIGHT;

    let platforms = vec![
        Platform::new(0.0, H - 40.0, WORLD_WIDTH, 40.0, PlatformKind::Ground),
        Platform::new(80.0, H - 140.0, 120.0, 20.0, PlatformKind::Brick),
        Platform::new(260.0, H - 220.0, 80.0, 20.0, PlatformKind::Brick),
        Platform::new(380.0, H - 180.0, 110.0, 20.0, PlatformKind::Brick),
        Platform::new(560.0, H - 120.0, 140.0, 20.0, PlatformKind::Brick),
    ];

    let coins = vec![
        Coin::new(110.0, H - 170.0),
        Coin::new(290.0, H - 250.0),
        Coin::new(410.0, H - 210.0),
        Coin::new(600.0, H - 150.0),
    ];

    Level { platforms, coins }
}
