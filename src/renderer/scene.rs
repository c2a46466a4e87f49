//! Frame composition
//!
//! Layers are painted back to front: background, platforms, coins, player,
//! then the pause or end-of-game overlay.

use glam::Vec2;

use super::surface::{Color, Font, Surface};
use crate::consts::*;
use crate::sim::level::{Coin, Platform, PlatformKind};
use crate::sim::{GameState, Outcome, Player, Rect};

pub mod colors {
    use super::Color;

    pub const SKY: Color = Color::rgb(0x5f, 0xc7, 0xff);
    pub const MOUNTAIN: Color = Color::rgb(0x8f, 0xd6, 0xff);
    pub const CLOUD: Color = Color::rgba(255, 255, 255, 0.9);
    pub const DIRT: Color = Color::rgb(0x6b, 0x3e, 0x26);
    pub const GRASS: Color = Color::rgb(0x2f, 0xab, 0x27);
    pub const BRICK: Color = Color::rgb(0xb4, 0x58, 0x2d);
    pub const MORTAR: Color = Color::rgb(0x7a, 0x2f, 0x18);
    pub const COIN: Color = Color::rgb(0xff, 0xd8, 0x4d);
    pub const COIN_SHINE: Color = Color::rgba(255, 255, 255, 0.8);
    pub const PLAYER_BODY: Color = Color::rgb(0xe6, 0x39, 0x46);
    pub const PLAYER_LEGS: Color = Color::rgb(0x1d, 0x35, 0x57);
    pub const PLAYER_FACE: Color = Color::rgb(0xf1, 0xfa, 0x8c);
    pub const DIM: Color = Color::rgba(0, 0, 0, 0.35);
    pub const TEXT: Color = Color::rgb(0xff, 0xff, 0xff);
}

pub const WIN_TEXT: &str = "You Win!";
pub const LOSE_TEXT: &str = "Game Over";
pub const RESTART_TEXT: &str = "Press R to restart";
pub const PAUSED_TEXT: &str = "Paused (P to resume)";

const GRASS_DEPTH: f32 = 8.0;
const MORTAR_WIDTH: f32 = 2.0;
const BRICK_ROW: f32 = 10.0;
const BRICK_COL: f32 = 16.0;
const LEGS_HEIGHT: f32 = 10.0;

const MOUNTAINS: [[(f32, f32); 3]; 2] = [
    [(0.0, 140.0), (120.0, 220.0), (240.0, 140.0)],
    [(200.0, 120.0), (340.0, 220.0), (480.0, 120.0)],
];

const CLOUDS: [(f32, f32); 3] = [(90.0, 70.0), (320.0, 60.0), (600.0, 80.0)];

/// (offset, radius) of the discs in one cloud cluster
const CLOUD_PUFFS: [(f32, f32, f32); 3] = [(0.0, 0.0, 16.0), (18.0, 4.0, 14.0), (-18.0, 6.0, 12.0)];

/// Paint one complete frame
pub fn draw_frame(surface: &mut dyn Surface, state: &GameState, paused: bool) {
    draw_background(surface);
    for platform in &state.level.platforms {
        draw_platform(surface, platform);
    }
    for coin in state.level.coins.iter().filter(|c| !c.taken) {
        draw_coin(surface, coin);
    }
    draw_player(surface, &state.player);
    draw_overlay(surface, state.outcome, paused);
}

fn draw_background(surface: &mut dyn Surface) {
    surface.fill_rect(Rect::new(0.0, 0.0, WORLD_WIDTH, WORLD_HEIGHT), colors::SKY);

    // Mountain y values are heights above the bottom edge
    for mountain in &MOUNTAINS {
        let points = mountain.map(|(x, up)| Vec2::new(x, WORLD_HEIGHT - up));
        surface.fill_polygon(&points, colors::MOUNTAIN);
    }

    for &(cx, cy) in &CLOUDS {
        for &(dx, dy, r) in &CLOUD_PUFFS {
            surface.fill_circle(Vec2::new(cx + dx, cy + dy), r, colors::CLOUD);
        }
    }
}

fn draw_platform(surface: &mut dyn Surface, platform: &Platform) {
    let r = platform.rect;
    match platform.kind {
        PlatformKind::Ground => {
            surface.fill_rect(r, colors::DIRT);
            surface.fill_rect(Rect::new(r.x, r.y, r.w, GRASS_DEPTH), colors::GRASS);
        }
        PlatformKind::Brick => {
            surface.fill_rect(r, colors::BRICK);

            let mut y = r.y;
            while y < r.bottom() {
                surface.stroke_line(
                    Vec2::new(r.x, y),
                    Vec2::new(r.right(), y),
                    MORTAR_WIDTH,
                    colors::MORTAR,
                );
                y += BRICK_ROW;
            }

            let mut x = r.x;
            while x < r.right() {
                surface.stroke_line(
                    Vec2::new(x, r.y),
                    Vec2::new(x, r.bottom()),
                    MORTAR_WIDTH,
                    colors::MORTAR,
                );
                x += BRICK_COL;
            }
        }
    }
}

fn draw_coin(surface: &mut dyn Surface, coin: &Coin) {
    surface.fill_circle(coin.pos, coin.radius, colors::COIN);
    let shine = coin.pos - Vec2::splat(coin.radius / 3.0);
    surface.fill_circle(shine, coin.radius / 4.0, colors::COIN_SHINE);
}

fn draw_player(surface: &mut dyn Surface, player: &Player) {
    let body = player.rect();
    surface.fill_rect(body, colors::PLAYER_BODY);
    surface.fill_rect(
        Rect::new(body.x, body.bottom() - LEGS_HEIGHT, body.w, LEGS_HEIGHT),
        colors::PLAYER_LEGS,
    );
    surface.fill_rect(
        Rect::new(body.x + 3.0, body.y + 4.0, body.w - 6.0, 6.0),
        colors::PLAYER_FACE,
    );
}

fn draw_overlay(surface: &mut dyn Surface, outcome: Outcome, paused: bool) {
    let full = Rect::new(0.0, 0.0, WORLD_WIDTH, WORLD_HEIGHT);
    let mid_x = WORLD_WIDTH / 2.0;
    let mid_y = WORLD_HEIGHT / 2.0;

    let headline = match outcome {
        Outcome::Won => Some(WIN_TEXT),
        Outcome::Lost => Some(LOSE_TEXT),
        Outcome::Running => None,
    };

    if let Some(text) = headline {
        surface.fill_rect(full, colors::DIM);
        surface.fill_text(text, Vec2::new(mid_x, mid_y - 10.0), Font::bold(28.0), colors::TEXT);
        surface.fill_text(
            RESTART_TEXT,
            Vec2::new(mid_x, mid_y + 20.0),
            Font::regular(16.0),
            colors::TEXT,
        );
    } else if paused {
        surface.fill_rect(full, colors::DIM);
        surface.fill_text(PAUSED_TEXT, Vec2::new(mid_x, mid_y), Font::bold(22.0), colors::TEXT);
    }
}
