//! Drawing surface contract
//!
//! The game only ever draws; it never reads pixels back. Coordinates are
//! logical canvas units with a top-left origin.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Rect;

/// RGBA color (alpha in 0..=1)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color string
    pub fn css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Font for centered overlay text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub size_px: f32,
    pub bold: bool,
}

impl Font {
    pub const fn regular(size_px: f32) -> Self {
        Self {
            size_px,
            bold: false,
        }
    }

    pub const fn bold(size_px: f32) -> Self {
        Self {
            size_px,
            bold: true,
        }
    }

    /// CSS font shorthand
    pub fn css(&self) -> String {
        let weight = if self.bold { "bold " } else { "" };
        format!("{}{}px Inter, system-ui, sans-serif", weight, self.size_px)
    }
}

/// Primitive 2D drawing operations. Later calls paint over earlier ones.
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Closed polygon through `points`
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
    /// Text horizontally centered on `anchor.x`, baseline at `anchor.y`
    fn fill_text(&mut self, text: &str, anchor: Vec2, font: Font, color: Color);
}
