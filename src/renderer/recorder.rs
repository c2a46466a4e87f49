//! Surface that records draw calls instead of rasterizing them
//!
//! Used by the headless binary and by tests that check layering.

use glam::Vec2;
use serde::Serialize;

use super::surface::{Color, Font, Surface};
use crate::sim::Rect;

/// One recorded primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeLine {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    FillPolygon {
        points: Vec<Vec2>,
        color: Color,
    },
    FillText {
        text: String,
        anchor: Vec2,
        font: Font,
        color: Color,
    },
}

impl DrawCommand {
    pub fn color(&self) -> Color {
        match self {
            DrawCommand::FillRect { color, .. }
            | DrawCommand::StrokeLine { color, .. }
            | DrawCommand::FillCircle { color, .. }
            | DrawCommand::FillPolygon { color, .. }
            | DrawCommand::FillText { color, .. } => *color,
        }
    }
}

#[derive(Debug, Default)]
pub struct DrawRecorder {
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl DrawRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop recorded commands and count a new frame
    pub fn begin_frame(&mut self) {
        self.commands.clear();
        self.frames += 1;
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// All text drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Index of the first command drawn with `color`
    pub fn first_with_color(&self, color: Color) -> Option<usize> {
        self.commands.iter().position(|c| c.color() == color)
    }

    /// Index of the last command drawn with `color`
    pub fn last_with_color(&self, color: Color) -> Option<usize> {
        self.commands.iter().rposition(|c| c.color() == color)
    }
}

impl Surface for DrawRecorder {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            width,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn fill_text(&mut self, text: &str, anchor: Vec2, font: Font, color: Color) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            anchor,
            font,
            color,
        });
    }
}
