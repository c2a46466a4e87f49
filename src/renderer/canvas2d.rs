//! Canvas 2D backend

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::{Color, Font, Surface};
use crate::platform::PlatformError;
use crate::sim::Rect;

/// Draws onto a page `<canvas>` through its 2D context
pub struct Canvas2dSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, PlatformError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(PlatformError::from_js)?
            .ok_or(PlatformError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| PlatformError::NoContext)?;
        Ok(Self { canvas, ctx })
    }

    /// Whether the canvas is still attached to the page
    pub fn is_available(&self) -> bool {
        self.canvas.is_connected()
    }
}

impl Surface for Canvas2dSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx
            .fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.begin_path();
        match self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
        {
            Ok(()) => self.ctx.fill(),
            Err(e) => log::trace!("arc rejected: {:?}", e),
        }
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, anchor: Vec2, font: Font, color: Color) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.set_font(&font.css());
        self.ctx.set_text_align("center");
        if let Err(e) = self.ctx.fill_text(text, anchor.x as f64, anchor.y as f64) {
            log::trace!("fill_text rejected: {:?}", e);
        }
    }
}
