//! Rendering module
//!
//! Scene layering is written against the [`Surface`] trait. The browser build
//! draws through the canvas 2D context; tests and the native binary record
//! draw calls instead.

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
pub mod recorder;
pub mod scene;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas2d::Canvas2dSurface;
pub use recorder::{DrawCommand, DrawRecorder};
pub use scene::{colors, draw_frame};
pub use surface::{Color, Font, Surface};
