//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Keyboard input mapping
//! - Frame scheduling (requestAnimationFrame on web, bounded loop natively)

pub mod frame;
pub mod input;

pub use frame::{FrameLoop, StopHandle};
pub use input::{Command, InputState, LogicalKey};

use thiserror::Error;

/// Failures while wiring the game into the page
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(&'static str),
    #[error("element #{0} is not a canvas")]
    NotACanvas(&'static str),
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("browser call failed: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl PlatformError {
    pub fn from_js(value: wasm_bindgen::JsValue) -> Self {
        PlatformError::Js(format!("{:?}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PlatformError::MissingElement("canvas").to_string(),
            "element #canvas not found"
        );
        assert_eq!(PlatformError::NoContext.to_string(), "canvas has no 2d context");
    }
}
