//! Renderers
//!
//! Read-only views of [`GameState`](crate::sim::GameState):
//! - `canvas`: HTML canvas 2D (web only)
//! - `ascii`: character grid for headless runs and logs

pub mod ascii;
#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use ascii::AsciiRenderer;
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

/// Paddle and ball fill
pub const FOREGROUND: &str = "#fff";
/// Lower stop of the paddle gradient
pub const PADDLE_SHADE: &str = "#ddd";
/// Brick border
pub const BRICK_OUTLINE: &str = "#333";
pub const BRICK_OUTLINE_WIDTH: f64 = 2.0;
/// Ball glow blur radius
pub const GLOW_BLUR: f64 = 10.0;
