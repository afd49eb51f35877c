//! Brick Breaker - A classic Breakout/Arkanoid arcade game
//!
//! Core modules:
//! - `sim`: Simulation (entities, motion, collisions, game phase)
//! - `driver`: Per-frame driver and the render/HUD/message sink traits
//! - `renderer`: Canvas and ASCII render sinks
//! - `settings`: Field geometry and host options

pub mod driver;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::{FrameDriver, HudSink, MessageSink, RenderSink};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Default playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    /// Distance from the paddle's top edge to the field bottom
    pub const PADDLE_BOTTOM_OFFSET: f32 = 30.0;
    /// Horizontal speed while a move key is held (units per tick)
    pub const PADDLE_SPEED: f32 = 8.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Nominal speed used for serve velocity and paddle steering
    pub const BALL_SPEED: f32 = 4.0;
    /// Paddle rebounds only speed the ball up below this magnitude
    pub const BALL_SPEEDUP_LIMIT: f32 = 8.0;
    /// Multiplier applied on a paddle rebound
    pub const BALL_SPEEDUP: f32 = 1.05;

    /// Brick grid layout
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 9;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_X: f32 = 45.0;
    pub const BRICK_OFFSET_Y: f32 = 60.0;

    /// Scoring
    pub const POINTS_PER_BRICK: u32 = 10;
    pub const STARTING_LIVES: u32 = 3;
}

/// Score awarded for clearing the whole grid
#[inline]
pub const fn winning_score() -> u32 {
    (consts::BRICK_ROWS * consts::BRICK_COLS) as u32 * consts::POINTS_PER_BRICK
}
