//! Game simulation module
//!
//! All gameplay logic lives here:
//! - One frame per tick, no delta time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod phase;
pub mod state;
pub mod tick;

pub use collision::{ball_brick_collisions, ball_overlaps_brick, ball_paddle_collision, hit_position};
pub use input::{InputEvent, Key, apply_input};
pub use phase::{GamePhase, PhaseChange, PhaseError};
pub use state::{
    Ball, Brick, BrickColor, Field, GameEvent, GameState, MessageKind, Paddle, BRICK_PALETTE,
};
pub use tick::tick;
