//! Collision detection and response
//!
//! Axis-aligned heuristics only: the ball is treated as its bounding box
//! against walls and bricks, and as a point span test against the paddle.
//! Each resolver reports whether it fired so the tick can do bookkeeping.

use super::state::{Ball, Brick, Field, Paddle};
use crate::consts::{BALL_SPEEDUP, BALL_SPEEDUP_LIMIT};

/// Reflect dx when the ball crosses the left or right edge.
///
/// There is no position correction; the ball may overlap the wall for the
/// frame it crossed on.
pub fn ball_side_wall_collision(ball: &mut Ball, field: &Field) -> bool {
    if ball.right() > field.width || ball.left() < 0.0 {
        ball.vel.x = -ball.vel.x;
        return true;
    }
    false
}

/// Reflect dy when the ball crosses the top edge
pub fn ball_top_wall_collision(ball: &mut Ball) -> bool {
    if ball.top() < 0.0 {
        ball.vel.y = -ball.vel.y;
        return true;
    }
    false
}

/// Normalized offset of `x` from the paddle center, roughly in [-1, 1]
#[inline]
pub fn hit_position(x: f32, paddle: &Paddle) -> f32 {
    (x - paddle.center_x()) / (paddle.width() / 2.0)
}

/// Paddle rebound.
///
/// Fires when the ball's bottom edge is below the paddle top and its center
/// is strictly inside the paddle span. The ball always leaves upward with dx
/// steered by the hit position, then gets a one-shot 5% boost while its
/// speed is under the cap.
pub fn ball_paddle_collision(ball: &mut Ball, paddle: &Paddle) -> bool {
    let in_span = ball.pos.x > paddle.pos.x && ball.pos.x < paddle.pos.x + paddle.width();
    if ball.bottom() <= paddle.pos.y || !in_span {
        return false;
    }

    ball.vel.x = hit_position(ball.pos.x, paddle) * ball.speed;
    ball.vel.y = -ball.vel.y.abs();

    if ball.vel.length() < BALL_SPEEDUP_LIMIT {
        ball.vel *= BALL_SPEEDUP;
    }
    true
}

/// Ball's bottom edge is past the bottom of the field
#[inline]
pub fn ball_below_field(ball: &Ball, field: &Field) -> bool {
    ball.bottom() > field.height
}

/// Ball bounding box overlaps the brick rectangle
#[inline]
pub fn ball_overlaps_brick(ball: &Ball, brick: &Brick) -> bool {
    ball.right() > brick.pos.x
        && ball.left() < brick.pos.x + brick.size.x
        && ball.bottom() > brick.pos.y
        && ball.top() < brick.pos.y + brick.size.y
}

/// Break every visible brick the ball overlaps.
///
/// Each hit inverts dy and hides the brick; which side was hit is not
/// considered. Several bricks can break in one call, each flipping dy.
/// Returns the number of bricks destroyed.
pub fn ball_brick_collisions(ball: &mut Ball, bricks: &mut [Brick]) -> u32 {
    let mut destroyed = 0;
    for brick in bricks.iter_mut().filter(|b| b.visible) {
        if ball_overlaps_brick(ball, brick) {
            ball.vel.y = -ball.vel.y;
            brick.visible = false;
            destroyed += 1;
            log::debug!("Brick ({}, {}) destroyed", brick.row, brick.col);
        }
    }
    destroyed
}
