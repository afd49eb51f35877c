//! Per-frame simulation tick
//!
//! Motion is per tick with no delta-time scaling, so game speed follows the
//! host's refresh rate.

use super::collision::{
    ball_below_field, ball_brick_collisions, ball_paddle_collision, ball_side_wall_collision,
    ball_top_wall_collision,
};
use super::phase::GamePhase;
use super::state::GameState;

/// Advance the game by one frame. Only does anything while Playing.
///
/// Resolution order is fixed: walls, paddle, bottom edge, bricks, then the
/// win check. Bricks are still resolved on the frame a life is lost.
pub fn tick(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }

    // Motion
    state.paddle.advance(state.field.width);
    state.ball.advance();

    // Walls and paddle
    ball_side_wall_collision(&mut state.ball, &state.field);
    ball_top_wall_collision(&mut state.ball);
    ball_paddle_collision(&mut state.ball, &state.paddle);

    if ball_below_field(&state.ball, &state.field) {
        state.lose_life();
    }

    let destroyed = ball_brick_collisions(&mut state.ball, &mut state.bricks);
    for _ in 0..destroyed {
        state.award_brick();
    }

    state.check_cleared();
}
