//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in [`GameState`]; there is no
//! ambient global state.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::phase::{GamePhase, PhaseChange};
use crate::consts::*;

/// Playfield dimensions. Every clamp and wall test is bounded by these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal velocity, set by input
    pub dx: f32,
    /// Velocity applied while a move key is held
    pub speed: f32,
}

impl Paddle {
    pub fn new(field: &Field) -> Self {
        Self {
            pos: Vec2::new(
                field.width / 2.0 - PADDLE_WIDTH / 2.0,
                field.height - PADDLE_BOTTOM_OFFSET,
            ),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            dx: 0.0,
            speed: PADDLE_SPEED,
        }
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Move by the current velocity and keep the paddle on the field
    pub fn advance(&mut self, field_width: f32) {
        self.pos.x += self.dx;
        self.clamp(field_width);
    }

    /// Center the paddle under a pointer x-coordinate
    pub fn follow_pointer(&mut self, pointer_x: f32, field_width: f32) {
        self.pos.x = pointer_x - self.size.x / 2.0;
        self.clamp(field_width);
    }

    /// Re-center and stop
    pub fn reset(&mut self, field: &Field) {
        self.pos.x = field.width / 2.0 - self.size.x / 2.0;
        self.dx = 0.0;
    }

    fn clamp(&mut self, field_width: f32) {
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
        }
        if self.pos.x + self.size.x > field_width {
            self.pos.x = field_width - self.size.x;
        }
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Nominal speed; paddle rebounds steer dx by hit position times this
    pub speed: f32,
}

impl Ball {
    /// Ball at the field center, serving up and to the right
    pub fn new(field: &Field) -> Self {
        Self {
            pos: field.center(),
            vel: Vec2::new(BALL_SPEED, -BALL_SPEED),
            radius: BALL_RADIUS,
            speed: BALL_SPEED,
        }
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Back to the center with the serve velocity and a random horizontal
    /// direction
    pub fn reset(&mut self, field: &Field, rng: &mut impl Rng) {
        let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.pos = field.center();
        self.vel = Vec2::new(BALL_SPEED * direction, -BALL_SPEED);
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }
}

/// Row palette, cycled top to bottom
pub const BRICK_PALETTE: [&str; 5] = ["#FF6B6B", "#4ECDC4", "#45B7D1", "#FFA07A", "#98D8C8"];

const BRICK_PALETTE_RGB: [[u8; 3]; 5] = [
    [0xFF, 0x6B, 0x6B],
    [0x4E, 0xCD, 0xC4],
    [0x45, 0xB7, 0xD1],
    [0xFF, 0xA0, 0x7A],
    [0x98, 0xD8, 0xC8],
];

/// Brick color tag (index into [`BRICK_PALETTE`])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickColor(u8);

impl BrickColor {
    pub fn for_row(row: usize) -> Self {
        Self((row % BRICK_PALETTE.len()) as u8)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn hex(self) -> &'static str {
        BRICK_PALETTE[self.index()]
    }

    pub fn rgb(self) -> [u8; 3] {
        BRICK_PALETTE_RGB[self.index()]
    }
}

/// A brick in the grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub row: usize,
    pub col: usize,
    pub color: BrickColor,
    pub visible: bool,
}

impl Brick {
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            pos: Vec2::new(
                col as f32 * (BRICK_WIDTH + BRICK_PADDING) + BRICK_OFFSET_X,
                row as f32 * (BRICK_HEIGHT + BRICK_PADDING) + BRICK_OFFSET_Y,
            ),
            size: Vec2::new(BRICK_WIDTH, BRICK_HEIGHT),
            row,
            col,
            color: BrickColor::for_row(row),
            visible: true,
        }
    }

    /// Full grid in row-major order
    pub fn grid() -> Vec<Brick> {
        (0..BRICK_ROWS)
            .flat_map(|row| (0..BRICK_COLS).map(move |col| Brick::new(row, col)))
            .collect()
    }
}

/// End-of-game message category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    Win,
    Lose,
}

impl MessageKind {
    pub fn text(self) -> &'static str {
        match self {
            MessageKind::Win => "Congratulations! All bricks cleared!",
            MessageKind::Lose => "Game Over!",
        }
    }

    /// CSS class suffix for the message element
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKind::Win => "win",
            MessageKind::Lose => "lose",
        }
    }
}

/// Notifications for the display sinks, drained once per frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    ScoreChanged(u32),
    LivesChanged(u32),
    /// Show an end-state message and the restart control
    Message(MessageKind),
    /// Hide the message and the restart control
    MessageCleared,
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct GameState {
    pub field: Field,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u32,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Row-major brick grid; never resized
    pub bricks: Vec<Brick>,
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game on `field`, with ball-reset randomness from `seed`
    pub fn new(field: Field, seed: u64) -> Self {
        Self {
            field,
            phase: GamePhase::Ready,
            score: 0,
            lives: STARTING_LIVES,
            paddle: Paddle::new(&field),
            ball: Ball::new(&field),
            bricks: Brick::grid(),
            seed,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// Apply a phase change, logging and ignoring illegal ones.
    /// Returns whether the phase changed.
    pub fn change_phase(&mut self, change: PhaseChange) -> bool {
        match self.phase.apply(change) {
            Ok(next) => {
                log::debug!("Phase {:?} -> {:?}", self.phase, next);
                self.phase = next;
                true
            }
            Err(e) => {
                log::warn!("{}", e);
                false
            }
        }
    }

    /// Start/pause toggle; does nothing in Win/Lose
    pub fn toggle_pause(&mut self) {
        if let Some(change) = self.phase.toggle_change() {
            self.change_phase(change);
        }
    }

    /// Ball dropped past the bottom edge
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.events.push(GameEvent::LivesChanged(self.lives));

        if self.lives == 0 {
            log::info!("Out of lives (score {})", self.score);
            if self.change_phase(PhaseChange::OutOfLives) {
                self.events.push(GameEvent::Message(MessageKind::Lose));
            }
        } else {
            log::debug!("Ball lost, {} lives left", self.lives);
            self.ball.reset(&self.field, &mut self.rng);
            self.change_phase(PhaseChange::BallLost);
        }
    }

    /// Credit one destroyed brick
    pub fn award_brick(&mut self) {
        self.score += POINTS_PER_BRICK;
        self.events.push(GameEvent::ScoreChanged(self.score));
    }

    /// Transition to Win once the score reaches the full-grid total
    pub fn check_cleared(&mut self) {
        if self.score == crate::winning_score() && self.change_phase(PhaseChange::Cleared) {
            log::info!("All bricks cleared (score {})", self.score);
            self.events.push(GameEvent::Message(MessageKind::Win));
        }
    }

    /// Reset every entity and counter; the only way out of Win/Lose
    pub fn restart(&mut self) {
        self.change_phase(PhaseChange::Restart);
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.paddle.reset(&self.field);
        self.ball.reset(&self.field, &mut self.rng);
        for brick in &mut self.bricks {
            brick.visible = true;
        }
        self.events.push(GameEvent::ScoreChanged(self.score));
        self.events.push(GameEvent::LivesChanged(self.lives));
        self.events.push(GameEvent::MessageCleared);
        log::info!("Game restarted");
    }

    pub fn bricks_remaining(&self) -> usize {
        self.bricks.iter().filter(|b| b.visible).count()
    }

    /// Take the pending display notifications
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let state = GameState::new(Field::default(), 1);
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.bricks.len(), BRICK_ROWS * BRICK_COLS);
        assert_eq!(state.paddle.pos, Vec2::new(350.0, 570.0));
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel, Vec2::new(4.0, -4.0));
    }

    #[test]
    fn test_brick_grid_positions_and_colors() {
        let bricks = Brick::grid();
        let first = &bricks[0];
        assert_eq!(first.pos, Vec2::new(45.0, 60.0));
        let last = bricks.last().unwrap();
        assert_eq!((last.row, last.col), (4, 8));
        assert_eq!(last.pos, Vec2::new(8.0 * 85.0 + 45.0, 4.0 * 30.0 + 60.0));
        // Last column ends flush with the right edge of the default field
        assert_eq!(last.pos.x + last.size.x, FIELD_WIDTH);

        assert_eq!(BrickColor::for_row(0).hex(), "#FF6B6B");
        assert_eq!(BrickColor::for_row(5), BrickColor::for_row(0));
        assert_eq!(BrickColor::for_row(7).rgb(), [0x45, 0xB7, 0xD1]);
    }

    #[test]
    fn test_paddle_clamps_both_edges() {
        let field = Field::default();
        let mut paddle = Paddle::new(&field);

        paddle.dx = -1000.0;
        paddle.advance(field.width);
        assert_eq!(paddle.pos.x, 0.0);

        paddle.dx = 1000.0;
        paddle.advance(field.width);
        assert_eq!(paddle.pos.x, field.width - paddle.width());

        paddle.follow_pointer(10.0, field.width);
        assert_eq!(paddle.pos.x, 0.0);
        paddle.follow_pointer(400.0, field.width);
        assert_eq!(paddle.center_x(), 400.0);
    }

    #[test]
    fn test_ball_reset_direction_is_seeded() {
        let field = Field::default();
        let mut a = Ball::new(&field);
        let mut b = Ball::new(&field);
        let mut rng_a = Pcg32::seed_from_u64(7);
        let mut rng_b = Pcg32::seed_from_u64(7);
        for _ in 0..10 {
            a.reset(&field, &mut rng_a);
            b.reset(&field, &mut rng_b);
            assert_eq!(a.vel, b.vel);
            assert_eq!(a.vel.x.abs(), BALL_SPEED);
            assert_eq!(a.vel.y, -BALL_SPEED);
        }
    }

    #[test]
    fn test_lose_life_resets_ball_to_center() {
        let mut state = GameState::new(Field::default(), 3);
        state.phase = GamePhase::Playing;
        state.ball.pos = Vec2::new(120.0, 650.0);
        state.ball.vel = Vec2::new(-2.0, 7.0);

        state.lose_life();

        assert_eq!(state.lives, 2);
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.ball.pos, state.field.center());
        assert!((state.ball.vel.length() - 4.0 * 2f32.sqrt()).abs() < 1e-5);
        assert_eq!(state.drain_events(), vec![GameEvent::LivesChanged(2)]);
    }

    #[test]
    fn test_last_life_loses_without_ball_reset() {
        let mut state = GameState::new(Field::default(), 3);
        state.phase = GamePhase::Playing;
        state.lives = 1;
        let dropped = Vec2::new(120.0, 650.0);
        state.ball.pos = dropped;

        state.lose_life();

        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::Lose);
        assert_eq!(state.ball.pos, dropped);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::LivesChanged(0), GameEvent::Message(MessageKind::Lose)]
        );
    }

    #[test]
    fn test_restart_resets_everything() {
        for phase in [
            GamePhase::Ready,
            GamePhase::Playing,
            GamePhase::Paused,
            GamePhase::Win,
            GamePhase::Lose,
        ] {
            let mut state = GameState::new(Field::default(), 11);
            state.phase = phase;
            state.score = 120;
            state.lives = 1;
            state.paddle.pos.x = 0.0;
            state.paddle.dx = -8.0;
            for brick in state.bricks.iter_mut().take(12) {
                brick.visible = false;
            }

            state.restart();

            assert_eq!(state.phase, GamePhase::Ready);
            assert_eq!(state.score, 0);
            assert_eq!(state.lives, 3);
            assert_eq!(state.paddle.pos.x, 350.0);
            assert_eq!(state.paddle.dx, 0.0);
            assert_eq!(state.ball.pos, state.field.center());
            assert_eq!(state.bricks_remaining(), BRICK_ROWS * BRICK_COLS);
            assert_eq!(
                state.drain_events(),
                vec![
                    GameEvent::ScoreChanged(0),
                    GameEvent::LivesChanged(3),
                    GameEvent::MessageCleared
                ]
            );
        }
    }

    #[test]
    fn test_toggle_ignored_in_terminal_phase() {
        let mut state = GameState::new(Field::default(), 0);
        state.phase = GamePhase::Win;
        state.toggle_pause();
        assert_eq!(state.phase, GamePhase::Win);
    }
}
