//! Character-grid renderer
//!
//! Samples the field on a coarse grid: `#` for bricks, `=` for the paddle,
//! `o` for the ball.

use crate::driver::RenderSink;
use crate::sim::GameState;

pub struct AsciiRenderer {
    cols: usize,
    rows: usize,
    /// Last rendered frame
    frame: String,
}

impl AsciiRenderer {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
            frame: String::new(),
        }
    }

    pub fn frame(&self) -> &str {
        &self.frame
    }

    /// Render `state` to a newline-separated grid
    pub fn draw(&self, state: &GameState) -> String {
        let cell_w = state.field.width / self.cols as f32;
        let cell_h = state.field.height / self.rows as f32;
        let mut grid = vec![vec![' '; self.cols]; self.rows];

        let mut plot = |x0: f32, y0: f32, x1: f32, y1: f32, ch: char| {
            let c0 = (x0 / cell_w).floor().max(0.0) as usize;
            let r0 = (y0 / cell_h).floor().max(0.0) as usize;
            let c1 = ((x1 / cell_w).ceil() as usize).min(self.cols);
            let r1 = ((y1 / cell_h).ceil() as usize).min(self.rows);
            for row in grid.iter_mut().take(r1).skip(r0) {
                for cell in row.iter_mut().take(c1).skip(c0) {
                    *cell = ch;
                }
            }
        };

        for brick in state.bricks.iter().filter(|b| b.visible) {
            let end = brick.pos + brick.size;
            plot(brick.pos.x, brick.pos.y, end.x, end.y, '#');
        }
        let paddle = &state.paddle;
        let end = paddle.pos + paddle.size;
        plot(paddle.pos.x, paddle.pos.y, end.x, end.y, '=');

        // The ball is a single cell at its center
        let ball = state.ball.pos;
        let col = ((ball.x / cell_w) as usize).min(self.cols - 1);
        let row = ((ball.y / cell_h) as usize).min(self.rows - 1);
        grid[row][col] = 'o';

        grid.into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl RenderSink for AsciiRenderer {
    fn render(&mut self, state: &GameState) {
        self.frame = self.draw(state);
    }
}
