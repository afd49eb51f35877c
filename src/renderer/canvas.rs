//! Canvas 2D renderer

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use wasm_bindgen::JsCast;

use super::{BRICK_OUTLINE, BRICK_OUTLINE_WIDTH, FOREGROUND, GLOW_BLUR, PADDLE_SHADE};
use crate::driver::RenderSink;
use crate::sim::GameState;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    glow: bool,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement, glow: bool) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
            glow,
        })
    }

    fn draw(&self, state: &GameState) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, self.width, self.height);

        // Bricks
        ctx.set_stroke_style_str(BRICK_OUTLINE);
        ctx.set_line_width(BRICK_OUTLINE_WIDTH);
        for brick in state.bricks.iter().filter(|b| b.visible) {
            let (x, y) = (brick.pos.x as f64, brick.pos.y as f64);
            let (w, h) = (brick.size.x as f64, brick.size.y as f64);
            ctx.set_fill_style_str(brick.color.hex());
            ctx.fill_rect(x, y, w, h);
            ctx.stroke_rect(x, y, w, h);
        }

        // Paddle with a vertical gradient
        let paddle = &state.paddle;
        let (x, y) = (paddle.pos.x as f64, paddle.pos.y as f64);
        let (w, h) = (paddle.size.x as f64, paddle.size.y as f64);
        let gradient = ctx.create_linear_gradient(x, y, x, y + h);
        gradient.add_color_stop(0.0, FOREGROUND)?;
        gradient.add_color_stop(1.0, PADDLE_SHADE)?;
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill_rect(x, y, w, h);

        // Ball
        let ball = &state.ball;
        ctx.begin_path();
        ctx.arc(
            ball.pos.x as f64,
            ball.pos.y as f64,
            ball.radius as f64,
            0.0,
            std::f64::consts::TAU,
        )?;
        ctx.set_fill_style_str(FOREGROUND);
        ctx.fill();
        ctx.close_path();
        if self.glow {
            ctx.set_shadow_blur(GLOW_BLUR);
            ctx.set_shadow_color(FOREGROUND);
            ctx.fill();
            ctx.set_shadow_blur(0.0);
        }

        Ok(())
    }
}

impl RenderSink for CanvasRenderer {
    fn render(&mut self, state: &GameState) {
        if let Err(e) = self.draw(state) {
            log::warn!("Render error: {:?}", e);
        }
    }
}
