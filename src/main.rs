//! Brick Breaker entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use brick_breaker::renderer::CanvasRenderer;
    use brick_breaker::sim::{GameState, InputEvent, Key, MessageKind};
    use brick_breaker::{FrameDriver, HudSink, MessageSink, RenderSink, Settings};

    /// Canvas rendering plus the DOM score/lives/message elements
    struct WebHost {
        renderer: CanvasRenderer,
        document: Document,
    }

    impl WebHost {
        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }

        fn set_hidden(&self, id: &str, hidden: bool) {
            if let Some(el) = self.document.get_element_by_id(id) {
                let classes = el.class_list();
                let _ = if hidden {
                    classes.add_1("hidden")
                } else {
                    classes.remove_1("hidden")
                };
            }
        }
    }

    impl RenderSink for WebHost {
        fn render(&mut self, state: &GameState) {
            self.renderer.render(state);
        }
    }

    impl HudSink for WebHost {
        fn score_changed(&mut self, score: u32) {
            self.set_text("score", &score.to_string());
        }

        fn lives_changed(&mut self, lives: u32) {
            self.set_text("lives", &lives.to_string());
        }
    }

    impl MessageSink for WebHost {
        fn show_message(&mut self, text: &str, kind: MessageKind) {
            if let Some(el) = self.document.get_element_by_id("gameMessage") {
                el.set_text_content(Some(text));
                el.set_class_name(&format!("game-message {}", kind.as_str()));
            }
            self.set_hidden("restartBtn", false);
        }

        fn clear_message(&mut self) {
            self.set_hidden("gameMessage", true);
            self.set_hidden("restartBtn", true);
        }
    }

    type Game = Rc<RefCell<FrameDriver<WebHost>>>;

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Brick Breaker starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document available");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("gameCanvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("Canvas #gameCanvas not found");
            return;
        };

        // The canvas supplies the field geometry
        let settings = Settings {
            field_width: canvas.width() as f32,
            field_height: canvas.height() as f32,
            ..Settings::default()
        };
        if let Err(e) = settings.validate() {
            log::error!("{}", e);
            return;
        }

        let renderer = match CanvasRenderer::new(&canvas, settings.glow) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("Failed to create canvas renderer: {:?}", e);
                return;
            }
        };

        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let state = GameState::new(settings.field(), seed);
        log::info!("Game initialized with seed: {}", seed);

        let host = WebHost { renderer, document };
        let game: Game = Rc::new(RefCell::new(FrameDriver::new(state, host)));

        setup_input_handlers(&canvas, game.clone());
        setup_restart_button(game.clone());

        request_animation_frame(game);

        log::info!("Brick Breaker running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Game) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_name(&event.key()) {
                    if key == Key::Toggle {
                        event.prevent_default();
                    }
                    game.borrow_mut().handle_input(InputEvent::KeyDown(key));
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_name(&event.key()) {
                    game.borrow_mut().handle_input(InputEvent::KeyUp(key));
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - paddle follows the pointer
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let mut x = event.client_x() as f32 - rect.left() as f32;
                // Map CSS pixels to canvas pixels when the canvas is scaled
                if rect.width() > 0.0 {
                    x *= canvas_clone.width() as f32 / rect.width() as f32;
                }
                game.borrow_mut().handle_input(InputEvent::PointerMove { x });
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(game: Game) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("restartBtn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().handle_input(InputEvent::Restart);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("Restart button #restartBtn not found");
        }
    }

    fn request_animation_frame(game: Game) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Game) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use anyhow::Context;
    use serde::Serialize;

    use brick_breaker::renderer::AsciiRenderer;
    use brick_breaker::sim::{GamePhase, GameState, InputEvent, Key, MessageKind};
    use brick_breaker::{FrameDriver, HudSink, MessageSink, RenderSink, Settings};

    /// Logs display updates and keeps an ASCII picture of the last frame
    struct HeadlessHost {
        ascii: AsciiRenderer,
        outcome: Option<MessageKind>,
    }

    impl RenderSink for HeadlessHost {
        fn render(&mut self, state: &GameState) {
            self.ascii.render(state);
        }
    }

    impl HudSink for HeadlessHost {
        fn score_changed(&mut self, score: u32) {
            log::debug!("Score: {}", score);
        }

        fn lives_changed(&mut self, lives: u32) {
            log::info!("Lives: {}", lives);
        }
    }

    impl MessageSink for HeadlessHost {
        fn show_message(&mut self, text: &str, kind: MessageKind) {
            log::info!("{}", text);
            self.outcome = Some(kind);
        }

        fn clear_message(&mut self) {
            self.outcome = None;
        }
    }

    #[derive(Serialize)]
    struct RunSummary {
        seed: u64,
        frames: u64,
        score: u32,
        lives: u32,
        phase: GamePhase,
        bricks_remaining: usize,
        outcome: Option<MessageKind>,
    }

    /// Pointer target for the autopilot: track the ball with a slow sweep so
    /// rebounds don't settle into a vertical loop
    fn autopilot_target(state: &GameState, frame: u64) -> f32 {
        state.ball.pos.x + (frame as f32 * 0.05).sin() * 30.0
    }

    /// Play a headless game with the autopilot. Optional first argument is a
    /// settings JSON file.
    pub fn run() -> anyhow::Result<()> {
        let settings = match std::env::args().nth(1) {
            Some(path) => {
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading settings from {}", path))?;
                Settings::from_json(&json)?
            }
            None => Settings::default(),
        };

        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Brick Breaker (native) starting with seed: {}", seed);

        let host = HeadlessHost {
            ascii: AsciiRenderer::new(80, 30),
            outcome: None,
        };
        let mut driver = FrameDriver::new(GameState::new(settings.field(), seed), host);

        while driver.frames() < settings.max_frames && !driver.state().phase.is_terminal() {
            if driver.state().phase == GamePhase::Ready {
                driver.handle_input(InputEvent::KeyDown(Key::Toggle));
            }
            let x = autopilot_target(driver.state(), driver.frames());
            driver.handle_input(InputEvent::PointerMove { x });
            driver.frame();
        }

        let state = driver.state();
        let summary = RunSummary {
            seed,
            frames: driver.frames(),
            score: state.score,
            lives: state.lives,
            phase: state.phase,
            bricks_remaining: state.bricks_remaining(),
            outcome: driver.host().outcome,
        };

        println!("{}", driver.host().ascii.frame());
        println!("{}", serde_json::to_string_pretty(&summary)?);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
