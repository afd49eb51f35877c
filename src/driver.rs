//! Frame driver
//!
//! Owns the [`GameState`] and ties the simulation to a host's sinks. The host
//! calls [`FrameDriver::frame`] once per display refresh and schedules the
//! next call itself (e.g. `requestAnimationFrame`).

use crate::sim::{GameEvent, GamePhase, GameState, InputEvent, MessageKind, apply_input, tick};

/// Draws the current state. Called every frame, in every phase.
pub trait RenderSink {
    fn render(&mut self, state: &GameState);
}

/// Score and lives readout
pub trait HudSink {
    fn score_changed(&mut self, score: u32);
    fn lives_changed(&mut self, lives: u32);
}

/// End-of-game message plus the restart control
pub trait MessageSink {
    fn show_message(&mut self, text: &str, kind: MessageKind);
    fn clear_message(&mut self);
}

pub struct FrameDriver<H> {
    state: GameState,
    host: H,
    frames: u64,
}

impl<H> FrameDriver<H>
where
    H: RenderSink + HudSink + MessageSink,
{
    /// Take ownership of a game and push its initial score/lives to the host
    pub fn new(state: GameState, mut host: H) -> Self {
        host.score_changed(state.score);
        host.lives_changed(state.lives);
        Self {
            state,
            host,
            frames: 0,
        }
    }

    /// Run one frame: simulate if Playing, sync displays, render
    pub fn frame(&mut self) {
        if self.state.phase == GamePhase::Playing {
            tick(&mut self.state);
        }
        self.flush_events();
        self.host.render(&self.state);
        self.frames += 1;
    }

    /// Apply an input event between frames
    pub fn handle_input(&mut self, event: InputEvent) {
        apply_input(&mut self.state, &event);
        self.flush_events();
    }

    fn flush_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::ScoreChanged(score) => self.host.score_changed(score),
                GameEvent::LivesChanged(lives) => self.host.lives_changed(lives),
                GameEvent::Message(kind) => self.host.show_message(kind.text(), kind),
                GameEvent::MessageCleared => self.host.clear_message(),
            }
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Frames run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
