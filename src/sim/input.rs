//! Player input
//!
//! Hosts translate device events into [`InputEvent`]s. Input is applied
//! immediately in any phase; paddle velocity only turns into motion while
//! the game is Playing.

use super::state::GameState;

/// Logical keys the game responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    /// Start, pause and resume
    Toggle,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value. Unrecognized keys return `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            " " | "Spacebar" => Some(Key::Toggle),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Pointer x in field coordinates
    PointerMove { x: f32 },
    Restart,
}

/// Apply one input event to the game
pub fn apply_input(state: &mut GameState, event: &InputEvent) {
    match *event {
        InputEvent::KeyDown(Key::Left) => state.paddle.dx = -state.paddle.speed,
        InputEvent::KeyDown(Key::Right) => state.paddle.dx = state.paddle.speed,
        InputEvent::KeyDown(Key::Toggle) => state.toggle_pause(),
        // Releasing either arrow stops the paddle, even if the other is held
        InputEvent::KeyUp(Key::Left | Key::Right) => state.paddle.dx = 0.0,
        InputEvent::KeyUp(Key::Toggle) => {}
        InputEvent::PointerMove { x } => state.paddle.follow_pointer(x, state.field.width),
        InputEvent::Restart => state.restart(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::phase::GamePhase;
    use crate::sim::state::Field;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_name("Left"), Some(Key::Left));
        assert_eq!(Key::from_name("ArrowRight"), Some(Key::Right));
        assert_eq!(Key::from_name("Right"), Some(Key::Right));
        assert_eq!(Key::from_name(" "), Some(Key::Toggle));
        assert_eq!(Key::from_name("Spacebar"), Some(Key::Toggle));
        assert_eq!(Key::from_name("Escape"), None);
        assert_eq!(Key::from_name("a"), None);
    }

    #[test]
    fn test_arrow_keys_set_velocity() {
        let mut state = GameState::new(Field::default(), 0);
        apply_input(&mut state, &InputEvent::KeyDown(Key::Right));
        assert_eq!(state.paddle.dx, 8.0);
        apply_input(&mut state, &InputEvent::KeyDown(Key::Left));
        assert_eq!(state.paddle.dx, -8.0);
        apply_input(&mut state, &InputEvent::KeyUp(Key::Right));
        assert_eq!(state.paddle.dx, 0.0);
        // Velocity alone does not move the paddle
        assert_eq!(state.paddle.pos.x, 350.0);
    }

    #[test]
    fn test_toggle_drives_phase() {
        let mut state = GameState::new(Field::default(), 0);
        let toggle = InputEvent::KeyDown(Key::Toggle);
        apply_input(&mut state, &toggle);
        assert_eq!(state.phase, GamePhase::Playing);
        apply_input(&mut state, &toggle);
        assert_eq!(state.phase, GamePhase::Paused);
        apply_input(&mut state, &InputEvent::KeyUp(Key::Toggle));
        assert_eq!(state.phase, GamePhase::Paused);
        apply_input(&mut state, &toggle);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_pointer_moves_paddle_in_any_phase() {
        let mut state = GameState::new(Field::default(), 0);
        state.phase = GamePhase::Paused;
        apply_input(&mut state, &InputEvent::PointerMove { x: 200.0 });
        assert_eq!(state.paddle.pos.x, 150.0);
        apply_input(&mut state, &InputEvent::PointerMove { x: 10_000.0 });
        assert_eq!(state.paddle.pos.x, 700.0);
    }

    #[test]
    fn test_restart_event() {
        let mut state = GameState::new(Field::default(), 0);
        state.phase = GamePhase::Lose;
        state.lives = 0;
        apply_input(&mut state, &InputEvent::Restart);
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.lives, 3);
    }
}
