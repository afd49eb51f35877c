//! Game phase state machine
//!
//! Every phase change goes through [`GamePhase::apply`], which rejects
//! transitions the game never makes (e.g. resuming out of `Win`).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to start or resume after a lost ball
    #[default]
    Ready,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// All bricks cleared
    Win,
    /// Out of lives
    Lose,
}

/// A requested phase change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseChange {
    /// Player pressed start/resume
    Resume,
    /// Player pressed pause
    Pause,
    /// Ball dropped with lives remaining
    BallLost,
    /// Ball dropped on the last life
    OutOfLives,
    /// Every brick destroyed
    Cleared,
    /// Explicit restart, legal from anywhere
    Restart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PhaseError {
    #[error("illegal phase change {change:?} while {from:?}")]
    IllegalTransition { from: GamePhase, change: PhaseChange },
}

impl GamePhase {
    /// Compute the phase that follows `change`, or reject it
    pub fn apply(self, change: PhaseChange) -> Result<GamePhase, PhaseError> {
        use GamePhase::*;
        use PhaseChange::*;

        let next = match (self, change) {
            (_, Restart) => Ready,
            (Ready | Paused, Resume) => Playing,
            (Playing, Pause) => Paused,
            (Playing, BallLost) => Ready,
            (Playing, OutOfLives) => Lose,
            (Playing, Cleared) => Win,
            (from, change) => return Err(PhaseError::IllegalTransition { from, change }),
        };
        Ok(next)
    }

    /// Change requested by the start/pause toggle in this phase, if any
    pub fn toggle_change(self) -> Option<PhaseChange> {
        match self {
            GamePhase::Ready | GamePhase::Paused => Some(PhaseChange::Resume),
            GamePhase::Playing => Some(PhaseChange::Pause),
            GamePhase::Win | GamePhase::Lose => None,
        }
    }

    /// Win and Lose only exit through a restart
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Win | GamePhase::Lose)
    }
}
