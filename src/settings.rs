//! Game settings
//!
//! Field geometry and host options, loadable from JSON. Missing keys fall
//! back to the defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Field;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("field {width}x{height} is too small (need at least {min_width}x{min_height})")]
    FieldTooSmall {
        width: f32,
        height: f32,
        min_width: f32,
        min_height: f32,
    },
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Playfield width in canvas pixels
    pub field_width: f32,
    /// Playfield height in canvas pixels
    pub field_height: f32,
    /// RNG seed for ball serves; a fresh one is picked when unset
    pub seed: Option<u64>,
    /// Ball glow effect (canvas renderer)
    pub glow: bool,
    /// Frame budget for a headless native run
    pub max_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            seed: None,
            glow: true,
            max_frames: 5000,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// The field must hold the brick grid, with the paddle and the ball's
    /// serve point below it
    pub fn validate(&self) -> Result<(), SettingsError> {
        let min_width = BRICK_OFFSET_X + BRICK_COLS as f32 * (BRICK_WIDTH + BRICK_PADDING)
            - BRICK_PADDING;
        let grid_bottom =
            BRICK_OFFSET_Y + BRICK_ROWS as f32 * (BRICK_HEIGHT + BRICK_PADDING) - BRICK_PADDING;
        // Serve point (field center) must clear the grid by a ball radius
        let min_height = ((grid_bottom + BALL_RADIUS) * 2.0).max(grid_bottom + PADDLE_BOTTOM_OFFSET);

        let fits = self.field_width.is_finite()
            && self.field_height.is_finite()
            && self.field_width >= min_width
            && self.field_height >= min_height;
        if !fits {
            return Err(SettingsError::FieldTooSmall {
                width: self.field_width,
                height: self.field_height,
                min_width,
                min_height,
            });
        }
        Ok(())
    }

    pub fn field(&self) -> Field {
        Field::new(self.field_width, self.field_height)
    }
}
