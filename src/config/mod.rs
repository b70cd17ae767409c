pub mod loader;

use serde::{Deserialize, Serialize};

use crate::game::{BOARD_HEIGHT, BOARD_WIDTH, MOVE_REPEAT_MS};
use loader::ConfigError;

// Accepted board dimensions
const MIN_BOARD_SIDE: usize = 4;
const MAX_BOARD_WIDTH: usize = 40;
const MAX_BOARD_HEIGHT: usize = 60;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board: BoardConfig,
    pub controls: ControlsConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    // Delay between repeated moves while a direction key is held
    pub repeat_delay_ms: u64,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            repeat_delay_ms: MOVE_REPEAT_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Time between frames of the main loop (~60 FPS by default)
    pub frame_interval_ms: u64,
    pub show_ghost: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            show_ghost: true,
        }
    }
}

impl GameConfig {
    /// Rejects values the game cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let BoardConfig { width, height } = self.board;

        if !(MIN_BOARD_SIDE..=MAX_BOARD_WIDTH).contains(&width) {
            return Err(ConfigError::Invalid(format!(
                "board.width must be between {MIN_BOARD_SIDE} and {MAX_BOARD_WIDTH}, got {width}"
            )));
        }
        if !(MIN_BOARD_SIDE..=MAX_BOARD_HEIGHT).contains(&height) {
            return Err(ConfigError::Invalid(format!(
                "board.height must be between {MIN_BOARD_SIDE} and {MAX_BOARD_HEIGHT}, got {height}"
            )));
        }
        if self.controls.repeat_delay_ms == 0 {
            return Err(ConfigError::Invalid(
                "controls.repeat_delay_ms must be greater than zero".to_string(),
            ));
        }
        if self.display.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "display.frame_interval_ms must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
