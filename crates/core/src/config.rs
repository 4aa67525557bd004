//! Game configuration: board size and winning run length, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{DEFAULT_CONNECT, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION};

/// Board dimensions and the run length that wins.
///
/// Missing TOML keys fall back to the standard 7x6 connect-four game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    pub connect: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            connect: DEFAULT_CONNECT,
        }
    }
}

impl GameConfig {
    /// Standard connect-four rules on a board of the given size.
    pub fn with_size(width: u8, height: u8) -> Self {
        GameConfig {
            width,
            height,
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.width > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "width must be in 1..={MAX_DIMENSION}"
            )));
        }
        if self.height == 0 || self.height > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "height must be in 1..={MAX_DIMENSION}"
            )));
        }
        if self.connect < 2 {
            return Err(ConfigError::Validation("connect must be >= 2".into()));
        }
        if self.connect > self.width.max(self.height) {
            return Err(ConfigError::Validation(
                "connect must fit on the board (<= max(width, height))".into(),
            ));
        }
        Ok(())
    }
}
