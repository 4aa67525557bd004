//! Error types for board drops, moves and configuration.
//!
//! Every variant is locally recoverable: a failed call leaves the board and
//! game state exactly as they were.

use std::path::PathBuf;

/// Why a disc could not be dropped into a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DropError {
    #[error("column {column} is outside the board (width {width})")]
    InvalidColumn { column: i8, width: u8 },

    #[error("column {column} is full")]
    ColumnFull { column: i8 },
}

/// Why a move was rejected by the game controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is outside the board (width {width})")]
    InvalidColumn { column: i8, width: u8 },

    #[error("column {column} is full")]
    ColumnFull { column: i8 },

    #[error("the game is already over")]
    GameAlreadyOver,
}

impl MoveError {
    /// True when the column can never accept another disc this game
    pub fn is_column_full(&self) -> bool {
        matches!(self, MoveError::ColumnFull { .. })
    }
}

impl From<DropError> for MoveError {
    fn from(err: DropError) -> Self {
        match err {
            DropError::InvalidColumn { column, width } => MoveError::InvalidColumn { column, width },
            DropError::ColumnFull { column } => MoveError::ColumnFull { column },
        }
    }
}

/// Errors that can occur when loading or validating a game configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
