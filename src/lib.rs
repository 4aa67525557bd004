//! Connect Four (workspace facade crate).
//!
//! This package exposes the `connect_four::{core,types}` public API while the
//! implementation lives in dedicated crates under `crates/`. Presentation
//! layers start a game with [`new_game`] and drive it through
//! [`core::GameController`].

pub use connect_four_core as core;
pub use connect_four_types as types;

use connect_four_core::{ConfigError, GameController};

/// Start a standard 7x6 connect-four game
pub fn new_game() -> GameController {
    GameController::default()
}

/// Start a connect-four game on a board of the given size
pub fn new_game_with_size(width: u8, height: u8) -> Result<GameController, ConfigError> {
    GameController::with_size(width, height)
}
