//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the connect-four rules: gravity-constrained drops,
//! win detection through the last placed disc, and turn sequencing.
//! It has **no dependencies** on rendering, input, or I/O beyond optional
//! TOML configuration loading, which makes it:
//!
//! - **Deterministic**: The same column sequence always produces the same game
//! - **Testable**: Every transition is a plain method call returning a value
//! - **Portable**: Any presentation layer (terminal, GUI, headless) can drive it
//! - **Synchronous**: Every operation finishes in bounded time with no suspension
//!
//! # Module Structure
//!
//! - [`board`]: width x height grid with gravity drops and a boundary sentinel
//! - [`scanner`]: run counting along the four line directions through a disc
//! - [`game`]: the controller a UI calls; owns the board and the game state
//! - [`snapshot`]: serializable view of a game for redraws
//! - [`config`]: board size and run length, loadable from TOML
//! - [`error`]: drop, move and configuration errors
//!
//! # Game Rules
//!
//! - **Gravity**: A disc dropped into a column lands on the lowest empty row
//! - **Turns**: `First` moves first, then players alternate after every accepted move
//! - **Win**: Four (or `connect`) same-owner discs in a row, column, or diagonal
//! - **Draw**: The board fills with no winning line
//! - **Terminal states**: After a win or draw every move is rejected
//!
//! # Example
//!
//! ```
//! use connect_four_core::{GameController, GameState, MoveError};
//! use connect_four_core::types::{Player, Position};
//!
//! let mut game = GameController::default();
//!
//! // First plays along the floor while Second stacks column 6.
//! for column in [0, 6, 1, 6, 2, 6] {
//!     game.play_move(column).unwrap();
//! }
//! let outcome = game.play_move(3).unwrap();
//!
//! assert_eq!(outcome.position, Position::new(3, 0));
//! assert!(matches!(outcome.state, GameState::Won { winner: Player::First, .. }));
//! assert_eq!(game.play_move(4), Err(MoveError::GameAlreadyOver));
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod scanner;
pub mod snapshot;

pub use connect_four_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use error::{ConfigError, DropError, MoveError};
pub use game::{GameController, GameState, MoveOutcome};
pub use scanner::{LineScanner, WinningLine};
pub use snapshot::GameSnapshot;
