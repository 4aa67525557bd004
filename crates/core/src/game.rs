//! Game controller - turn sequencing and end-of-game detection
//!
//! The controller owns one [`Board`] and the current [`GameState`]. Each
//! accepted move drops the current player's disc, scans the lines through it,
//! then moves to `Won`, `Draw` or the other player's turn. `Won` and `Draw`
//! are terminal: every later move is rejected with
//! [`MoveError::GameAlreadyOver`] and the board is never touched again until
//! [`GameController::reset`].

use tracing::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{ConfigError, MoveError};
use crate::scanner::{LineScanner, WinningLine};
use crate::snapshot::GameSnapshot;
use crate::types::{Cell, Player, Position};

pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_WON: &str = "won";
pub const STATUS_DRAW: &str = "draw";

/// Where the game stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for `current` to move
    InProgress { current: Player },
    /// `winner` completed `line`
    Won { winner: Player, line: WinningLine },
    /// Board filled with no winning line
    Draw,
}

impl GameState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameState::InProgress { .. })
    }

    /// Player to move, if the game is still running
    pub fn current_player(&self) -> Option<Player> {
        match self {
            GameState::InProgress { current } => Some(*current),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameState::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<&WinningLine> {
        match self {
            GameState::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameState::InProgress { .. } => STATUS_IN_PROGRESS,
            GameState::Won { .. } => STATUS_WON,
            GameState::Draw => STATUS_DRAW,
        }
    }
}

/// Result of an accepted move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Who moved
    pub player: Player,
    /// Where the disc came to rest
    pub position: Position,
    /// State after the move
    pub state: GameState,
}

/// Owns the board and state of one game
#[derive(Debug, Clone)]
pub struct GameController {
    config: GameConfig,
    board: Board,
    scanner: LineScanner,
    state: GameState,
    /// Landing positions of accepted moves, oldest first
    history: Vec<Position>,
    /// Monotonic game id (increments on reset)
    game_id: u32,
}

impl GameController {
    /// Create a game from a validated configuration
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: GameConfig) -> Self {
        Self {
            config,
            board: Board::new(config.width, config.height),
            scanner: LineScanner::new(config.connect),
            state: GameState::InProgress {
                current: Player::First,
            },
            history: Vec::with_capacity(config.width as usize * config.height as usize),
            game_id: 0,
        }
    }

    /// Create a standard connect-four game on a board of the given size
    pub fn with_size(width: u8, height: u8) -> Result<Self, ConfigError> {
        Self::new(GameConfig::with_size(width, height))
    }

    /// Drop the current player's disc into `column`
    ///
    /// Rejected moves leave the board and state unchanged.
    pub fn play_move(&mut self, column: i8) -> Result<MoveOutcome, MoveError> {
        let player = match self.state {
            GameState::InProgress { current } => current,
            _ => {
                debug!(column, state = self.state.as_str(), "move rejected: game over");
                return Err(MoveError::GameAlreadyOver);
            }
        };

        let position = self.board.drop(column, player).map_err(|err| {
            debug!(column, player = player.as_str(), %err, "move rejected");
            MoveError::from(err)
        })?;
        self.history.push(position);
        debug!(
            player = player.as_str(),
            column = position.column,
            row = position.row,
            "disc dropped"
        );

        self.state = if let Some(line) = self.scanner.has_win_at(&self.board, position, player) {
            info!(
                game_id = self.game_id,
                winner = player.as_str(),
                direction = line.direction.as_str(),
                moves = self.history.len(),
                "game won"
            );
            GameState::Won {
                winner: player,
                line,
            }
        } else if self.board.is_full() {
            info!(game_id = self.game_id, moves = self.history.len(), "game drawn");
            GameState::Draw
        } else {
            GameState::InProgress {
                current: player.other(),
            }
        };

        Ok(MoveOutcome {
            player,
            position,
            state: self.state.clone(),
        })
    }

    /// Current state of the game
    pub fn current_state(&self) -> &GameState {
        &self.state
    }

    /// Player to move, or `None` once the game is over
    pub fn current_player(&self) -> Option<Player> {
        self.state.current_player()
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Get the cell at a position ([`Cell::Boundary`] off the grid)
    pub fn cell_at(&self, position: Position) -> Cell {
        self.board.cell_at(position)
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Check if a move into `column` would currently be accepted
    pub fn is_column_playable(&self, column: i8) -> bool {
        !self.state.is_terminal() && !self.board.is_column_full(column)
    }

    /// Landing position of the most recent accepted move
    pub fn last_move(&self) -> Option<Position> {
        self.history.last().copied()
    }

    /// Landing positions of every accepted move, oldest first
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    /// Start a new game with the same configuration
    pub fn reset(&mut self) {
        self.board.clear();
        self.history.clear();
        self.state = GameState::InProgress {
            current: Player::First,
        };
        self.game_id = self.game_id.wrapping_add(1);
        info!(game_id = self.game_id, "new game");
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.fill_from(self);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::from_valid_config(GameConfig::default())
    }
}
