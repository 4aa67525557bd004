//! Plain, serializable view of a game for presentation layers.
//!
//! A snapshot holds only data: board contents, status, turn, and the winning
//! line for highlighting. Redraws and banners are built from it without
//! holding a borrow on the controller.

use serde::{Deserialize, Serialize};

use crate::game::{GameController, STATUS_IN_PROGRESS};
use crate::types::{Cell, Player, Position};

/// Board cell code for an empty cell
pub const CELL_EMPTY: u8 = 0;
/// Board cell code for a first-player disc
pub const CELL_FIRST: u8 = 1;
/// Board cell code for a second-player disc
pub const CELL_SECOND: u8 = 2;

fn cell_code(cell: Cell) -> u8 {
    match cell {
        Cell::Occupied(Player::First) => CELL_FIRST,
        Cell::Occupied(Player::Second) => CELL_SECOND,
        Cell::Empty | Cell::Boundary => CELL_EMPTY,
    }
}

fn player_name(player: Option<Player>) -> Option<String> {
    player.map(|p| p.as_str().to_string())
}

fn coords(position: Position) -> [i8; 2] {
    [position.column, position.row]
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game_id: u32,
    pub width: u8,
    pub height: u8,
    /// Row-major cell codes, row 0 is the floor
    pub board: Vec<Vec<u8>>,
    /// "in_progress", "won" or "draw"
    pub status: String,
    pub current_player: Option<String>,
    pub winner: Option<String>,
    /// `[column, row]` pairs of the winning run, empty unless won
    pub winning_line: Vec<[i8; 2]>,
    pub last_move: Option<[i8; 2]>,
    pub move_count: usize,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.game_id = 0;
        self.width = 0;
        self.height = 0;
        self.board.clear();
        self.status.clear();
        self.status.push_str(STATUS_IN_PROGRESS);
        self.current_player = None;
        self.winner = None;
        self.winning_line.clear();
        self.last_move = None;
        self.move_count = 0;
    }

    /// Overwrite this snapshot with the controller's current state
    ///
    /// Reuses the existing buffers where their shape already matches.
    pub(crate) fn fill_from(&mut self, game: &GameController) {
        let board = game.board();
        self.game_id = game.game_id();
        self.width = board.width();
        self.height = board.height();

        self.board.resize_with(board.height() as usize, Vec::new);
        for (out_row, row) in self.board.iter_mut().zip(board.rows()) {
            out_row.clear();
            out_row.extend(row.iter().map(|&cell| cell_code(cell)));
        }

        let state = game.current_state();
        self.status.clear();
        self.status.push_str(state.as_str());
        self.current_player = player_name(state.current_player());
        self.winner = player_name(state.winner());
        self.winning_line.clear();
        if let Some(line) = state.winning_line() {
            self.winning_line
                .extend(line.positions.iter().map(|&p| coords(p)));
        }
        self.last_move = game.last_move().map(coords);
        self.move_count = game.move_count();
    }

    /// Serialize to a single JSON line
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Check whether input should still be accepted
    pub fn playable(&self) -> bool {
        self.status == STATUS_IN_PROGRESS
    }

    /// Cell code at `(column, row)`; off-board reads as empty
    pub fn code_at(&self, column: i8, row: i8) -> u8 {
        if column < 0 || row < 0 {
            return CELL_EMPTY;
        }
        self.board
            .get(row as usize)
            .and_then(|r| r.get(column as usize))
            .copied()
            .unwrap_or(CELL_EMPTY)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            game_id: 0,
            width: 0,
            height: 0,
            board: Vec::new(),
            status: String::new(),
            current_player: None,
            winner: None,
            winning_line: Vec::new(),
            last_move: None,
            move_count: 0,
        };
        s.clear();
        s
    }
}
