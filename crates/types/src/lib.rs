//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game core.
//! All types are plain values with no external dependencies, so a presentation
//! layer can hold and compare them without pulling in any game logic.
//!
//! # Board Geometry
//!
//! - **Width**: 7 columns by default (indexed 0-6, left to right)
//! - **Height**: 6 rows by default (indexed 0-5, row 0 is the floor)
//! - **Connect**: 4 discs in a line win by default
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 7 | Columns on a standard board |
//! | `DEFAULT_HEIGHT` | 6 | Rows on a standard board |
//! | `DEFAULT_CONNECT` | 4 | Run length that wins |
//! | `MAX_DIMENSION` | 16 | Largest accepted width or height |
//!
//! # Examples
//!
//! ```
//! use connect_four_types::{Cell, Direction, Player, Position};
//!
//! let player = Player::First;
//! assert_eq!(player.other(), Player::Second);
//! assert_eq!(Player::from_str("SECOND"), Some(Player::Second));
//!
//! let cell = player.to_cell();
//! assert!(cell.is_owned_by(Player::First));
//! assert!(!Cell::Boundary.is_owned_by(Player::First));
//!
//! let (dc, dr) = Direction::DiagonalUp.delta();
//! assert_eq!(Position::new(2, 2).offset(dc, dr), Position::new(3, 3));
//! ```

/// Default board width in columns
pub const DEFAULT_WIDTH: u8 = 7;

/// Default board height in rows
pub const DEFAULT_HEIGHT: u8 = 6;

/// Default number of same-owner discs in a line needed to win
pub const DEFAULT_CONNECT: u8 = 4;

/// Largest width or height a board may have
///
/// Keeps every coordinate (and every one-step-outside coordinate) inside `i8`,
/// and bounds the length of any line through the board.
pub const MAX_DIMENSION: u8 = 16;

/// The two sides of a game
///
/// `First` always moves first. The conventional disc colours are red for
/// `First` and yellow for `Second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// Both players in turn order
    pub const ALL: [Player; 2] = [Player::First, Player::Second];

    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Cell value for a disc owned by this player
    pub fn to_cell(self) -> Cell {
        Cell::Occupied(self)
    }

    /// Display name (disc colour)
    pub fn name(self) -> &'static str {
        match self {
            Player::First => "Red",
            Player::Second => "Yellow",
        }
    }

    /// Parse player from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use connect_four_types::Player;
    ///
    /// assert_eq!(Player::from_str("first"), Some(Player::First));
    /// assert_eq!(Player::from_str("Second"), Some(Player::Second));
    /// assert_eq!(Player::from_str("third"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "first" => Some(Player::First),
            "second" => Some(Player::Second),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(self) -> &'static str {
        match self {
            Player::First => "first",
            Player::Second => "second",
        }
    }
}

/// A cell on the board, or just outside it
///
/// - `Empty`: no disc yet
/// - `Occupied(player)`: holds a disc of that player
/// - `Boundary`: returned for positions outside the grid. It belongs to
///   nobody, so it never extends a run of either player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
    Boundary,
}

impl Cell {
    /// Owner of the disc in this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Occupied(player) => Some(player),
            Cell::Empty | Cell::Boundary => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn is_occupied(self) -> bool {
        matches!(self, Cell::Occupied(_))
    }

    /// True only for a disc of `player`; false for empty and boundary cells
    pub fn is_owned_by(self, player: Player) -> bool {
        self == Cell::Occupied(player)
    }
}

/// A board coordinate
///
/// Column 0 is the leftmost column, row 0 is the floor. Positions are signed
/// so that a scan may step past the edge; the board answers such positions
/// with [`Cell::Boundary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub column: i8,
    pub row: i8,
}

impl Position {
    pub fn new(column: i8, row: i8) -> Self {
        Self { column, row }
    }

    /// Position shifted by `(dc, dr)`
    ///
    /// Wrapping arithmetic: a wrapped coordinate is still off the board,
    /// so it reads as boundary like any other outside position.
    pub fn offset(self, dc: i8, dr: i8) -> Self {
        Self {
            column: self.column.wrapping_add(dc),
            row: self.row.wrapping_add(dr),
        }
    }
}

impl From<(i8, i8)> for Position {
    fn from((column, row): (i8, i8)) -> Self {
        Self::new(column, row)
    }
}

/// The four line directions a win can run along
///
/// Each direction is scanned both ways, so the opposite vectors are not
/// listed separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row
    Horizontal,
    /// Floor to top along a column
    Vertical,
    /// Bottom-left to top-right (`/`)
    DiagonalUp,
    /// Top-left to bottom-right (`\`)
    DiagonalDown,
}

impl Direction {
    /// All directions in scan order
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalUp,
        Direction::DiagonalDown,
    ];

    /// Step vector `(d_column, d_row)`
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
            Direction::DiagonalUp => (1, 1),
            Direction::DiagonalDown => (1, -1),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
            Direction::DiagonalUp => "diagonal_up",
            Direction::DiagonalDown => "diagonal_down",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_board_defaults() {
        assert_eq!(DEFAULT_WIDTH, 7);
        assert_eq!(DEFAULT_HEIGHT, 6);
        assert_eq!(DEFAULT_CONNECT, 4);
        assert!(MAX_DIMENSION >= DEFAULT_WIDTH.max(DEFAULT_HEIGHT));
        // One step past the far edge must still fit in i8.
        assert!((MAX_DIMENSION as i16) < i8::MAX as i16);
    }

    #[test]
    fn test_other_player() {
        assert_eq!(Player::First.other(), Player::Second);
        assert_eq!(Player::Second.other(), Player::First);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::First.name(), "Red");
        assert_eq!(Player::Second.name(), "Yellow");
    }

    #[test]
    fn test_player_str_roundtrip() {
        for player in Player::ALL {
            assert_eq!(Player::from_str(player.as_str()), Some(player));
        }
    }

    #[test]
    fn test_boundary_belongs_to_nobody() {
        for player in Player::ALL {
            assert!(!Cell::Boundary.is_owned_by(player));
            assert!(!Cell::Empty.is_owned_by(player));
            assert_ne!(Cell::Boundary, player.to_cell());
        }
        assert_eq!(Cell::Boundary.owner(), None);
        assert!(!Cell::Boundary.is_empty());
        assert!(!Cell::Boundary.is_occupied());
    }

    #[test]
    fn test_cell_owner() {
        assert_eq!(Cell::Occupied(Player::Second).owner(), Some(Player::Second));
        assert_eq!(Cell::Empty.owner(), None);
        assert_eq!(Cell::default(), Cell::Empty);
    }

    #[test]
    fn test_direction_deltas() {
        let deltas: Vec<(i8, i8)> = Direction::ALL.iter().map(|d| d.delta()).collect();
        assert_eq!(deltas, vec![(1, 0), (0, 1), (1, 1), (1, -1)]);
    }

    #[test]
    fn test_position_offset() {
        let p = Position::new(0, 0);
        assert_eq!(p.offset(-1, 0), Position::new(-1, 0));
        assert_eq!(p.offset(1, -1), Position::new(1, -1));
        assert_eq!(Position::from((3, 4)), Position::new(3, 4));
    }
}
