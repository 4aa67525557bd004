//! Line scanning - win detection through the last placed disc
//!
//! A win can only be completed by the disc just dropped, so only the four
//! lines through that disc are examined. Each line is walked outward in both
//! directions until the first cell that is not the mover's disc. Off-board
//! cells read as [`Cell::Boundary`](crate::types::Cell::Boundary) and end the
//! walk like any other non-match.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{Direction, Player, Position, DEFAULT_CONNECT, MAX_DIMENSION};

/// Positions of a run, ordered along the direction's `+delta`
pub type LinePositions = ArrayVec<Position, { MAX_DIMENSION as usize }>;

/// A maximal run of same-owner discs through one position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub direction: Direction,
    pub positions: LinePositions,
}

impl WinningLine {
    /// First position of the run (the `-delta` end)
    pub fn start(&self) -> Option<Position> {
        self.positions.first().copied()
    }

    /// Last position of the run (the `+delta` end)
    pub fn end(&self) -> Option<Position> {
        self.positions.last().copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }
}

/// Counts runs radiating from a point and reports wins of `connect` or more
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineScanner {
    connect: u8,
}

impl LineScanner {
    pub fn new(connect: u8) -> Self {
        Self { connect }
    }

    /// Run length that counts as a win
    pub fn connect(&self) -> u8 {
        self.connect
    }

    /// Count consecutive `player` discs starting one step from `from`
    ///
    /// The count only grows on a match and the walk ends at the first
    /// non-match, so partial runs keep accumulating until they reach an edge,
    /// an empty cell or an opposing disc.
    pub fn count_direction(&self, board: &Board, from: Position, player: Player, delta: (i8, i8)) -> u8 {
        let (dc, dr) = delta;
        let mut count = 0u8;
        let mut cursor = from.offset(dc, dr);
        while board.cell_at(cursor).is_owned_by(player) {
            count += 1;
            cursor = cursor.offset(dc, dr);
        }
        count
    }

    /// The maximal run of `player` discs through `position` along `direction`
    ///
    /// `position` itself is counted as the mover's disc whether or not the
    /// board already holds it.
    pub fn run_through(
        &self,
        board: &Board,
        position: Position,
        player: Player,
        direction: Direction,
    ) -> WinningLine {
        let (dc, dr) = direction.delta();
        let backward = self.count_direction(board, position, player, (-dc, -dr));
        let forward = self.count_direction(board, position, player, (dc, dr));

        let mut positions = LinePositions::new();
        let mut cursor = position;
        for _ in 0..backward {
            cursor = cursor.offset(-dc, -dr);
        }
        // A run never exceeds the board dimension, which is the buffer capacity.
        for _ in 0..(backward as usize + 1 + forward as usize) {
            if positions.try_push(cursor).is_err() {
                break;
            }
            cursor = cursor.offset(dc, dr);
        }

        WinningLine {
            player,
            direction,
            positions,
        }
    }

    /// Check whether the disc at `position` completes a run of `connect`
    ///
    /// Directions are tried in [`Direction::ALL`] order; the first winning
    /// run is returned in full.
    pub fn has_win_at(&self, board: &Board, position: Position, player: Player) -> Option<WinningLine> {
        Direction::ALL.into_iter().find_map(|direction| {
            let line = self.run_through(board, position, player, direction);
            (line.len() >= self.connect as usize).then_some(line)
        })
    }
}

impl Default for LineScanner {
    fn default() -> Self {
        Self::new(DEFAULT_CONNECT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(moves: &[(i8, Player)]) -> Board {
        let mut board = Board::default();
        for &(column, player) in moves {
            board.drop(column, player).unwrap();
        }
        board
    }

    #[test]
    fn test_count_direction_stops_at_opponent() {
        let board = board_with(&[
            (0, Player::First),
            (1, Player::First),
            (2, Player::Second),
            (3, Player::First),
        ]);
        let scanner = LineScanner::default();
        assert_eq!(scanner.count_direction(&board, Position::new(0, 0), Player::First, (1, 0)), 1);
        assert_eq!(scanner.count_direction(&board, Position::new(3, 0), Player::First, (-1, 0)), 0);
    }

    #[test]
    fn test_count_direction_stops_at_boundary() {
        let board = board_with(&[(0, Player::First), (1, Player::First), (2, Player::First)]);
        let scanner = LineScanner::default();
        assert_eq!(scanner.count_direction(&board, Position::new(2, 0), Player::First, (-1, 0)), 2);
        assert_eq!(scanner.count_direction(&board, Position::new(0, 0), Player::First, (-1, 0)), 0);
    }

    #[test]
    fn test_partial_matches_accumulate() {
        // Two, then three matching cells must keep counting rather than reset.
        let board = board_with(&[
            (0, Player::Second),
            (0, Player::Second),
            (0, Player::Second),
        ]);
        let scanner = LineScanner::default();
        assert_eq!(scanner.count_direction(&board, Position::new(0, 3), Player::Second, (0, -1)), 3);
    }

    #[test]
    fn test_run_through_orders_positions() {
        let board = board_with(&[(2, Player::First), (3, Player::First), (4, Player::First)]);
        let scanner = LineScanner::default();
        let run = scanner.run_through(&board, Position::new(3, 0), Player::First, Direction::Horizontal);
        assert_eq!(run.len(), 3);
        assert_eq!(run.start(), Some(Position::new(2, 0)));
        assert_eq!(run.end(), Some(Position::new(4, 0)));
        assert!(run.contains(Position::new(3, 0)));
    }

    #[test]
    fn test_vertical_win() {
        let board = board_with(&[
            (3, Player::Second),
            (3, Player::Second),
            (3, Player::Second),
            (3, Player::Second),
        ]);
        let line = LineScanner::default()
            .has_win_at(&board, Position::new(3, 3), Player::Second)
            .unwrap();
        assert_eq!(line.direction, Direction::Vertical);
        assert_eq!(line.len(), 4);
        assert_eq!(line.start(), Some(Position::new(3, 0)));
    }

    #[test]
    fn test_three_is_not_a_win() {
        let board = board_with(&[(0, Player::First), (1, Player::First), (2, Player::First)]);
        assert!(LineScanner::default()
            .has_win_at(&board, Position::new(2, 0), Player::First)
            .is_none());
    }

    #[test]
    fn test_connect_three_scanner() {
        let board = board_with(&[(0, Player::First), (1, Player::First), (2, Player::First)]);
        let line = LineScanner::new(3)
            .has_win_at(&board, Position::new(1, 0), Player::First)
            .unwrap();
        assert_eq!(line.len(), 3);
    }
}
