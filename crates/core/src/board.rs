//! Board module - manages the game grid
//!
//! The board is a width x height grid where each cell is empty or holds a disc.
//! Uses a flat vector in row-major order for cache locality.
//! Coordinates: (column, row) where column ranges 0..width (left to right) and
//! row ranges 0..height with row 0 the floor. Discs only enter through
//! [`Board::drop`], so every column is a contiguous stack from the floor up.

use arrayvec::ArrayVec;

use crate::error::DropError;
use crate::types::{Cell, Player, Position, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION};

/// The game board - flat vector storage, row 0 at the bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (row * width + column)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    ///
    /// Dimensions are clamped to `1..=MAX_DIMENSION`; use
    /// [`GameConfig::validate`](crate::config::GameConfig::validate) to reject
    /// bad sizes instead.
    pub fn new(width: u8, height: u8) -> Self {
        let width = width.clamp(1, MAX_DIMENSION);
        let height = height.clamp(1, MAX_DIMENSION);
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width as usize * height as usize],
        }
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(&self, position: Position) -> Option<usize> {
        if !self.contains(position) {
            return None;
        }
        Some(position.row as usize * self.width as usize + position.column as usize)
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Check if a position lies on the grid
    pub fn contains(&self, position: Position) -> bool {
        position.column >= 0
            && (position.column as i16) < self.width as i16
            && position.row >= 0
            && (position.row as i16) < self.height as i16
    }

    fn is_valid_column(&self, column: i8) -> bool {
        column >= 0 && (column as i16) < self.width as i16
    }

    /// Get the cell at a position
    ///
    /// Positions off the grid answer [`Cell::Boundary`], which matches no
    /// player, so a line scan stops at the edge without range checks.
    pub fn cell_at(&self, position: Position) -> Cell {
        match self.index(position) {
            Some(idx) => self.cells[idx],
            None => Cell::Boundary,
        }
    }

    /// Drop a disc into a column, returns the position where it landed
    ///
    /// Scans from the floor upward for the first empty cell. Mutates exactly
    /// one cell on success and nothing on failure.
    pub fn drop(&mut self, column: i8, player: Player) -> Result<Position, DropError> {
        if !self.is_valid_column(column) {
            return Err(DropError::InvalidColumn {
                column,
                width: self.width,
            });
        }

        for row in 0..self.height as i8 {
            let position = Position::new(column, row);
            if let Some(idx) = self.index(position) {
                if self.cells[idx].is_empty() {
                    self.cells[idx] = player.to_cell();
                    return Ok(position);
                }
            }
        }

        Err(DropError::ColumnFull { column })
    }

    /// Number of discs stacked in a column (0 for invalid columns)
    pub fn column_height(&self, column: i8) -> u8 {
        if !self.is_valid_column(column) {
            return 0;
        }
        (0..self.height as i8)
            .take_while(|&row| self.cell_at(Position::new(column, row)).is_occupied())
            .count() as u8
    }

    /// Check if a column can take no more discs
    ///
    /// Invalid columns count as full.
    pub fn is_column_full(&self, column: i8) -> bool {
        !self.is_valid_column(column) || self.column_height(column) >= self.height
    }

    /// Columns that can still take a disc, ascending
    pub fn legal_columns(&self) -> ArrayVec<i8, { MAX_DIMENSION as usize }> {
        (0..self.width as i8)
            .filter(|&column| !self.is_column_full(column))
            .collect()
    }

    /// Check if every cell holds a disc
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_occupied())
    }

    /// Number of discs on the board
    pub fn disc_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_occupied()).count()
    }

    /// Get a reference to the internal cells, row-major from the floor up
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows from the floor up
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::Empty;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
