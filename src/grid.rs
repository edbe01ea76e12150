use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cell::CellKind;

/// A (row, col) cell coordinate, 0-indexed from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Rectangular grid of cell kinds, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
    cells: Vec<CellKind>,
}

impl Grid {
    /// Build a grid from row-major cells; `cells.len()` must equal `rows * cols`
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<CellKind>) -> Option<Self> {
        if cells.len() != rows * cols {
            return None;
        }
        Some(Grid { rows, cols, cells })
    }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Convert a position to its row-major cell index
    pub fn get_id(&self, pos: Position) -> usize {
        pos.col + pos.row * self.cols
    }

    /// Convert a row-major cell index back to a position
    pub fn get_coords(&self, id: usize) -> Position {
        Position::new(id / self.cols, id % self.cols)
    }

    /// Panics if `pos` is out of bounds
    pub fn get(&self, pos: Position) -> CellKind {
        self.cells[self.get_id(pos)]
    }

    pub fn set(&mut self, pos: Position, kind: CellKind) {
        let id = self.get_id(pos);
        self.cells[id] = kind;
    }

    pub fn value(&self, pos: Position) -> i32 {
        self.get(pos).value()
    }

    pub fn is_terminal(&self, pos: Position) -> bool {
        self.get(pos).is_terminal()
    }

    /// In-bounds orthogonal neighbours, in up, down, left, right order
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        let (r, c) = (pos.row as isize, pos.col as isize);
        [(r - 1, c), (r + 1, c), (r, c - 1), (r, c + 1)]
            .into_iter()
            .filter(move |&(nr, nc)| self.in_bounds(nr, nc))
            .map(|(nr, nc)| Position::new(nr as usize, nc as usize))
    }

    /// All positions holding `kind`, in row-major order
    pub fn positions_of(&self, kind: CellKind) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, k)| **k == kind)
            .map(|(id, _)| self.get_coords(id))
            .collect()
    }

    /// Numeric reward values, one row per grid row
    pub fn values(&self) -> Vec<Vec<i32>> {
        self.cells
            .chunks(self.cols.max(1))
            .map(|row| row.iter().map(|k| k.value()).collect())
            .collect()
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellKind]> {
        self.cells.chunks(self.cols.max(1))
    }
}
