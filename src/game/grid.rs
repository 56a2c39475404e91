//! Fixed-size occupancy grid.

use serde::{Deserialize, Serialize};

use super::state::Position;

/// Content of one grid location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    /// Part of the snake body
    Occupied,
    Food,
}

/// Row-major R×C arena of cells. Dimensions never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-empty grid.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Raw cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Linear offset of a position inside `[0, rows) x [0, columns)`, or
    /// `None` when it is off the grid.
    ///
    /// Every bounds check in the crate goes through here.
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        let row = usize::try_from(pos.row).ok()?;
        let column = usize::try_from(pos.column).ok()?;
        if row < self.rows && column < self.columns {
            Some(row * self.columns + column)
        } else {
            None
        }
    }

    fn position_of(&self, index: usize) -> Position {
        Position::new((index / self.columns) as i32, (index % self.columns) as i32)
    }

    /// Cell at a position, `None` when out of bounds.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index_of(pos).map(|idx| self.cells[idx])
    }

    /// Overwrite a cell. Returns `false` if the position is out of bounds.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match self.index_of(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Every position with its cell, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (self.position_of(idx), cell))
    }

    /// All positions currently holding `cell`.
    pub fn positions_of(&self, cell: Cell) -> Vec<Position> {
        self.iter()
            .filter(|&(_, c)| c == cell)
            .map(|(pos, _)| pos)
            .collect()
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}
