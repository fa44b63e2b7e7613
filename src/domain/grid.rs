use std::fmt;

use super::Cell;
use rand::Rng;
use rayon::prelude::*;

/// Validated (col, row) position inside a particular grid.
/// Only `Grid::address` hands these out.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct CellAddress {
    pub col: usize,
    pub row: usize,
}

/// Out-of-bounds lookup, a caller contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    OutOfRange {
        col: i64,
        row: i64,
        cols: usize,
        rows: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { col, row, cols, rows } => write!(
                f,
                "cell ({col}, {row}) is outside the {cols}x{rows} grid"
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// Grid is the toroidal board of cells, stored row-major.
/// Dimensions are fixed at construction; `step` builds a fresh grid.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::Dead; cols * rows],
        }
    }

    /// (cols, rows)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    const fn index(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    /// Validate signed coordinates (as produced by the view transform)
    pub fn address(&self, col: i64, row: i64) -> Option<CellAddress> {
        let in_range =
            col >= 0 && row >= 0 && (col as usize) < self.cols && (row as usize) < self.rows;
        in_range.then(|| CellAddress {
            col: col as usize,
            row: row as usize,
        })
    }

    /// Read a cell, failing with `OutOfRange` for invalid indices
    pub fn get(&self, col: i64, row: i64) -> Result<Cell, GridError> {
        self.address(col, row)
            .map(|addr| self.cell(addr))
            .ok_or(GridError::OutOfRange {
                col,
                row,
                cols: self.cols,
                rows: self.rows,
            })
    }

    /// Read a cell at a validated address
    pub fn cell(&self, addr: CellAddress) -> Cell {
        self.cells[self.index(addr.col, addr.row)]
    }

    /// Flip a cell in place.
    ///
    /// Panics if the address does not belong to a grid of these dimensions.
    pub fn toggle(&mut self, addr: CellAddress) {
        assert!(
            addr.col < self.cols && addr.row < self.rows,
            "toggle of ({}, {}) outside {}x{} grid",
            addr.col,
            addr.row,
            self.cols,
            self.rows
        );
        let idx = self.index(addr.col, addr.row);
        self.cells[idx] = self.cells[idx].toggle();
    }

    /// Overwrite a cell at a validated address
    pub fn set(&mut self, addr: CellAddress, cell: Cell) {
        let idx = self.index(addr.col, addr.row);
        self.cells[idx] = cell;
    }

    /// Set a cell with toroidal wrapping of the coordinates (pattern stamping)
    pub fn set_wrapped(&mut self, col: i64, row: i64, cell: Cell) {
        if self.cells.is_empty() {
            return;
        }
        let col = col.rem_euclid(self.cols as i64) as usize;
        let row = row.rem_euclid(self.rows as i64) as usize;
        self.set(CellAddress { col, row }, cell);
    }

    /// Count live Moore neighbors; edges wrap to the opposite side
    pub fn count_neighbors(&self, col: usize, row: usize) -> u8 {
        let cols = self.cols;
        let rows = self.rows;

        (-1i64..=1)
            .flat_map(|dr| (-1i64..=1).map(move |dc| (dc, dr)))
            .filter(|&(dc, dr)| dc != 0 || dr != 0)
            .map(|(dc, dr)| {
                let nc = (col as i64 + dc + cols as i64) as usize % cols;
                let nr = (row as i64 + dr + rows as i64) as usize % rows;
                self.cells[self.index(nc, nr)].value()
            })
            .sum()
    }

    /// Next generation. Every row is computed from `self` only, so the
    /// parallel row split gives the same result as a serial sweep.
    pub fn step(&self) -> Self {
        if self.cells.is_empty() {
            return self.clone();
        }

        let cells: Vec<Cell> = (0..self.rows)
            .into_par_iter()
            .flat_map_iter(|row| {
                (0..self.cols).map(move |col| {
                    let current = self.cells[self.index(col, row)];
                    current.evolve(self.count_neighbors(col, row))
                })
            })
            .collect();

        Self {
            cols: self.cols,
            rows: self.rows,
            cells,
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Fresh empty grid of the same dimensions
    pub fn cleared(&self) -> Self {
        Self::new(self.cols, self.rows)
    }

    /// Replace every cell with a live one with probability `density`.
    /// Values outside [0, 1] are clamped; NaN counts as 0.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(density) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
    }

    /// Iterate over live cell addresses in row-major order
    pub fn live_cells(&self) -> impl Iterator<Item = CellAddress> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(idx, _)| CellAddress {
                col: idx % self.cols,
                row: idx / self.cols,
            })
    }
}
