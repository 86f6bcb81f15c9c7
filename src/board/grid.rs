//! Grid state management with incremental line and region bookkeeping
//!
//! The board keeps aggregate counters for every row, column, and region
//! alongside the cell grid, updated on each mutation rather than recomputed
//! by scanning. The deduction rules lean on these counts heavily.

use ndarray::Array2;

use crate::io::configuration::MAX_BOARD_SIZE;
use crate::io::error::{Result, SolverError};

use super::cell::Cell;

/// Puzzle board with invariant-preserving mutations
///
/// Owns the N×N cell grid plus derived per-row, per-column, and per-region
/// counters. Queens and no-go flags are monotone: they are only ever set,
/// never cleared, so board state forms a strictly growing chain of facts
/// over a solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Array2<Cell>,
    cells_per_region: Vec<usize>,
    queens: usize,
    queens_per_row: Vec<usize>,
    queens_per_col: Vec<usize>,
    queens_per_region: Vec<usize>,
    no_gos_per_row: Vec<usize>,
    no_gos_per_col: Vec<usize>,
    no_gos_per_region: Vec<usize>,
}

impl Board {
    /// Create an empty board with every cell unassigned
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::OutOfRange`] if `size` is zero or exceeds
    /// [`MAX_BOARD_SIZE`].
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(SolverError::OutOfRange {
                what: "board size",
                value: size,
                limit: MAX_BOARD_SIZE,
            });
        }

        Ok(Self {
            size,
            cells: Array2::default((size, size)),
            cells_per_region: vec![0; size],
            queens: 0,
            queens_per_row: vec![0; size],
            queens_per_col: vec![0; size],
            queens_per_region: vec![0; size],
            no_gos_per_row: vec![0; size],
            no_gos_per_col: vec![0; size],
            no_gos_per_region: vec![0; size],
        })
    }

    /// Board edge length
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Total queens placed so far
    pub const fn queens(&self) -> usize {
        self.queens
    }

    /// Member cell count per region id
    pub fn cells_per_region(&self) -> &[usize] {
        &self.cells_per_region
    }

    /// No-go count per row index
    pub fn no_gos_per_row(&self) -> &[usize] {
        &self.no_gos_per_row
    }

    /// No-go count per column index
    pub fn no_gos_per_col(&self) -> &[usize] {
        &self.no_gos_per_col
    }

    /// No-go count per region id
    pub fn no_gos_per_region(&self) -> &[usize] {
        &self.no_gos_per_region
    }

    /// Queen count per row index
    pub fn queens_per_row(&self) -> &[usize] {
        &self.queens_per_row
    }

    /// Queen count per column index
    pub fn queens_per_col(&self) -> &[usize] {
        &self.queens_per_col
    }

    /// Queen count per region id
    pub fn queens_per_region(&self) -> &[usize] {
        &self.queens_per_region
    }

    /// Cells in `row` that may still receive a queen (queens included)
    pub fn remaining_in_row(&self, row: usize) -> usize {
        self.size - self.no_gos_per_row.get(row).copied().unwrap_or(self.size)
    }

    /// Cells in `col` that may still receive a queen (queens included)
    pub fn remaining_in_col(&self, col: usize) -> usize {
        self.size - self.no_gos_per_col.get(col).copied().unwrap_or(self.size)
    }

    /// Cells of `region` that may still receive a queen (queens included)
    pub fn remaining_in_region(&self, region: usize) -> usize {
        let members = self.cells_per_region.get(region).copied().unwrap_or(0);
        members - self.no_gos_per_region.get(region).copied().unwrap_or(members)
    }

    /// Access a cell without bounds reporting
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get([row, col])
    }

    /// Access a cell
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::OutOfRange`] when either coordinate is outside
    /// the board.
    pub fn get_cell(&self, row: usize, col: usize) -> Result<&Cell> {
        self.check_coordinate("row", row)?;
        self.check_coordinate("column", col)?;
        self.cells
            .get([row, col])
            .ok_or(SolverError::OutOfRange {
                what: "cell",
                value: row * self.size + col,
                limit: self.size * self.size,
            })
    }

    /// Enumerate every cell with its coordinates, row-major
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| (row, col, cell))
    }

    /// Assign `region` to the cell at `(row, col)`
    ///
    /// Region membership counters follow the cell; queen and no-go state are
    /// untouched. Reassignment during editing is allowed and moves the cell
    /// out of its previous region's view.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::OutOfRange`] if a coordinate or the region id
    /// is outside `[0, size)`.
    pub fn assign_region(&mut self, row: usize, col: usize, region: usize) -> Result<()> {
        self.check_coordinate("row", row)?;
        self.check_coordinate("column", col)?;
        self.check_coordinate("region", region)?;

        let (previous, is_queen, is_no_go) = match self.cells.get([row, col]) {
            Some(cell) => (cell.region, cell.is_queen, cell.is_no_go),
            None => return Ok(()),
        };

        if previous == Some(region) {
            return Ok(());
        }

        if let Some(old) = previous {
            Self::decrement(&mut self.cells_per_region, old);
            if is_queen {
                Self::decrement(&mut self.queens_per_region, old);
            }
            if is_no_go {
                Self::decrement(&mut self.no_gos_per_region, old);
            }
        }

        Self::increment(&mut self.cells_per_region, region);
        if is_queen {
            Self::increment(&mut self.queens_per_region, region);
        }
        if is_no_go {
            Self::increment(&mut self.no_gos_per_region, region);
        }

        if let Some(cell) = self.cells.get_mut([row, col]) {
            cell.region = Some(region);
        }
        Ok(())
    }

    /// Mark `(row, col)` as unable to hold a queen
    ///
    /// Idempotent; returns whether the flag was newly set. Queen cells are
    /// never excluded, so marking one is a no-op. Out-of-bounds coordinates
    /// are ignored, which lets callers pass clipped neighbor offsets freely.
    pub fn mark_no_go(&mut self, row: usize, col: usize) -> bool {
        let Some(cell) = self.cells.get_mut([row, col]) else {
            return false;
        };
        if cell.is_no_go || cell.is_queen {
            return false;
        }
        cell.is_no_go = true;
        let region = cell.region;

        Self::increment(&mut self.no_gos_per_row, row);
        Self::increment(&mut self.no_gos_per_col, col);
        if let Some(region) = region {
            Self::increment(&mut self.no_gos_per_region, region);
        }
        true
    }

    /// Place a queen at `(row, col)`
    ///
    /// As one logical step, every other cell of the queen's row, column, and
    /// region becomes no-go, along with the diagonal neighbors (orthogonal
    /// neighbors are already covered by the row and column sweeps).
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::OutOfRange`] for coordinates outside the board
    /// and [`SolverError::InvalidPlacement`] if the cell is already no-go.
    /// The deduction rules never attempt the latter; seeing it means a rule
    /// is unsound.
    pub fn place_queen(&mut self, row: usize, col: usize) -> Result<()> {
        self.check_coordinate("row", row)?;
        self.check_coordinate("column", col)?;

        let (region, is_queen, is_no_go) = match self.cells.get([row, col]) {
            Some(cell) => (cell.region, cell.is_queen, cell.is_no_go),
            None => (None, false, false),
        };

        if is_no_go {
            return Err(SolverError::InvalidPlacement { row, col });
        }
        if is_queen {
            return Ok(());
        }

        if let Some(cell) = self.cells.get_mut([row, col]) {
            cell.is_queen = true;
        }
        self.queens += 1;
        Self::increment(&mut self.queens_per_row, row);
        Self::increment(&mut self.queens_per_col, col);
        if let Some(region) = region {
            Self::increment(&mut self.queens_per_region, region);
        }

        for j in 0..self.size {
            if j != col {
                self.mark_no_go(row, j);
            }
        }
        for i in 0..self.size {
            if i != row {
                self.mark_no_go(i, col);
            }
        }
        if let Some(region) = region {
            for i in 0..self.size {
                for j in 0..self.size {
                    if (i, j) != (row, col)
                        && self.cells.get([i, j]).and_then(|c| c.region) == Some(region)
                    {
                        self.mark_no_go(i, j);
                    }
                }
            }
        }
        for (i, j) in diagonal_neighbors(row, col, self.size) {
            self.mark_no_go(i, j);
        }

        Ok(())
    }

    /// Whether every cell has a region and every region id has members
    ///
    /// Required before solving may begin.
    pub fn is_fully_defined(&self) -> bool {
        let assigned: usize = self.cells_per_region.iter().sum();
        assigned == self.size * self.size && self.cells_per_region.iter().all(|&n| n > 0)
    }

    /// Whether every row, column, and region holds exactly one queen
    pub const fn is_solved(&self) -> bool {
        self.queens == self.size
    }

    /// Whether no completion is possible
    ///
    /// True when some row or column is fully excluded, or when every region
    /// has run out of candidate cells. A single exhausted region does not
    /// trigger this directly; the confinement rule saturates the rest of the
    /// board on its next pass and the row test reports it then.
    pub fn is_unsolvable(&self) -> bool {
        self.no_gos_per_row.contains(&self.size)
            || self.no_gos_per_col.contains(&self.size)
            || self
                .cells_per_region
                .iter()
                .zip(&self.no_gos_per_region)
                .all(|(members, no_gos)| members == no_gos)
    }

    fn check_coordinate(&self, what: &'static str, value: usize) -> Result<()> {
        if value < self.size {
            Ok(())
        } else {
            Err(SolverError::OutOfRange {
                what,
                value,
                limit: self.size,
            })
        }
    }

    fn increment(counters: &mut [usize], index: usize) {
        if let Some(n) = counters.get_mut(index) {
            *n += 1;
        }
    }

    fn decrement(counters: &mut [usize], index: usize) {
        if let Some(n) = counters.get_mut(index) {
            *n = n.saturating_sub(1);
        }
    }
}

/// The up-to-four diagonal neighbors of `(row, col)`, clipped to bounds
pub fn diagonal_neighbors(
    row: usize,
    col: usize,
    size: usize,
) -> impl Iterator<Item = (usize, usize)> {
    let row = row as isize;
    let col = col as isize;
    [(-1, -1), (-1, 1), (1, -1), (1, 1)]
        .into_iter()
        .filter_map(move |(dr, dc)| {
            let (i, j) = (row + dr, col + dc);
            (i >= 0 && j >= 0 && (i as usize) < size && (j as usize) < size)
                .then_some((i as usize, j as usize))
        })
}
