//! Forced placement: the last candidate of a row, column, or region
//!
//! A candidate cell whose row, column, or region has no other candidate left
//! must hold that grouping's queen. Placement cascades fresh no-go flags, so
//! the scan repeats until a full pass places nothing.

use crate::board::Board;
use crate::io::error::Result;

/// Apply forced placement until a full pass places no queen
///
/// Returns whether any queen was placed. Placements take effect immediately,
/// so later cells in the same pass see the cascaded exclusions.
///
/// # Errors
///
/// Propagates [`crate::SolverError::InvalidPlacement`] should a placement
/// target an excluded cell; the candidate test above makes that unreachable
/// for a consistent board.
pub fn apply_to_fixed_point(board: &mut Board) -> Result<bool> {
    let mut progress = false;
    loop {
        let mut placed = false;
        for row in 0..board.size() {
            for col in 0..board.size() {
                if force_at(board, row, col)? {
                    placed = true;
                }
            }
        }
        if !placed {
            return Ok(progress);
        }
        progress = true;
    }
}

/// Place a queen at `(row, col)` if some grouping forces it there
fn force_at(board: &mut Board, row: usize, col: usize) -> Result<bool> {
    let Some(cell) = board.cell(row, col) else {
        return Ok(false);
    };
    if !cell.is_candidate() {
        return Ok(false);
    }
    let Some(region) = cell.region else {
        return Ok(false);
    };

    let forced = board.remaining_in_row(row) == 1
        || board.remaining_in_col(col) == 1
        || board.remaining_in_region(region) == 1;

    if forced {
        board.place_queen(row, col)?;
    }
    Ok(forced)
}
