//! Solve loop: rule scheduling, escalation, and termination
//!
//! Rules run cheapest-first at a fixed run length, escalating the length
//! only once nothing at the current one makes progress. Re-running any rule
//! on an unchanged board is a no-op, so the explicit progress flag per
//! iteration is what guarantees termination.

use crate::board::Board;
use crate::io::error::Result;

use super::containment::{self, Axis};
use super::{confinement, forced};

/// Terminal state of a solve
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Every row, column, and region holds exactly one queen
    Solved,
    /// The board is proven impossible to complete
    Unsolvable,
    /// Propagation reached a fixed point at every run length without
    /// solving or disproving; deeper search would be required
    Indeterminate,
}

/// Drives a board to a terminal state with sound deductions only
///
/// The engine owns its board for the duration of the solve; every
/// externally observable intermediate step is an independent snapshot, so
/// callers may retain the sequence without aliasing live state.
#[derive(Debug)]
pub struct DeductionEngine {
    board: Board,
    snapshots: Option<Vec<Board>>,
}

impl DeductionEngine {
    /// Create an engine over a fully defined board
    ///
    /// Passing a board that is not fully defined is a caller error; the
    /// engine does not re-validate it.
    pub const fn new(board: Board) -> Self {
        Self {
            board,
            snapshots: None,
        }
    }

    /// Access the current board state
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Record a board snapshot after every deduction step that progresses
    pub fn enable_snapshots(&mut self) {
        self.snapshots = Some(Vec::new());
    }

    /// Snapshots recorded so far, ending with the terminal board
    pub fn snapshots(&self) -> &[Board] {
        self.snapshots.as_deref().unwrap_or_default()
    }

    /// Consume the engine, returning the board
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Run deductions to a terminal state
    ///
    /// Escalates the containment run length from 1 to `size - 1`, repeating
    /// all rules at each length until none progresses.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::SolverError::InvalidPlacement`] if a rule ever
    /// forces a queen onto an excluded cell; that indicates a defect in the
    /// rules, not in the puzzle.
    pub fn solve(&mut self) -> Result<SolveOutcome> {
        let size = self.board.size();

        if forced::apply_to_fixed_point(&mut self.board)? {
            self.record();
        }
        if let Some(outcome) = self.terminal() {
            self.record_final();
            return Ok(outcome);
        }

        for len in 1..size {
            loop {
                let mut progress = false;

                if forced::apply_to_fixed_point(&mut self.board)? {
                    progress = true;
                    self.record();
                }
                if let Some(outcome) = self.terminal() {
                    self.record_final();
                    return Ok(outcome);
                }

                if confinement::apply(&mut self.board) {
                    progress = true;
                    self.record();
                }
                if let Some(outcome) = self.terminal() {
                    self.record_final();
                    return Ok(outcome);
                }

                for run in containment::runs(size, len, Axis::Row) {
                    if containment::apply(&mut self.board, &run) {
                        progress = true;
                        self.record();
                    }
                }

                if forced::apply_to_fixed_point(&mut self.board)? {
                    progress = true;
                    self.record();
                }
                if let Some(outcome) = self.terminal() {
                    self.record_final();
                    return Ok(outcome);
                }

                for run in containment::runs(size, len, Axis::Column) {
                    if containment::apply(&mut self.board, &run) {
                        progress = true;
                        self.record();
                    }
                }

                if !progress {
                    break;
                }
            }
        }

        self.record_final();
        Ok(SolveOutcome::Indeterminate)
    }

    fn terminal(&self) -> Option<SolveOutcome> {
        if self.board.is_solved() {
            Some(SolveOutcome::Solved)
        } else if self.board.is_unsolvable() {
            Some(SolveOutcome::Unsolvable)
        } else {
            None
        }
    }

    fn record(&mut self) {
        if let Some(snapshots) = &mut self.snapshots {
            snapshots.push(self.board.clone());
        }
    }

    fn record_final(&mut self) {
        if let Some(snapshots) = &mut self.snapshots {
            if snapshots.last() != Some(&self.board) {
                snapshots.push(self.board.clone());
            }
        }
    }
}

/// Solve a board in one call, returning the terminal board and outcome
///
/// # Errors
///
/// See [`DeductionEngine::solve`].
pub fn solve_board(board: Board) -> Result<(Board, SolveOutcome)> {
    let mut engine = DeductionEngine::new(board);
    let outcome = engine.solve()?;
    Ok((engine.into_board(), outcome))
}
