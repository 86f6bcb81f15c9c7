//! Text puzzle format parsing
//!
//! A puzzle file holds one line per row and one region symbol per cell,
//! with symbols drawn from `0-9a-f`. Symbols map to region ids in order of
//! first appearance, so any consistent labelling works:
//!
//! ```text
//! aabb
//! acbb
//! ccbd
//! ccdd
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.

use std::path::Path;

use crate::board::Board;
use crate::io::configuration::REGION_SYMBOLS;
use crate::io::error::{Result, SolverError, invalid_puzzle};

/// Read and parse a puzzle file into a fully defined board
///
/// # Errors
///
/// Returns [`SolverError::FileSystem`] if the file cannot be read and
/// [`SolverError::InvalidPuzzle`] if its contents do not describe a valid
/// board.
pub fn load(path: &Path) -> Result<Board> {
    let text = std::fs::read_to_string(path).map_err(|source| SolverError::FileSystem {
        path: path.to_path_buf(),
        operation: "read puzzle",
        source,
    })?;
    parse(&text, path)
}

/// Parse puzzle text into a fully defined board
///
/// `path` is used only for error reporting.
///
/// # Errors
///
/// Returns [`SolverError::InvalidPuzzle`] when the grid is not square, a
/// symbol is unknown, or the regions do not cover every id exactly.
pub fn parse(text: &str, path: &Path) -> Result<Board> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    let size = rows.len();
    if size == 0 {
        return Err(invalid_puzzle(path, "no rows found"));
    }

    let mut board = Board::new(size)
        .map_err(|_size_err| invalid_puzzle(path, format!("unsupported board size {size}")))?;

    let mut region_ids: Vec<char> = Vec::new();
    for (row, line) in rows.iter().enumerate() {
        let symbols: Vec<char> = line.chars().collect();
        if symbols.len() != size {
            return Err(invalid_puzzle(
                path,
                format!(
                    "row {row} has {} cells, expected {size}",
                    symbols.len()
                ),
            ));
        }
        for (col, symbol) in symbols.iter().enumerate() {
            let symbol = symbol.to_ascii_lowercase();
            if !REGION_SYMBOLS.contains(symbol) {
                return Err(invalid_puzzle(
                    path,
                    format!("unknown region symbol '{symbol}' at row {row}, column {col}"),
                ));
            }
            let region = region_ids
                .iter()
                .position(|&known| known == symbol)
                .unwrap_or_else(|| {
                    region_ids.push(symbol);
                    region_ids.len() - 1
                });
            board.assign_region(row, col, region).map_err(|_range_err| {
                invalid_puzzle(
                    path,
                    format!(
                        "{} distinct regions used, expected at most {size}",
                        region + 1
                    ),
                )
            })?;
        }
    }

    if !board.is_fully_defined() {
        return Err(invalid_puzzle(
            path,
            format!(
                "{} distinct regions used, expected exactly {size}",
                region_ids.len()
            ),
        ));
    }

    Ok(board)
}
