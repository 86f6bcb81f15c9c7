//! Board rendering and PNG export

use image::{Rgba, RgbaImage};

use crate::board::Board;
use crate::io::configuration::{CELL_PIXELS, NO_GO_COLOR, QUEEN_COLOR, REGION_PALETTE};
use crate::io::error::{Result, SolverError};

/// Render a board to an RGBA image
///
/// Cells are filled with their region's palette color; a queen is drawn as
/// a large dark square and a no-go mark as a small dot. Unassigned cells
/// render white.
pub fn render_board(board: &Board) -> RgbaImage {
    let scale = CELL_PIXELS as u32;
    let edge = board.size() as u32 * scale;
    let mut img = RgbaImage::new(edge, edge);

    for (row, col, cell) in board.cells() {
        let fill = cell
            .region
            .and_then(|region| REGION_PALETTE.get(region))
            .copied()
            .unwrap_or([255, 255, 255, 255]);

        for dy in 0..scale {
            for dx in 0..scale {
                let color = overlay_color(cell.is_queen, cell.is_no_go, dx, dy, scale)
                    .unwrap_or(fill);
                img.put_pixel(col as u32 * scale + dx, row as u32 * scale + dy, Rgba(color));
            }
        }
    }

    img
}

/// Marker color for a pixel inside one cell, if any
fn overlay_color(
    is_queen: bool,
    is_no_go: bool,
    dx: u32,
    dy: u32,
    scale: u32,
) -> Option<[u8; 4]> {
    // Insets are fractions of the cell edge so any CELL_PIXELS works
    let queen_inset = scale / 4;
    let dot_inset = scale * 2 / 5;

    if is_queen
        && dx >= queen_inset
        && dx < scale - queen_inset
        && dy >= queen_inset
        && dy < scale - queen_inset
    {
        return Some(QUEEN_COLOR);
    }
    if is_no_go && dx >= dot_inset && dx < scale - dot_inset && dy >= dot_inset && dy < scale - dot_inset
    {
        return Some(NO_GO_COLOR);
    }
    None
}

/// Export a board as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_board_as_png(board: &Board, output_path: &str) -> Result<()> {
    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| SolverError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    render_board(board)
        .save(output_path)
        .map_err(|e| SolverError::ImageExport {
            path: output_path.into(),
            source: e,
        })
}
