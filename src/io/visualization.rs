//! Snapshot capture and GIF generation for solve visualization

use image::{Delay, Frame};

use crate::board::Board;
use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{Result, SolverError, invalid_puzzle};
use crate::io::image::render_board;

/// Captures board snapshots for visualization
///
/// Holds the independent snapshots produced by a solve so the deduction
/// sequence can be replayed as an animation after the run completes.
#[derive(Debug, Default)]
pub struct SolveCapture {
    frames: Vec<Board>,
}

impl SolveCapture {
    /// Create an empty capture
    pub const fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Build a capture from an engine's recorded snapshots
    pub fn from_snapshots(snapshots: &[Board]) -> Self {
        Self {
            frames: snapshots.to_vec(),
        }
    }

    /// Record one board snapshot
    pub fn record(&mut self, board: &Board) {
        self.frames.push(board.clone());
    }

    /// Returns the number of captured snapshots
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the captured snapshots as a GIF
    ///
    /// The requested frame delay is clamped to what viewers reliably
    /// support, and the final frame is held longer for visibility.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No snapshots were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &str, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(invalid_puzzle(
                output_path,
                "no snapshots captured for visualization",
            ));
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);

        let mut frames: Vec<Frame> = self
            .frames
            .iter()
            .map(|board| {
                Frame::from_parts(
                    render_board(board),
                    0,
                    0,
                    Delay::from_numer_denom_ms(effective_delay_ms, 1),
                )
            })
            .collect();

        // Final frame displays longer for better visibility
        if let Some(last) = self.frames.last() {
            frames.push(Frame::from_parts(
                render_board(last),
                0,
                0,
                Delay::from_numer_denom_ms(effective_delay_ms * 5, 1),
            ));
        }

        if let Some(parent) = std::path::Path::new(output_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| SolverError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| SolverError::FileSystem {
            path: output_path.into(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| SolverError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        Ok(())
    }
}
