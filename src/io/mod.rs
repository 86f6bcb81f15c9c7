//! Input/output operations
//!
//! This module contains the crate's outer surface:
//! - Error types shared across the crate
//! - Puzzle file parsing and board rendering
//! - The batch-solving command line front end

/// Command-line interface for batch solving puzzle files
pub mod cli;
/// Solver constants and runtime configuration defaults
pub mod configuration;
/// Error types for board and solver operations
pub mod error;
/// Board rendering and PNG export
pub mod image;
/// Multi-file progress tracking
pub mod progress;
/// Text puzzle format parsing
pub mod puzzle;
/// Snapshot capture and GIF generation for solve visualization
pub mod visualization;
