//! Command-line interface for batch solving puzzle files

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::io::configuration::{GIF_FRAME_DELAY_MS, OUTPUT_SUFFIX, STEPS_SUFFIX};
use crate::io::error::{Result, invalid_puzzle};
use crate::io::image::export_board_as_png;
use crate::io::progress::ProgressManager;
use crate::io::puzzle;
use crate::io::visualization::SolveCapture;
use crate::solver::{DeductionEngine, SolveOutcome};

#[derive(Parser)]
#[command(name = "queensolve")]
#[command(
    author,
    version,
    about = "Solve Queens region puzzles by constraint propagation"
)]
/// Command-line arguments for the puzzle solving tool
pub struct Cli {
    /// Input puzzle file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Export the deduction sequence as an animated GIF
    #[arg(short, long)]
    pub steps: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch solving of puzzle files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, puzzle parsing, solving, or
    /// output export fails.
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("txt") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_puzzle(
                    &self.cli.target,
                    "target file must be a .txt puzzle",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("txt")
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_puzzle(
                &self.cli.target,
                "target must be a .txt puzzle file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let output_path = Self::get_output_path(input_path);

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let board = puzzle::load(input_path)?;

        let mut engine = DeductionEngine::new(board);
        if self.cli.steps {
            engine.enable_snapshots();
        }
        let outcome = engine.solve()?;

        export_board_as_png(
            engine.board(),
            output_path
                .to_str()
                .ok_or_else(|| invalid_puzzle(&output_path, "invalid output path"))?,
        )?;

        if self.cli.steps {
            let steps_path = Self::get_steps_path(input_path);
            let capture = SolveCapture::from_snapshots(engine.snapshots());
            capture.export_gif(
                steps_path
                    .to_str()
                    .ok_or_else(|| invalid_puzzle(&steps_path, "invalid steps path"))?,
                GIF_FRAME_DELAY_MS,
            )?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file(index, input_path, outcome_label(outcome));
        }

        Ok(())
    }

    fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

        input_path
            .parent()
            .map_or_else(|| PathBuf::from(&output_name), |parent| parent.join(&output_name))
    }

    fn get_steps_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let steps_name = format!("{}{STEPS_SUFFIX}.gif", stem.to_string_lossy());

        input_path
            .parent()
            .map_or_else(|| PathBuf::from(&steps_name), |parent| parent.join(&steps_name))
    }
}

/// Human-readable label for a terminal outcome
pub const fn outcome_label(outcome: SolveOutcome) -> &'static str {
    match outcome {
        SolveOutcome::Solved => "solved",
        SolveOutcome::Unsolvable => "unsolvable",
        SolveOutcome::Indeterminate => "no deduction found",
    }
}
