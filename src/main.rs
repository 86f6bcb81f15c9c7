//! CLI entry point for the Queens puzzle deduction solver

use clap::Parser;
use queensolve::io::cli::{Cli, FileProcessor};

fn main() -> queensolve::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
