//! Tests for CLI parsing and batch file processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use queensolve::io::cli::{Cli, FileProcessor, outcome_label};
    use queensolve::solver::SolveOutcome;
    use std::io::Write;
    use std::path::Path;

    const FIXTURE: &str = "abaa\naaaa\ncccc\ndcdd\n";

    fn write_puzzle(dir: &Path, name: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).expect("create file");
        file.write_all(FIXTURE.as_bytes()).expect("write puzzle");
        path
    }

    #[test]
    fn test_flag_defaults() {
        let defaults = Cli::parse_from(["queensolve", "puzzle.txt"]);
        assert!(defaults.skip_existing());
        assert!(defaults.should_show_progress());
        assert!(!defaults.steps);

        let flagged = Cli::parse_from(["queensolve", "--quiet", "--no-skip", "puzzle.txt"]);
        assert!(!flagged.skip_existing());
        assert!(!flagged.should_show_progress());
    }

    #[test]
    fn test_outcome_labels_are_distinct() {
        assert_eq!(outcome_label(SolveOutcome::Solved), "solved");
        assert_eq!(outcome_label(SolveOutcome::Unsolvable), "unsolvable");
        assert_eq!(outcome_label(SolveOutcome::Indeterminate), "no deduction found");
    }

    #[test]
    fn test_process_writes_result_image() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = write_puzzle(dir.path(), "cascade.txt");

        let cli = Cli::parse_from(["queensolve", "--quiet", path.to_str().expect("utf-8 path")]);
        let mut processor = FileProcessor::new(cli);
        processor.process().expect("processing succeeds");

        assert!(dir.path().join("cascade_result.png").exists());
        assert!(!dir.path().join("cascade_steps.gif").exists());
    }

    #[test]
    fn test_process_directory_with_steps() {
        let dir = tempfile::tempdir().expect("temp dir");
        write_puzzle(dir.path(), "one.txt");
        write_puzzle(dir.path(), "two.txt");

        let cli = Cli::parse_from([
            "queensolve",
            "--quiet",
            "--steps",
            dir.path().to_str().expect("utf-8 path"),
        ]);
        let mut processor = FileProcessor::new(cli);
        processor.process().expect("processing succeeds");

        assert!(dir.path().join("one_result.png").exists());
        assert!(dir.path().join("one_steps.gif").exists());
        assert!(dir.path().join("two_result.png").exists());
        assert!(dir.path().join("two_steps.gif").exists());
    }

    // Existing outputs are skipped unless --no-skip asks otherwise
    #[test]
    fn test_process_skips_existing_output() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = write_puzzle(dir.path(), "cascade.txt");
        let output = dir.path().join("cascade_result.png");
        std::fs::write(&output, b"sentinel").expect("write sentinel");

        let skipping = Cli::parse_from(["queensolve", "--quiet", path.to_str().expect("utf-8 path")]);
        let mut skipping_processor = FileProcessor::new(skipping);
        skipping_processor.process().expect("processing succeeds");
        assert_eq!(
            std::fs::read(&output).expect("read output"),
            b"sentinel",
            "existing output must be left alone"
        );

        let overwriting = Cli::parse_from([
            "queensolve",
            "--quiet",
            "--no-skip",
            path.to_str().expect("utf-8 path"),
        ]);
        let mut overwriting_processor = FileProcessor::new(overwriting);
        overwriting_processor.process().expect("processing succeeds");
        assert_ne!(
            std::fs::read(&output).expect("read output"),
            b"sentinel",
            "--no-skip must overwrite"
        );
    }

    #[test]
    fn test_rejects_non_puzzle_target() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("image.png");
        std::fs::write(&path, b"not a puzzle").expect("write file");

        let cli = Cli::parse_from(["queensolve", "--quiet", path.to_str().expect("utf-8 path")]);
        let mut processor = FileProcessor::new(cli);
        assert!(processor.process().is_err());
    }
}
