//! Tests for the text puzzle format

#[cfg(test)]
mod tests {
    use queensolve::SolverError;
    use queensolve::io::puzzle;
    use std::io::Write;
    use std::path::Path;

    const FIXTURE: &str = "aabb\nacbb\nccbd\nccdd\n";

    #[test]
    fn test_parse_maps_symbols_by_first_appearance() {
        let board = puzzle::parse(FIXTURE, Path::new("fixture.txt")).expect("valid puzzle");

        assert_eq!(board.size(), 4);
        assert!(board.is_fully_defined());
        // 'a' appears first, then 'b', 'c', 'd'
        assert_eq!(board.get_cell(0, 0).expect("in bounds").region, Some(0));
        assert_eq!(board.get_cell(0, 2).expect("in bounds").region, Some(1));
        assert_eq!(board.get_cell(1, 1).expect("in bounds").region, Some(2));
        assert_eq!(board.get_cell(2, 3).expect("in bounds").region, Some(3));
    }

    #[test]
    fn test_parse_accepts_comments_blank_lines_and_digits() {
        let text = "# two rows\n\n01\n 01 \n";
        let board = puzzle::parse(text, Path::new("fixture.txt")).expect("valid puzzle");
        assert_eq!(board.size(), 2);
        assert!(board.is_fully_defined());
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        let err = puzzle::parse("# only a comment\n", Path::new("empty.txt"))
            .expect_err("must fail");
        assert!(matches!(err, SolverError::InvalidPuzzle { .. }));
        assert!(err.to_string().contains("no rows"));
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        let err = puzzle::parse("ab\nabc\n", Path::new("ragged.txt")).expect_err("must fail");
        assert!(err.to_string().contains("expected 2"));
    }

    #[test]
    fn test_parse_rejects_unknown_symbols() {
        let err = puzzle::parse("a!\naa\n", Path::new("bad.txt")).expect_err("must fail");
        assert!(err.to_string().contains('!'));
    }

    #[test]
    fn test_parse_rejects_wrong_region_count() {
        // Three distinct symbols on a 2×2 board
        let too_many = puzzle::parse("ab\nca\n", Path::new("many.txt")).expect_err("must fail");
        assert!(matches!(too_many, SolverError::InvalidPuzzle { .. }));

        // One distinct symbol on a 2×2 board
        let too_few = puzzle::parse("aa\naa\n", Path::new("few.txt")).expect_err("must fail");
        assert!(too_few.to_string().contains("expected exactly 2"));
    }

    #[test]
    fn test_load_reads_from_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("puzzle.txt");
        let mut file = std::fs::File::create(&path).expect("create file");
        file.write_all(FIXTURE.as_bytes()).expect("write puzzle");

        let board = puzzle::load(&path).expect("valid puzzle");
        assert_eq!(board.size(), 4);
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = puzzle::load(Path::new("does/not/exist.txt")).expect_err("must fail");
        assert!(matches!(err, SolverError::FileSystem { .. }));
    }
}
