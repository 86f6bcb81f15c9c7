//! Tests for the neighborhood confinement pass

#[cfg(test)]
mod tests {
    use queensolve::board::Board;
    use queensolve::solver::confinement;

    fn board_from(regions: &[&[usize]]) -> Board {
        let size = regions.len();
        let mut board = Board::new(size).expect("valid board size");
        for (row, row_regions) in regions.iter().enumerate() {
            for (col, &region) in row_regions.iter().enumerate() {
                board
                    .assign_region(row, col, region)
                    .expect("valid region assignment");
            }
        }
        board
    }

    fn no_go_count(board: &Board) -> usize {
        board.cells().filter(|(_, _, cell)| cell.is_no_go).count()
    }

    // Region 0 fits inside the neighborhood of its own cells, so the pass
    // consumes it, and the exhausted region then vacuously confines every
    // remaining cell
    #[test]
    fn test_compact_regions_saturate_the_board() {
        let mut board = board_from(&[
            &[0, 1, 3, 3],
            &[0, 1, 3, 3],
            &[1, 1, 2, 2],
            &[1, 1, 2, 2],
        ]);

        assert!(confinement::apply(&mut board));
        assert_eq!(no_go_count(&board), 16);
        assert!(board.is_unsolvable());
    }

    #[test]
    fn test_spread_regions_are_untouched() {
        let mut board = board_from(&[
            &[0, 1, 2, 3],
            &[0, 1, 2, 3],
            &[0, 1, 2, 3],
            &[0, 1, 2, 3],
        ]);

        assert!(!confinement::apply(&mut board));
        assert_eq!(no_go_count(&board), 0);
    }

    #[test]
    fn test_pass_is_idempotent_at_fixed_point() {
        let mut board = board_from(&[
            &[0, 1, 3, 3],
            &[0, 1, 3, 3],
            &[1, 1, 2, 2],
            &[1, 1, 2, 2],
        ]);

        assert!(confinement::apply(&mut board));
        assert!(
            !confinement::apply(&mut board),
            "a saturated board offers no further marks"
        );
    }

    // Prior marks survive a rerun; the pass only ever adds
    #[test]
    fn test_reapplication_is_monotone() {
        let mut board = board_from(&[
            &[0, 1, 3, 3],
            &[0, 1, 3, 3],
            &[1, 1, 2, 2],
            &[1, 1, 2, 2],
        ]);
        board.mark_no_go(3, 2);
        board.mark_no_go(3, 3);

        confinement::apply(&mut board);

        assert!(board.get_cell(3, 2).expect("in bounds").is_no_go);
        assert!(board.get_cell(3, 3).expect("in bounds").is_no_go);
        assert_eq!(no_go_count(&board), 16);
    }

    // A placed queen is the last candidate of its region and sits in its
    // own neighborhood, but queens are never excluded
    #[test]
    fn test_queen_survives_saturation() {
        let mut board = board_from(&[
            &[0, 1, 2, 3],
            &[0, 1, 2, 3],
            &[0, 1, 2, 3],
            &[0, 1, 2, 3],
        ]);
        board.place_queen(0, 0).expect("placement succeeds");

        confinement::apply(&mut board);

        let queen = board.get_cell(0, 0).expect("in bounds");
        assert!(queen.is_queen);
        assert!(!queen.is_no_go);
    }
}
