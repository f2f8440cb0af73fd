use battleship_ai::{
    fleet_lengths, next_move, next_move_masked, score_grid, Cells, BOARD_SIZE,
};

#[test]
fn test_empty_board_scores_everywhere() {
    let hits = Cells::new();
    let misses = Cells::new();
    let grid = score_grid(&hits, &misses, &fleet_lengths());
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            assert!(grid.get(row, col).unwrap() > 0, "({}, {})", row, col);
        }
    }
    let (row, col) = next_move(&grid);
    assert!(row < BOARD_SIZE && col < BOARD_SIZE);
    assert!(grid.get(row, col).unwrap() > 0);
}

#[test]
fn test_corner_score_on_empty_board() {
    // per orientation: one window per length through the corner, so
    // (5 + 4 + 3 + 3 + 2) × 2 = 34
    let grid = score_grid(&Cells::new(), &Cells::new(), &fleet_lengths());
    assert_eq!(grid.get(0, 0).unwrap(), 34);
    assert_eq!(grid.get(9, 9).unwrap(), 34);
}

#[test]
fn test_three_hit_row_concentrates_fire() {
    // three consecutive hits in row 3, columns 4..=6
    let hits = Cells::from_coords([(3, 4), (3, 5), (3, 6)]).unwrap();
    let misses = Cells::new();
    let grid = score_grid(&hits, &misses, &[5]);

    // a length-5 row window covering all three hits weighs 4 × 3, giving
    // its unhit cells 5 × 12 = 60 per window
    assert_eq!(grid.get(3, 3).unwrap(), 200);
    assert_eq!(grid.get(3, 7).unwrap(), 180);
    assert_eq!(grid.get(3, 2).unwrap(), 140);

    // hit cells themselves are never re-targeted
    assert_eq!(grid.get(3, 4).unwrap(), 0);
    assert_eq!(grid.get(3, 5).unwrap(), 0);
    assert_eq!(grid.get(3, 6).unwrap(), 0);

    // the peak extends the hit run within the row
    assert_eq!(next_move(&grid), (3, 3));
}

#[test]
fn test_row_bias_beats_column_bias() {
    // one isolated hit: row windows scale with the hit count, column
    // windows get the flat bonus, so the scores still agree for a single
    // hit; with two hits in a row the row neighbors must pull ahead of
    // the column neighbors.
    let hits = Cells::from_coords([(5, 4), (5, 5)]).unwrap();
    let grid = score_grid(&hits, &Cells::new(), &[5]);
    assert!(grid.get(5, 3).unwrap() > grid.get(4, 4).unwrap());
    assert!(grid.get(5, 6).unwrap() > grid.get(6, 5).unwrap());
}

#[test]
fn test_blocked_pocket_scores_zero() {
    // rows 2..=4 are all misses except a lone gap at (3, 4): no ship of
    // length >= 2 fits through it in either orientation
    let mut misses = Cells::new();
    for row in 2..=4 {
        for col in 0..BOARD_SIZE {
            if (row, col) != (3, 4) {
                misses.insert(row, col).unwrap();
            }
        }
    }
    let grid = score_grid(&Cells::new(), &misses, &fleet_lengths());
    for col in 0..BOARD_SIZE {
        assert_eq!(grid.get(3, col).unwrap(), 0, "col {}", col);
    }
}

#[test]
fn test_zero_lengths_are_skipped() {
    let grid = score_grid(&Cells::new(), &Cells::new(), &[0, 0, 0, 0, 2]);
    let full = score_grid(&Cells::new(), &Cells::new(), &[2]);
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            assert_eq!(grid.get(row, col).unwrap(), full.get(row, col).unwrap());
        }
    }
}

#[test]
fn test_masked_selection_skips_attacked() {
    let hits = Cells::from_coords([(3, 4), (3, 5), (3, 6)]).unwrap();
    let misses = Cells::from_coords([(3, 3)]).unwrap();
    let grid = score_grid(&hits, &misses, &[5]);
    let attacked = hits | misses;

    let (row, col) = next_move_masked(&grid, &attacked).unwrap();
    assert!(!attacked.contains(row, col).unwrap());

    // fully attacked board yields no move
    let mut all = Cells::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            all.insert(row, col).unwrap();
        }
    }
    assert_eq!(next_move_masked(&grid, &all), None);
}

#[test]
fn test_all_zero_grid_picks_origin() {
    // the unmasked scan keeps the source's tie-break: first cell in
    // row-major order
    let mut misses = Cells::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            misses.insert(row, col).unwrap();
        }
    }
    let grid = score_grid(&Cells::new(), &misses, &fleet_lengths());
    assert_eq!(next_move(&grid), (0, 0));
}
