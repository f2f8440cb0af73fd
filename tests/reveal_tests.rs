use battleship_ai::{
    reveal_ship, AttackLedger, Board, Cell, Orientation, Outcome, Placement, ShipId,
};

fn carrier_board() -> Board {
    let mut board = Board::empty();
    let placement = Placement::new(0, 0, 5, Orientation::Horizontal).unwrap();
    board.place(&placement, ShipId::new(0)).unwrap();
    let destroyer = Placement::new(4, 4, 2, Orientation::Vertical).unwrap();
    board.place(&destroyer, ShipId::new(4)).unwrap();
    board
}

#[test]
fn test_reveal_uncovers_whole_ship() {
    let mut board = carrier_board();
    let mut ledger = AttackLedger::new();
    // the triggering hit is already on the ledger
    ledger.record(0, 2, Outcome::Hit).unwrap();

    let revealed = reveal_ship(&mut board, 0, 2, &mut ledger).unwrap();
    assert_eq!(revealed, vec![(0, 0), (0, 1), (0, 3), (0, 4)]);
    assert_eq!(ledger.hit_count(), 5);

    // carrier cells are cleared, the destroyer is untouched
    for col in 0..5 {
        assert_eq!(board.cell(0, col).unwrap(), Cell::Empty);
    }
    assert_eq!(board.cell(4, 4).unwrap(), Cell::Occupied(ShipId::new(4)));
    assert_eq!(board.cell(5, 4).unwrap(), Cell::Occupied(ShipId::new(4)));
}

#[test]
fn test_reveal_counts_only_new_cells() {
    let mut board = carrier_board();
    let mut ledger = AttackLedger::new();
    ledger.record(0, 0, Outcome::Hit).unwrap();
    ledger.record(0, 1, Outcome::Hit).unwrap();
    ledger.record(0, 4, Outcome::Hit).unwrap();

    let revealed = reveal_ship(&mut board, 0, 1, &mut ledger).unwrap();
    assert_eq!(revealed, vec![(0, 2), (0, 3)]);
    assert_eq!(ledger.hit_count(), 5);
}

#[test]
fn test_reveal_on_water_is_empty() {
    let mut board = carrier_board();
    let mut ledger = AttackLedger::new();
    let revealed = reveal_ship(&mut board, 9, 9, &mut ledger).unwrap();
    assert!(revealed.is_empty());
    assert_eq!(ledger.attack_count(), 0);
}

#[test]
fn test_reveal_distinguishes_equal_length_ships() {
    let mut board = Board::empty();
    let cruiser = Placement::new(2, 0, 3, Orientation::Horizontal).unwrap();
    let submarine = Placement::new(6, 0, 3, Orientation::Horizontal).unwrap();
    board.place(&cruiser, ShipId::new(2)).unwrap();
    board.place(&submarine, ShipId::new(3)).unwrap();

    let mut ledger = AttackLedger::new();
    let revealed = reveal_ship(&mut board, 2, 1, &mut ledger).unwrap();
    assert_eq!(revealed, vec![(2, 0), (2, 1), (2, 2)]);

    // only the cruiser went down
    assert_eq!(board.cell(6, 0).unwrap(), Cell::Occupied(ShipId::new(3)));
    assert_eq!(ledger.hit_count(), 3);
}
