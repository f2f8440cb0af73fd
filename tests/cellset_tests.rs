use battleship_ai::{CellSet, Cells, GameError};

#[test]
fn test_insert_contains_remove() {
    let mut set = Cells::new();
    assert!(set.is_empty());

    set.insert(1, 1).unwrap();
    assert!(set.contains(1, 1).unwrap());
    assert_eq!(set.len(), 1);

    // inserting a member again is a no-op
    set.insert(1, 1).unwrap();
    assert_eq!(set.len(), 1);

    set.remove(1, 1).unwrap();
    assert!(!set.contains(1, 1).unwrap());
    assert!(set.is_empty());
}

#[test]
fn test_bounds_rejected() {
    let mut set = Cells::new();
    assert_eq!(
        set.insert(10, 0).unwrap_err(),
        GameError::OutOfBounds { row: 10, col: 0 }
    );
    assert_eq!(
        set.contains(0, 10).unwrap_err(),
        GameError::OutOfBounds { row: 0, col: 10 }
    );
}

#[test]
fn test_union_and_intersection() {
    let a = Cells::from_coords([(0, 0), (2, 3)]).unwrap();
    let b = Cells::from_coords([(2, 3), (9, 9)]).unwrap();

    let union = a | b;
    assert_eq!(union.len(), 3);
    assert!(union.contains(9, 9).unwrap());

    let both = a & b;
    assert_eq!(both.len(), 1);
    assert!(both.contains(2, 3).unwrap());
}

#[test]
fn test_iter_is_row_major() {
    let set = Cells::from_coords([(3, 1), (0, 5), (3, 0)]).unwrap();
    let coords: Vec<_> = set.iter().collect();
    assert_eq!(coords, vec![(0, 5), (3, 0), (3, 1)]);
}

#[test]
fn test_smaller_backing_type() {
    let mut set = CellSet::<u16, 4>::new();
    set.insert(3, 3).unwrap();
    assert!(set.contains(3, 3).unwrap());
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![(3, 3)]);
}
