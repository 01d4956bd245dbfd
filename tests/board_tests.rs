use salvo::{Board, BoardError, Cell, Orientation, Ship, ShotResult};

#[test]
fn test_single_ship_scenario() {
    let mut board = Board::new(10);
    board
        .place_ship(Ship::new(3), 0, 0, Orientation::Horizontal)
        .unwrap();
    assert_eq!(board.remaining_ship_count(), 1);

    assert_eq!(board.resolve_shot(5, 5).unwrap(), ShotResult::Miss);
    assert_eq!(board.remaining_ship_count(), 1);

    assert_eq!(board.resolve_shot(0, 0).unwrap(), ShotResult::Hit);
    assert!(!board.all_ships_sunk());
    assert_eq!(board.resolve_shot(0, 1).unwrap(), ShotResult::Hit);
    assert!(!board.all_ships_sunk());
    assert_eq!(board.resolve_shot(0, 2).unwrap(), ShotResult::Hit);
    assert!(board.all_ships_sunk());
    assert_eq!(board.remaining_ship_count(), 0);
    assert!(board.ships()[0].ship().is_sunk());
}

#[test]
fn test_repeat_shot_is_already_targeted() {
    let mut board = Board::new(10);
    board
        .place_ship(Ship::new(2), 3, 3, Orientation::Vertical)
        .unwrap();
    assert_eq!(board.resolve_shot(3, 3).unwrap(), ShotResult::Hit);
    assert_eq!(board.resolve_shot(0, 0).unwrap(), ShotResult::Miss);

    assert_eq!(board.resolve_shot(3, 3).unwrap(), ShotResult::AlreadyTargeted);
    assert_eq!(board.resolve_shot(0, 0).unwrap(), ShotResult::AlreadyTargeted);
    assert_eq!(board.ships()[0].ship().hits(), 1);
    assert_eq!(board.grid().get(3, 3).unwrap(), Cell::Hit);
    assert_eq!(board.grid().get(0, 0).unwrap(), Cell::Miss);
}

#[test]
fn test_out_of_bounds_shot() {
    let mut board = Board::new(10);
    assert_eq!(
        board.resolve_shot(10, 0).unwrap_err(),
        BoardError::OutOfBounds { row: 10, col: 0 }
    );
    assert_eq!(
        board.resolve_shot(0, usize::MAX).unwrap_err(),
        BoardError::OutOfBounds {
            row: 0,
            col: usize::MAX
        }
    );
    assert_eq!(board.grid().count_cells_with_state(Cell::Empty), 100);
}

#[test]
fn test_placement_bounds() {
    let mut board = Board::new(10);
    // last column that still fits
    assert!(board
        .place_ship(Ship::new(4), 0, 6, Orientation::Horizontal)
        .is_ok());
    assert_eq!(
        board
            .place_ship(Ship::new(4), 1, 7, Orientation::Horizontal)
            .unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        board
            .place_ship(Ship::new(2), 9, 0, Orientation::Vertical)
            .unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        board
            .place_ship(Ship::new(1), 10, 0, Orientation::Vertical)
            .unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        board
            .place_ship(Ship::new(2), usize::MAX, 0, Orientation::Vertical)
            .unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(board.ships().len(), 1);
    assert_eq!(board.grid().count_cells_with_state(Cell::ShipPresent), 4);
}

#[test]
fn test_overlap_rejected_adjacency_allowed() {
    let mut board = Board::new(10);
    board
        .place_ship(Ship::new(3), 2, 2, Orientation::Horizontal)
        .unwrap();
    let err = board
        .place_ship(Ship::new(3), 0, 3, Orientation::Vertical)
        .unwrap_err();
    assert_eq!(err, BoardError::ShipOverlaps);
    assert!(err.is_invalid_placement());

    // touching along the long side and at the end is fine
    assert_eq!(
        board
            .place_ship(Ship::new(3), 3, 2, Orientation::Horizontal)
            .unwrap(),
        1
    );
    assert_eq!(
        board
            .place_ship(Ship::new(2), 2, 5, Orientation::Vertical)
            .unwrap(),
        2
    );
    assert_eq!(board.grid().count_cells_with_state(Cell::ShipPresent), 8);
}

#[test]
fn test_zero_length_ship_rejected() {
    let mut board = Board::new(5);
    let err = board
        .place_ship(Ship::new(0), 0, 0, Orientation::Horizontal)
        .unwrap_err();
    assert_eq!(err, BoardError::InvalidShipLength(0));
    assert!(!err.is_invalid_placement());
}

#[test]
fn test_hits_routed_to_owning_ship() {
    let mut board = Board::new(6);
    board
        .place_ship(Ship::new(2), 0, 0, Orientation::Horizontal)
        .unwrap();
    board
        .place_ship(Ship::new(2), 1, 0, Orientation::Horizontal)
        .unwrap();
    board.resolve_shot(1, 1).unwrap();
    board.resolve_shot(1, 0).unwrap();

    assert_eq!(board.ships()[0].ship().hits(), 0);
    assert!(board.ships()[1].ship().is_sunk());
    assert_eq!(board.remaining_ship_count(), 1);
    assert_eq!(board.ship_at(0, 1).map(|ps| ps.origin()), Some((0, 0)));
    assert!(board.ship_at(2, 2).is_none());
}

#[test]
fn test_target_view_hides_ships() {
    let mut board = Board::new(4);
    board
        .place_ship(Ship::new(2), 0, 0, Orientation::Vertical)
        .unwrap();
    board.resolve_shot(0, 0).unwrap();
    board.resolve_shot(3, 3).unwrap();

    let view = board.target_view();
    assert_eq!(view.cell(0, 0).unwrap(), Cell::Hit);
    assert_eq!(view.cell(1, 0).unwrap(), Cell::Empty);
    assert_eq!(view.cell(3, 3).unwrap(), Cell::Miss);
    assert!(view.is_resolved(3, 3).unwrap());
    assert!(!view.is_resolved(1, 0).unwrap());
    assert_eq!(view.unresolved_count(), 14);
    assert!(view.cell(4, 0).is_err());
}
