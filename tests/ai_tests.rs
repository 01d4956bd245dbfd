use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{ai, Board, BoardError, Cell, Orientation, Ship, ShotResult};

#[test]
fn test_random_target_covers_board_exactly_once() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut board = Board::new(10);
    ai::place_fleet_randomly(&mut rng, &mut board, &[1, 2, 3, 4, 5], 10_000).unwrap();

    let mut seen = HashSet::new();
    for _ in 0..100 {
        let (r, c) = ai::random_target(&mut rng, &board.target_view()).unwrap();
        assert!(seen.insert((r, c)), "repeated target ({}, {})", r, c);
        let res = board.resolve_shot(r, c).unwrap();
        assert_ne!(res, ShotResult::AlreadyTargeted);
    }
    assert_eq!(board.target_view().unresolved_count(), 0);
    assert!(board.all_ships_sunk());
    assert_eq!(ai::random_target(&mut rng, &board.target_view()), None);
}

#[test]
fn test_random_placement_stays_on_board() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..500 {
        let (r, c, o) = ai::random_placement(&mut rng, 6, 4).unwrap();
        match o {
            Orientation::Horizontal => assert!(r < 6 && c + 4 <= 6),
            Orientation::Vertical => assert!(r + 4 <= 6 && c < 6),
        }
    }
    assert_eq!(ai::random_placement(&mut rng, 3, 4), None);
    assert_eq!(ai::random_placement(&mut rng, 3, 0), None);
}

#[test]
fn test_unplaceable_ship_is_configuration_error() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut board = Board::new(3);
    // block every row and column for a length-3 ship
    board
        .place_ship(Ship::new(3), 1, 0, Orientation::Horizontal)
        .unwrap();
    board
        .place_ship(Ship::new(1), 0, 1, Orientation::Horizontal)
        .unwrap();
    board
        .place_ship(Ship::new(1), 2, 1, Orientation::Horizontal)
        .unwrap();

    let err = ai::place_ship_randomly(&mut rng, &mut board, 3, 50).unwrap_err();
    assert_eq!(
        err,
        BoardError::UnableToPlaceShip {
            length: 3,
            attempts: 50
        }
    );
    assert_eq!(board.ships().len(), 3);
}

#[test]
fn test_fleet_layout_restarts_when_boxed_in() {
    let fleet = [1, 2, 3, 4, 5];
    for seed in 0..1000 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new(5);
        ai::place_fleet_randomly(&mut rng, &mut board, &fleet, 10_000).unwrap();
        let lengths: Vec<usize> = board.ships().iter().map(|ps| ps.ship().length()).collect();
        assert_eq!(lengths, fleet);
        assert_eq!(board.grid().count_cells_with_state(Cell::ShipPresent), 15);
    }
}

#[test]
fn test_failed_fleet_layout_leaves_board_untouched() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut board = Board::new(3);
    board
        .place_ship(Ship::new(3), 1, 0, Orientation::Horizontal)
        .unwrap();
    board
        .place_ship(Ship::new(1), 0, 1, Orientation::Horizontal)
        .unwrap();
    board
        .place_ship(Ship::new(1), 2, 1, Orientation::Horizontal)
        .unwrap();
    let before = board.grid().clone();

    // the first ship fits, the second never does and every layout restarts
    let err = ai::place_fleet_randomly(&mut rng, &mut board, &[1, 3], 500).unwrap_err();
    assert_eq!(
        err,
        BoardError::UnableToPlaceShip {
            length: 3,
            attempts: 500
        }
    );
    assert_eq!(board.ships().len(), 3);
    assert_eq!(board.grid(), &before);
}

#[test]
fn test_placement_is_reproducible() {
    let mut rng1 = SmallRng::seed_from_u64(12345);
    let mut rng2 = SmallRng::seed_from_u64(12345);
    let mut board1 = Board::new(10);
    let mut board2 = Board::new(10);
    ai::place_fleet_randomly(&mut rng1, &mut board1, &[1, 2, 3, 4, 5], 10_000).unwrap();
    ai::place_fleet_randomly(&mut rng2, &mut board2, &[1, 2, 3, 4, 5], 10_000).unwrap();
    assert_eq!(board1.ships(), board2.ships());
    assert_eq!(board1.grid(), board2.grid());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn automated_fleet_never_overlaps(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new(10);
        let fleet = [1, 2, 3, 4, 5];
        ai::place_fleet_randomly(&mut rng, &mut board, &fleet, 10_000).unwrap();

        prop_assert_eq!(board.ships().len(), fleet.len());
        let mut cells = HashSet::new();
        for (ps, &len) in board.ships().iter().zip(fleet.iter()) {
            prop_assert_eq!(ps.ship().length(), len);
            for cell in ps.cells() {
                prop_assert!(cells.insert(cell), "cell {:?} shared by two ships", cell);
            }
        }
        prop_assert_eq!(cells.len(), 15);
        prop_assert_eq!(board.grid().count_cells_with_state(Cell::ShipPresent), 15);
    }

    #[test]
    fn random_target_is_always_unresolved(seed in any::<u64>(), shots in 0usize..99) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new(10);
        for _ in 0..shots {
            let (r, c) = ai::random_target(&mut rng, &board.target_view()).unwrap();
            board.resolve_shot(r, c).unwrap();
        }
        let (r, c) = ai::random_target(&mut rng, &board.target_view()).unwrap();
        prop_assert!(!board.target_view().is_resolved(r, c).unwrap());
        prop_assert_eq!(board.target_view().unresolved_count(), 100 - shots);
    }
}
