use broadside::{compute_footprint, is_straight_line, FleetSpec, Grid, Orientation};

#[test]
fn test_footprint_vertical_and_horizontal() {
    assert_eq!(
        compute_footprint(4, (0, 0), Orientation::Vertical),
        vec![(0, 0), (1, 0), (2, 0), (3, 0)]
    );
    assert_eq!(
        compute_footprint(2, (7, 3), Orientation::Horizontal),
        vec![(7, 3), (7, 4)]
    );
    // no bounds checking
    assert_eq!(
        compute_footprint(3, (10, 10), Orientation::Horizontal),
        vec![(10, 10), (10, 11), (10, 12)]
    );
}

#[test]
fn test_straight_line() {
    assert!(is_straight_line(&[(3, 3)]));
    assert!(is_straight_line(&[(1, 1), (2, 1), (3, 1)]));
    assert!(!is_straight_line(&[(1, 1), (3, 1)]));
    assert!(!is_straight_line(&[(2, 1), (1, 1)]));
    assert!(!is_straight_line(&[(1, 1), (1, 2), (2, 2)]));
    assert!(!is_straight_line(&[]));
}

#[test]
fn test_vessel_contains_and_orientation() {
    let mut grid = Grid::new(5, 5, FleetSpec::new([(4, 1), (2, 1)]).unwrap()).unwrap();
    let v = grid
        .place(&compute_footprint(4, (0, 0), Orientation::Vertical))
        .unwrap();
    let h = grid
        .place(&compute_footprint(2, (1, 2), Orientation::Horizontal))
        .unwrap();

    let vertical = &grid.vessels()[v];
    assert_eq!(vertical.length(), 4);
    assert_eq!(vertical.orientation(), Orientation::Vertical);
    assert!(vertical.contains((3, 0)));
    assert!(!vertical.contains((4, 0)));
    assert_eq!(grid.vessels()[h].orientation(), Orientation::Horizontal);
    assert_eq!(grid.vessel_at((1, 3)), Some(h));
    assert_eq!(grid.vessel_at((4, 4)), None);
}

#[test]
fn test_destroyed_tracks_every_cell() {
    let mut grid = Grid::new(4, 4, FleetSpec::new([(2, 1)]).unwrap()).unwrap();
    grid.place(&[(1, 1), (1, 2)]).unwrap();
    assert!(!grid.vessels()[0].is_destroyed());
    grid.fire(1, 1);
    assert!(!grid.vessels()[0].is_destroyed());
    grid.fire(0, 0);
    assert!(!grid.vessels()[0].is_destroyed());
    grid.fire(1, 2);
    assert!(grid.vessels()[0].is_destroyed());
}

#[test]
fn test_flipped() {
    assert_eq!(Orientation::Horizontal.flipped(), Orientation::Vertical);
    assert_eq!(Orientation::Vertical.flipped(), Orientation::Horizontal);
}

#[test]
fn test_footprint_past_usize_max_saturates() {
    let footprint = compute_footprint(3, (usize::MAX - 1, 4), Orientation::Vertical);
    assert_eq!(
        footprint,
        vec![(usize::MAX - 1, 4), (usize::MAX, 4), (usize::MAX, 4)]
    );
    let grid = Grid::new(5, 5, FleetSpec::new([(3, 1)]).unwrap()).unwrap();
    assert!(!grid.is_legal(&footprint));
}
