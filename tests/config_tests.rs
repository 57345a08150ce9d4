use broadside::{
    random_fleet, ConfigError, FleetSpec, GameConfig, Grid, PlacementError, DEFAULT_FLEET,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_default_fleet() {
    let fleet = FleetSpec::default();
    assert_eq!(fleet.iter().collect::<Vec<_>>(), DEFAULT_FLEET.to_vec());
    assert_eq!(fleet.total_vessels(), 5);
    assert_eq!(fleet.total_cells(), 17);
    assert_eq!(fleet.largest(), 5);
    assert_eq!(fleet.count_of(3), 2);
    assert_eq!(fleet.count_of(6), 0);
}

#[test]
fn test_fleet_parse_and_display() {
    let fleet: FleetSpec = "4:1, 2:3".parse().unwrap();
    assert_eq!(fleet.iter().collect::<Vec<_>>(), vec![(4, 1), (2, 3)]);
    assert_eq!(fleet.to_string(), "4:1,2:3");
    assert_eq!(
        FleetSpec::default().to_string().parse::<FleetSpec>().unwrap(),
        FleetSpec::default()
    );
}

#[test]
fn test_fleet_rejects_bad_entries() {
    assert_eq!(
        "3".parse::<FleetSpec>().unwrap_err(),
        ConfigError::Malformed {
            entry: "3".to_string()
        }
    );
    assert!(matches!(
        "a:1".parse::<FleetSpec>(),
        Err(ConfigError::Malformed { .. })
    ));
    assert_eq!(
        FleetSpec::new([(0, 1)]).unwrap_err(),
        ConfigError::InvalidVessel {
            length: 0,
            count: 1
        }
    );
    assert_eq!(
        FleetSpec::new([(2, 1), (2, 2)]).unwrap_err(),
        ConfigError::DuplicateLength { length: 2 }
    );
    assert_eq!(FleetSpec::new([]).unwrap_err(), ConfigError::EmptyFleet);
    assert_eq!("".parse::<FleetSpec>().unwrap_err(), ConfigError::EmptyFleet);
}

#[test]
fn test_game_config_builds_grids() {
    let config = GameConfig::default();
    let grid = config.new_grid().unwrap();
    assert_eq!((grid.width(), grid.height()), (10, 10));
    assert!(config.enforce_spacing);
    assert_eq!(grid.fleet(), &config.fleet);

    let flat = GameConfig {
        height: 0,
        ..GameConfig::default()
    };
    assert_eq!(
        flat.new_grid().unwrap_err(),
        ConfigError::ZeroDimension {
            width: 10,
            height: 0
        }
    );
}

#[test]
fn test_fleet_totals_must_not_overflow() {
    let err = "18446744073709551615:2".parse::<FleetSpec>().unwrap_err();
    assert_eq!(
        err,
        ConfigError::FleetOverflow {
            length: usize::MAX,
            count: 2
        }
    );
    // each entry fits, their sum does not
    let err = FleetSpec::new([(usize::MAX, 1), (2, 1)]).unwrap_err();
    assert_eq!(err, ConfigError::FleetOverflow { length: 2, count: 1 });

    let fleet = FleetSpec::new([(usize::MAX, 1)]).unwrap();
    assert_eq!(fleet.total_cells(), usize::MAX);
}

#[test]
fn test_oversized_grid_rejected() {
    let err = Grid::new(usize::MAX, 2, FleetSpec::default()).unwrap_err();
    assert_eq!(
        err,
        ConfigError::TooLarge {
            width: usize::MAX,
            height: 2
        }
    );
}

#[test]
fn test_huge_vessel_is_unsatisfiable_not_a_panic() {
    let mut grid = Grid::new(10, 10, FleetSpec::new([(usize::MAX, 1)]).unwrap()).unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        random_fleet(&mut grid, true, 100, &mut rng).unwrap_err(),
        PlacementError::Unsatisfiable {
            length: usize::MAX,
            attempts: 0
        }
    );
}
