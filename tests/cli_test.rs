#![cfg(feature = "std")]

use std::io::{self, Cursor, Write};

use broadside::{
    column_label, coord_to_string, parse_coord, parse_placement, render_own_grid, render_view,
    CliPlayer, FireOutcome, FleetSpec, GameConfig, Grid, ObservedView, Orientation,
    MatchState, PlacementError, Player, PlayerId, ShotReport,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn cli(input: &str) -> CliPlayer<Cursor<Vec<u8>>, Vec<u8>> {
    CliPlayer::new("tester", Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output(player: CliPlayer<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(player.into_output()).unwrap()
}

fn two_vessel_config() -> GameConfig {
    GameConfig {
        fleet: FleetSpec::new([(2, 1), (3, 1)]).unwrap(),
        ..GameConfig::default()
    }
}

#[test]
fn test_parse_coord() {
    assert_eq!(parse_coord("A5"), Ok((4, 0)));
    assert_eq!(parse_coord(" j10 "), Ok((9, 9)));
    // off-board is syntactically fine
    assert_eq!(parse_coord("Z99"), Ok((98, 25)));
    assert!(parse_coord("").is_err());
    assert!(parse_coord("A").is_err());
    assert!(parse_coord("A0").is_err());
    assert!(parse_coord("5A").is_err());
    assert!(parse_coord("Ax").is_err());
    assert_eq!(coord_to_string((4, 0)), "A5");
    assert_eq!(parse_coord(&coord_to_string((6, 3))), Ok((6, 3)));
}

#[test]
fn test_parse_placement() {
    assert_eq!(parse_placement("B3 v"), Ok(((2, 1), Orientation::Vertical)));
    assert_eq!(parse_placement("B3 H"), Ok(((2, 1), Orientation::Horizontal)));
    assert_eq!(parse_placement("B3"), Ok(((2, 1), Orientation::Horizontal)));
    assert!(parse_placement("B3 X").is_err());
    assert!(parse_placement("B3 H extra").is_err());
    assert!(parse_placement("").is_err());
}

#[test]
fn test_manual_placement() {
    let config = two_vessel_config();
    let mut grid = config.new_grid().unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    let mut player = cli("A1 H\nA3 V\n");
    player.place_fleet(&mut rng, &mut grid, &config).unwrap();

    assert!(grid.is_fleet_complete());
    assert_eq!(grid.vessels()[0].cells(), &[(0, 0), (0, 1)]);
    assert_eq!(grid.vessels()[1].cells(), &[(2, 0), (3, 0), (4, 0)]);
    assert!(output(player).contains("All vessels placed"));
}

#[test]
fn test_refused_placements_are_prompted_again() {
    let config = two_vessel_config();
    let mut grid = config.new_grid().unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    // off the board, garbage, touching the first vessel, then fine
    let mut player = cli("J1 H\n??\nA1 H\nA2 H\nA5 V\n");
    player.place_fleet(&mut rng, &mut grid, &config).unwrap();

    assert_eq!(grid.vessels()[0].cells(), &[(0, 0), (0, 1)]);
    assert_eq!(grid.vessels()[1].cells(), &[(4, 0), (5, 0), (6, 0)]);
    let text = output(player);
    assert_eq!(text.matches("✗ Error").count(), 3);
}

#[test]
fn test_empty_input_places_randomly() {
    let config = GameConfig::default();
    let mut grid = config.new_grid().unwrap();
    let mut rng = SmallRng::seed_from_u64(3);
    // first vessel typed, the rest left to chance, then EOF
    let mut player = cli("C3 H\n\n");
    player.place_fleet(&mut rng, &mut grid, &config).unwrap();

    assert!(grid.is_fleet_complete());
    assert_eq!(grid.vessels()[0].cells(), &[(2, 2), (2, 3)]);
    assert!(output(player).contains("randomly placed"));
}

#[test]
fn test_select_target_reads_coordinates() {
    let view = ObservedView::unexplored(10, 10);
    let mut rng = SmallRng::seed_from_u64(1);

    let mut player = cli("nonsense\nC3\n");
    assert_eq!(player.select_target(&mut rng, &view, Some(5)), Some((2, 2)));
    assert!(output(player).contains("Invalid coordinate"));

    // an empty line takes the suggestion
    let mut player = cli("\n");
    let target = player.select_target(&mut rng, &view, Some(5)).unwrap();
    assert!(view.is_unexplored(target));

    let mut player = cli("");
    assert_eq!(player.select_target(&mut rng, &view, Some(5)), None);
}

#[test]
fn test_rejected_target_message() {
    let mut player = cli("");
    player.handle_rejected_target((0, 0), FireOutcome::AlreadyFired);
    player.handle_rejected_target((10, 0), FireOutcome::OutOfRange);
    let text = output(player);
    assert!(text.contains("already fired at A1"));
    assert!(text.contains("A11 is off the board"));
}

#[test]
fn test_shot_messages() {
    let report = |outcome, destroyed| ShotReport {
        shooter: PlayerId::First,
        coord: (1, 27),
        outcome,
        destroyed,
        state: MatchState::AwaitingShot(PlayerId::First),
    };
    let mut player = cli("");
    player.handle_shot_result(&report(FireOutcome::Hit, Some(4)));
    player.handle_shot_result(&report(FireOutcome::Hit, None));
    player.handle_opponent_shot(&report(FireOutcome::Hit, Some(2)));
    player.handle_opponent_shot(&report(FireOutcome::Miss, None));
    let text = output(player);
    assert!(text.contains("Your shot at AB2 destroyed a vessel of length 4!"));
    assert!(text.contains("HIT at AB2!"));
    assert!(text.contains("Enemy destroyed your vessel of length 2 at AB2"));
    assert!(text.contains("Enemy missed at AB2"));
}

#[test]
fn test_rendering() {
    let mut grid = Grid::new(3, 2, FleetSpec::new([(2, 1)]).unwrap()).unwrap();
    grid.place(&[(0, 0), (0, 1)]).unwrap();
    grid.fire(0, 0);
    grid.fire(1, 2);

    let own = render_own_grid(&grid);
    assert!(own.contains(" 1  X S ."));
    assert!(own.contains(" 2  . . o"));

    let theirs = render_view(&grid.observed_view());
    assert!(theirs.contains(" 1  X . ."));
    assert!(theirs.starts_with("    A B C\n"));
}

#[test]
fn test_init_logging_twice_is_harmless() {
    broadside::init_logging();
    broadside::init_logging();
    log::info!("logger installed");
}

#[test]
fn test_multi_letter_columns() {
    assert_eq!(column_label(0), "A");
    assert_eq!(column_label(25), "Z");
    assert_eq!(column_label(26), "AA");
    assert_eq!(column_label(27), "AB");
    assert_eq!(column_label(701), "ZZ");
    assert_eq!(column_label(702), "AAA");

    assert_eq!(coord_to_string((0, 26)), "AA1");
    assert_ne!(coord_to_string((0, 26)), coord_to_string((0, 0)));
    assert_eq!(parse_coord("AA1"), Ok((0, 26)));
    assert_eq!(parse_coord("ab12"), Ok((11, 27)));
    for col in [0, 25, 26, 51, 52, 701, 702, 18_277] {
        assert_eq!(parse_coord(&coord_to_string((3, col))), Ok((3, col)));
    }
    assert!(parse_coord("AAAAAAAAAAAAAAAAAAAAA1").is_err());
}

#[test]
fn test_wide_board_header_and_target() {
    let view = ObservedView::unexplored(30, 2);
    let theirs = render_view(&view);
    let header = theirs.lines().next().unwrap();
    assert!(header.starts_with("     A  B  C"));
    assert!(header.ends_with("AC AD"));
    assert!(theirs.contains(" 1   .  ."));

    let mut rng = SmallRng::seed_from_u64(1);
    let mut player = cli("AD2\n");
    assert_eq!(player.select_target(&mut rng, &view, Some(5)), Some((1, 29)));
}

#[test]
fn test_select_target_stops_prompting() {
    let view = ObservedView::unexplored(10, 10);
    let mut rng = SmallRng::seed_from_u64(1);
    let mut player = cli(&"??\n".repeat(50)).with_max_prompts(3);
    let target = player.select_target(&mut rng, &view, Some(5)).unwrap();
    assert!(view.is_unexplored(target));
    let text = output(player);
    assert_eq!(text.matches("Invalid coordinate").count(), 3);
    assert!(text.contains("suggested target"));
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}

#[test]
fn test_output_errors_do_not_stop_play() {
    let view = ObservedView::unexplored(10, 10);
    let mut rng = SmallRng::seed_from_u64(1);
    let mut player = CliPlayer::new("tester", Cursor::new(b"B2\n".to_vec()), BrokenPipe);
    assert_eq!(player.select_target(&mut rng, &view, Some(5)), Some((1, 1)));
    player.handle_rejected_target((0, 0), FireOutcome::AlreadyFired);
}

#[test]
fn test_manual_placement_rejects_impossible_fleet() {
    let config = GameConfig {
        fleet: FleetSpec::new([(50, 1)]).unwrap(),
        ..GameConfig::default()
    };
    let mut grid = config.new_grid().unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    let mut player = cli("A1 H\n");
    assert_eq!(
        player.place_fleet(&mut rng, &mut grid, &config).unwrap_err(),
        PlacementError::Unsatisfiable {
            length: 50,
            attempts: 0
        }
    );
}
