use alloc::boxed::Box;
use rand::rngs::SmallRng;

use crate::{
    ai::Strategy,
    board::Grid,
    common::{Coord, FireOutcome, PlacementError, SetupError},
    config::GameConfig,
    game::ShotReport,
    view::ObservedView,
};

/// Who is behind a player: a person or one of the targeting strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Nature {
    Human,
    Automated(Strategy),
}

/// Interface implemented by different player types.
pub trait Player {
    /// Display name.
    fn name(&self) -> &str;

    fn nature(&self) -> Nature;

    /// Place the whole fleet onto the provided empty grid.
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        grid: &mut Grid,
        config: &GameConfig,
    ) -> Result<(), PlacementError>;

    /// Choose the next coordinate to fire at, given what is known of the
    /// opponent's grid and the length of their largest surviving vessel.
    ///
    /// The coordinate may be invalid; the match rejects it and asks again.
    /// `None` means the player has no target to offer.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        view: &ObservedView,
        largest_remaining: Option<usize>,
    ) -> Option<Coord>;

    /// Inform the player of the result of its last accepted shot.
    fn handle_shot_result(&mut self, _report: &ShotReport) {}

    /// Inform the player of an opponent shot against its grid.
    fn handle_opponent_shot(&mut self, _report: &ShotReport) {}

    /// Inform the player that a target was refused and another is needed.
    fn handle_rejected_target(&mut self, _coord: Coord, _outcome: FireOutcome) {}
}

/// A player together with the random source it owns.
pub struct Seat {
    pub player: Box<dyn Player>,
    pub rng: SmallRng,
}

impl Seat {
    pub fn new(player: Box<dyn Player>, rng: SmallRng) -> Self {
        Self { player, rng }
    }

    /// Build this player's grid and let them place their fleet on it.
    pub fn prepare_grid(&mut self, config: &GameConfig) -> Result<Grid, SetupError> {
        let mut grid = config.new_grid()?;
        self.player.place_fleet(&mut self.rng, &mut grid, config)?;
        if !grid.is_fleet_complete() {
            return Err(SetupError::Incomplete);
        }
        log::debug!(
            "{} placed {} vessels",
            self.player.name(),
            grid.vessels().len()
        );
        Ok(grid)
    }
}
