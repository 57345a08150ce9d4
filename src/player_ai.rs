use alloc::string::String;
use rand::rngs::SmallRng;

use crate::{
    ai::Strategy,
    board::Grid,
    common::{Coord, PlacementError},
    config::GameConfig,
    placement,
    player::{Nature, Player},
    view::ObservedView,
};

/// Automated player that places its fleet at random and picks targets with a
/// [`Strategy`].
pub struct AiPlayer {
    name: String,
    strategy: Strategy,
}

impl AiPlayer {
    pub fn new(name: impl Into<String>, strategy: Strategy) -> Self {
        Self {
            name: name.into(),
            strategy,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn nature(&self) -> Nature {
        Nature::Automated(self.strategy)
    }

    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        grid: &mut Grid,
        config: &GameConfig,
    ) -> Result<(), PlacementError> {
        placement::random_fleet(
            grid,
            config.enforce_spacing,
            config.max_placement_attempts,
            rng,
        )
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        view: &ObservedView,
        largest_remaining: Option<usize>,
    ) -> Option<Coord> {
        self.strategy.select(view, largest_remaining, rng)
    }
}
