//! Commonly used types and utilities for ease of import.

pub use crate::{
    compute_footprint, AiPlayer, FireOutcome, FleetSpec, GameConfig, Grid, Match, MatchState,
    ObservedView, Orientation, Player, PlayerId, Seat, Strategy,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, print_player_view, CliPlayer};
