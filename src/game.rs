//! Turn-based match controller.
//!
//! A [`Match`] owns both grids and is the only caller of [`Grid::fire`]. It
//! advances one shot per call; pacing between automated moves is up to the
//! caller.

use alloc::string::{String, ToString};
use core::fmt;
use thiserror::Error;

use crate::{
    board::Grid,
    common::{Coord, FireOutcome},
    player::{Nature, Seat},
    view::ObservedView,
};

/// One of the two players of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    First,
    Second,
}

impl PlayerId {
    pub fn other(self) -> Self {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            PlayerId::First => 0,
            PlayerId::Second => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::First => f.write_str("first player"),
            PlayerId::Second => f.write_str("second player"),
        }
    }
}

/// Match state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// The given player is to fire next.
    AwaitingShot(PlayerId),
    /// The given player has won. Terminal.
    GameOver(PlayerId),
}

impl MatchState {
    /// State after the active player's shot produced `outcome`.
    ///
    /// `opponent_defeated` is whether every vessel of the opponent is
    /// destroyed after the shot.
    pub fn after_shot(self, outcome: FireOutcome, opponent_defeated: bool) -> Self {
        let MatchState::AwaitingShot(active) = self else {
            return self;
        };
        match outcome {
            FireOutcome::OutOfRange | FireOutcome::AlreadyFired => self,
            FireOutcome::Miss => MatchState::AwaitingShot(active.other()),
            FireOutcome::Hit if opponent_defeated => MatchState::GameOver(active),
            FireOutcome::Hit => self,
        }
    }

    pub fn active(self) -> Option<PlayerId> {
        match self {
            MatchState::AwaitingShot(p) => Some(p),
            MatchState::GameOver(_) => None,
        }
    }

    pub fn winner(self) -> Option<PlayerId> {
        match self {
            MatchState::GameOver(p) => Some(p),
            MatchState::AwaitingShot(_) => None,
        }
    }

    pub fn is_over(self) -> bool {
        matches!(self, MatchState::GameOver(_))
    }
}

/// What happened on one shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub shooter: PlayerId,
    pub coord: Coord,
    pub outcome: FireOutcome,
    /// Length of the vessel this shot destroyed, if any.
    pub destroyed: Option<usize>,
    /// State after the shot.
    pub state: MatchState,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    #[error("{player} has not placed their whole fleet")]
    FleetIncomplete { player: PlayerId },
    #[error("the game is over, {winner} won")]
    GameOver { winner: PlayerId },
    #[error("{player} offered no target")]
    NoTarget { player: PlayerId },
    #[error("{player} offered {attempts} unusable targets in a row")]
    TooManyRejections { player: PlayerId, attempts: usize },
}

/// Per-player totals at the end of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSummary {
    pub name: String,
    pub nature: Nature,
    pub shots: usize,
    pub hits: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSummary {
    pub winner: PlayerId,
    pub winner_name: String,
    pub players: [PlayerSummary; 2],
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Tally {
    shots: usize,
    hits: usize,
}

/// Both grids plus whose turn it is.
#[derive(Debug, Clone)]
pub struct Match {
    grids: [Grid; 2],
    tallies: [Tally; 2],
    state: MatchState,
}

impl Match {
    /// Start a match; both fleets must be fully placed.
    pub fn new(first: Grid, second: Grid, starting: PlayerId) -> Result<Self, MatchError> {
        if !first.is_fleet_complete() {
            return Err(MatchError::FleetIncomplete {
                player: PlayerId::First,
            });
        }
        if !second.is_fleet_complete() {
            return Err(MatchError::FleetIncomplete {
                player: PlayerId::Second,
            });
        }
        Ok(Self {
            grids: [first, second],
            tallies: [Tally::default(); 2],
            state: MatchState::AwaitingShot(starting),
        })
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner()
    }

    /// The grid owned by `player`.
    pub fn grid(&self, player: PlayerId) -> &Grid {
        &self.grids[player.index()]
    }

    /// What `attacker` can see of their opponent's grid.
    pub fn view_for(&self, attacker: PlayerId) -> ObservedView {
        self.grid(attacker.other()).observed_view()
    }

    pub fn shots(&self, player: PlayerId) -> usize {
        self.tallies[player.index()].shots
    }

    pub fn hits(&self, player: PlayerId) -> usize {
        self.tallies[player.index()].hits
    }

    /// Resolve one shot by the active player at `coord`.
    ///
    /// Rejected coordinates come back as `OutOfRange`/`AlreadyFired` with the
    /// turn unchanged.
    pub fn fire(&mut self, coord: Coord) -> Result<ShotReport, MatchError> {
        let shooter = match self.state {
            MatchState::AwaitingShot(p) => p,
            MatchState::GameOver(winner) => return Err(MatchError::GameOver { winner }),
        };
        let target = &mut self.grids[shooter.other().index()];
        let outcome = target.fire(coord.0, coord.1);

        let mut destroyed = None;
        if outcome.is_accepted() {
            let tally = &mut self.tallies[shooter.index()];
            tally.shots += 1;
            if outcome == FireOutcome::Hit {
                tally.hits += 1;
                destroyed = target
                    .vessel_at(coord)
                    .map(|i| &target.vessels()[i])
                    .filter(|v| v.is_destroyed())
                    .map(|v| v.length());
            }
        }
        self.state = self.state.after_shot(outcome, target.all_destroyed());

        log::debug!("{} fired at {:?}: {:?}", shooter, coord, outcome);
        if let Some(length) = destroyed {
            log::debug!("{} destroyed a vessel of length {}", shooter, length);
        }
        if let MatchState::GameOver(winner) = self.state {
            log::info!("game over, {} wins", winner);
        }
        Ok(ShotReport {
            shooter,
            coord,
            outcome,
            destroyed,
            state: self.state,
        })
    }

    /// Ask the active seat for a target and resolve it.
    ///
    /// Unusable targets are refused and the same seat is asked again, up to
    /// `max_rejections` times. Both seats hear about the accepted shot.
    pub fn tick(
        &mut self,
        seats: &mut [Seat; 2],
        max_rejections: usize,
    ) -> Result<ShotReport, MatchError> {
        let shooter = match self.state {
            MatchState::AwaitingShot(p) => p,
            MatchState::GameOver(winner) => return Err(MatchError::GameOver { winner }),
        };
        let view = self.view_for(shooter);
        let largest = self.grid(shooter.other()).largest_surviving_length();

        for _ in 0..=max_rejections {
            let seat = &mut seats[shooter.index()];
            let coord = seat
                .player
                .select_target(&mut seat.rng, &view, largest)
                .ok_or(MatchError::NoTarget { player: shooter })?;
            let report = self.fire(coord)?;
            if report.outcome.is_accepted() {
                seats[shooter.index()].player.handle_shot_result(&report);
                seats[shooter.other().index()]
                    .player
                    .handle_opponent_shot(&report);
                return Ok(report);
            }
            log::warn!("{} target {:?} refused: {:?}", shooter, coord, report.outcome);
            seats[shooter.index()]
                .player
                .handle_rejected_target(coord, report.outcome);
        }
        Err(MatchError::TooManyRejections {
            player: shooter,
            attempts: max_rejections + 1,
        })
    }

    /// Run `tick` until someone wins.
    pub fn play_out(
        &mut self,
        seats: &mut [Seat; 2],
        max_rejections: usize,
    ) -> Result<MatchSummary, MatchError> {
        let winner = loop {
            if let Some(winner) = self.winner() {
                break winner;
            }
            self.tick(seats, max_rejections)?;
        };
        let summary = |id: PlayerId| PlayerSummary {
            name: seats[id.index()].player.name().to_string(),
            nature: seats[id.index()].player.nature(),
            shots: self.shots(id),
            hits: self.hits(id),
        };
        Ok(MatchSummary {
            winner,
            winner_name: seats[winner.index()].player.name().to_string(),
            players: [summary(PlayerId::First), summary(PlayerId::Second)],
        })
    }
}
