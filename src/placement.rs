//! Randomised fleet placement.

use alloc::vec::Vec;
use rand::Rng;

use crate::board::Grid;
use crate::common::{Coord, PlacementError};
use crate::config::FleetSpec;
use crate::ship::{compute_footprint, Orientation};

fn acceptable(grid: &Grid, footprint: &[Coord], enforce_spacing: bool) -> bool {
    grid.is_legal(footprint) && !(enforce_spacing && grid.violates_adjacency(footprint))
}

/// Draw one candidate top-left and orientation for [`place_randomly`].
///
/// Rows come from `0..=height` and columns from `0..=width`, so the last draw
/// in each axis always lies just past the board.
pub fn random_candidate<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> (Coord, Orientation) {
    let top_left = (
        rng.random_range(0..=grid.height()),
        rng.random_range(0..=grid.width()),
    );
    let orientation = if rng.random() {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    };
    (top_left, orientation)
}

/// Find a random legal footprint of `length` and place it.
///
/// Each attempt draws a [`random_candidate`]; off-board and illegal candidates
/// are rejected, and a rejected candidate is retried once in the other
/// orientation before a new top-left is drawn. Gives up with
/// [`PlacementError::Unsatisfiable`] after `max_attempts` draws.
pub fn place_randomly<R: Rng + ?Sized>(
    grid: &mut Grid,
    length: usize,
    enforce_spacing: bool,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Vec<Coord>, PlacementError> {
    for _ in 0..max_attempts {
        let (top_left, orientation) = random_candidate(grid, &mut *rng);
        for orient in [orientation, orientation.flipped()] {
            let footprint = compute_footprint(length, top_left, orient);
            if acceptable(grid, &footprint, enforce_spacing) {
                grid.place(&footprint)?;
                return Ok(footprint);
            }
        }
    }
    log::warn!(
        "gave up placing vessel of length {} after {} attempts",
        length,
        max_attempts
    );
    Err(PlacementError::Unsatisfiable {
        length,
        attempts: max_attempts,
    })
}

/// Call `place` once per vessel of `fleet`, in fleet order.
pub fn set_fleet<F>(grid: &mut Grid, fleet: &FleetSpec, mut place: F) -> Result<(), PlacementError>
where
    F: FnMut(&mut Grid, usize) -> Result<(), PlacementError>,
{
    for (length, count) in fleet.iter() {
        for _ in 0..count {
            place(grid, length)?;
        }
    }
    Ok(())
}

/// Fail fast on fleets that cannot fit at all: more cells than the board, or
/// a vessel longer than both sides.
pub fn check_capacity(grid: &Grid) -> Result<(), PlacementError> {
    let fleet = grid.fleet();
    if fleet.total_cells() > grid.width() * grid.height() {
        return Err(PlacementError::Unsatisfiable {
            length: fleet.largest(),
            attempts: 0,
        });
    }
    let longest_side = grid.width().max(grid.height());
    if let Some((length, _)) = fleet.iter().find(|&(l, _)| l > longest_side) {
        return Err(PlacementError::Unsatisfiable {
            length,
            attempts: 0,
        });
    }
    Ok(())
}

/// Place the grid's whole fleet at random, after [`check_capacity`].
pub fn random_fleet<R: Rng + ?Sized>(
    grid: &mut Grid,
    enforce_spacing: bool,
    max_attempts: usize,
    rng: &mut R,
) -> Result<(), PlacementError> {
    check_capacity(grid)?;
    let fleet = grid.fleet().clone();
    set_fleet(grid, &fleet, |g, length| {
        place_randomly(g, length, enforce_spacing, max_attempts, &mut *rng).map(|_| ())
    })
}
