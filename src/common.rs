//! Common types for the game: coordinates, shot outcomes and error kinds.

use thiserror::Error;

/// A `(row, col)` position on a grid.
pub type Coord = (usize, usize);

/// Orthogonal unit steps, in the fixed order the targeting code relies on:
/// down, up, right, left.
pub const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Move `coord` by `delta`, returning `None` if a component would go negative.
/// The upper bound is left to the caller.
pub fn step(coord: Coord, delta: (isize, isize)) -> Option<Coord> {
    Some((
        coord.0.checked_add_signed(delta.0)?,
        coord.1.checked_add_signed(delta.1)?,
    ))
}

/// Result of firing at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    /// Coordinate lies outside the grid; nothing changed.
    OutOfRange,
    /// Coordinate was fired upon before; nothing changed.
    AlreadyFired,
    /// Shot landed in open water.
    Miss,
    /// Shot struck a vessel.
    Hit,
}

impl FireOutcome {
    /// `true` for outcomes that consumed a shot.
    pub fn is_accepted(self) -> bool {
        matches!(self, FireOutcome::Miss | FireOutcome::Hit)
    }
}

/// Reasons a vessel placement is refused.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// A footprint coordinate is outside the grid.
    #[error("footprint leaves the grid at {coord:?}")]
    OutOfRange { coord: Coord },
    /// A footprint coordinate is already occupied.
    #[error("footprint overlaps a vessel at {coord:?}")]
    Overlap { coord: Coord },
    /// A footprint coordinate touches an occupied cell orthogonally.
    #[error("footprint touches a neighbouring vessel")]
    AdjacencyViolation,
    /// Footprint is empty or not a straight contiguous line.
    #[error("footprint is not a straight contiguous line")]
    InvalidShape,
    /// The fleet has no room left for a vessel of this length.
    #[error("fleet has no room for another vessel of length {length}")]
    FleetExceeded { length: usize },
    /// The search gave up without finding a legal position.
    #[error("no legal position for a vessel of length {length} after {attempts} attempts")]
    Unsatisfiable { length: usize, attempts: usize },
}

/// Errors in externally supplied configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },
    #[error("grid of {width}x{height} cells is too large")]
    TooLarge { width: usize, height: usize },
    #[error("vessel length and count must be positive, got {length}:{count}")]
    InvalidVessel { length: usize, count: usize },
    #[error("vessel length {length} listed twice in fleet")]
    DuplicateLength { length: usize },
    #[error("fleet entry {length}:{count} makes the fleet too large to count")]
    FleetOverflow { length: usize, count: usize },
    #[error("fleet must contain at least one vessel")]
    EmptyFleet,
    #[error("cannot parse fleet entry '{entry}', expected <length>:<count>")]
    Malformed { entry: alloc::string::String },
}

/// Errors while preparing a player's grid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Placement(#[from] PlacementError),
    #[error("fleet placement finished with vessels missing")]
    Incomplete,
}
