//! Game parameters: board size, fleet composition and search limits.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::board::Grid;
use crate::common::ConfigError;

pub const DEFAULT_WIDTH: usize = 10;
pub const DEFAULT_HEIGHT: usize = 10;

/// Standard fleet as `(length, count)`, in placement order.
pub const DEFAULT_FLEET: [(usize, usize); 4] = [(2, 1), (3, 2), (4, 1), (5, 1)];

/// Sampled top-left positions tried per vessel before giving up.
pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Rejected targets (out of range or already fired) tolerated per turn.
pub const DEFAULT_MAX_REJECTED_SHOTS: usize = 100;

/// Mapping from vessel length to the number of vessels of that length.
///
/// Entries keep insertion order so that seeded placement is reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetSpec {
    entries: Vec<(usize, usize)>,
}

impl FleetSpec {
    /// Build a fleet from `(length, count)` pairs.
    pub fn new<I>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut out: Vec<(usize, usize)> = Vec::new();
        let mut cells: usize = 0;
        for (length, count) in entries {
            if length == 0 || count == 0 {
                return Err(ConfigError::InvalidVessel { length, count });
            }
            if out.iter().any(|&(l, _)| l == length) {
                return Err(ConfigError::DuplicateLength { length });
            }
            // Vessel and cell totals must stay countable.
            cells = length
                .checked_mul(count)
                .and_then(|n| cells.checked_add(n))
                .ok_or(ConfigError::FleetOverflow { length, count })?;
            out.push((length, count));
        }
        if out.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        Ok(Self { entries: out })
    }

    /// Iterate `(length, count)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Required number of vessels of `length` (zero if absent).
    pub fn count_of(&self, length: usize) -> usize {
        self.entries
            .iter()
            .find(|&&(l, _)| l == length)
            .map_or(0, |&(_, c)| c)
    }

    pub fn total_vessels(&self) -> usize {
        self.entries.iter().map(|&(_, c)| c).sum()
    }

    /// Number of cells the whole fleet occupies.
    pub fn total_cells(&self) -> usize {
        self.entries.iter().map(|&(l, c)| l * c).sum()
    }

    pub fn largest(&self) -> usize {
        self.entries.iter().map(|&(l, _)| l).max().unwrap_or(0)
    }
}

impl Default for FleetSpec {
    fn default() -> Self {
        Self {
            entries: DEFAULT_FLEET.to_vec(),
        }
    }
}

impl FromStr for FleetSpec {
    type Err = ConfigError;

    /// Parse `"2:1,3:2,4:1,5:1"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut entries = Vec::new();
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let malformed = || ConfigError::Malformed {
                entry: entry.to_string(),
            };
            let (length, count) = entry.split_once(':').ok_or_else(malformed)?;
            let length: usize = length.trim().parse().map_err(|_| malformed())?;
            let count: usize = count.trim().parse().map_err(|_| malformed())?;
            entries.push((length, count));
        }
        Self::new(entries)
    }
}

impl fmt::Display for FleetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (length, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}:{}", length, count)?;
        }
        Ok(())
    }
}

/// Everything needed to set up one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub fleet: FleetSpec,
    /// Forbid vessels from touching orthogonally.
    pub enforce_spacing: bool,
    pub max_placement_attempts: usize,
    pub max_rejected_shots: usize,
}

impl GameConfig {
    /// Check dimensions and build an empty grid for one player.
    pub fn new_grid(&self) -> Result<Grid, ConfigError> {
        Grid::new(self.width, self.height, self.fleet.clone())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fleet: FleetSpec::default(),
            enforce_spacing: true,
            max_placement_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
            max_rejected_shots: DEFAULT_MAX_REJECTED_SHOTS,
        }
    }
}
