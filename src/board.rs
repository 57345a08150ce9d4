//! Grid state: cells, placed vessels, placement legality and firing.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{step, ConfigError, Coord, FireOutcome, PlacementError, DIRECTIONS};
use crate::config::FleetSpec;
use crate::ship::{is_straight_line, Vessel};
use crate::view::{CellView, ObservedView};

/// Smallest addressable unit of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    col: usize,
    occupied: bool,
    fired_upon: bool,
}

impl Cell {
    fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            occupied: false,
            fired_upon: false,
        }
    }

    pub fn coord(&self) -> Coord {
        (self.row, self.col)
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    pub fn is_fired_upon(&self) -> bool {
        self.fired_upon
    }

    pub fn is_hit(&self) -> bool {
        self.occupied && self.fired_upon
    }

    pub fn is_miss(&self) -> bool {
        !self.occupied && self.fired_upon
    }
}

/// One player's board: a `height × width` array of cells plus the vessels
/// placed on it.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    fleet: FleetSpec,
    cells: Vec<Cell>,
    vessels: Vec<Vessel>,
}

impl Grid {
    /// Create an empty grid that will hold `fleet`.
    pub fn new(width: usize, height: usize, fleet: FleetSpec) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroDimension { width, height });
        }
        if width.checked_mul(height).is_none() {
            return Err(ConfigError::TooLarge { width, height });
        }
        let cells = (0..height)
            .flat_map(|r| (0..width).map(move |c| Cell::new(r, c)))
            .collect();
        Ok(Self {
            width,
            height,
            fleet,
            cells,
            vessels: Vec::new(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn fleet(&self) -> &FleetSpec {
        &self.fleet
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    pub fn in_bounds(&self, (row, col): Coord) -> bool {
        row < self.height && col < self.width
    }

    fn index(&self, (row, col): Coord) -> Option<usize> {
        self.in_bounds((row, col)).then(|| row * self.width + col)
    }

    /// Cell at `coord`, or `None` outside the grid.
    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.index(coord).map(|i| &self.cells[i])
    }

    fn occupied(&self, coord: Coord) -> bool {
        self.cell(coord).is_some_and(Cell::is_occupied)
    }

    /// Index of the vessel covering `coord`, if any.
    pub fn vessel_at(&self, coord: Coord) -> Option<usize> {
        self.vessels.iter().position(|v| v.contains(coord))
    }

    /// Number of vessels of `length` placed so far.
    pub fn placed_count(&self, length: usize) -> usize {
        self.vessels.iter().filter(|v| v.length() == length).count()
    }

    /// Returns `true` once every vessel of the fleet has been placed.
    pub fn is_fleet_complete(&self) -> bool {
        self.fleet
            .iter()
            .all(|(length, count)| self.placed_count(length) == count)
    }

    /// Every coordinate in bounds and unoccupied.
    pub fn is_legal(&self, footprint: &[Coord]) -> bool {
        footprint
            .iter()
            .all(|&c| self.in_bounds(c) && !self.occupied(c))
    }

    /// Any orthogonal neighbour of the footprint already occupied.
    pub fn violates_adjacency(&self, footprint: &[Coord]) -> bool {
        footprint.iter().any(|&c| {
            DIRECTIONS
                .iter()
                .filter_map(|&d| step(c, d))
                .any(|n| self.occupied(n))
        })
    }

    /// First reason `footprint` cannot be placed, if any.
    pub fn check_placement(
        &self,
        footprint: &[Coord],
        enforce_spacing: bool,
    ) -> Result<(), PlacementError> {
        if !is_straight_line(footprint) {
            return Err(PlacementError::InvalidShape);
        }
        for &coord in footprint {
            if !self.in_bounds(coord) {
                return Err(PlacementError::OutOfRange { coord });
            }
            if self.occupied(coord) {
                return Err(PlacementError::Overlap { coord });
            }
        }
        if enforce_spacing && self.violates_adjacency(footprint) {
            return Err(PlacementError::AdjacencyViolation);
        }
        let length = footprint.len();
        if self.placed_count(length) >= self.fleet.count_of(length) {
            return Err(PlacementError::FleetExceeded { length });
        }
        Ok(())
    }

    /// Place a vessel on `footprint`, returning its index.
    ///
    /// The footprint must be legal; the spacing rule is the caller's concern.
    /// On error nothing is changed.
    pub fn place(&mut self, footprint: &[Coord]) -> Result<usize, PlacementError> {
        self.check_placement(footprint, false)?;
        for &coord in footprint {
            if let Some(i) = self.index(coord) {
                self.cells[i].occupied = true;
            }
        }
        self.vessels.push(Vessel::new(footprint.to_vec()));
        log::debug!(
            "placed vessel of length {} at {:?}",
            footprint.len(),
            footprint.first()
        );
        Ok(self.vessels.len() - 1)
    }

    /// Fire at `(row, col)`.
    ///
    /// This is the only mutation after setup. Out-of-range and repeated shots
    /// change nothing.
    pub fn fire(&mut self, row: usize, col: usize) -> FireOutcome {
        let Some(i) = self.index((row, col)) else {
            return FireOutcome::OutOfRange;
        };
        if self.cells[i].fired_upon {
            return FireOutcome::AlreadyFired;
        }
        self.cells[i].fired_upon = true;
        if !self.cells[i].occupied {
            return FireOutcome::Miss;
        }
        let width = self.width;
        let cells = &self.cells;
        if let Some(vessel) = self.vessels.iter_mut().find(|v| v.contains((row, col))) {
            vessel.refresh(|(r, c)| cells[r * width + c].fired_upon);
        }
        FireOutcome::Hit
    }

    /// Returns `true` when every placed vessel is destroyed.
    pub fn all_destroyed(&self) -> bool {
        self.vessels.iter().all(Vessel::is_destroyed)
    }

    /// Length of the largest vessel not yet destroyed.
    pub fn largest_surviving_length(&self) -> Option<usize> {
        self.vessels
            .iter()
            .filter(|v| !v.is_destroyed())
            .map(Vessel::length)
            .max()
    }

    /// Number of vessels not yet destroyed.
    pub fn surviving_count(&self) -> usize {
        self.vessels.iter().filter(|v| !v.is_destroyed()).count()
    }

    fn classify(&self, cell: &Cell) -> CellView {
        if !cell.fired_upon {
            CellView::Unexplored
        } else if !cell.occupied {
            CellView::Miss
        } else if self
            .vessel_at(cell.coord())
            .is_some_and(|v| self.vessels[v].is_destroyed())
        {
            CellView::Destroyed
        } else {
            CellView::Hit
        }
    }

    /// What an opponent can see of this grid.
    pub fn observed_view(&self) -> ObservedView {
        let cells = self.cells.iter().map(|c| self.classify(c)).collect();
        ObservedView::from_cells(self.width, self.height, cells)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{} {{", self.width, self.height)?;
        for row in self.cells.chunks(self.width) {
            write!(f, "  ")?;
            for cell in row {
                let ch = match (cell.occupied, cell.fired_upon) {
                    (true, true) => 'X',
                    (true, false) => 'S',
                    (false, true) => 'o',
                    (false, false) => '.',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "  vessels: {:?}\n}}", self.vessels)
    }
}
