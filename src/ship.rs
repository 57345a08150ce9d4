//! Vessel definitions and footprint geometry.

use alloc::vec::Vec;
use core::fmt;

use crate::common::Coord;

/// Orientation of a vessel on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends along the column axis; all rows equal.
    Horizontal,
    /// Extends along the row axis; all columns equal.
    Vertical,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Coordinates a vessel of `length` would occupy starting at `top_left`.
///
/// No bounds checking is done; the grid decides whether the result is legal.
/// Coordinates saturate at `usize::MAX`, which no grid contains.
pub fn compute_footprint(length: usize, top_left: Coord, orientation: Orientation) -> Vec<Coord> {
    let (row, col) = top_left;
    (0..length)
        .map(|i| match orientation {
            Orientation::Horizontal => (row, col.saturating_add(i)),
            Orientation::Vertical => (row.saturating_add(i), col),
        })
        .collect()
}

/// Returns `true` if `footprint` is a non-empty straight run of adjacent cells
/// in a single orientation, listed in order.
pub fn is_straight_line(footprint: &[Coord]) -> bool {
    let Some(&first) = footprint.first() else {
        return false;
    };
    if footprint.len() == 1 {
        return true;
    }
    let orientation = if footprint[1].0 == first.0 {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    footprint == compute_footprint(footprint.len(), first, orientation).as_slice()
}

/// A vessel placed on a grid.
///
/// It stores only the coordinates it covers; cell state lives in the owning
/// grid, and `destroyed` is a cache refreshed by the grid whenever one of the
/// vessel's cells is hit.
#[derive(Clone, PartialEq, Eq)]
pub struct Vessel {
    cells: Vec<Coord>,
    destroyed: bool,
}

impl Vessel {
    pub(crate) fn new(cells: Vec<Coord>) -> Self {
        Self {
            cells,
            destroyed: false,
        }
    }

    /// Number of cells covered.
    pub fn length(&self) -> usize {
        self.cells.len()
    }

    /// Covered coordinates, in footprint order.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    pub fn orientation(&self) -> Orientation {
        match self.cells.as_slice() {
            [a, b, ..] if a.0 != b.0 => Orientation::Vertical,
            _ => Orientation::Horizontal,
        }
    }

    /// `true` once every covered cell has been fired upon.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Recompute `destroyed` from the fired state of each covered cell.
    pub(crate) fn refresh<F>(&mut self, fired_upon: F)
    where
        F: Fn(Coord) -> bool,
    {
        self.destroyed = self.cells.iter().all(|&c| fired_upon(c));
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ length: {}, origin: {:?}, orientation: {:?}, destroyed: {} }}",
            self.length(),
            self.cells.first(),
            self.orientation(),
            self.destroyed,
        )
    }
}
