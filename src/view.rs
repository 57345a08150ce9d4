//! The opponent's-eye view of a grid, as consumed by targeting and rendering.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{step, Coord};

/// Classification of a single cell as seen by the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    /// Never fired upon.
    Unexplored,
    /// Fired upon, open water.
    Miss,
    /// Fired upon, part of a vessel that is still afloat.
    Hit,
    /// Fired upon, part of a destroyed vessel.
    Destroyed,
}

impl CellView {
    pub fn symbol(self) -> char {
        match self {
            CellView::Unexplored => '.',
            CellView::Miss => 'o',
            CellView::Hit => 'X',
            CellView::Destroyed => '#',
        }
    }

    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(CellView::Unexplored),
            'o' => Some(CellView::Miss),
            'X' => Some(CellView::Hit),
            '#' => Some(CellView::Destroyed),
            _ => None,
        }
    }
}

/// Read-only, row-major snapshot of cell classifications.
#[derive(Clone, PartialEq, Eq)]
pub struct ObservedView {
    width: usize,
    height: usize,
    cells: Vec<CellView>,
}

impl ObservedView {
    /// A view where nothing has been explored yet.
    pub fn unexplored(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellView::Unexplored; width * height],
        }
    }

    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<CellView>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    /// Build a view from text rows using `.`, `o`, `X` and `#`.
    ///
    /// Returns `None` for ragged rows or unknown symbols.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.chars().count();
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            if row.chars().count() != width {
                return None;
            }
            for ch in row.chars() {
                cells.push(CellView::from_symbol(ch)?);
            }
        }
        Some(Self::from_cells(width, height, cells))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, (row, col): Coord) -> bool {
        row < self.height && col < self.width
    }

    /// Classification at `coord`, or `None` outside the grid.
    pub fn get(&self, coord: Coord) -> Option<CellView> {
        self.in_bounds(coord)
            .then(|| self.cells[coord.0 * self.width + coord.1])
    }

    pub fn is_unexplored(&self, coord: Coord) -> bool {
        self.get(coord) == Some(CellView::Unexplored)
    }

    /// Coordinates with the given classification, in row-major order.
    pub fn coords_of(&self, state: CellView) -> impl Iterator<Item = Coord> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &c)| c == state)
            .map(move |(i, _)| (i / width, i % width))
    }

    pub fn count(&self, state: CellView) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Consecutive unexplored cells starting one step from `from` in
    /// direction `delta`, stopping at the edge or the first explored cell.
    pub fn clearance(&self, from: Coord, delta: (isize, isize)) -> usize {
        let mut count = 0;
        let mut cursor = from;
        while let Some(next) = step(cursor, delta).filter(|&c| self.is_unexplored(c)) {
            count += 1;
            cursor = next;
        }
        count
    }
}

impl fmt::Debug for ObservedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ObservedView {}x{}:", self.width, self.height)?;
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for ObservedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.width.max(1)).enumerate() {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            if r + 1 < self.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
