// Target selection for automated players.
// Every strategy works only from an `ObservedView`; unfired occupancy is never
// visible here.

use alloc::vec::Vec;
use core::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::common::{step, Coord, DIRECTIONS};
use crate::view::{CellView, ObservedView};

/// Pick a uniformly random unexplored coordinate.
///
/// Returns `None` only if the view has nothing left to explore.
pub fn random_target<R: Rng + ?Sized>(view: &ObservedView, rng: &mut R) -> Option<Coord> {
    if view.count(CellView::Unexplored) == 0 {
        return None;
    }
    loop {
        let target = (
            rng.random_range(0..view.height()),
            rng.random_range(0..view.width()),
        );
        if view.is_unexplored(target) {
            return Some(target);
        }
    }
}

/// Directions worth walking from the first unresolved hit.
fn candidate_directions(hits: &[Coord]) -> &'static [(isize, isize)] {
    const ALONG_ROW: [(isize, isize); 2] = [(0, 1), (0, -1)];
    const ALONG_COLUMN: [(isize, isize); 2] = [(1, 0), (-1, 0)];
    match hits {
        [_] => &DIRECTIONS,
        [a, b, ..] if a.0 == b.0 => &ALONG_ROW,
        _ => &ALONG_COLUMN,
    }
}

/// Walk from `start` along `delta` until the edge or a miss/destroyed cell,
/// passing over hits. Returns the first unexplored cell met and how many
/// unexplored cells the walk covered.
fn walk(view: &ObservedView, start: Coord, delta: (isize, isize)) -> (Option<Coord>, usize) {
    let mut first = None;
    let mut count = 0;
    let mut cursor = Some(start);
    while let Some(coord) = cursor {
        match view.get(coord) {
            None | Some(CellView::Miss) | Some(CellView::Destroyed) => break,
            Some(CellView::Unexplored) => {
                first.get_or_insert(coord);
                count += 1;
            }
            Some(CellView::Hit) => {}
        }
        cursor = step(coord, delta);
    }
    (first, count)
}

/// Follow up on hit vessels that are not yet destroyed.
///
/// With one unresolved hit all four directions are walked; with more, the
/// first two hits fix the orientation. The walk with the most unexplored cells
/// wins, earlier directions winning ties. Without unresolved hits, or when
/// every walk is blocked, falls back to [`random_target`].
pub fn hunt_target<R: Rng + ?Sized>(view: &ObservedView, rng: &mut R) -> Option<Coord> {
    let hits: Vec<Coord> = view.coords_of(CellView::Hit).collect();
    let Some(&origin) = hits.first() else {
        return random_target(view, rng);
    };

    let mut best: Option<(Coord, usize)> = None;
    for &delta in candidate_directions(&hits) {
        if let (Some(target), count) = walk(view, origin, delta) {
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((target, count));
            }
        }
    }
    match best {
        Some((target, count)) => {
            log::trace!("hunting from {:?}: {:?} ({} open)", origin, target, count);
            Some(target)
        }
        None => random_target(view, rng),
    }
}

/// Probe the coordinate with the most open water around it.
///
/// Tries `size` from `largest_remaining` down to 1, scanning coordinates in a
/// random order. A coordinate is taken when all four clearances reach
/// `size / 2`, or when it sits on a border and both clearances along that
/// border reach `largest_remaining - 1`. Falls back to [`random_target`].
pub fn spacing_target<R: Rng + ?Sized>(
    view: &ObservedView,
    largest_remaining: usize,
    rng: &mut R,
) -> Option<Coord> {
    let edge_need = largest_remaining.saturating_sub(1);
    let last_row = view.height().saturating_sub(1);
    let last_col = view.width().saturating_sub(1);

    for size in (1..=largest_remaining).rev() {
        let mut rows: Vec<usize> = (0..view.height()).collect();
        rows.shuffle(&mut *rng);
        for &i in &rows {
            let mut cols: Vec<usize> = (0..view.width()).collect();
            cols.shuffle(&mut *rng);
            for &j in &cols {
                let coord = (i, j);
                if !view.is_unexplored(coord) {
                    continue;
                }
                let up = view.clearance(coord, (-1, 0));
                let down = view.clearance(coord, (1, 0));
                let right = view.clearance(coord, (0, 1));
                let left = view.clearance(coord, (0, -1));

                if [up, down, right, left].iter().all(|&x| x >= size / 2) {
                    log::trace!("spacing candidate {:?} for size {}", coord, size);
                    return Some(coord);
                }
                if (i == 0 || i == last_row) && right >= edge_need && left >= edge_need {
                    return Some(coord);
                }
                if (j == 0 || j == last_col) && up >= edge_need && down >= edge_need {
                    return Some(coord);
                }
            }
        }
    }
    random_target(view, rng)
}

/// The three automated targeting behaviours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Fire at random unexplored cells.
    Random,
    /// Finish off hit vessels, otherwise fire at random.
    HuntAndTarget,
    /// Finish off hit vessels, otherwise search for the largest survivor.
    Spacing,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Random, Strategy::HuntAndTarget, Strategy::Spacing];

    /// Choose the next coordinate to fire at.
    ///
    /// `largest_remaining` is the length of the opponent's largest surviving
    /// vessel; only [`Strategy::Spacing`] uses it.
    pub fn select<R: Rng + ?Sized>(
        self,
        view: &ObservedView,
        largest_remaining: Option<usize>,
        rng: &mut R,
    ) -> Option<Coord> {
        match self {
            Strategy::Random => random_target(view, rng),
            Strategy::HuntAndTarget => hunt_target(view, rng),
            Strategy::Spacing => {
                if view.count(CellView::Hit) > 0 {
                    return hunt_target(view, rng);
                }
                match largest_remaining {
                    Some(len) => spacing_target(view, len, rng),
                    None => random_target(view, rng),
                }
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::HuntAndTarget => "hunt",
            Strategy::Spacing => "spacing",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
