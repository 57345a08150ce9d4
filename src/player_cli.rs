#![cfg(feature = "std")]

use std::fmt::Write as _;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::{
    ai::Strategy,
    board::Grid,
    common::{Coord, FireOutcome, PlacementError},
    config::{GameConfig, DEFAULT_MAX_REJECTED_SHOTS},
    game::ShotReport,
    placement,
    player::{Nature, Player},
    ship::{compute_footprint, Orientation},
    view::ObservedView,
};
use rand::rngs::SmallRng;

/// Human player reading commands from `input` and writing prompts to `output`.
pub struct CliPlayer<R, W> {
    name: String,
    input: R,
    output: W,
    max_prompts: usize,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player on the process's stdin/stdout.
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
            max_prompts: DEFAULT_MAX_REJECTED_SHOTS,
        }
    }

    /// Limit how many unusable target lines are read before the suggested
    /// target is taken instead.
    pub fn with_max_prompts(mut self, max_prompts: usize) -> Self {
        self.max_prompts = max_prompts;
        self
    }

    /// Give back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: &str) {
        if let Err(e) = writeln!(self.output, "{}", text).and_then(|()| self.output.flush()) {
            log::warn!("{}: cannot write to terminal: {}", self.name, e);
        }
    }

    fn prompt(&mut self, text: &str) -> Option<String> {
        if let Err(e) = write!(self.output, "{}", text).and_then(|()| self.output.flush()) {
            log::warn!("{}: cannot write prompt: {}", self.name, e);
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                log::warn!("{}: cannot read input: {}", self.name, e);
                None
            }
        }
    }
}

/// Spreadsheet-style column label: `A`..`Z`, then `AA`, `AB`, ...
pub fn column_label(col: usize) -> String {
    let mut letters = Vec::new();
    let mut n = col;
    loop {
        letters.push((b'A' + (n % 26) as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    letters.iter().rev().collect()
}

/// Column index of a label like `A` or `AB` (case-insensitive).
fn parse_column(letters: &str) -> Option<usize> {
    letters
        .chars()
        .try_fold(0usize, |acc, ch| {
            let digit = (ch.to_ascii_uppercase() as usize).checked_sub('A' as usize)? + 1;
            acc.checked_mul(26)?.checked_add(digit)
        })
        .and_then(|n| n.checked_sub(1))
}

pub fn coord_to_string((r, c): Coord) -> String {
    format!("{}{}", column_label(c), r.saturating_add(1))
}

/// Parse a coordinate like `A5` or `AB12` (column letters, 1-based row).
///
/// Only the syntax is checked: whether it lies on the grid is for the grid to
/// decide.
pub fn parse_coord(input: &str) -> Result<Coord, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let split = input
        .find(|ch: char| !ch.is_ascii_alphabetic())
        .unwrap_or(input.len());
    let (letters, row_str) = input.split_at(split);
    if letters.is_empty() {
        let first = input.chars().next().unwrap_or(' ');
        return Err(format!("Invalid column '{}' - must be a letter", first));
    }
    let col = parse_column(letters)
        .ok_or_else(|| format!("Column '{}' is too far right", letters))?;
    if row_str.is_empty() {
        return Err("Too short - need column letters and row number (e.g., A5)".to_string());
    }
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number", row_str))?;
    if row == 0 {
        return Err("Row cannot be 0 - rows start at 1".to_string());
    }
    Ok((row - 1, col))
}

/// Parse a placement like `A5 H` or `B3 V`; orientation defaults to horizontal.
pub fn parse_placement(input: &str) -> Result<(Coord, Orientation), String> {
    let mut parts = input.split_whitespace();
    let coord = parse_coord(parts.next().unwrap_or(""))?;
    let orientation = match parts.next().map(|s| s.to_ascii_uppercase()) {
        None => Orientation::Horizontal,
        Some(s) if s == "H" => Orientation::Horizontal,
        Some(s) if s == "V" => Orientation::Vertical,
        Some(s) => return Err(format!("Invalid orientation '{}' - use H or V", s)),
    };
    if parts.next().is_some() {
        return Err("Too many fields - expected e.g. A5 H".to_string());
    }
    Ok((coord, orientation))
}

fn label_width(width: usize) -> usize {
    column_label(width.saturating_sub(1)).len()
}

fn column_header(out: &mut String, width: usize) {
    let w = label_width(width);
    out.push_str("   ");
    for c in 0..width {
        let _ = write!(out, " {:>w$}", column_label(c), w = w);
    }
    out.push('\n');
}

/// Text rendering of an observed view.
pub fn render_view(view: &ObservedView) -> String {
    let w = label_width(view.width());
    let mut out = String::new();
    column_header(&mut out, view.width());
    for r in 0..view.height() {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..view.width() {
            let ch = view.get((r, c)).map_or(' ', |v| v.symbol());
            let _ = write!(out, " {:>w$}", ch, w = w);
        }
        out.push('\n');
    }
    out.push_str("    Legend: X=Hit  #=Sunk  o=Miss  .=Unknown\n");
    out
}

/// Text rendering of a player's own grid, vessels revealed.
pub fn render_own_grid(grid: &Grid) -> String {
    let view = grid.observed_view();
    let w = label_width(grid.width());
    let mut out = String::new();
    column_header(&mut out, grid.width());
    for r in 0..grid.height() {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..grid.width() {
            let ch = match grid.cell((r, c)) {
                Some(cell) if cell.is_occupied() && !cell.is_fired_upon() => 'S',
                _ => view.get((r, c)).map_or(' ', |v| v.symbol()),
            };
            let _ = write!(out, " {:>w$}", ch, w = w);
        }
        out.push('\n');
    }
    out.push_str("    Legend: S=Vessel  X=Hit  #=Sunk  o=Miss  .=Water\n");
    out
}

/// Display the opponent board (top) and the player's own board (bottom).
pub fn print_player_view(own: &Grid, opponent: &ObservedView) {
    std::println!("Opponent board:");
    std::print!("{}", render_view(opponent));
    std::println!("\nYour board:");
    std::print!("{}", render_own_grid(own));
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn nature(&self) -> Nature {
        Nature::Human
    }

    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        grid: &mut Grid,
        config: &GameConfig,
    ) -> Result<(), PlacementError> {
        placement::check_capacity(grid)?;
        self.say("Enter placements as <COLUMN><ROW> <H|V> (e.g. A5 H); ENTER for random.");
        let fleet = grid.fleet().clone();
        for (length, count) in fleet.iter() {
            for _ in 0..count {
                let board = render_own_grid(grid);
                self.say(&board);
                let mut placed = false;
                for _ in 0..config.max_rejected_shots {
                    let Some(line) = self.prompt(&format!("Vessel of length {}: ", length)) else {
                        break;
                    };
                    if line.is_empty() {
                        break;
                    }
                    let (top_left, orientation) = match parse_placement(&line) {
                        Ok(p) => p,
                        Err(e) => {
                            self.say(&format!("✗ Error: {}", e));
                            continue;
                        }
                    };
                    let footprint = compute_footprint(length, top_left, orientation);
                    match grid.check_placement(&footprint, config.enforce_spacing) {
                        Ok(()) => {
                            grid.place(&footprint)?;
                            placed = true;
                            break;
                        }
                        Err(e) => {
                            log::warn!("{} placement {:?} refused: {}", self.name, line, e);
                            self.say(&format!("✗ Error: {}", e));
                        }
                    }
                }
                if !placed {
                    let footprint = placement::place_randomly(
                        grid,
                        length,
                        config.enforce_spacing,
                        config.max_placement_attempts,
                        rng,
                    )?;
                    self.say(&format!(
                        "✓ Vessel of length {} randomly placed at {}",
                        length,
                        coord_to_string(footprint[0])
                    ));
                }
            }
        }
        self.say("✓ All vessels placed! Ready to begin battle.");
        Ok(())
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        view: &ObservedView,
        largest_remaining: Option<usize>,
    ) -> Option<Coord> {
        let board = render_view(view);
        self.say(&board);
        let suggestion = Strategy::Spacing.select(view, largest_remaining, rng);
        let hint = suggestion.map_or_else(|| "-".to_string(), coord_to_string);
        for _ in 0..self.max_prompts {
            let line = self.prompt(&format!("Enter target [suggestion: {}]: ", hint))?;
            if line.is_empty() {
                if suggestion.is_some() {
                    return suggestion;
                }
                continue;
            }
            match parse_coord(&line) {
                Ok(coord) => return Some(coord),
                Err(e) => {
                    log::warn!("{} entered unparsable target {:?}", self.name, line);
                    self.say(&format!("✗ Invalid coordinate: {}", e));
                }
            }
        }
        log::warn!(
            "{} gave {} unusable targets, taking the suggestion",
            self.name,
            self.max_prompts
        );
        self.say(&format!("Firing at the suggested target {}.", hint));
        suggestion
    }

    fn handle_shot_result(&mut self, report: &ShotReport) {
        let at = coord_to_string(report.coord);
        let text = match (report.outcome, report.destroyed) {
            (_, Some(length)) => format!(
                "💥 SUNK! Your shot at {} destroyed a vessel of length {}!",
                at, length
            ),
            (FireOutcome::Hit, None) => format!("🎯 HIT at {}!", at),
            _ => format!("💧 Miss at {}.", at),
        };
        self.say(&text);
    }

    fn handle_opponent_shot(&mut self, report: &ShotReport) {
        let at = coord_to_string(report.coord);
        let text = match (report.outcome, report.destroyed) {
            (_, Some(length)) => {
                format!("💀 Enemy destroyed your vessel of length {} at {}", length, at)
            }
            (FireOutcome::Hit, None) => format!("⚠️  Enemy hit your vessel at {}", at),
            _ => format!("✓ Enemy missed at {}", at),
        };
        self.say(&text);
    }

    fn handle_rejected_target(&mut self, coord: Coord, outcome: FireOutcome) {
        let at = coord_to_string(coord);
        let text = match outcome {
            FireOutcome::AlreadyFired => {
                format!("✗ You already fired at {}! Choose another target.", at)
            }
            _ => format!("✗ {} is off the board! Choose another target.", at),
        };
        self.say(&text);
    }
}
