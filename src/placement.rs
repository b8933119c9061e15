//! Seeding a freshly generated maze with the player, the exit, adversaries
//! and food.
//!
//! Random placement is rejection sampling over interior cells, but it is
//! always bounded: a request larger than the number of free cells fails up
//! front, and the sampler itself gives up after `MAX_SAMPLE_ATTEMPTS` draws.

use rand::Rng;
use tracing::debug;

use crate::difficulty::{adversary_count, ammo_baseline, food_count};
use crate::entities::{Adversary, CellKind, Direction, Grid, Player, Position};
use crate::error::PlacementError;

pub const MAX_SAMPLE_ATTEMPTS: u32 = 10_000;

/// Where the player starts when that cell is open.
pub const PLAYER_START: Position = Position::new(1, 1);

/// How much to put on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementCounts {
    pub adversaries: usize,
    pub food: usize,
    pub ammo: u32,
}

impl PlacementCounts {
    pub fn for_level(level: u32, width: i32, height: i32) -> Self {
        Self {
            adversaries: adversary_count(level, width, height),
            food: food_count(level, width, height),
            ammo: ammo_baseline(level),
        }
    }
}

/// A populated level.  Food and the exit are baked into `grid`; `food` lists
/// the same cells for convenience.
#[derive(Clone, Debug)]
pub struct Placement {
    pub grid: Grid,
    pub player: Player,
    pub exit: Position,
    pub adversaries: Vec<Adversary>,
    pub food: Vec<Position>,
    pub ammo: u32,
}

/// Populate `grid` with the counts `level` calls for.
pub fn place(grid: Grid, level: u32, rng: &mut impl Rng) -> Result<Placement, PlacementError> {
    let counts = PlacementCounts::for_level(level, grid.width(), grid.height());
    place_with(grid, counts, rng)
}

pub fn place_with(
    mut grid: Grid,
    counts: PlacementCounts,
    rng: &mut impl Rng,
) -> Result<Placement, PlacementError> {
    let player_pos = find_player_start(&grid).ok_or(PlacementError::InsufficientSpace {
        entity: "player",
        requested: 1,
        available: 0,
    })?;
    let exit = find_exit(&grid, player_pos).ok_or(PlacementError::InsufficientSpace {
        entity: "exit",
        requested: 1,
        available: 0,
    })?;
    grid.set(exit, CellKind::Exit);

    let adversary_cells = scatter(&grid, "adversaries", counts.adversaries, &[player_pos], rng)?;

    let mut taken = adversary_cells.clone();
    taken.push(player_pos);
    let food = scatter(&grid, "food", counts.food, &taken, rng)?;
    for &pos in &food {
        grid.set(pos, CellKind::Food);
    }

    debug!(
        ?player_pos,
        ?exit,
        adversaries = adversary_cells.len(),
        food = food.len(),
        "level placed"
    );

    Ok(Placement {
        grid,
        player: Player {
            pos: player_pos,
            facing: Direction::Right,
        },
        exit,
        adversaries: adversary_cells.into_iter().map(|pos| Adversary { pos }).collect(),
        food,
        ammo: counts.ammo,
    })
}

// ── Fixed positions ───────────────────────────────────────────────────────────

/// `PLAYER_START` when open, otherwise the first path cell in row-major order.
pub fn find_player_start(grid: &Grid) -> Option<Position> {
    if grid.is_kind(PLAYER_START, CellKind::Path) {
        return Some(PLAYER_START);
    }
    grid.cells()
        .find(|&(_, kind)| kind == CellKind::Path)
        .map(|(pos, _)| pos)
}

/// Prefer the bottom-right quadrant, scanning from the far corner inwards;
/// fall back to the first interior path cell that is not the player's.
pub fn find_exit(grid: &Grid, player: Position) -> Option<Position> {
    let (w, h) = (grid.width(), grid.height());
    let usable = |pos: Position| pos != player && grid.is_kind(pos, CellKind::Path);

    let quadrant = ((h / 2 + 1)..=(h - 2))
        .rev()
        .flat_map(|row| ((w / 2 + 1)..=(w - 2)).rev().map(move |col| Position::new(row, col)));

    quadrant
        .chain(interior(grid))
        .find(|&pos| usable(pos))
}

// ── Rejection sampling ────────────────────────────────────────────────────────

/// Every cell off the outer border, row-major.
pub fn interior(grid: &Grid) -> impl Iterator<Item = Position> {
    let (w, h) = (grid.width(), grid.height());
    (1..h - 1).flat_map(move |row| (1..w - 1).map(move |col| Position::new(row, col)))
}

/// Draw random interior cells until `is_free` accepts one.
pub fn sample_free_cell(
    grid: &Grid,
    entity: &'static str,
    rng: &mut impl Rng,
    is_free: impl Fn(Position) -> bool,
) -> Result<Position, PlacementError> {
    let (w, h) = (grid.width(), grid.height());
    if w < 3 || h < 3 {
        return Err(PlacementError::AttemptsExhausted { entity, attempts: 0 });
    }
    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        let pos = Position::new(rng.gen_range(1..=h - 2), rng.gen_range(1..=w - 2));
        if is_free(pos) {
            return Ok(pos);
        }
    }
    Err(PlacementError::AttemptsExhausted {
        entity,
        attempts: MAX_SAMPLE_ATTEMPTS,
    })
}

/// Pick `count` distinct path cells avoiding `taken`.
fn scatter(
    grid: &Grid,
    entity: &'static str,
    count: usize,
    taken: &[Position],
    rng: &mut impl Rng,
) -> Result<Vec<Position>, PlacementError> {
    let open = |pos: Position| grid.is_kind(pos, CellKind::Path) && !taken.contains(&pos);

    let available = interior(grid).filter(|&pos| open(pos)).count();
    if count > available {
        return Err(PlacementError::InsufficientSpace {
            entity,
            requested: count,
            available,
        });
    }

    let mut placed: Vec<Position> = Vec::with_capacity(count);
    while placed.len() < count {
        let pos = sample_free_cell(grid, entity, rng, |pos| open(pos) && !placed.contains(&pos))?;
        placed.push(pos);
    }
    Ok(placed)
}
