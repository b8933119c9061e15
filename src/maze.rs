//! Maze generation.
//!
//! Rooms sit on odd coordinates two cells apart.  Starting from one room, a
//! stack of active rooms is drained; each popped room looks at its four
//! neighbours two cells away in shuffled order and claims every one that is
//! still solid wall, knocking out the wall cell in between.  A room is only
//! ever claimed once, so the passages form a spanning tree: the maze is fully
//! connected and has no loops.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::entities::{CellKind, Direction, Grid, Position};

/// One carve: the room it came from, the knocked-out wall, and the new room.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Passage {
    pub from: Position,
    pub wall: Position,
    pub to: Position,
}

/// Generate a `width` × `height` maze grown from `start`, which must be an
/// odd lattice coordinate inside the grid.
pub fn generate(width: i32, height: i32, start: Position, rng: &mut impl Rng) -> Grid {
    generate_traced(width, height, start, rng).0
}

/// Like `generate`, but also returns every passage in the order it was carved.
pub fn generate_traced(
    width: i32,
    height: i32,
    start: Position,
    rng: &mut impl Rng,
) -> (Grid, Vec<Passage>) {
    debug_assert!(
        start.row % 2 == 1 && start.col % 2 == 1,
        "maze start {start:?} is not on the room lattice"
    );

    let mut grid = Grid::filled(width, height);
    let mut passages = Vec::new();
    let mut active = vec![start];
    grid.set(start, CellKind::Path);

    while let Some(room) = active.pop() {
        let mut order = Direction::ALL;
        order.shuffle(rng);

        for dir in order {
            let (dr, dc) = dir.delta();
            let next = Position::new(room.row + 2 * dr, room.col + 2 * dc);
            if !grid.is_kind(next, CellKind::Wall) {
                continue;
            }
            let wall = dir.step(room);
            grid.set(wall, CellKind::Path);
            grid.set(next, CellKind::Path);
            passages.push(Passage { from: room, wall, to: next });
            active.push(next);
        }
    }

    trace!(width, height, ?start, carved = passages.len(), "maze generated");
    (grid, passages)
}

/// Pick a random room to grow the maze from.  Both coordinates are forced odd.
pub fn random_lattice_start(width: i32, height: i32, rng: &mut impl Rng) -> Position {
    let row = rng.gen_range(1..=(height - 2).max(1)) | 1;
    let col = rng.gen_range(1..=(width - 2).max(1)) | 1;
    Position::new(row, col)
}
