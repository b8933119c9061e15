//! Difficulty tables: pure functions of the level number and board size.
//!
//! Nothing here is carried between levels: every count is recomputed from
//! scratch at each placement.

/// Board dimensions stop growing once the width reaches this value.
pub const MAX_GROWTH_WIDTH: i32 = 30;

pub const FOOD_SCORE: u32 = 10;
pub const FOOD_AMMO: u32 = 2;
pub const KILL_SCORE: u32 = 15;

/// Board size for `level` (the level about to be played).  Grows by two in
/// each direction on every third level while the board is still narrow.
pub fn next_level_params(level: u32, width: i32, height: i32) -> (i32, i32) {
    if level % 3 == 0 && width < MAX_GROWTH_WIDTH {
        (width + 2, height + 2)
    } else {
        (width, height)
    }
}

pub fn adversary_count(level: u32, width: i32, height: i32) -> usize {
    (2 + level as usize).min(area(width, height) / 10)
}

pub fn food_count(level: u32, width: i32, height: i32) -> usize {
    (5 + level as usize).min(area(width, height) / 8)
}

/// Ammo handed out at the start of a level.  Leftovers are discarded.
pub fn ammo_baseline(level: u32) -> u32 {
    5 + level
}

/// Adversaries move once every this many ticks.
pub fn adversary_move_interval(level: u32) -> u32 {
    10u32.saturating_sub(level / 2).max(5)
}

fn area(width: i32, height: i32) -> usize {
    (width.max(0) * height.max(0)) as usize
}
