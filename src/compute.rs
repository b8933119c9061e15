//! Game logic: level lifecycle and the per-tick simulation step.
//!
//! Every function takes the `GameState` by exclusive reference plus, where
//! randomness is needed, an injected RNG.  Callers control determinism by
//! seeding that RNG (tests use a seeded `StdRng`).

use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::difficulty::{
    adversary_move_interval, next_level_params, FOOD_AMMO, FOOD_SCORE, KILL_SCORE,
};
use crate::entities::{
    Bullet, CellKind, Direction, GameState, GameStatus, Intent, Stats, StepResult,
};
use crate::error::{GameError, PlacementError};
use crate::maze::{generate, random_lattice_start};
use crate::placement::{place, sample_free_cell};

// ── Level lifecycle ──────────────────────────────────────────────────────────

/// Build level 1 for a new run.
pub fn init_state(settings: &Settings, rng: &mut impl Rng) -> Result<GameState, GameError> {
    settings.validate()?;
    let stats = Stats::new(settings.width, settings.height, settings.lives);
    let state = build_level(stats, 0, rng)?;
    info!(
        level = state.stats.level,
        width = state.stats.width,
        height = state.stats.height,
        "level started"
    );
    Ok(state)
}

/// Regenerate the board after a completed level.  Score, level, lives and
/// the adversary clock carry over; board size follows the difficulty table;
/// bullets are dropped and ammo resets to the new level's baseline.
///
/// Does nothing unless the level is complete.
pub fn next_level(state: &mut GameState, rng: &mut impl Rng) -> Result<(), PlacementError> {
    if state.status != GameStatus::LevelComplete {
        return Ok(());
    }
    let (width, height) =
        next_level_params(state.stats.level, state.stats.width, state.stats.height);
    let stats = Stats {
        width,
        height,
        ..state.stats.clone()
    };
    *state = build_level(stats, state.adversary_clock, rng)?;
    info!(level = state.stats.level, width, height, "level started");
    Ok(())
}

fn build_level(
    mut stats: Stats,
    adversary_clock: u32,
    rng: &mut impl Rng,
) -> Result<GameState, PlacementError> {
    let start = random_lattice_start(stats.width, stats.height, rng);
    let grid = generate(stats.width, stats.height, start, rng);
    let placement = place(grid, stats.level, rng)?;
    stats.ammo = placement.ammo;

    Ok(GameState {
        grid: placement.grid,
        player: placement.player,
        exit: placement.exit,
        adversaries: placement.adversaries,
        bullets: Vec::new(),
        stats,
        status: GameStatus::Playing,
        adversary_clock,
    })
}

// ── Per-tick step ────────────────────────────────────────────────────────────

/// Advance the world by one tick with at most one intent.
///
/// Phases run in a fixed order: bullets, then the intent, then (every K-th
/// tick) adversaries.  Once the level is complete or the game is over the
/// call changes nothing and keeps reporting that outcome.
pub fn step(state: &mut GameState, intent: Option<Intent>, rng: &mut impl Rng) -> StepResult {
    if state.status != GameStatus::Playing {
        return outcome(state.status);
    }

    // ── 1. Bullets ───────────────────────────────────────────────────────────
    advance_bullets(state);

    // ── 2. Intent ────────────────────────────────────────────────────────────
    if let Some(intent) = intent {
        apply_intent(state, intent, rng);
        match state.status {
            GameStatus::Playing => {}
            // The exit tick still counts towards the interval, but nobody moves.
            GameStatus::LevelComplete => {
                state.adversary_clock += 1;
                return StepResult::LevelComplete;
            }
            GameStatus::GameOver => return StepResult::GameOver,
        }
    }

    // ── 3. Adversaries, on their interval ────────────────────────────────────
    state.adversary_clock += 1;
    if state.adversary_clock >= adversary_move_interval(state.stats.level) {
        state.adversary_clock = 0;
        move_adversaries(state, rng);
    }

    // ── 4. Outcome ───────────────────────────────────────────────────────────
    outcome(state.status)
}

fn outcome(status: GameStatus) -> StepResult {
    match status {
        GameStatus::Playing => StepResult::Continue,
        GameStatus::LevelComplete => StepResult::LevelComplete,
        GameStatus::GameOver => StepResult::GameOver,
    }
}

/// Move every bullet one cell along its direction, in list order.
///
/// A bullet leaving the board or hitting a wall disappears.  A bullet
/// entering an adversary's cell destroys it and disappears.  Food and the
/// exit do not stop bullets.
pub fn advance_bullets(state: &mut GameState) {
    let bullets = std::mem::take(&mut state.bullets);
    for bullet in bullets {
        let next = bullet.dir.step(bullet.pos);
        if !state.grid.is_open(next) {
            continue;
        }
        if let Some(hit) = state.adversary_at(next) {
            state.adversaries.remove(hit);
            state.stats.score += KILL_SCORE;
            debug!(at = ?next, score = state.stats.score, "adversary destroyed");
            continue;
        }
        state.bullets.push(Bullet { pos: next, ..bullet });
    }
}

pub fn apply_intent(state: &mut GameState, intent: Intent, rng: &mut impl Rng) {
    match intent.direction() {
        Some(dir) => move_player(state, dir, rng),
        None => shoot(state),
    }
}

/// Spend one round and fire from the cell ahead of the player.
///
/// The spawn cell is only bounds-checked: a bullet spawned inside a wall
/// is removed on its first advance.  Ammo is spent even when the cell ahead
/// is off the board.
pub fn shoot(state: &mut GameState) {
    if state.stats.ammo == 0 {
        return;
    }
    state.stats.ammo -= 1;

    let dir = state.player.facing;
    let pos = dir.step(state.player.pos);
    if state.grid.in_bounds(pos) {
        state.bullets.push(Bullet { pos, dir });
    }
}

/// Try to step the player one cell.  Walls and the board edge block the
/// move silently and leave the facing unchanged.
pub fn move_player(state: &mut GameState, dir: Direction, rng: &mut impl Rng) {
    let target = dir.step(state.player.pos);
    if !state.grid.is_open(target) {
        return;
    }
    state.player.facing = dir;

    if state.adversary_at(target).is_some() {
        player_hit(state, rng);
        return;
    }

    match state.grid.get(target) {
        Some(CellKind::Food) => {
            state.stats.score += FOOD_SCORE;
            state.stats.ammo += FOOD_AMMO;
            state.grid.set(target, CellKind::Path);
            state.player.pos = target;
            debug!(at = ?target, score = state.stats.score, ammo = state.stats.ammo, "food collected");
        }
        Some(CellKind::Exit) => {
            state.stats.level += 1;
            state.status = GameStatus::LevelComplete;
            info!(level = state.stats.level, score = state.stats.score, "exit reached");
        }
        _ => state.player.pos = target,
    }
}

/// Each adversary, in list order, tries one uniformly random step.
///
/// Only plain, unoccupied path cells are enterable.  Stepping at the player
/// costs a life but the adversary stays where it is.  Later adversaries see
/// the positions earlier ones moved to this same tick.
pub fn move_adversaries(state: &mut GameState, rng: &mut impl Rng) {
    for i in 0..state.adversaries.len() {
        let dir = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
        let target = dir.step(state.adversaries[i].pos);

        if !state.grid.is_kind(target, CellKind::Path) || state.adversary_at(target).is_some() {
            continue;
        }
        if target == state.player.pos {
            player_hit(state, rng);
            if state.status == GameStatus::GameOver {
                return;
            }
            continue;
        }
        state.adversaries[i].pos = target;
    }
}

/// Lose a life; on the last one the game ends, otherwise the player
/// reappears on a random free path cell (possibly the one just vacated).
fn player_hit(state: &mut GameState, rng: &mut impl Rng) {
    state.stats.lives = state.stats.lives.saturating_sub(1);
    if state.stats.lives == 0 {
        state.status = GameStatus::GameOver;
        info!(score = state.stats.score, level = state.stats.level, "game over");
        return;
    }

    let respawn = sample_free_cell(&state.grid, "player", rng, |pos| state.is_free_path(pos));
    match respawn {
        Ok(pos) => {
            debug!(from = ?state.player.pos, to = ?pos, lives = state.stats.lives, "player hit");
            state.player.pos = pos;
        }
        Err(err) => warn!(%err, "no respawn cell found; player stays put"),
    }
}
