//! Maze Runner: a tick-driven maze shooter.
//!
//! The library holds every piece of game logic; the binary only polls keys,
//! paces ticks and draws frames.

pub mod compute;
pub mod config;
pub mod difficulty;
pub mod entities;
pub mod error;
pub mod maze;
pub mod placement;
