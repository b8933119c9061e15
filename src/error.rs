//! Error types.  Illegal moves are silent no-ops and game over is a normal
//! status, so the only failures are bad settings and a level that cannot
//! hold what it was asked to hold.
use thiserror::Error;

/// Placement could not finish.  Returned instead of retrying forever.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("not enough free cells for {entity}: requested {requested}, available {available}")]
    InsufficientSpace {
        entity: &'static str,
        requested: usize,
        available: usize,
    },

    #[error("gave up placing {entity} after {attempts} attempts")]
    AttemptsExhausted { entity: &'static str, attempts: u32 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{axis} must be an odd number of at least {min}, got {value}")]
    InvalidDimension {
        axis: &'static str,
        value: i32,
        min: i32,
    },

    #[error("tick interval must be greater than zero")]
    InvalidTickInterval,

    #[error("starting lives must be greater than zero")]
    InvalidLives,
}

#[derive(Error, Debug)]
pub enum GameError {
    #[error("placement failed: {0}")]
    PlacementFailed(#[from] PlacementError),

    #[error("invalid settings: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
