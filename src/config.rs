//! Run settings.  Defaults mirror the classic game: a 15 × 11 board,
//! three lives and a 50 ms tick.
use crate::entities::STARTING_LIVES;
use crate::error::ConfigError;

pub const DEFAULT_WIDTH: i32 = 15;
pub const DEFAULT_HEIGHT: i32 = 11;
pub const DEFAULT_TICK_MS: u64 = 50;

/// Smallest board that still has a 2 × 2 lattice of rooms.
pub const MIN_DIMENSION: i32 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub width: i32,
    pub height: i32,
    pub lives: u32,
    /// Fixed seed for a reproducible run; `None` picks one at random.
    pub seed: Option<u64>,
    pub tick_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            lives: STARTING_LIVES,
            seed: None,
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

impl Settings {
    /// Dimensions must be odd so the room lattice lands on odd coordinates
    /// with a wall border on every side.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimension("width", self.width)?;
        check_dimension("height", self.height)?;
        if self.tick_ms == 0 {
            return Err(ConfigError::InvalidTickInterval);
        }
        if self.lives == 0 {
            return Err(ConfigError::InvalidLives);
        }
        Ok(())
    }
}

fn check_dimension(axis: &'static str, value: i32) -> Result<(), ConfigError> {
    if value < MIN_DIMENSION || value % 2 == 0 {
        return Err(ConfigError::InvalidDimension {
            axis,
            value,
            min: MIN_DIMENSION,
        });
    }
    Ok(())
}
