use thiserror::Error;

use crate::domain::GridError;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid grid: {0}")]
    Grid(#[from] GridError),

    #[error("Speed must be a positive number of generations per second, got {0}")]
    InvalidSpeed(f32),

    #[error("Fill ratio must lie in [0, 1], got {0}")]
    InvalidFillRatio(f64),
}

/// Simulation settings fixed at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub columns: usize,
    pub rows: usize,
    /// Generations per second while running
    pub updates_per_second: f32,
    /// Chance that a cell starts alive when randomizing
    pub fill_ratio: f64,
}

impl Config {
    pub fn with_size(mut self, columns: usize, rows: usize) -> Self {
        self.columns = columns;
        self.rows = rows;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(GridError::EmptyDimensions {
                width: self.columns,
                height: self.rows,
            }
            .into());
        }
        if !self.updates_per_second.is_finite() || self.updates_per_second <= 0.0 {
            return Err(ConfigError::InvalidSpeed(self.updates_per_second));
        }
        if !(0.0..=1.0).contains(&self.fill_ratio) {
            return Err(ConfigError::InvalidFillRatio(self.fill_ratio));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: 100,
            rows: 100,
            updates_per_second: 10.0,
            fill_ratio: 0.3,
        }
    }
}
