// config.rs - Construction-time settings shared by the engine and the shell

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{LifeError, Result};

/// Cells per side in the reference configuration.
pub const DEFAULT_GRID_SIZE: usize = 30;
/// Delay between advances while running.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Cells per row.
    pub grid_width: usize,
    /// Cells per column.
    pub grid_height: usize,
    /// Delay between advances while the simulation is running.
    pub tick_interval_ms: u64,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_SIZE,
            grid_height: DEFAULT_GRID_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl LifeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(LifeError::InvalidDimension {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(LifeError::InvalidTickInterval(self.tick_interval_ms));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
