// error.rs - Error taxonomy for the engine and the run controller

use thiserror::Error;

use crate::controller::RunState;

/// Errors returned by grid and controller operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifeError {
    /// Grid constructed with a zero width or height.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// Coordinate outside the grid extents.
    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfBounds {
        row: isize,
        col: isize,
        width: usize,
        height: usize,
    },

    /// Command issued in a run state that does not accept it.
    #[error("cannot {action} while {state}")]
    InvalidOperation {
        action: &'static str,
        state: RunState,
    },

    #[error("tick interval must be at least 1 ms, got {0}")]
    InvalidTickInterval(u64),

    #[error("fill density must be within [0, 1], got {0}")]
    InvalidDensity(f64),
}

pub type Result<T> = std::result::Result<T, LifeError>;
