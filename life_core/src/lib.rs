//! Conway's Game of Life on a bounded, fixed-size grid.
//!
//! [`Engine`] owns the cell buffers and computes generations; [`Controller`]
//! gates edits and ticks behind the Editing / Running / Halted state machine.
//! Rendering and tick scheduling belong to a [`Shell`].

pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;

pub use config::LifeConfig;
pub use controller::{Controller, RunState, Shell, Tick};
pub use engine::Engine;
pub use error::{LifeError, Result};
pub use grid::{Cell, Grid};
pub use patterns::{PATTERNS, Pattern};
