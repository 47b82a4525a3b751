// controller.rs - Editing / Running / Halted state machine around the engine

use std::fmt;

use rand::Rng;

use crate::engine::Engine;
use crate::error::{LifeError, Result};
use crate::grid::{Cell, Grid};
use crate::patterns::{self, Pattern};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunState {
    #[default]
    Editing,
    Running,
    Halted,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RunState::Editing => "editing",
            RunState::Running => "running",
            RunState::Halted => "halted",
        })
    }
}

/// Hooks the presentation layer provides to the controller.
///
/// The controller never draws or schedules anything itself: it asks the shell
/// to start or stop its periodic driver and notifies it of state changes.
pub trait Shell {
    fn start_driver(&mut self) {}
    fn stop_driver(&mut self) {}
    fn generation_advanced(&mut self, _generation: u64, _grid: &Grid) {}
    fn simulation_ended(&mut self, _generation: u64) {}
}

/// Headless shell: nothing to drive, nothing to redraw.
impl Shell for () {}

/// Outcome of a single driver tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Advanced { generation: u64, population: usize },
    Extinct { generation: u64 },
    /// Tick arrived outside `Running` (e.g. queued before a reset).
    Ignored,
}

pub struct Controller<S: Shell = ()> {
    engine: Engine,
    state: RunState,
    shell: S,
}

impl Controller<()> {
    pub fn headless(engine: Engine) -> Self {
        Self::new(engine, ())
    }
}

impl<S: Shell> Controller<S> {
    pub fn new(engine: Engine, shell: S) -> Self {
        Self {
            engine,
            state: RunState::Editing,
            shell,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn shell(&self) -> &S {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut S {
        &mut self.shell
    }

    /// Editing -> Running. Repeated starts while running are ignored so the
    /// driver is never started twice; a halted run must be reset first.
    pub fn start(&mut self) -> Result<()> {
        match self.state {
            RunState::Editing => {
                self.state = RunState::Running;
                self.shell.start_driver();
                log::info!(
                    "simulation started with {} live cells",
                    self.engine.population()
                );
                Ok(())
            }
            RunState::Running => Ok(()),
            RunState::Halted => Err(self.rejected("start")),
        }
    }

    pub fn on_tick(&mut self) -> Tick {
        if self.state != RunState::Running {
            log::debug!("tick ignored while {}", self.state);
            return Tick::Ignored;
        }

        let extinct = self.engine.advance();
        let generation = self.engine.generation();
        self.shell.generation_advanced(generation, self.engine.grid());

        if extinct {
            self.shell.stop_driver();
            self.state = RunState::Halted;
            log::info!("population extinct at generation {generation}, simulation ended");
            self.shell.simulation_ended(generation);
            Tick::Extinct { generation }
        } else {
            Tick::Advanced {
                generation,
                population: self.engine.population(),
            }
        }
    }

    /// Valid from any state: stops the driver, clears the grid, back to Editing.
    pub fn reset(&mut self) {
        if self.state == RunState::Running {
            self.shell.stop_driver();
        }
        self.engine.reset();
        self.state = RunState::Editing;
        log::info!("simulation reset");
    }

    /// Toggles a cell while editing; rejected with `InvalidOperation` otherwise.
    pub fn try_edit(&mut self, row: isize, col: isize) -> Result<Cell> {
        self.ensure_editing("edit cells")?;
        self.engine.toggle(row, col)
    }

    /// Replaces the grid with a built-in pattern. Returns the cells placed.
    pub fn load_pattern(&mut self, pattern: &Pattern) -> Result<usize> {
        self.ensure_editing("load a pattern")?;
        let placed = patterns::apply_pattern(&mut self.engine, pattern);
        log::info!("loaded pattern {} ({placed} cells)", pattern.name);
        Ok(placed)
    }

    /// Replaces the grid with random cells at the given density.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) -> Result<usize> {
        self.ensure_editing("randomize the grid")?;
        let placed = patterns::apply_random_pattern(&mut self.engine, rng, density)?;
        log::info!("randomized grid ({placed} live cells)");
        Ok(placed)
    }

    fn ensure_editing(&self, action: &'static str) -> Result<()> {
        if self.state == RunState::Editing {
            Ok(())
        } else {
            let err = self.rejected(action);
            log::warn!("{err}");
            Err(err)
        }
    }

    fn rejected(&self, action: &'static str) -> LifeError {
        LifeError::InvalidOperation {
            action,
            state: self.state,
        }
    }
}
