// engine.rs - Generation engine: owns the current grid and the scratch buffer

use crate::config::LifeConfig;
use crate::error::Result;
use crate::grid::{Cell, Grid};

/// Conway's rule for one cell given its live-neighbor count.
pub fn next_state(cell: Cell, neighbors: usize) -> Cell {
    match (cell, neighbors) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Survival
        (Cell::Dead, 3) => Cell::Alive,                      // Birth
        _ => Cell::Dead,                                     // Death or stays dead
    }
}

/// Bounded (non-wrapping) Game of Life engine.
///
/// `current` is the authoritative generation. `scratch` only holds data while
/// `advance` is computing the next generation, after which the two swap.
#[derive(Debug, Clone)]
pub struct Engine {
    current: Grid,
    scratch: Grid,
    generation: u64,
}

impl Engine {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Ok(Self {
            current: Grid::new(width, height)?,
            scratch: Grid::new(width, height)?,
            generation: 0,
        })
    }

    pub fn from_config(config: &LifeConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.grid_width, config.grid_height)
    }

    pub fn width(&self) -> usize {
        self.current.width()
    }

    pub fn height(&self) -> usize {
        self.current.height()
    }

    /// Advances since construction or the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.current.population()
    }

    /// Read-only view of the current generation.
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// Flips one cell and returns its new state.
    pub fn toggle(&mut self, row: isize, col: isize) -> Result<Cell> {
        let cell = self.current.cell_mut(row, col)?;
        *cell = cell.toggled();
        Ok(*cell)
    }

    pub fn read(&self, row: isize, col: isize) -> Result<Cell> {
        self.current
            .get(row, col)
            .ok_or_else(|| self.current.out_of_bounds(row, col))
    }

    pub fn set(&mut self, row: isize, col: isize, cell: Cell) -> Result<()> {
        *self.current.cell_mut(row, col)? = cell;
        Ok(())
    }

    /// Live cells among the up-to-8 in-bounds neighbors of (row, col).
    /// Fails with `OutOfBounds` when (row, col) is not a cell of the grid.
    pub fn live_neighbors(&self, row: isize, col: isize) -> Result<usize> {
        self.read(row, col)?;
        Ok(self.count_neighbors(row as usize, col as usize))
    }

    /// Caller guarantees (row, col) is in bounds.
    fn count_neighbors(&self, row: usize, col: usize) -> usize {
        let rows = row.saturating_sub(1)..=(row + 1).min(self.height() - 1);
        let mut count = 0;
        for nr in rows {
            let cols = col.saturating_sub(1)..=(col + 1).min(self.width() - 1);
            for nc in cols {
                if (nr, nc) != (row, col) && self.current.at(nr, nc).is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Computes the next generation from the current one, swaps it in and
    /// reports whether the population is now extinct.
    pub fn advance(&mut self) -> bool {
        self.scratch.clear();
        for row in 0..self.height() {
            for col in 0..self.width() {
                let neighbors = self.count_neighbors(row, col);
                let next = next_state(self.current.at(row, col), neighbors);
                self.scratch.set_at(row, col, next);
            }
        }
        std::mem::swap(&mut self.current, &mut self.scratch);
        self.generation += 1;

        let extinct = self.current.is_extinct();
        log::trace!(
            "generation {}: population {}{}",
            self.generation,
            self.current.population(),
            if extinct { " (extinct)" } else { "" }
        );
        extinct
    }

    pub fn reset(&mut self) {
        self.current.clear();
        self.scratch.clear();
        self.generation = 0;
        log::debug!("grid reset to {}x{} dead cells", self.width(), self.height());
    }

    pub fn is_extinct(&self) -> bool {
        self.current.is_extinct()
    }
}
