// grid.rs - Cell and grid buffer types for Conway's Game of Life

use std::fmt;

use crate::error::{LifeError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn toggled(self) -> Self {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// Fixed-size, row-major cell buffer. Rows run along the height and
/// columns along the width; dimensions never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-dead grid. Fails with `InvalidDimension` on a zero extent or
    /// when `width * height` does not fit in `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = match width.checked_mul(height) {
            Some(len) if len > 0 => len,
            _ => return Err(LifeError::InvalidDimension { width, height }),
        };
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at (row, col), or `None` outside the grid.
    pub fn get(&self, row: isize, col: isize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|c| !c.is_alive())
    }

    /// Rows top to bottom, each `width` cells long.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Coordinates of every live cell in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(move |(i, _)| (i / width, i % width))
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Bounds-checked cell reference; reports `OutOfBounds` with the offending coordinate.
    pub(crate) fn cell_mut(&mut self, row: isize, col: isize) -> Result<&mut Cell> {
        match self.index(row, col) {
            Some(i) => Ok(&mut self.cells[i]),
            None => Err(self.out_of_bounds(row, col)),
        }
    }

    /// Direct access for in-bounds loops; panics outside the grid.
    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    pub(crate) fn set_at(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.width + col] = cell;
    }

    pub(crate) fn out_of_bounds(&self, row: isize, col: isize) -> LifeError {
        LifeError::OutOfBounds {
            row,
            col,
            width: self.width,
            height: self.height,
        }
    }

    fn index(&self, row: isize, col: isize) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_new() {
        let grid = Grid::new(30, 20).unwrap();
        assert_eq!(grid.width(), 30);
        assert_eq!(grid.height(), 20);
        assert_eq!(grid.rows().count(), 20);
        assert_eq!(grid.population(), 0);
        assert!(grid.is_extinct());
    }

    #[test]
    fn test_zero_extent_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(LifeError::InvalidDimension { width: 0, height: 5 })
        );
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn test_overflowing_extent_rejected() {
        assert_eq!(
            Grid::new(usize::MAX, 2),
            Err(LifeError::InvalidDimension { width: usize::MAX, height: 2 })
        );
        assert!(Grid::new(2, usize::MAX).is_err());
    }

    #[test]
    fn test_get_outside_is_none() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.get(0, 0), Some(Cell::Dead));
        assert_eq!(grid.get(2, 3), Some(Cell::Dead));
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, -1), None);
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 4), None);
    }

    #[test]
    fn test_population_and_clear() {
        let mut grid = Grid::new(5, 5).unwrap();
        *grid.cell_mut(1, 2).unwrap() = Cell::Alive;
        *grid.cell_mut(4, 4).unwrap() = Cell::Alive;
        assert_eq!(grid.population(), 2);
        assert_eq!(grid.alive_cells().collect::<Vec<_>>(), vec![(1, 2), (4, 4)]);
        grid.clear();
        assert!(grid.is_extinct());
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set_at(0, 1, Cell::Alive);
        assert_eq!(grid.to_string(), ".#.\n...\n");
    }

    #[test]
    fn test_cell_toggle() {
        assert_eq!(Cell::Dead.toggled(), Cell::Alive);
        assert_eq!(Cell::Alive.toggled().toggled(), Cell::Alive);
        assert_eq!(Cell::from(true), Cell::Alive);
    }
}
