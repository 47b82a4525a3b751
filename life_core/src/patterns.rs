// patterns.rs - Built-in seed patterns and random fill

use rand::Rng;

use crate::engine::Engine;
use crate::error::{LifeError, Result};
use crate::grid::Cell;

/// A named pattern as (row, col) offsets from its top-left corner.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(isize, isize)],
}

impl Pattern {
    /// Bounding box as (rows, cols).
    pub fn extent(&self) -> (isize, isize) {
        self.cells
            .iter()
            .fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
];

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Clears the grid and places `pattern` centered on it. Cells that fall
/// outside a too-small grid are clipped. Returns the number of cells placed.
pub fn apply_pattern(engine: &mut Engine, pattern: &Pattern) -> usize {
    engine.reset();

    let (rows, cols) = pattern.extent();
    let top = (engine.height() as isize - rows) / 2;
    let left = (engine.width() as isize - cols) / 2;

    pattern
        .cells
        .iter()
        .filter(|&&(r, c)| engine.set(top + r, left + c, Cell::Alive).is_ok())
        .count()
}

/// Clears the grid and sets each cell alive with probability `density`.
pub fn apply_random_pattern<R: Rng + ?Sized>(
    engine: &mut Engine,
    rng: &mut R,
    density: f64,
) -> Result<usize> {
    if !(0.0..=1.0).contains(&density) {
        return Err(LifeError::InvalidDensity(density));
    }
    engine.reset();

    for row in 0..engine.height() as isize {
        for col in 0..engine.width() as isize {
            engine.set(row, col, Cell::from(rng.gen_bool(density)))?;
        }
    }
    Ok(engine.population())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn pattern_names_are_unique() {
        for (i, a) in PATTERNS.iter().enumerate() {
            assert!(PATTERNS[i + 1..].iter().all(|b| b.name != a.name), "{}", a.name);
        }
    }

    #[test]
    fn every_pattern_fits_reference_grid() {
        for pattern in PATTERNS {
            let mut engine = Engine::new(30, 30).unwrap();
            let placed = apply_pattern(&mut engine, pattern);
            assert_eq!(placed, pattern.cells.len(), "{}", pattern.name);
            assert_eq!(engine.population(), pattern.cells.len());
        }
    }

    #[test]
    fn blinker_is_centered() {
        let mut engine = Engine::new(5, 5).unwrap();
        apply_pattern(&mut engine, find("blinker").unwrap());
        let alive: Vec<_> = engine.grid().alive_cells().collect();
        assert_eq!(alive, vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn oversized_pattern_is_clipped() {
        let mut engine = Engine::new(5, 5).unwrap();
        let pulsar = find("Pulsar").unwrap();
        assert_eq!(pulsar.extent(), (13, 13));
        let placed = apply_pattern(&mut engine, pulsar);
        assert!(placed < pulsar.cells.len());
        assert_eq!(engine.population(), placed);
    }

    #[test]
    fn apply_pattern_clears_previous_cells() {
        let mut engine = Engine::new(10, 10).unwrap();
        engine.set(0, 0, Cell::Alive).unwrap();
        apply_pattern(&mut engine, find("Glider").unwrap());
        assert_eq!(engine.read(0, 0).unwrap(), Cell::Dead);
        assert_eq!(engine.population(), 5);
    }

    #[test]
    fn random_fill_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut engine = Engine::new(10, 10).unwrap();
        assert_eq!(apply_random_pattern(&mut engine, &mut rng, 1.0).unwrap(), 100);
        assert_eq!(apply_random_pattern(&mut engine, &mut rng, 0.0).unwrap(), 0);
    }

    #[test]
    fn random_fill_rejects_bad_density() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut engine = Engine::new(10, 10).unwrap();
        engine.set(3, 3, Cell::Alive).unwrap();
        assert_eq!(
            apply_random_pattern(&mut engine, &mut rng, 1.5),
            Err(LifeError::InvalidDensity(1.5))
        );
        assert!(apply_random_pattern(&mut engine, &mut rng, f64::NAN).is_err());
        assert_eq!(engine.population(), 1);
    }
}
