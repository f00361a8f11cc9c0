//! Pattern seeding - initial population of a grid
//!
//! Fixed patterns are placed relative to the grid center `(height / 2, width / 2)`
//! using integer division, so on even-sized grids they sit just below/right of
//! the geometric center.

use rand::Rng;

use crate::error::LifeError;
use crate::grid::Grid;
use crate::types::{Pattern, MIN_DIMENSION};

/// Live cell offsets of the fixed patterns, as `(row, col)` deltas from center.
const BLINKER: [(isize, isize); 3] = [(-1, 0), (0, 0), (1, 0)];

const BEACON: [(isize, isize); 8] = [
    (0, 0),
    (0, -1),
    (-1, 0),
    (-1, -1),
    (-2, 1),
    (-2, 2),
    (-3, 1),
    (-3, 2),
];

const TOAD: [(isize, isize); 6] = [(0, -2), (0, -1), (0, 0), (-1, -1), (-1, 0), (-1, 1)];

fn offsets(pattern: Pattern) -> &'static [(isize, isize)] {
    match pattern {
        Pattern::Blinker => &BLINKER,
        Pattern::Beacon => &BEACON,
        Pattern::Toad => &TOAD,
        Pattern::None | Pattern::Random => &[],
    }
}

/// Absolute `(row, col)` positions of a fixed pattern on a `width` x `height` grid.
///
/// Empty for [`Pattern::None`] and [`Pattern::Random`]. Fixed patterns need at
/// least a [`MIN_DIMENSION`] square grid.
///
/// ```
/// use tui_life_core::{pattern_cells, Pattern};
///
/// assert_eq!(
///     pattern_cells(Pattern::Blinker, 8, 8).unwrap(),
///     vec![(3, 4), (4, 4), (5, 4)]
/// );
/// assert!(pattern_cells(Pattern::Beacon, 2, 2).is_err());
/// ```
pub fn pattern_cells(
    pattern: Pattern,
    width: usize,
    height: usize,
) -> Result<Vec<(usize, usize)>, LifeError> {
    if pattern.is_fixed() && (width < MIN_DIMENSION || height < MIN_DIMENSION) {
        return Err(LifeError::GridTooSmall {
            pattern: pattern.name(),
            min: MIN_DIMENSION,
            width,
            height,
        });
    }

    let (center_row, center_col) = (height / 2, width / 2);
    offsets(pattern)
        .iter()
        .map(|&(dr, dc)| {
            match (
                center_row.checked_add_signed(dr),
                center_col.checked_add_signed(dc),
            ) {
                (Some(row), Some(col)) if row < height && col < width => Ok((row, col)),
                _ => Err(LifeError::GridTooSmall {
                    pattern: pattern.name(),
                    min: MIN_DIMENSION,
                    width,
                    height,
                }),
            }
        })
        .collect()
}

/// Populate `grid` with `pattern`, replacing whatever it held.
///
/// Random seeding draws from an entropy-seeded generator, so it differs run to run.
pub fn seed(grid: &mut Grid, pattern: Pattern) -> Result<(), LifeError> {
    seed_with_rng(grid, pattern, &mut rand::thread_rng())
}

/// Like [`seed`], with the random source supplied by the caller.
pub fn seed_with_rng<R: Rng>(
    grid: &mut Grid,
    pattern: Pattern,
    rng: &mut R,
) -> Result<(), LifeError> {
    if !grid.is_allocated() {
        return Err(LifeError::Uninitialized);
    }

    let (width, height) = grid.dimensions();
    let cells = pattern_cells(pattern, width, height)?;

    grid.clear();
    match pattern {
        Pattern::None => {}
        Pattern::Random => {
            for cell in grid.cells_mut() {
                *cell = rng.gen_bool(0.5);
            }
        }
        Pattern::Blinker | Pattern::Beacon | Pattern::Toad => {
            for (row, col) in cells {
                grid.set(row, col, true);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(pattern: Pattern, width: usize, height: usize) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        seed(&mut grid, pattern).unwrap();
        grid
    }

    #[test]
    fn none_leaves_grid_dead() {
        let mut grid = Grid::from_rows(&["XXXXXXXX"; 8]).unwrap();
        seed(&mut grid, Pattern::None).unwrap();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn blinker_is_vertical_line_through_center() {
        let grid = seeded(Pattern::Blinker, 8, 8);
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(3, 4), (4, 4), (5, 4)]);
    }

    #[test]
    fn beacon_cells_on_odd_grid() {
        let grid = seeded(Pattern::Beacon, 9, 11);
        // center is (5, 4)
        assert_eq!(
            grid.live_cells().collect::<Vec<_>>(),
            vec![(2, 5), (2, 6), (3, 5), (3, 6), (4, 3), (4, 4), (5, 3), (5, 4)]
        );
    }

    #[test]
    fn toad_cells() {
        let grid = seeded(Pattern::Toad, 8, 8);
        assert_eq!(
            grid.live_cells().collect::<Vec<_>>(),
            vec![(3, 3), (3, 4), (3, 5), (4, 2), (4, 3), (4, 4)]
        );
    }

    #[test]
    fn fixed_patterns_fit_minimum_grid() {
        for pattern in [Pattern::Blinker, Pattern::Beacon, Pattern::Toad] {
            let grid = seeded(pattern, MIN_DIMENSION, MIN_DIMENSION);
            assert_eq!(grid.population(), offsets(pattern).len());
        }
    }

    #[test]
    fn fixed_pattern_on_tiny_grid_is_rejected() {
        let mut grid = Grid::new(4, 4).unwrap();
        assert!(matches!(
            seed(&mut grid, Pattern::Beacon),
            Err(LifeError::GridTooSmall { .. })
        ));
        // Random and None do not depend on the center.
        assert!(seed(&mut grid, Pattern::Random).is_ok());
        assert!(seed(&mut grid, Pattern::None).is_ok());
    }

    #[test]
    fn pattern_cells_rejects_grid_below_minimum() {
        for (width, height) in [(2, 2), (7, 8), (8, 7)] {
            assert_eq!(
                pattern_cells(Pattern::Beacon, width, height),
                Err(LifeError::GridTooSmall {
                    pattern: "beacon",
                    min: MIN_DIMENSION,
                    width,
                    height
                })
            );
        }
        assert!(pattern_cells(Pattern::Toad, 3, 3).is_err());
        assert_eq!(pattern_cells(Pattern::Random, 2, 2), Ok(vec![]));
    }

    #[test]
    fn pattern_cells_stay_in_bounds_at_minimum() {
        for pattern in [Pattern::Blinker, Pattern::Beacon, Pattern::Toad] {
            let cells = pattern_cells(pattern, MIN_DIMENSION, MIN_DIMENSION).unwrap();
            assert!(cells
                .iter()
                .all(|&(row, col)| row < MIN_DIMENSION && col < MIN_DIMENSION));
        }
    }

    #[test]
    fn random_is_deterministic_for_a_given_rng() {
        let mut a = Grid::new(32, 32).unwrap();
        let mut b = Grid::new(32, 32).unwrap();
        seed_with_rng(&mut a, Pattern::Random, &mut StdRng::seed_from_u64(7)).unwrap();
        seed_with_rng(&mut b, Pattern::Random, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn random_fills_roughly_half() {
        let mut grid = Grid::new(64, 64).unwrap();
        seed_with_rng(&mut grid, Pattern::Random, &mut StdRng::seed_from_u64(42)).unwrap();
        let population = grid.population();
        // 4096 fair coin flips; this band is many standard deviations wide.
        assert!((1600..2500).contains(&population), "population {population}");
    }

    #[test]
    fn destroyed_grid_cannot_be_seeded() {
        let mut grid = Grid::new(8, 8).unwrap();
        grid.destroy();
        assert_eq!(seed(&mut grid, Pattern::Blinker), Err(LifeError::Uninitialized));
    }
}
