//! Generation step - the B3/S23 transition on a torus
//!
//! Every cell's next state is computed from the same snapshot of the current
//! generation. The result goes into a second buffer which then replaces the
//! current one, so no cell is ever read after it has been updated.

use crate::core::{Grid, LifeError};

/// `(row, col)` deltas of the eight neighbors.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count live neighbors of `(row, col)`, wrapping around every edge.
///
/// The result is always in `0..=8`.
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let (width, height) = grid.dimensions();
    let cells = grid.cells();
    let (h, w) = (height as isize, width as isize);

    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dr, dc)| {
            let nr = (row as isize + dr).rem_euclid(h) as usize;
            let nc = (col as isize + dc).rem_euclid(w) as usize;
            cells[nr * width + nc]
        })
        .count() as u8
}

/// Conway's rule: survive on 2 or 3 neighbors, birth on exactly 3.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (_, 3))
}

/// Compute the generation after `grid` into a fresh grid.
pub fn next_generation(grid: &Grid) -> Result<Grid, LifeError> {
    if !grid.is_allocated() {
        return Err(LifeError::Uninitialized);
    }

    let (width, height) = grid.dimensions();
    let mut next = Grid::new(width, height)?;
    for row in 0..height {
        for col in 0..width {
            let alive = grid.get(row, col);
            let neighbors = count_live_neighbors(grid, row, col);
            if next_state(alive, neighbors) {
                next.set(row, col, true);
            }
        }
    }
    Ok(next)
}

/// Replace `grid` with its next generation.
///
/// The grid keeps its identity and dimensions; only its cells change.
pub fn advance(grid: &mut Grid) -> Result<(), LifeError> {
    let next = next_generation(grid)?;
    *grid = next;
    Ok(())
}
