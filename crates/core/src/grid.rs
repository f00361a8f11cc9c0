//! Grid module - the cell buffer
//!
//! A fixed-size rectangle of live/dead cells stored as one flat, row-major
//! vector (`row * width + col`). The buffer is allocated in one go, so a grid
//! either exists completely or not at all.
//!
//! Coordinates are `(row, col)` with row 0 at the top. Neighbor lookups wrap
//! around every edge; that lives in the engine, the grid itself only stores
//! cells.

use std::fmt;

use crate::error::LifeError;
use crate::types::{DEAD_GLYPH, LIVE_GLYPH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order. Empty once destroyed.
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid with every cell dead.
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        if width == 0 || height == 0 {
            return Err(LifeError::EmptyDimensions { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(LifeError::Allocation { width, height })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| LifeError::Allocation { width, height })?;
        cells.resize(len, false);

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid from text rows.
    ///
    /// `X`, `x`, `O`, `#` and `1` are live; any other character is dead.
    /// Whitespace is ignored so rows can be written as `". X ."`.
    ///
    /// ```
    /// use tui_life_core::Grid;
    ///
    /// let grid = Grid::from_rows(&[". X .", ". X .", ". X ."]).unwrap();
    /// assert_eq!(grid.dimensions(), (3, 3));
    /// assert!(grid.get(1, 1));
    /// assert!(!grid.get(1, 0));
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, LifeError> {
        let parsed: Vec<Vec<bool>> = rows
            .iter()
            .map(|row| {
                row.as_ref()
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| matches!(c, 'X' | 'x' | 'O' | '#' | '1'))
                    .collect()
            })
            .collect();

        let width = parsed.first().map_or(0, Vec::len);
        let mut grid = Self::new(width, parsed.len())?;
        for (row, cells) in parsed.iter().enumerate() {
            if cells.len() != width {
                return Err(LifeError::RaggedRows {
                    row,
                    len: cells.len(),
                    expected: width,
                });
            }
            let start = row * width;
            grid.cells[start..start + width].copy_from_slice(cells);
        }
        Ok(grid)
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.height && col < self.width);
        row * self.width + col
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Whether the cell buffer is still present (not destroyed).
    pub fn is_allocated(&self) -> bool {
        !self.cells.is_empty()
    }

    /// Cell state at `(row, col)`.
    ///
    /// # Panics
    ///
    /// If the position is outside the grid or the grid was destroyed.
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) outside {}x{} grid",
            self.width,
            self.height
        );
        self.cells[self.index(row, col)]
    }

    /// Bounds-checked cell state. None if out of bounds or destroyed.
    pub fn cell(&self, row: usize, col: usize) -> Option<bool> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells.get(self.index(row, col)).copied()
    }

    /// Set cell state at `(row, col)`.
    ///
    /// # Panics
    ///
    /// If the position is outside the grid or the grid was destroyed.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) outside {}x{} grid",
            self.width,
            self.height
        );
        let idx = self.index(row, col);
        self.cells[idx] = alive;
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Positions of live cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| (i / width, i % width))
    }

    /// One row of cells.
    pub fn row(&self, row: usize) -> &[bool] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    /// The raw row-major buffer.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Release the cell buffer. Calling it again is a no-op.
    pub fn destroy(&mut self) {
        self.cells = Vec::new();
    }
}

impl fmt::Display for Grid {
    /// Rows of `X`/`.` separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_allocated() {
            return Ok(());
        }
        for row in 0..self.height {
            for (col, &alive) in self.row(row).iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", if alive { LIVE_GLYPH } else { DEAD_GLYPH })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
