//! Core module - the Game of Life grid and its initial patterns
//!
//! Pure data and rules with no terminal or timing code:
//!
//! - [`grid`]: fixed-size flat cell buffer
//! - [`seed`]: populates a grid with one of the built-in patterns
//! - [`error`]: [`LifeError`], returned by every fallible operation here
//!
//! # Example
//!
//! ```
//! use tui_life_core::{seed, Grid, Pattern};
//!
//! let mut grid = Grid::new(8, 8).unwrap();
//! seed(&mut grid, Pattern::Blinker).unwrap();
//! assert_eq!(grid.population(), 3);
//! ```

pub mod error;
pub mod grid;
pub mod seed;

pub use tui_life_types as types;

pub use error::LifeError;
pub use grid::Grid;
pub use seed::{pattern_cells, seed, seed_with_rng};
pub use types::Pattern;
