//! Generation engine and simulation loop.
//!
//! - [`step`]: neighbor counting on a torus and the Game of Life rule
//! - [`sim`]: the present / advance / pause / poll loop with injected I/O
//!
//! # Example
//!
//! ```
//! use tui_life_core::{seed, Grid, Pattern};
//! use tui_life_engine::advance;
//!
//! let mut grid = Grid::new(8, 8).unwrap();
//! seed(&mut grid, Pattern::Blinker).unwrap();
//! let start = grid.clone();
//!
//! advance(&mut grid).unwrap();
//! assert_ne!(grid, start);
//! advance(&mut grid).unwrap();
//! assert_eq!(grid, start);
//! ```

pub mod sim;
pub mod step;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use sim::{
    FrameSink, InputPoller, NeverStop, Pacer, RunOutcome, Simulation, StopReason, ThreadPacer,
};
pub use step::{advance, count_live_neighbors, next_generation, next_state};
