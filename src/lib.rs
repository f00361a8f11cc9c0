//! TUI Life (workspace facade crate).
//!
//! Re-exports the member crates as `tui_life::{types, core, engine, input, term}`
//! so the binary, integration tests and benchmarks share one import path.

pub use tui_life_core as core;
pub use tui_life_engine as engine;
pub use tui_life_input as input;
pub use tui_life_term as term;
pub use tui_life_types as types;
