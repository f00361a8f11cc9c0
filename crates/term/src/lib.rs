//! Terminal output module.
//!
//! - [`view`] formats a generation as text lines (pure)
//! - [`renderer`] writes those lines to the terminal, either redrawing in
//!   place or as a running transcript

pub mod renderer;
pub mod view;

pub use tui_life_core as core;
pub use tui_life_engine as engine;
pub use tui_life_types as types;

pub use renderer::{encode_frame_into, RenderMode, TerminalRenderer};
pub use view::GenerationView;
