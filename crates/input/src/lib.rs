//! Terminal input module.
//!
//! Detects a keypress between generations without blocking, and exposes it to
//! the simulation loop through [`crate::engine::InputPoller`].

pub mod map;
pub mod poll;

pub use tui_life_engine as engine;

pub use map::{is_stop_event, is_stop_key};
pub use poll::KeyPoller;
