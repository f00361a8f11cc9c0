//! GenerationView: turns a grid into the lines of one frame.
//!
//! Pure, no I/O.
//!
//! Frame layout:
//!
//! ```text
//!
//! Current generation: 3
//!  . . . . . . . .
//!  . . . X . . . .
//! ...
//!
//! (press any key to quit)
//! ```

use crate::core::{Grid, LifeError};
use crate::types::{DEAD_GLYPH, LIVE_GLYPH, QUIT_HINT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationView {
    show_hint: bool,
}

impl Default for GenerationView {
    fn default() -> Self {
        Self { show_hint: true }
    }
}

impl GenerationView {
    pub fn new(show_hint: bool) -> Self {
        Self { show_hint }
    }

    /// Sequence transcripts have no quit hint.
    pub fn for_sequence(sequence: bool) -> Self {
        Self::new(!sequence)
    }

    pub fn shows_hint(&self) -> bool {
        self.show_hint
    }

    /// Render into `lines`, replacing its contents.
    pub fn render_into(
        &self,
        grid: &Grid,
        generation: u64,
        lines: &mut Vec<String>,
    ) -> Result<(), LifeError> {
        if !grid.is_allocated() {
            return Err(LifeError::Uninitialized);
        }

        lines.clear();
        lines.push(String::new());
        lines.push(format!("Current generation: {generation}"));

        for row in 0..grid.height() {
            let mut line = String::with_capacity(grid.width() * 2);
            for &alive in grid.row(row) {
                line.push(' ');
                line.push(if alive { LIVE_GLYPH } else { DEAD_GLYPH });
            }
            lines.push(line);
        }

        if self.show_hint {
            lines.push(String::new());
            lines.push(QUIT_HINT.to_string());
        }
        Ok(())
    }

    pub fn render_lines(&self, grid: &Grid, generation: u64) -> Result<Vec<String>, LifeError> {
        let mut lines = Vec::new();
        self.render_into(grid, generation, &mut lines)?;
        Ok(lines)
    }
}
