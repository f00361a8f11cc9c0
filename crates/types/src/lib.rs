//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, so they can be used by the grid engine,
//! the terminal renderer and the command line front end alike.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_DIMENSION` | 8 | Smallest accepted grid width/height |
//! | `DEFAULT_WIDTH` | 8 | Grid width when `-w` is not given |
//! | `DEFAULT_HEIGHT` | 8 | Grid height when `-h` is not given |
//! | `DEFAULT_DELAY_MS` | 1000 | Pause between generations |
//! | `UNLIMITED_GENERATIONS` | 0 | Generation limit meaning "run until interrupted" |
//!
//! # Examples
//!
//! ```
//! use tui_life_types::{LifeConfig, Pattern, MIN_DIMENSION};
//!
//! let pattern = Pattern::from_name("toad").unwrap();
//! assert_eq!(pattern, Pattern::Toad);
//!
//! let config = LifeConfig::default().with_dimensions(3, 40);
//! assert_eq!(config.width, MIN_DIMENSION);
//! assert_eq!(config.height, 40);
//! ```

pub mod args;

use std::fmt;
use std::time::Duration;

pub use args::{parse_args, parse_leading_int, CliCommand, USAGE};

/// Smallest accepted grid width and height.
///
/// Every fixed pattern reaches at most 3 rows above and 2 columns left of the
/// grid center, so 8 keeps all of them in bounds.
pub const MIN_DIMENSION: usize = 8;

/// Grid width when none is requested.
pub const DEFAULT_WIDTH: usize = 8;

/// Grid height when none is requested.
pub const DEFAULT_HEIGHT: usize = 8;

/// Pause between generations in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// Generation limit that never stops the loop.
pub const UNLIMITED_GENERATIONS: u64 = 0;

/// Glyph for a live cell.
pub const LIVE_GLYPH: char = 'X';

/// Glyph for a dead cell.
pub const DEAD_GLYPH: char = '.';

/// Hint shown under each frame in redraw mode.
pub const QUIT_HINT: &str = "(press any key to quit)";

/// Clamp a requested grid dimension to [`MIN_DIMENSION`].
pub fn clamp_dimension(requested: usize) -> usize {
    requested.max(MIN_DIMENSION)
}

/// Initial population strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pattern {
    /// All cells dead.
    None,
    /// Every cell live with probability 1/2.
    #[default]
    Random,
    /// Two diagonally touching 2x2 blocks (period 2).
    Beacon,
    /// Three cells in a vertical line (period 2).
    Blinker,
    /// Two offset rows of three (period 2).
    Toad,
}

impl Pattern {
    /// All patterns, in declaration order.
    pub const ALL: [Pattern; 5] = [
        Pattern::None,
        Pattern::Random,
        Pattern::Beacon,
        Pattern::Blinker,
        Pattern::Toad,
    ];

    /// Parse a pattern name as accepted on the command line (case-sensitive).
    ///
    /// `none` is not selectable from the command line and yields `None` here.
    ///
    /// ```
    /// use tui_life_types::Pattern;
    ///
    /// assert_eq!(Pattern::from_name("blinker"), Some(Pattern::Blinker));
    /// assert_eq!(Pattern::from_name("random"), Some(Pattern::Random));
    /// assert_eq!(Pattern::from_name("Blinker"), None);
    /// assert_eq!(Pattern::from_name("glider"), None);
    /// ```
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "blinker" => Some(Pattern::Blinker),
            "beacon" => Some(Pattern::Beacon),
            "toad" => Some(Pattern::Toad),
            "random" => Some(Pattern::Random),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Pattern::None => "none",
            Pattern::Random => "random",
            Pattern::Beacon => "beacon",
            Pattern::Blinker => "blinker",
            Pattern::Toad => "toad",
        }
    }

    /// Whether seeding is deterministic (fixed cell offsets).
    pub fn is_fixed(self) -> bool {
        matches!(self, Pattern::Beacon | Pattern::Blinker | Pattern::Toad)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything one run of the simulation needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeConfig {
    pub width: usize,
    pub height: usize,
    pub delay_ms: u64,
    /// 0 means run until interrupted.
    pub max_generations: u64,
    pub pattern: Pattern,
    /// Print frames one after another instead of redrawing in place.
    pub sequence: bool,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            delay_ms: DEFAULT_DELAY_MS,
            max_generations: UNLIMITED_GENERATIONS,
            pattern: Pattern::default(),
            sequence: false,
        }
    }
}

impl LifeConfig {
    /// Set both dimensions, clamping each to [`MIN_DIMENSION`].
    pub fn with_dimensions(mut self, width: usize, height: usize) -> Self {
        self.width = clamp_dimension(width);
        self.height = clamp_dimension(height);
        self
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_max_generations(mut self, max_generations: u64) -> Self {
        self.max_generations = max_generations;
        self
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn is_unlimited(&self) -> bool {
        self.max_generations == UNLIMITED_GENERATIONS
    }
}
