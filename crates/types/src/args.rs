//! Command line parsing.
//!
//! Parsing is deliberately forgiving: unknown flags are skipped, a flag with no
//! following token is ignored, and numbers are read like C's `atoi` (leading
//! digits only, garbage reads as 0). Nothing here ever fails.

use crate::{clamp_dimension, LifeConfig, Pattern};

/// Text printed for `-?` / `--help`.
pub const USAGE: &str = "
Usage:
 tui-life -(w|h|d|g|p) <value> [-s]
 options:
 -w / --width (min = 8) = width
 -h / --height (min = 8) = height
 -d / --delay = delay between updates (in ms)
 -g / --generations = number of generations to quit after (0 = run until a key is pressed)
 -p / --pattern = initial pattern (blinker|beacon|random|toad)
 -s / --sequence = print generations one after another instead of redrawing
";

/// What the front end should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Print [`USAGE`] and exit successfully.
    Help,
    Run(LifeConfig),
}

/// Parse arguments (without the program name).
///
/// The token after a value-taking flag is not consumed: it is examined as a
/// flag in its own right on the next step, so `-p -s` still enables sequence
/// mode.
///
/// ```
/// use tui_life_types::{parse_args, CliCommand, Pattern};
///
/// let cmd = parse_args(&["-w", "20", "-p", "toad", "-s"]);
/// let CliCommand::Run(config) = cmd else { panic!("expected run") };
/// assert_eq!(config.width, 20);
/// assert_eq!(config.pattern, Pattern::Toad);
/// assert!(config.sequence);
/// ```
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> CliCommand {
    if let [only] = args {
        if matches!(only.as_ref(), "-?" | "--help") {
            return CliCommand::Help;
        }
    }

    let mut config = LifeConfig::default();

    for (i, arg) in args.iter().enumerate() {
        let value: Option<&str> = args.get(i + 1).map(|v| v.as_ref());
        match (arg.as_ref(), value) {
            ("-w" | "--width", Some(v)) => config.width = clamp_dimension(parse_unsigned(v)),
            ("-h" | "--height", Some(v)) => config.height = clamp_dimension(parse_unsigned(v)),
            ("-d" | "--delay", Some(v)) => config.delay_ms = parse_unsigned(v) as u64,
            ("-g" | "--generations", Some(v)) => config.max_generations = parse_unsigned(v) as u64,
            ("-p" | "--pattern", Some(v)) => match Pattern::from_name(v) {
                Some(pattern) => config.pattern = pattern,
                None => log::debug!("ignoring unknown pattern {v:?}"),
            },
            ("-s" | "--sequence", _) => config.sequence = true,
            _ => {}
        }
    }

    CliCommand::Run(config)
}

/// Read an integer the way C's `atoi` does.
///
/// Leading whitespace and one sign are accepted, then as many decimal digits
/// as follow. Anything else stops the scan; no digits at all reads as 0.
/// Out-of-range values saturate.
///
/// ```
/// use tui_life_types::parse_leading_int;
///
/// assert_eq!(parse_leading_int("  42abc"), 42);
/// assert_eq!(parse_leading_int("-7"), -7);
/// assert_eq!(parse_leading_int("wide"), 0);
/// ```
pub fn parse_leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }
    value
}

/// Negative numbers count as 0.
fn parse_unsigned(s: &str) -> usize {
    usize::try_from(parse_leading_int(s).max(0)).unwrap_or(usize::MAX)
}
