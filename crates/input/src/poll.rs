//! Non-blocking keypress polling on the controlling terminal.

use std::io::IsTerminal;
use std::time::Duration;

use anyhow::Result;
use crossterm::{event, terminal};

use crate::engine::InputPoller;
use crate::map::is_stop_event;

/// Reports a stop once any key has been pressed.
///
/// While active the terminal is in raw mode so single keystrokes arrive
/// without Enter; raw mode is switched off again on drop.
pub struct KeyPoller {
    active: bool,
}

impl KeyPoller {
    /// Put the terminal in raw mode and start polling.
    ///
    /// When stdin is not a terminal, or raw mode cannot be enabled, the
    /// poller is created inactive and never reports a stop.
    pub fn new() -> Self {
        if !std::io::stdin().is_terminal() {
            log::warn!("stdin is not a terminal; keypress polling disabled");
            return Self::disabled();
        }
        match terminal::enable_raw_mode() {
            Ok(()) => Self { active: true },
            Err(err) => {
                log::warn!("could not enable raw mode ({err}); keypress polling disabled");
                Self::disabled()
            }
        }
    }

    /// A poller that never reports a stop and leaves the terminal alone.
    pub fn disabled() -> Self {
        Self { active: false }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Default for KeyPoller {
    fn default() -> Self {
        Self::new()
    }
}

impl InputPoller for KeyPoller {
    fn stop_requested(&mut self) -> Result<bool> {
        if !self.active {
            return Ok(false);
        }
        // Drain everything pending; a non-key event must not hide a key behind it.
        while event::poll(Duration::ZERO)? {
            if is_stop_event(&event::read()?) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Drop for KeyPoller {
    fn drop(&mut self) {
        if self.active {
            let _ = terminal::disable_raw_mode();
        }
    }
}
