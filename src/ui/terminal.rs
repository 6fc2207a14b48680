use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::debug;
use ratatui::backend::CrosstermBackend;

/// Raw mode plus the alternate screen for as long as the guard lives.
/// Dropping it, on any path including unwinding, puts the terminal back.
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(guard)
    }

    pub fn backend(&self) -> CrosstermBackend<Stdout> {
        CrosstermBackend::new(io::stdout())
    }

    /// Restore now rather than at drop, so the caller can print to the
    /// normal screen afterwards.
    pub fn restore(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Err(err) = execute!(io::stdout(), Show, LeaveAlternateScreen) {
            debug!("leaving alternate screen failed: {err}");
        }
        if let Err(err) = disable_raw_mode() {
            debug!("disabling raw mode failed: {err}");
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}
