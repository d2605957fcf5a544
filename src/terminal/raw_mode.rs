//! Raw mode RAII guard.

use std::io;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Raw mode stays on for the guard's lifetime.
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { active: true })
    }

    /// Leave raw mode early; dropping afterwards is a no-op.
    pub fn release(&mut self) {
        if std::mem::take(&mut self.active) {
            let _ = disable_raw_mode();
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.release();
    }
}
