//! Global quiet mode state for CLI.

use std::sync::atomic::{AtomicBool, Ordering};

/// Suppresses warnings, status lines and prompts.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Whether stdin is a terminal.
pub fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// Whether stdout is a terminal (false when the wordlist is piped).
pub fn stdout_is_tty() -> bool {
    unsafe { libc::isatty(1) == 1 }
}

/// Skip interactive prompts when quiet or when stdin is not a tty.
pub fn skip_prompt() -> bool {
    enabled() || !is_interactive()
}
