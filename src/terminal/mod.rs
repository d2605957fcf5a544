//! Shared terminal utilities.
//!
//! Box drawing, the progress box, raw mode management, and ANSI helpers.

mod boxes;
mod progress;
mod raw_mode;

use std::io::{self, Write};

use crossterm::terminal::disable_raw_mode;

pub use boxes::*;
pub use progress::*;
pub use raw_mode::*;

pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const RED: &str = "\x1b[38;5;9m";
pub const DIM: &str = "\x1b[90m";

pub const HIDE_CURSOR: &str = "\x1b[?25l";
pub const SHOW_CURSOR: &str = "\x1b[?25h";

/// Clear screen and scrollback, cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and drop any lingering styling.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

/// 12345678 -> "12,345,678"
pub fn format_number(num: usize) -> String {
    let digits = num.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
