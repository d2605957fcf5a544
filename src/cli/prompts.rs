//! Centralized warning and prompt messages for CLI output.
//!
//! Everything here goes to stderr so a wordlist on stdout stays clean.

use std::io::Write;

use super::quiet;
use crate::terminal::{RED, RESET, format_number};

const YELLOW: &str = "\x1b[33m";

/// Yellow warning, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red error, always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Plain status line, suppressed in quiet mode.
pub fn status(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{msg}");
    }
}

fn ask(question: &str, default_yes: bool) -> bool {
    let hint = if default_yes { "[Y/n]" } else { "[y/N]" };
    eprint!("{YELLOW}{question} {hint}: {RESET}");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return default_yes;
    }
    match input.trim().to_lowercase().as_str() {
        "" => default_yes,
        "y" | "yes" => true,
        _ => false,
    }
}

/// Confirm a very large target. Non-interactive or quiet runs proceed.
pub fn large_request_prompt(count: usize) -> bool {
    if quiet::skip_prompt() {
        return true;
    }
    warn(&format!(
        "You requested {} words. This may use a lot of memory and time.",
        format_number(count)
    ));
    if ask("Continue?", false) {
        return true;
    }
    eprintln!("Generation cancelled.");
    false
}

pub fn max_symbols_required() {
    error("Max symbols must be >= 1 when symbols are enabled.");
}

pub fn empty_profile() {
    error("Profile is empty: give at least one name, keyword, date or number.");
}

pub fn out_of_memory() {
    error("Generation ran out of memory. Try a smaller target or disable symbols.");
}

pub fn generation_failed(err: &str) {
    error(&format!("Failed to generate: {err}"));
}

pub fn weights_ignored() {
    warn("Symbol probabilities ignored: give one non-negative weight per count 0..=max.");
}

pub fn clipboard_copied(count: usize) {
    status(&format!("*** {} word(s) COPIED TO CLIPBOARD ***", format_number(count)));
}

/// Always shown.
pub fn clipboard_error(err: &str) {
    error(&format!("Clipboard error: {err}"));
}

/// Returns true to fall back to stdout, false to abort.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }
    let fallback = ask("Clipboard unavailable. Print to terminal instead?", true);
    if !fallback {
        eprintln!("\nAborted.");
    }
    fallback
}

pub fn words_written(count: usize, path: &str) {
    status(&format!("{} word(s) \u{2192} {path}", format_number(count)));
}

pub fn seed_used(seed: u64) {
    status(&format!("seed: {seed} (pass --seed {seed} to replay)"));
}
