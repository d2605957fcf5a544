//! Wordlist generation and output.

mod generate;
mod leet;
pub mod output;
mod permute;
mod symbols;

pub use generate::{GenerateOptions, Wordlist, generate, parse_target_count};
pub use leet::leet_variants;
pub use permute::base_permutations;
pub use symbols::{inject_symbols, parse_prob_weights, trial_count};

/// Characters drawn from during symbol injection.
pub const SYMBOL_CHARS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '-', '_', '=', '+', '[', ']', '{', '}',
    ';', ':', '\'', '"', ',', '.', '<', '>', '/', '?', '\\', '|', '`', '~',
];

pub const SEPARATORS: &[&str] = &["", ".", "_", "-"];
pub const COMMON_PREFIXES: &[&str] = &["", "the", "my", "mr", "ms", "dr"];
pub const COMMON_SUFFIXES: &[&str] = &[
    "", "1", "12", "123", "1234", "2020", "2021", "2022", "2023", "2024", "2025", "007",
];

// ============================================================================
// Growth bounds
// ============================================================================

/// Raw pair concatenations built for the pairwise phase.
pub const PAIRWISE_CAP: usize = 20_000;
/// Dot/underscore pair joins built for the extra-separator phase.
pub const EXTRA_SEPARATOR_CAP: usize = 50_000;
/// Largest accepted `max_symbols`; larger requests are clamped.
pub const MAX_SYMBOLS: usize = 200;
/// Distinct symbol variants kept per seed word.
pub const MAX_VARIANTS_PER_WORD: usize = 300;
pub const MIN_TRIALS: usize = 8;
pub const MAX_TRIALS: usize = 200;
pub const TRIALS_PER_SYMBOL: usize = 12;

// ============================================================================
// Target count
// ============================================================================

/// Used when a requested target count is missing, unparsable or not positive.
pub const DEFAULT_TARGET_COUNT: usize = 10_000;
/// Cap applied when the library is asked for an unbounded (zero) target.
pub const UNBOUNDED_TARGET: usize = 5_000_000;
/// Requests at or above this size need caller confirmation.
pub const LARGE_REQUEST_THRESHOLD: usize = 500_000;
/// Lines shown by result previews.
pub const PREVIEW_LINES: usize = 500;
