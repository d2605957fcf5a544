//! Persisted generation defaults.

mod file;

use std::path::Path;

use crate::wordlist::{GenerateOptions, PREVIEW_LINES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub use_leet: bool,
    pub use_symbols: bool,
    pub max_symbols: usize,
    pub target_count: usize,
    pub symbol_weights: String,
    pub keep_symbols: bool,
    pub preview_lines: usize,
    pub output_file_path: String,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        Self::load_from(file::default_path())
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        self.save_to(file::default_path())
    }

    /// Load from `path`, creating it with defaults when missing or malformed.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(path.as_ref(), &mut settings)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), std::io::Error> {
        file::save(path.as_ref(), self)
    }

    /// Generation options for one run. Blank weights mean uniform.
    pub fn to_options(&self, random_seed: Option<u64>) -> GenerateOptions {
        let weights = self.symbol_weights.trim();
        GenerateOptions {
            use_leet: self.use_leet,
            use_symbols: self.use_symbols,
            max_symbols: self.max_symbols,
            target_count: self.target_count,
            random_seed,
            symbol_weights: (!weights.is_empty()).then(|| weights.to_string()),
            keep_symbols: self.keep_symbols,
            reference_year: None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            use_leet: true,
            use_symbols: false,
            max_symbols: 2,
            target_count: 5000,
            symbol_weights: String::new(),
            keep_symbols: false,
            preview_lines: PREVIEW_LINES,
            output_file_path: String::new(),
        }
    }
}
