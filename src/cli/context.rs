//! CLI context - bundles settings, flags, the profile, and clipboard state.

use std::io::{self, BufWriter, Write};

use copypasta::ClipboardContext;
use tracing::info;
use zeroize::Zeroize;

use profilelist::wordlist::output::write_lines;
use profilelist::wordlist::{
    LARGE_REQUEST_THRESHOLD, UNBOUNDED_TARGET, parse_prob_weights, parse_target_count,
};
use profilelist::{Profile, Settings, Wordlist, generate};

use super::{CliFlags, prompts, quiet};
use crate::export::{self, Outcome};

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    pub profile: Profile,
    clipboard: Option<ClipboardContext>,
}

impl Context {
    /// Returns Err with the error message if the profile file cannot be read.
    pub fn new(flags: CliFlags) -> Result<Self, String> {
        let profile = flags.profile().map_err(|e| e.to_string())?;

        let settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {e}"));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Ok(Self {
            settings,
            flags,
            profile,
            clipboard: None,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.apply_flags();
        self.persist_settings();
        self.validate()?;
        self.handle_clipboard()?;

        let words = self.generate()?;
        self.deliver(&words);
        Ok(())
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        if let Some(leet) = self.flags.leet() {
            self.settings.use_leet = leet;
        }
        if self.flags.symbols {
            self.settings.use_symbols = true;
        }
        if let Some(max) = self.flags.max_symbols {
            self.settings.max_symbols = max as usize;
        }
        if let Some(ref weights) = self.flags.weights {
            self.settings.symbol_weights = weights.trim().to_string();
        }
        if let Some(ref number) = self.flags.number {
            self.settings.target_count = parse_target_count(number);
        }
        if self.flags.keep_symbols {
            self.settings.keep_symbols = true;
        }
        if let Some(ref path) = self.flags.output {
            self.settings.output_file_path = path.clone();
        }
    }

    fn persist_settings(&self) {
        if !self.flags.save {
            return;
        }
        match self.settings.save_to_file() {
            Ok(()) => prompts::status("Settings saved."),
            Err(e) => prompts::warn(&format!("Failed to save settings: {e}")),
        }
    }

    fn validate(&self) -> Result<(), Done> {
        if self.profile.is_empty() {
            prompts::empty_profile();
            return Err(Done);
        }
        if self.settings.use_symbols && self.settings.max_symbols < 1 {
            prompts::max_symbols_required();
            return Err(Done);
        }

        let weights = self.settings.symbol_weights.trim();
        if self.settings.use_symbols
            && !weights.is_empty()
            && parse_prob_weights(weights, self.settings.max_symbols).is_none()
        {
            prompts::weights_ignored();
        }

        let target = match self.settings.target_count {
            0 => UNBOUNDED_TARGET,
            n => n,
        };
        if target >= LARGE_REQUEST_THRESHOLD
            && !self.flags.yes
            && !prompts::large_request_prompt(target)
        {
            return Err(Done);
        }
        Ok(())
    }

    fn handle_clipboard(&mut self) -> Result<(), Done> {
        if !self.flags.board {
            return Ok(());
        }
        match export::open_clipboard() {
            Ok(ctx) => {
                self.clipboard = Some(ctx);
                Ok(())
            }
            Err(e) => {
                info!(error = %e, "clipboard unavailable");
                if prompts::clipboard_fallback_prompt() {
                    Ok(())
                } else {
                    Err(Done)
                }
            }
        }
    }

    fn generate(&self) -> Result<Wordlist, Done> {
        let options = self.settings.to_options(self.flags.seed);
        match generate(&self.profile, &options) {
            Ok(words) => {
                info!(seed = words.seed(), words = words.len(), "wordlist ready");
                Ok(words)
            }
            Err(e) if e.is_out_of_memory() => {
                prompts::out_of_memory();
                Err(Done)
            }
            Err(e) => {
                prompts::generation_failed(&e.to_string());
                Err(Done)
            }
        }
    }

    /// Clipboard, file, preview, or plain lines on stdout, in that order of precedence.
    fn deliver(&mut self, words: &Wordlist) {
        if let Some(ctx) = self.clipboard.as_mut() {
            match export::copy_words(ctx, words.words()) {
                Ok(()) => prompts::clipboard_copied(words.len()),
                Err(e) => prompts::clipboard_error(&e),
            }
        } else if !self.settings.output_file_path.is_empty() {
            self.write_file(words);
        } else if self.flags.preview {
            export::print_preview(words, self.settings.preview_lines);
        } else {
            let stdout = io::stdout();
            let mut handle = BufWriter::new(stdout.lock());
            if let Err(e) = write_lines(&mut handle, words.words()).and_then(|()| handle.flush()) {
                info!(error = %e, "stdout closed early");
            }
        }

        prompts::seed_used(words.seed());
    }

    fn write_file(&self, words: &Wordlist) {
        let path = export::resolve_output_path(
            &self.settings.output_file_path,
            &self.profile,
            words.len(),
        );

        let file = match export::open_target(&path, !quiet::skip_prompt()) {
            Ok(Some(file)) => file,
            Ok(None) => return,
            Err(e) => {
                prompts::error(&format!("Failed to open {path}: {e}"));
                return;
            }
        };

        let show_progress = words.len() >= LARGE_REQUEST_THRESHOLD
            && !quiet::enabled()
            && quiet::stdout_is_tty();
        if show_progress {
            match export::write_with_progress(words.words(), file, &export::full_path(&path)) {
                Ok(Outcome::Complete(n)) => info!(written = n, "file written"),
                Ok(Outcome::Interrupted(n)) => info!(written = n, "file write interrupted"),
                Err(e) => prompts::error(&format!("Failed to write {path}: {e}")),
            }
            return;
        }

        let mut out = BufWriter::new(file);
        let written = write_lines(&mut out, words.words()).and_then(|()| out.flush());
        match written {
            Ok(()) => prompts::words_written(words.len(), &export::full_path(&path)),
            Err(e) => prompts::error(&format!("Failed to write {path}: {e}")),
        }
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        self.profile.zeroize();
    }
}
