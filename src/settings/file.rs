//! Settings file persistence.
//!
//! One line of comma-separated fields; `|` escapes a literal `,` or `|`.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::Settings;
use crate::wordlist::MAX_SYMBOLS;

const FIELD_COUNT: usize = 8;

pub fn save(path: &Path, settings: &Settings) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{},{},{},{},{},{}\n",
        settings.use_leet,
        settings.use_symbols,
        settings.max_symbols,
        settings.target_count,
        escape(&settings.symbol_weights),
        settings.keep_symbols,
        settings.preview_lines,
        escape(&settings.output_file_path),
    );

    file.write_all(data.as_bytes())?;
    Ok(())
}

pub fn load(path: &Path, settings: &mut Settings) -> std::io::Result<()> {
    if !path.exists() {
        debug!(path = %path.display(), "no settings file, writing defaults");
        return save(path, settings);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let parts = split_escaped(line.trim_end_matches(['\r', '\n']), ',');
    if parts.len() != FIELD_COUNT {
        warn!(
            path = %path.display(),
            fields = parts.len(),
            "malformed settings file, restoring defaults"
        );
        return save(path, settings);
    }

    settings.use_leet = parts[0].parse().unwrap_or(settings.use_leet);
    settings.use_symbols = parts[1].parse().unwrap_or(settings.use_symbols);
    settings.max_symbols = parts[2]
        .parse()
        .ok()
        .filter(|max| (1..=MAX_SYMBOLS).contains(max))
        .unwrap_or(settings.max_symbols);
    settings.target_count = parts[3].parse().unwrap_or(settings.target_count);
    settings.symbol_weights = parts[4].clone();
    settings.keep_symbols = parts[5].parse().unwrap_or(settings.keep_symbols);
    settings.preview_lines = parts[6].parse().unwrap_or(settings.preview_lines);
    settings.output_file_path = parts[7].clone();

    Ok(())
}

pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(format!("{}/.config/profilelist/settings", home))
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == ',' || c == '|' {
            out.push('|');
        }
        out.push(c);
    }
    out
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}
