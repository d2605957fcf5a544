//! Wordlist delivery: output paths, previews, files and the clipboard.

mod clipboard;
mod progress;

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use profilelist::{Profile, Wordlist};
use profilelist::wordlist::output::{default_file_name, open_output};

use crate::tui::file_exists_menu;

pub use clipboard::{copy_words, open_clipboard};
pub use progress::{Outcome, write_with_progress};

/// Turn a user-supplied output target into a `.txt` path.
///
/// `.` or a trailing `/` names a directory, which gets the default file name.
pub fn resolve_output_path(raw: &str, profile: &Profile, count: usize) -> String {
    let raw = raw.trim();
    let name = default_file_name(profile, count);
    if raw.is_empty() || raw == "." {
        name
    } else if raw.ends_with('/') {
        format!("{raw}{name}")
    } else if !raw.ends_with(".txt") {
        format!("{raw}.txt")
    } else {
        raw.to_string()
    }
}

pub fn full_path(path: &str) -> String {
    std::fs::canonicalize(path)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| path.to_string())
}

/// Open the output file. An existing file triggers the append/overwrite
/// menu when `ask` is set, otherwise it is overwritten.
/// `Ok(None)` means the user backed out.
pub fn open_target(path: &str, ask: bool) -> io::Result<Option<File>> {
    let append = if ask && Path::new(path).exists() {
        match file_exists_menu(path) {
            Some(append) => append,
            None => return Ok(None),
        }
    } else {
        false
    };
    open_output(Path::new(path), append).map(Some)
}

/// Header, the `shown` words, and a footer when `total` is larger.
pub fn write_preview<W: Write>(out: &mut W, shown: &[String], total: usize) -> io::Result<()> {
    writeln!(out, "Generated {total} words.")?;
    for word in shown {
        writeln!(out, "{word}")?;
    }
    if total > shown.len() {
        writeln!(out, "... (showing first {} of {total})", shown.len())?;
    }
    Ok(())
}

pub fn print_preview(words: &Wordlist, lines: usize) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = write_preview(&mut handle, words.preview(lines), words.len());
    let _ = handle.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> Profile {
        Profile {
            first_name: "John".into(),
            ..Default::default()
        }
    }

    #[test]
    fn output_path_rules() {
        let profile = john();
        assert_eq!(resolve_output_path(".", &profile, 50), "john_50.txt");
        assert_eq!(resolve_output_path("", &profile, 50), "john_50.txt");
        assert_eq!(resolve_output_path("out/", &profile, 7), "out/john_7.txt");
        assert_eq!(resolve_output_path("lists/target", &profile, 7), "lists/target.txt");
        assert_eq!(resolve_output_path("a.txt", &profile, 7), "a.txt");
    }

    #[test]
    fn preview_footer_only_when_truncated() {
        let words: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();

        let mut short = Vec::new();
        write_preview(&mut short, &words[..2], words.len()).unwrap();
        assert_eq!(
            String::from_utf8(short).unwrap(),
            "Generated 3 words.\na\nb\n... (showing first 2 of 3)\n"
        );

        let mut full = Vec::new();
        write_preview(&mut full, &words, words.len()).unwrap();
        assert_eq!(String::from_utf8(full).unwrap(), "Generated 3 words.\na\nb\nc\n");
    }

    #[test]
    fn open_target_overwrites_without_asking() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/words.txt");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "old\n").unwrap();

        let path = path.to_str().unwrap();
        let mut file = open_target(path, false).unwrap().unwrap();
        file.write_all(b"new\n").unwrap();
        drop(file);
        assert_eq!(std::fs::read_to_string(path).unwrap(), "new\n");
    }
}
