//! Wordlist persistence: one candidate per line, UTF-8, newline-terminated,
//! in generation order.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::GenerateError;
use crate::profile::{Profile, normalize};

const FALLBACK_STEM: &str = "profilelist";

/// `<first_name>_<count>.txt`, falling back to a fixed stem.
pub fn default_file_name(profile: &Profile, count: usize) -> String {
    let stem = normalize(&profile.first_name);
    let stem = if stem.is_empty() { FALLBACK_STEM } else { &stem };
    format!("{stem}_{count}.txt")
}

/// Open `path` for writing, creating missing parent directories.
pub fn open_output(path: &Path, append: bool) -> io::Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)
}

pub fn write_lines<W: Write>(out: &mut W, words: &[String]) -> io::Result<()> {
    for word in words {
        out.write_all(word.as_bytes())?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

pub(crate) fn write_file(path: &Path, words: &[String]) -> Result<(), GenerateError> {
    let mut out = BufWriter::new(open_output(path, false)?);
    write_lines(&mut out, words)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_from_first_name() {
        let profile = Profile {
            first_name: "Mary-Jane".into(),
            ..Default::default()
        };
        assert_eq!(default_file_name(&profile, 120), "maryjane_120.txt");
        assert_eq!(default_file_name(&Profile::default(), 0), "profilelist_0.txt");
    }

    #[test]
    fn lines_are_newline_terminated() {
        let mut buf = Vec::new();
        write_lines(&mut buf, &["a".to_string(), "b!".to_string()]).unwrap();
        assert_eq!(buf, b"a\nb!\n");

        let mut empty = Vec::new();
        write_lines(&mut empty, &[]).unwrap();
        assert!(empty.is_empty());
    }
}
