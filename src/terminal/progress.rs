//! Three-line progress box with the stats text centered inside it.
//!
//! Written with `\r\n` line endings so it renders correctly in raw mode.

use std::io::Write;

use super::BOX_WIDTH;

/// Redraw the progress box in place. Call once with three blank lines
/// printed beforehand; every call moves the cursor up three lines first.
pub fn progress_bar_box(percent: f32, stats: &str) {
    let inner = BOX_WIDTH - 2;
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * inner as f32) as usize;

    let mut content: Vec<char> = vec![' '; inner];
    let text: Vec<char> = stats.chars().take(inner).collect();
    let start = (inner - text.len()) / 2;
    content[start..start + text.len()].copy_from_slice(&text);

    let (done, todo) = content.split_at(filled);
    let done: String = done.iter().collect();
    let todo: String = todo.iter().collect();
    let full = filled == inner;
    let empty = filled == 0;

    let mut out = String::new();
    out.push_str("\x1b[3A");

    // top
    out.push('\r');
    out.push(if empty { '┌' } else { '▗' });
    out.push_str(&"▄".repeat(filled));
    out.push_str(&"─".repeat(inner - filled));
    out.push_str(if full { "▖\r\n" } else { "┐\r\n" });

    // middle
    out.push('\r');
    out.push(if empty { '│' } else { '▐' });
    if !empty {
        out.push_str(&format!("\x1b[7m{done}\x1b[0m"));
    }
    out.push_str(&todo);
    out.push_str(if full { "▌\r\n" } else { "│\r\n" });

    // bottom
    out.push('\r');
    out.push(if empty { '└' } else { '▝' });
    out.push_str(&"▀".repeat(filled));
    out.push_str(&"─".repeat(inner - filled));
    out.push_str(if full { "▘\r\n" } else { "┘\r\n" });

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    let _ = handle.write_all(out.as_bytes());
    let _ = handle.flush();
}
