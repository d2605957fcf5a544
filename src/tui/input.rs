//! Single-line editors for raw-mode prompts.
//!
//! Esc or Ctrl+Q cancels, Ctrl+U clears, Ctrl+C quits the program.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, format_number, reset_terminal};

#[derive(Debug, PartialEq, Eq)]
enum Action {
    Submit,
    Cancel,
    Quit,
    Redraw,
    Ignore,
}

/// Editable buffer. `cursor` is a char index in `0..=chars.len()`.
struct LineEditor {
    chars: Vec<char>,
    cursor: usize,
    digits_only: bool,
}

impl LineEditor {
    fn new(initial: &str, digits_only: bool) -> Self {
        let chars: Vec<char> = initial
            .chars()
            .filter(|c| !digits_only || c.is_ascii_digit())
            .collect();
        let cursor = chars.len();
        Self {
            chars,
            cursor,
            digits_only,
        }
    }

    fn text(&self) -> String {
        self.chars.iter().collect()
    }

    fn handle(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => Action::Quit,
            KeyCode::Char('q') if ctrl => Action::Cancel,
            KeyCode::Char('u') if ctrl => {
                self.chars.clear();
                self.cursor = 0;
                Action::Redraw
            }
            KeyCode::Esc => Action::Cancel,
            KeyCode::Enter => Action::Submit,
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.chars.remove(self.cursor);
                Action::Redraw
            }
            KeyCode::Delete if self.cursor < self.chars.len() => {
                self.chars.remove(self.cursor);
                Action::Redraw
            }
            KeyCode::Left if self.cursor > 0 => {
                self.cursor -= 1;
                Action::Redraw
            }
            KeyCode::Right if self.cursor < self.chars.len() => {
                self.cursor += 1;
                Action::Redraw
            }
            KeyCode::Home => {
                self.cursor = 0;
                Action::Redraw
            }
            KeyCode::End => {
                self.cursor = self.chars.len();
                Action::Redraw
            }
            KeyCode::Char(c) if !ctrl && (!self.digits_only || c.is_ascii_digit()) => {
                self.chars.insert(self.cursor, c);
                self.cursor += 1;
                Action::Redraw
            }
            _ => Action::Ignore,
        }
    }

    /// Display text and the cursor offset within it.
    fn display(&self) -> (String, usize) {
        if !self.digits_only {
            return (self.text(), self.cursor);
        }
        let digits = self.text();
        let shown = match digits.parse::<usize>() {
            Ok(n) if !digits.starts_with('0') => format_number(n),
            _ => digits.clone(),
        };
        let offset = if shown.len() == digits.len() {
            self.cursor
        } else {
            grouped_offset(digits.len(), self.cursor)
        };
        (shown, offset)
    }
}

/// Cursor offset in a comma-grouped number, given the offset among its
/// `len` raw digits.
fn grouped_offset(len: usize, cursor: usize) -> usize {
    if cursor == 0 {
        return 0;
    }
    let lead = match len % 3 {
        0 => 3,
        r => r,
    };
    let commas = if cursor <= lead {
        0
    } else {
        1 + (cursor - lead - 1) / 3
    };
    cursor + commas
}

fn render(prompt: &str, editor: &LineEditor) {
    let (shown, offset) = editor.display();
    let column = prompt.chars().count() + 2 + offset + 1;
    print!("\r\x1b[2K{prompt}: {shown}\x1b[{column}G");
    flush();
}

fn edit(prompt: &str, mut editor: LineEditor) -> Option<String> {
    let guard = match RawModeGuard::new() {
        Ok(guard) => guard,
        Err(_) => return Some(editor.text()),
    };

    render(prompt, &editor);

    let result = loop {
        match read() {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                match editor.handle(key) {
                    Action::Submit => break Some(editor.text()),
                    Action::Cancel => break None,
                    Action::Quit => {
                        drop(guard);
                        reset_terminal();
                        println!();
                        std::process::exit(0);
                    }
                    Action::Redraw => render(prompt, &editor),
                    Action::Ignore => {}
                }
            }
            Ok(_) => {}
            Err(_) => break None,
        }
    };

    drop(guard);
    println!();
    result
}

/// Free text prompt. `None` when cancelled.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    edit(prompt, LineEditor::new(initial_value, false))
}

/// Digits only, shown with thousands separators. Blank input is zero.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let initial = if initial_value > 0 {
        initial_value.to_string()
    } else {
        String::new()
    };
    let digits = edit(prompt, LineEditor::new(&initial, true))?;
    if digits.is_empty() {
        Some(0)
    } else {
        digits.parse().ok()
    }
}

/// y/N question answered through the line editor.
pub fn confirm(question: &str) -> bool {
    get_editable_input(&format!("{question} [y/N]"), "")
        .map(|answer| matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
        .unwrap_or(false)
}
