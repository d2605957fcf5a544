//! Box drawing at a fixed 74 column width.

pub const BOX_WIDTH: usize = 74;
const INNER: usize = BOX_WIDTH - 4;

/// ┌─ Title ──────┐
pub fn box_top(title: &str) {
    let fill = BOX_WIDTH - 2;
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(fill));
    } else {
        let head = format!("─ {title} ");
        let rest = fill.saturating_sub(head.chars().count());
        println!("┌{head}{}┐", "─".repeat(rest));
    }
}

/// └──────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// ├──────────────┤
pub fn box_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

/// │ content      │
pub fn box_line(content: &str) {
    let pad = INNER.saturating_sub(visible_width(content));
    println!("│ {content}{} │", " ".repeat(pad));
}

/// │   content    │
pub fn box_line_center(content: &str) {
    let pad = INNER.saturating_sub(visible_width(content));
    let left = pad / 2;
    println!("│ {}{content}{} │", " ".repeat(left), " ".repeat(pad - left));
}

/// Help row: flag column plus a description wrapped to the remaining width.
pub fn box_opt(flag: &str, desc: &str) {
    const FLAG_COL: usize = 27;
    let desc_col = INNER - FLAG_COL;

    let mut lines: Vec<String> = Vec::new();
    for word in desc.split_whitespace() {
        match lines.last_mut() {
            Some(line) if line.len() + 1 + word.len() <= desc_col => {
                line.push(' ');
                line.push_str(word);
            }
            _ => lines.push(word.to_string()),
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }

    let flag: String = flag.chars().take(FLAG_COL).collect();
    let width = FLAG_COL;
    for (i, line) in lines.iter().enumerate() {
        let left = if i == 0 { flag.as_str() } else { "" };
        box_line(&format!("{left:<width$}{line}"));
    }
}

/// Center `text` in the box width without borders.
pub fn print_centered(text: &str) {
    let width = visible_width(text);
    let left = BOX_WIDTH.saturating_sub(width) / 2;
    println!("{}{text}", " ".repeat(left));
}

/// Display width, skipping ANSI SGR sequences.
pub(crate) fn visible_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        match (in_escape, c) {
            (false, '\x1b') => in_escape = true,
            (true, 'm') => in_escape = false,
            (true, _) => {}
            (false, _) => width += 1,
        }
    }
    width
}
