use std::io::{BufWriter, Write};

use tracing::info;
use zeroize::Zeroize;

use profilelist::profile::{from_yaml_file, split_csv_field};
use profilelist::wordlist::output::{default_file_name, write_lines};
use profilelist::wordlist::{
    LARGE_REQUEST_THRESHOLD, MAX_SYMBOLS, UNBOUNDED_TARGET, parse_prob_weights,
};
use profilelist::{Profile, Settings, Wordlist, generate};

use crate::export::{self, Outcome};
use crate::terminal::{
    box_bottom, box_line, box_top, clear, flush, format_number, print_error, reset_terminal,
};

use super::{
    PROFILE_FIELDS, confirm, enter_prompt, get_editable_input, get_numeric_input,
    print_file_exists, print_help, print_main_menu, print_profile_menu, print_settings_menu,
};

const INVALID_OPTION: &str = "Invalid input, please enter a valid menu option...";

/// Where a submenu hands control next.
#[derive(Debug, PartialEq, Eq)]
pub enum MenuAction {
    Stay,
    Generate,
    Back,
    Quit,
}

/// Profile, settings and seed shared by every menu.
struct Session {
    profile: Profile,
    settings: Settings,
    seed: Option<u64>,
}

impl Drop for Session {
    fn drop(&mut self) {
        self.profile.zeroize();
    }
}

/// `Some(true)` to append, `Some(false)` to overwrite, `None` if cancelled.
pub fn file_exists_menu(path: &str) -> Option<bool> {
    print_file_exists(path);

    loop {
        let answer = get_editable_input("Enter your choice", "")?;
        match answer.trim().to_lowercase().as_str() {
            "a" => return Some(true),
            "o" => return Some(false),
            _ => {
                // Error goes on the blank line above the prompt.
                print!(
                    "\x1b[2A\x1b[2K\x1b[31mInvalid choice. Please enter 'a' or 'o'.\x1b[0m\n\x1b[2K"
                );
                flush();
            }
        }
    }
}

pub fn gen_main_menu() {
    reset_terminal();
    clear();

    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        println!("Error loading settings: {e}");
        Settings::default()
    });
    let mut session = Session {
        profile: Profile::default(),
        settings,
        seed: None,
    };
    let mut error: Option<String> = None;

    loop {
        print_main_menu(&session.profile, error.take().as_deref());

        let input = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => {
                clear();
                continue;
            }
        };

        let action = match input.trim() {
            "" => MenuAction::Generate,
            "1" => {
                edit_profile(&mut session.profile);
                MenuAction::Stay
            }
            "2" => update_settings(&mut session),
            "3" => {
                clear();
                print_help();
                MenuAction::Stay
            }
            "4" => MenuAction::Quit,
            _ => {
                clear();
                error = Some("Invalid option.".to_string());
                MenuAction::Stay
            }
        };

        match action {
            MenuAction::Generate => {
                clear();
                if let Err(msg) = run_generation(&session) {
                    clear();
                    error = Some(msg);
                }
            }
            MenuAction::Quit => {
                clear();
                break;
            }
            MenuAction::Stay | MenuAction::Back => {}
        }
    }
}

// ============================================================================
// Generation
// ============================================================================

fn run_generation(session: &Session) -> Result<(), String> {
    let settings = &session.settings;
    if session.profile.is_empty() {
        return Err("Profile is empty: fill in at least one field (menu 1).".to_string());
    }
    if settings.use_symbols && settings.max_symbols < 1 {
        return Err("Max symbols must be >= 1 when symbols are enabled.".to_string());
    }

    let target = match settings.target_count {
        0 => UNBOUNDED_TARGET,
        n => n,
    };
    if target >= LARGE_REQUEST_THRESHOLD
        && !confirm(&format!("Generate up to {} words?", format_number(target)))
    {
        clear();
        return Ok(());
    }

    println!("Generating...");
    flush();
    let options = settings.to_options(session.seed);
    let words = generate(&session.profile, &options).map_err(|e| {
        if e.is_out_of_memory() {
            "Generation ran out of memory. Try a smaller target or disable symbols.".to_string()
        } else {
            format!("Failed to generate: {e}")
        }
    })?;
    info!(seed = words.seed(), words = words.len(), "wordlist ready");

    clear();
    export::print_preview(&words, settings.preview_lines);
    println!();
    box_top("Result");
    box_line(&format!(
        "{} word(s) • seed {} (set it in settings to replay)",
        format_number(words.len()),
        words.seed()
    ));
    box_bottom();
    println!();

    save_wordlist(settings, &session.profile, &words);

    let _ = get_editable_input("Press Enter to return", "");
    clear();
    Ok(())
}

fn save_wordlist(settings: &Settings, profile: &Profile, words: &Wordlist) {
    let raw = if settings.output_file_path.is_empty() {
        let suggested = default_file_name(profile, words.len());
        match get_editable_input("Save to file (Esc to skip)", &suggested) {
            Some(path) if !path.trim().is_empty() => path,
            _ => return,
        }
    } else {
        settings.output_file_path.clone()
    };

    let path = export::resolve_output_path(&raw, profile, words.len());
    let file = match export::open_target(&path, true) {
        Ok(Some(file)) => file,
        Ok(None) => return,
        Err(e) => {
            print_error(&format!("Failed to open {path}: {e}"));
            return;
        }
    };
    let full = export::full_path(&path);

    if words.len() >= LARGE_REQUEST_THRESHOLD {
        match export::write_with_progress(words.words(), file, &full) {
            Ok(Outcome::Complete(n)) => info!(written = n, "file written"),
            Ok(Outcome::Interrupted(n)) => info!(written = n, "file write interrupted"),
            Err(e) => print_error(&format!("Failed to write {path}: {e}")),
        }
        return;
    }

    let mut out = BufWriter::new(file);
    match write_lines(&mut out, words.words()).and_then(|()| out.flush()) {
        Ok(()) => {
            box_top("Saved");
            box_line(&format!("{} word(s) \u{2192} {full}", format_number(words.len())));
            box_bottom();
        }
        Err(e) => print_error(&format!("Failed to write {path}: {e}")),
    }
}

// ============================================================================
// Profile form
// ============================================================================

enum Field<'a> {
    Text(&'a mut String),
    List(&'a mut Vec<String>),
}

/// Profile field behind a zero-based `PROFILE_FIELDS` index.
fn field_mut(profile: &mut Profile, index: usize) -> Option<Field<'_>> {
    let field = match index {
        0 => Field::Text(&mut profile.first_name),
        1 => Field::Text(&mut profile.last_name),
        2 => Field::Text(&mut profile.partner),
        3 => Field::Text(&mut profile.pet),
        4 => Field::Text(&mut profile.company),
        5 => Field::List(&mut profile.nicknames),
        6 => Field::List(&mut profile.keywords),
        7 => Field::List(&mut profile.years),
        8 => Field::List(&mut profile.add_numbers),
        9 => Field::Text(&mut profile.phone),
        10 => Field::Text(&mut profile.email),
        11 => Field::Text(&mut profile.age),
        _ => return None,
    };
    Some(field)
}

fn edit_field(profile: &mut Profile, index: usize) {
    let Some(label) = PROFILE_FIELDS.get(index) else {
        return;
    };
    match field_mut(profile, index) {
        Some(Field::Text(value)) => {
            if let Some(mut input) = get_editable_input(label, value) {
                value.zeroize();
                *value = input.trim().to_string();
                input.zeroize();
            }
        }
        Some(Field::List(values)) => {
            if let Some(mut input) = get_editable_input(label, &values.join(", ")) {
                values.zeroize();
                *values = split_csv_field(&input);
                input.zeroize();
            }
        }
        None => {}
    }
}

fn edit_profile(profile: &mut Profile) {
    let mut error: Option<String> = None;

    loop {
        print_profile_menu(profile, error.take().as_deref());

        let Some(choice) = get_editable_input("Enter field number", "") else {
            break;
        };

        match choice.trim() {
            "" => break,
            "c" => profile.zeroize(),
            "l" => {
                let path = get_editable_input("YAML profile path", "").unwrap_or_default();
                if path.trim().is_empty() {
                    continue;
                }
                match from_yaml_file(path.trim()) {
                    Ok(loaded) => {
                        profile.zeroize();
                        *profile = loaded;
                    }
                    Err(e) => error = Some(format!("Error loading profile: {e}")),
                }
            }
            n => match n.parse::<usize>() {
                Ok(i) if (1..=PROFILE_FIELDS.len()).contains(&i) => edit_field(profile, i - 1),
                _ => error = Some(INVALID_OPTION.to_string()),
            },
        }
    }

    clear();
}

// ============================================================================
// Settings menu
// ============================================================================

fn update_settings(session: &mut Session) -> MenuAction {
    let mut error: Option<String> = None;

    loop {
        print_settings_menu(&session.settings, session.seed, error.take().as_deref());

        let Some(choice) = get_editable_input(enter_prompt(), "") else {
            clear();
            return MenuAction::Back;
        };

        let choice = choice.trim();
        let result = match choice.parse::<usize>() {
            _ if choice.is_empty() => Ok(MenuAction::Generate),
            Ok(n) => menu_options(n, session).map(|()| MenuAction::Stay),
            Err(_) => command_options(choice, &mut session.settings),
        };

        match result {
            Ok(MenuAction::Stay) => {}
            Ok(action) => return action,
            Err(msg) => error = Some(msg),
        }
    }
}

fn read_bool() -> Result<Option<bool>, String> {
    match get_editable_input("Enter 't' or 'f'", "").as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some("t") => Ok(Some(true)),
        Some("f") => Ok(Some(false)),
        Some(_) => Err("Invalid input, please enter 't' or 'f'...".to_string()),
    }
}

fn menu_options(choice: usize, session: &mut Session) -> Result<(), String> {
    let settings = &mut session.settings;
    match choice {
        1 => {
            if let Some(on) = read_bool()? {
                settings.use_leet = on;
            }
        }
        2 => {
            if let Some(on) = read_bool()? {
                settings.use_symbols = on;
            }
        }
        3 => {
            if let Some(max) = get_numeric_input("Max symbols per word", settings.max_symbols) {
                if !(1..=MAX_SYMBOLS).contains(&max) {
                    return Err(format!("Max symbols must be between 1 and {MAX_SYMBOLS}."));
                }
                settings.max_symbols = max;
            }
        }
        4 => {
            let Some(input) = get_editable_input("Weights for 0..=max", &settings.symbol_weights)
            else {
                return Ok(());
            };
            let weights = input.trim();
            if !weights.is_empty() && parse_prob_weights(weights, settings.max_symbols).is_none() {
                return Err(format!(
                    "Enter {} non-negative weights (counts 0..={}), not all zero.",
                    settings.max_symbols + 1,
                    settings.max_symbols
                ));
            }
            settings.symbol_weights = weights.to_string();
        }
        5 => {
            if let Some(on) = read_bool()? {
                settings.keep_symbols = on;
            }
        }
        6 => {
            let prompt = "Target word count (0 = unbounded)";
            if let Some(n) = get_numeric_input(prompt, settings.target_count) {
                settings.target_count = n;
            }
        }
        7 => {
            let current = session.seed.map(|s| s.to_string()).unwrap_or_default();
            let Some(input) = get_editable_input("Seed (blank = random)", &current) else {
                return Ok(());
            };
            session.seed = match input.trim() {
                "" => None,
                s => Some(
                    s.parse()
                        .map_err(|_| "Invalid input, please enter a whole number...".to_string())?,
                ),
            };
        }
        8 => {
            if let Some(n) = get_numeric_input("Preview lines", settings.preview_lines) {
                settings.preview_lines = n;
            }
        }
        9 => {
            if let Some(path) = get_editable_input("Output file path", &settings.output_file_path) {
                settings.output_file_path = path.trim().to_string();
            }
        }
        _ => return Err(INVALID_OPTION.to_string()),
    }
    Ok(())
}

/// Letter commands; several may be chained, e.g. `rs`.
fn command_options(choice: &str, settings: &mut Settings) -> Result<MenuAction, String> {
    for ch in choice.chars() {
        match ch {
            'r' => *settings = Settings::default(),
            'f' => {
                *settings = Settings::load_from_file()
                    .map_err(|e| format!("Error loading settings: {e}"))?;
            }
            's' => settings
                .save_to_file()
                .map_err(|e| format!("Error saving settings: {e}"))?,
            'e' => return Ok(MenuAction::Quit),
            _ => return Err(INVALID_OPTION.to_string()),
        }
    }
    Ok(MenuAction::Stay)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_indices_follow_menu_labels() {
        let mut profile = Profile::default();
        for (i, label) in PROFILE_FIELDS.iter().enumerate() {
            match field_mut(&mut profile, i) {
                Some(Field::Text(value)) => value.push_str(label),
                Some(Field::List(values)) => values.push(label.to_string()),
                None => panic!("no field for {label}"),
            }
        }
        assert!(field_mut(&mut profile, PROFILE_FIELDS.len()).is_none());

        assert_eq!(profile.first_name, "First name");
        assert_eq!(profile.nicknames, vec!["Nicknames"]);
        assert_eq!(profile.add_numbers, vec!["Extra numbers"]);
        assert_eq!(profile.phone, "Phone");
        assert_eq!(profile.age, "Age");
    }

    #[test]
    fn reset_and_exit_commands() {
        let mut settings = Settings {
            use_symbols: true,
            max_symbols: 9,
            ..Default::default()
        };
        assert_eq!(command_options("r", &mut settings), Ok(MenuAction::Stay));
        assert_eq!(settings, Settings::default());

        assert_eq!(command_options("re", &mut settings), Ok(MenuAction::Quit));
        assert_eq!(command_options("x", &mut settings), Err(INVALID_OPTION.to_string()));
    }
}
