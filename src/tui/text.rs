use profilelist::{Profile, Settings};

use crate::terminal::{
    DIM, RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt, box_rule, box_top,
    clear, flush, format_number, print_error,
};

pub fn enter_prompt() -> &'static str {
    "Enter menu option (or press Enter to generate)"
}

/// Labels for the profile form, in menu order.
pub const PROFILE_FIELDS: [&str; 12] = [
    "First name",
    "Last name",
    "Partner",
    "Pet",
    "Company",
    "Nicknames",
    "Keywords",
    "Years",
    "Extra numbers",
    "Phone",
    "Email",
    "Age",
];

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

fn show(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{DIM}-{RESET}")
    } else {
        value.to_string()
    }
}

fn show_list(values: &[String]) -> String {
    show(&values.join(", "))
}

/// Blank line or the pending error under a menu.
fn print_status(error: Option<&str>) {
    match error {
        Some(msg) => print_error(msg),
        None => println!(),
    }
    flush();
}

pub fn print_help() {
    box_top("Profilelist");
    box_line_center("Targeted password-guess wordlists");
    box_line("");
    box_line("For authorized credential audits and password-strength reviews.");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: run without arguments. Fill in the profile,");
    box_line("     tune generation, press Enter to generate and save.");
    box_line("  2) Client: pass profile fields as flags. Words go to stdout,");
    box_line("     a file, or the clipboard.");
    box_line("");
    box_line("USAGE:");
    box_line("  profilelist [OPTIONS]");
    box_line("");
    box_line(" Profile:");
    box_opt("  -f, --first <NAME>", "First name");
    box_opt("  -l, --last <NAME>", "Last name");
    box_opt("    --partner/pet/company", "Other names");
    box_opt("  -k, --keywords, --nick", "Comma-separated lists, repeatable");
    box_opt("      --years, --numbers", "Significant years and extra numbers");
    box_opt("      --phone/email/age", "Contact details and age");
    box_opt("  -P, --profile <FILE>", "Load a YAML profile (kebab-case keys)");
    box_line("");
    box_line(" Generation:");
    box_opt("      --leet / --no-leet", "Leetspeak variants (default: on)");
    box_opt("  -S, --symbols", "Probabilistic symbol injection");
    box_opt("  -m, --max-symbols <N>", "Most symbols per word, 1-200 (default: 2)");
    box_opt("  -w, --weights <LIST>", "Weights for 0..=max symbols, e.g. 5,3,2");
    box_opt("  -n, --number <N>", "Target word count (default: 5,000)");
    box_opt("      --seed <SEED>", "Replay a previous run");
    box_opt("      --keep-symbols", "Store words as produced instead of normalized");
    box_line("");
    box_line(" Output:");
    box_opt("  -o, --output [FILE]", "Write to file (default: <first>_<count>.txt)");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -p, --preview", "Print a preview instead of the full list");
    box_opt("  -y, --yes", "Skip the large request confirmation");
    box_opt("  -q, --quiet", "Suppress everything except the words");
    box_line("");
    box_line(" Settings:");
    box_opt("  -s, --saved", "Start from saved settings");
    box_opt("      --save", "Save the effective settings");
    box_opt("  -v, --verbose", "More diagnostics on stderr (repeatable)");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  profilelist -f John -l Smith --years 1990");
    box_line("  profilelist -P target.yaml -S -m 3 -w 5,3,2,1 -n 50000 -o");
    box_line("  profilelist -f Ann --phone 555-867-5309 --seed 42 -p");
    box_line("");
    box_bottom();
    println!();
}

pub fn print_file_exists(file_name: &str) {
    print_error(&format!("File {file_name} already exists."));
    println!();
    box_top("");
    box_line_center("a) append | o) overwrite");
    box_bottom();
    println!();
    flush();
}

pub fn print_main_menu(profile: &Profile, error: Option<&str>) {
    let name = [profile.first_name.trim(), profile.last_name.trim()]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    box_top("Main Menu");
    box_line("");
    box_line(&format!("  Target: {}", show(&name)));
    box_line("");
    box_line("  1) profile");
    box_line("  2) generation settings");
    box_line("  3) help");
    box_line("  4) quit");
    box_line("");
    box_bottom();
    print_status(error);
}

pub fn print_profile_menu(profile: &Profile, error: Option<&str>) {
    let values = [
        show(&profile.first_name),
        show(&profile.last_name),
        show(&profile.partner),
        show(&profile.pet),
        show(&profile.company),
        show_list(&profile.nicknames),
        show_list(&profile.keywords),
        show_list(&profile.years),
        show_list(&profile.add_numbers),
        show(&profile.phone),
        show(&profile.email),
        show(&profile.age),
    ];

    clear();
    box_top("Profile");
    box_line_center("Esc/CTRL+Q: cancel | CTRL+U: clear input");
    box_line("");
    box_line(&format!("{UNDERLINE}Names{RESET}:"));
    for (i, (label, value)) in PROFILE_FIELDS.iter().zip(&values).enumerate() {
        match i {
            5 => {
                box_line("");
                box_line(&format!("{UNDERLINE}Lists{RESET} (comma-separated):"));
            }
            9 => {
                box_line("");
                box_line(&format!("{UNDERLINE}Contact{RESET}:"));
            }
            _ => {}
        }
        box_line(&format!("  {:>2}) {label}: {value}", i + 1));
    }
    box_line("");
    box_rule();
    box_line("     l) load YAML profile  |  c) clear profile  |  Enter) back");
    box_bottom();
    print_status(error);
}

pub fn print_settings_menu(settings: &Settings, seed: Option<u64>, error: Option<&str>) {
    let target = match settings.target_count {
        0 => "unbounded".to_string(),
        n => format_number(n),
    };
    let seed = seed.map_or_else(|| "random".to_string(), |s| s.to_string());

    clear();
    box_top("Generation Settings");
    box_line_center("Esc/CTRL+Q: cancel | CTRL+U: clear input");
    box_line("");
    box_line(&format!("{UNDERLINE}Variants{RESET}:"));
    box_line(&format!("  1) Leetspeak: {}", on_off(settings.use_leet)));
    box_line(&format!("  2) Symbol injection: {}", on_off(settings.use_symbols)));
    box_line(&format!("  3) Max symbols per word: {}", settings.max_symbols));
    box_line(&format!("  4) Symbol count weights: {}", show(&settings.symbol_weights)));
    box_line("      - One weight per count 0..=max, e.g. 5,3,2");
    box_line(&format!("  5) Keep symbols in output: {}", on_off(settings.keep_symbols)));
    box_line("");
    box_line(&format!("{UNDERLINE}Size{RESET}:"));
    box_line(&format!("  6) Target word count: {target}"));
    box_line(&format!("  7) Seed: {seed}"));
    box_line("");
    box_line(&format!("{UNDERLINE}Output{RESET}:"));
    box_line(&format!("  8) Preview lines: {}", format_number(settings.preview_lines)));
    box_line(&format!("  9) Output file path: {}", show(&settings.output_file_path)));
    box_line("      - Blank asks after each run");
    box_line("");
    box_rule();
    box_line("     r) load defaults  |  f) load saved  |  s) save  |  e) exit");
    box_bottom();
    print_status(error);
}
