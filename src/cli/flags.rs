use std::path::PathBuf;

use clap::{ArgAction, Parser};

use profilelist::GenerateError;
use profilelist::profile::{Profile, from_yaml_file, split_csv_field};

/// Command-line flags. Profile fields given here override a `--profile` file.
#[derive(Debug, Default, Parser)]
#[command(name = "profilelist", version)]
#[command(about = "Targeted password-guess wordlists from a subject profile")]
#[command(after_help = "Run without arguments for the interactive menu.")]
pub struct CliFlags {
    /// First name
    #[arg(short = 'f', long = "first", value_name = "NAME", help_heading = "Profile")]
    pub first_name: Option<String>,

    /// Last name
    #[arg(short = 'l', long = "last", value_name = "NAME", help_heading = "Profile")]
    pub last_name: Option<String>,

    #[arg(long, value_name = "NAME", help_heading = "Profile")]
    pub partner: Option<String>,

    #[arg(long, value_name = "NAME", help_heading = "Profile")]
    pub pet: Option<String>,

    #[arg(long, value_name = "NAME", help_heading = "Profile")]
    pub company: Option<String>,

    /// Nicknames, comma-separated or repeated
    #[arg(long = "nick", value_name = "LIST", help_heading = "Profile")]
    pub nicknames: Vec<String>,

    /// Free-form keywords, comma-separated or repeated
    #[arg(short = 'k', long, value_name = "LIST", help_heading = "Profile")]
    pub keywords: Vec<String>,

    /// Significant years, comma-separated
    #[arg(long, value_name = "LIST", help_heading = "Profile")]
    pub years: Vec<String>,

    /// Extra numbers to mix in, comma-separated
    #[arg(long = "numbers", value_name = "LIST", help_heading = "Profile")]
    pub add_numbers: Vec<String>,

    /// Phone number in any format
    #[arg(long, value_name = "PHONE", help_heading = "Profile")]
    pub phone: Option<String>,

    #[arg(long, value_name = "ADDRESS", help_heading = "Profile")]
    pub email: Option<String>,

    /// Age in years, used to derive a birth year
    #[arg(long, value_name = "N", help_heading = "Profile")]
    pub age: Option<String>,

    /// YAML profile file
    #[arg(short = 'P', long = "profile", value_name = "FILE", help_heading = "Profile")]
    pub profile_file: Option<PathBuf>,

    /// Enable leetspeak variants
    #[arg(long, overrides_with = "no_leet", help_heading = "Generation")]
    pub leet: bool,

    /// Disable leetspeak variants
    #[arg(long, overrides_with = "leet", help_heading = "Generation")]
    pub no_leet: bool,

    /// Enable probabilistic symbol injection
    #[arg(short = 'S', long, help_heading = "Generation")]
    pub symbols: bool,

    /// Most symbols inserted into one word
    #[arg(
        short = 'm',
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u64).range(1..=200),
        help_heading = "Generation"
    )]
    pub max_symbols: Option<u64>,

    /// Weights for inserting 0..=max symbols, e.g. "5,3,2"
    #[arg(short = 'w', long, value_name = "LIST", help_heading = "Generation")]
    pub weights: Option<String>,

    /// Target word count (unusable values fall back to 10,000)
    #[arg(short = 'n', long, value_name = "N", help_heading = "Generation")]
    pub number: Option<String>,

    /// Replay a previous run
    #[arg(long, value_name = "SEED", help_heading = "Generation")]
    pub seed: Option<u64>,

    /// Keep separators, leet digits and symbols in stored words
    #[arg(long, help_heading = "Generation")]
    pub keep_symbols: bool,

    /// Write to file (default: <first>_<count>.txt)
    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = ".",
        help_heading = "Output"
    )]
    pub output: Option<String>,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long, help_heading = "Output")]
    pub board: bool,

    /// Show a preview box instead of the full list
    #[arg(short = 'p', long, help_heading = "Output")]
    pub preview: bool,

    /// Skip the large request confirmation
    #[arg(short = 'y', long, help_heading = "Output")]
    pub yes: bool,

    /// Suppress everything except the words
    #[arg(short = 'q', long, help_heading = "Output")]
    pub quiet: bool,

    /// Start from saved settings instead of defaults
    #[arg(short = 's', long, help_heading = "Settings")]
    pub saved: bool,

    /// Persist the effective generation settings
    #[arg(long, help_heading = "Settings")]
    pub save: bool,

    /// Raise log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, help_heading = "Settings")]
    pub verbose: u8,
}

impl CliFlags {
    /// Build the profile from `--profile` plus any field flags.
    pub fn profile(&self) -> Result<Profile, GenerateError> {
        let mut profile = match &self.profile_file {
            Some(path) => from_yaml_file(path)?,
            None => Profile::default(),
        };

        let scalars = [
            (&mut profile.first_name, &self.first_name),
            (&mut profile.last_name, &self.last_name),
            (&mut profile.partner, &self.partner),
            (&mut profile.pet, &self.pet),
            (&mut profile.company, &self.company),
            (&mut profile.phone, &self.phone),
            (&mut profile.email, &self.email),
            (&mut profile.age, &self.age),
        ];
        for (field, flag) in scalars {
            if let Some(value) = flag {
                *field = value.trim().to_string();
            }
        }

        let lists = [
            (&mut profile.nicknames, &self.nicknames),
            (&mut profile.keywords, &self.keywords),
            (&mut profile.years, &self.years),
            (&mut profile.add_numbers, &self.add_numbers),
        ];
        for (field, flag) in lists {
            field.extend(flag.iter().flat_map(|raw| split_csv_field(raw)));
        }

        Ok(profile)
    }

    /// `Some(true)` for `--leet`, `Some(false)` for `--no-leet`.
    pub fn leet(&self) -> Option<bool> {
        match (self.leet, self.no_leet) {
            (_, true) => Some(false),
            (true, false) => Some(true),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliFlags {
        CliFlags::try_parse_from(std::iter::once("profilelist").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn profile_from_flags() {
        let flags = parse(&[
            "-f", " John ", "-l", "Smith", "--nick", "jj, johnny", "--nick", "j",
            "--years", "1990,,2015", "--age", "34",
        ]);
        let profile = flags.profile().unwrap();
        assert_eq!(profile.first_name, "John");
        assert_eq!(profile.last_name, "Smith");
        assert_eq!(profile.nicknames, vec!["jj", "johnny", "j"]);
        assert_eq!(profile.years, vec!["1990", "2015"]);
        assert_eq!(profile.age, "34");
    }

    #[test]
    fn output_without_value_means_default_name() {
        assert_eq!(parse(&["-f", "a", "-o"]).output.as_deref(), Some("."));
        assert_eq!(parse(&["-o", "out/list"]).output.as_deref(), Some("out/list"));
        assert_eq!(parse(&["-f", "a"]).output, None);
    }

    #[test]
    fn leet_toggle() {
        assert_eq!(parse(&["-f", "a"]).leet(), None);
        assert_eq!(parse(&["--leet"]).leet(), Some(true));
        assert_eq!(parse(&["--no-leet"]).leet(), Some(false));
    }

    #[test]
    fn max_symbols_range() {
        assert_eq!(parse(&["-m", "200"]).max_symbols, Some(200));
        assert!(CliFlags::try_parse_from(["profilelist", "-m", "0"]).is_err());
        assert!(CliFlags::try_parse_from(["profilelist", "-m", "201"]).is_err());
    }

    #[test]
    fn verbosity_counts() {
        assert_eq!(parse(&["-vv"]).verbose, 2);
    }
}
