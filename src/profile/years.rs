//! Year set derivation.

use std::collections::BTreeSet;

use chrono::Datelike;

use super::Profile;

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Birth year implied by `age`, plus its two-digit form. Empty when the age
/// is missing or not a number.
pub fn years_from_age(age: &str, current_year: i32) -> Vec<String> {
    let Ok(age) = age.trim().parse::<i32>() else {
        return Vec::new();
    };
    let Some(birth) = current_year.checked_sub(age) else {
        return Vec::new();
    };
    let birth = birth.to_string();
    let short = two_digit(&birth).to_string();
    vec![birth, short]
}

/// Explicit numeric `years` entries merged with the age-derived years.
pub fn year_set(profile: &Profile, current_year: i32) -> Vec<String> {
    profile
        .years
        .iter()
        .map(|y| y.trim())
        .filter(|y| !y.is_empty() && y.chars().all(|c| c.is_ascii_digit()))
        .map(String::from)
        .chain(years_from_age(&profile.age, current_year))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Last two characters of a year string (the whole string when shorter).
pub(crate) fn two_digit(year: &str) -> &str {
    let start = year
        .char_indices()
        .rev()
        .nth(1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    &year[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_yields_birth_year() {
        assert_eq!(years_from_age("30", 2025), vec!["1995", "95"]);
        assert_eq!(years_from_age(" 7 ", 2025), vec!["2018", "18"]);
    }

    #[test]
    fn bad_age_is_silently_empty() {
        assert!(years_from_age("", 2025).is_empty());
        assert!(years_from_age("thirty", 2025).is_empty());
        assert!(years_from_age("3.5", 2025).is_empty());
        assert!(years_from_age(&i32::MIN.to_string(), 2025).is_empty());
        assert!(years_from_age(&i32::MAX.to_string(), -2).is_empty());
    }

    #[test]
    fn year_set_merges_and_drops_non_numeric() {
        let profile = Profile {
            years: vec!["2001".into(), "summer".into(), "1995".into(), " ".into()],
            age: "30".into(),
            ..Default::default()
        };
        assert_eq!(year_set(&profile, 2025), vec!["1995", "2001", "95"]);
    }

    #[test]
    fn two_digit_suffix() {
        assert_eq!(two_digit("1995"), "95");
        assert_eq!(two_digit("7"), "7");
        assert_eq!(two_digit(""), "");
    }
}
