//! Phone digit extraction.

use std::collections::BTreeSet;

use super::Profile;

/// Keep ASCII digits only.
pub fn digit_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Canonical digit string taken from a phone-like field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PhoneFragment(String);

impl PhoneFragment {
    /// Returns `None` when the input holds no digits.
    pub fn parse(raw: &str) -> Option<Self> {
        let digits = digit_only(raw);
        (!digits.is_empty()).then_some(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn last4(&self) -> &str {
        self.tail(4)
    }

    pub fn last3(&self) -> &str {
        self.tail(3)
    }

    pub fn first3(&self) -> &str {
        &self.0[..self.0.len().min(3)]
    }

    /// Full digits followed by last4, last3 and first3.
    pub fn variants(&self) -> [&str; 4] {
        [self.as_str(), self.last4(), self.last3(), self.first3()]
    }

    // Digits are ASCII, so byte offsets are char offsets.
    fn tail(&self, n: usize) -> &str {
        &self.0[self.0.len().saturating_sub(n)..]
    }
}

/// Digit strings from `phone` and every `add_numbers` entry, sorted and unique.
pub fn phone_fragments(profile: &Profile) -> Vec<PhoneFragment> {
    std::iter::once(&profile.phone)
        .chain(profile.add_numbers.iter())
        .filter_map(|raw| PhoneFragment::parse(raw))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_formatting() {
        assert_eq!(digit_only("+1 (555) 867-5309"), "15558675309");
        assert_eq!(digit_only("n/a"), "");
    }

    #[test]
    fn fragment_slices() {
        let p = PhoneFragment::parse("555-867-5309").unwrap();
        assert_eq!(p.as_str(), "5558675309");
        assert_eq!(p.last4(), "5309");
        assert_eq!(p.last3(), "309");
        assert_eq!(p.first3(), "555");
    }

    #[test]
    fn short_fragments_clamp() {
        let p = PhoneFragment::parse("42").unwrap();
        assert_eq!(p.variants(), ["42", "42", "42", "42"]);
    }

    #[test]
    fn collects_and_dedups_numbers() {
        let profile = Profile {
            phone: "555 867 5309".into(),
            add_numbers: vec!["5558675309".into(), "ext".into(), "1234".into()],
            ..Default::default()
        };
        let frags = phone_fragments(&profile);
        let digits: Vec<&str> = frags.iter().map(PhoneFragment::as_str).collect();
        assert_eq!(digits, vec!["1234", "5558675309"]);
    }
}
