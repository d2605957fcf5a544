//! Subject profile and the facts derived from it.

mod file;
mod phone;
mod tokens;
mod years;

use serde::Deserialize;
use zeroize::Zeroize;

pub use file::from_yaml_file;
pub use phone::{PhoneFragment, digit_only, phone_fragments};
pub use tokens::{expand_profile_tokens, normalize};
pub use years::{current_year, year_set, years_from_age};
pub(crate) use years::two_digit;

/// Personal facts about the target subject. Every field is optional; an
/// empty string or list contributes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Zeroize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Profile {
    #[serde(deserialize_with = "file::scalar")]
    pub first_name: String,
    #[serde(deserialize_with = "file::scalar")]
    pub last_name: String,
    #[serde(deserialize_with = "file::scalar")]
    pub partner: String,
    #[serde(deserialize_with = "file::scalar")]
    pub pet: String,
    #[serde(deserialize_with = "file::scalar")]
    pub company: String,
    #[serde(deserialize_with = "file::list")]
    pub nicknames: Vec<String>,
    #[serde(deserialize_with = "file::list")]
    pub keywords: Vec<String>,
    #[serde(deserialize_with = "file::list")]
    pub years: Vec<String>,
    #[serde(deserialize_with = "file::list")]
    pub add_numbers: Vec<String>,
    #[serde(deserialize_with = "file::scalar")]
    pub phone: String,
    #[serde(deserialize_with = "file::scalar")]
    pub email: String,
    #[serde(deserialize_with = "file::scalar")]
    pub age: String,
}

impl Profile {
    /// True when no field carries any text.
    pub fn is_empty(&self) -> bool {
        let scalars = [
            &self.first_name,
            &self.last_name,
            &self.partner,
            &self.pet,
            &self.company,
            &self.phone,
            &self.email,
            &self.age,
        ];
        let lists = [&self.nicknames, &self.keywords, &self.years, &self.add_numbers];

        scalars.iter().all(|s| s.trim().is_empty())
            && lists.iter().all(|l| l.iter().all(|s| s.trim().is_empty()))
    }
}

/// Split a comma-separated form field into trimmed, non-empty parts.
pub fn split_csv_field(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}
