//! YAML profile loading.
//!
//! Scalars may be written bare (`age: 41`) or quoted; list fields accept a
//! YAML sequence or a single comma-separated string. Quote phone numbers
//! with leading zeros.

use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

use super::{Profile, split_csv_field};
use crate::error::GenerateError;

pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Profile, GenerateError> {
    let text = std::fs::read_to_string(path)?;
    from_yaml_str(&text)
}

pub(crate) fn from_yaml_str(text: &str) -> Result<Profile, GenerateError> {
    if text.trim().is_empty() {
        return Ok(Profile::default());
    }
    Ok(serde_yaml::from_str(text)?)
}

pub(super) fn scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(value_text).unwrap_or_default())
}

pub(super) fn list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::String(s)) => split_csv_field(&s),
        Some(Value::Sequence(items)) => items
            .iter()
            .map(value_text)
            .filter(|s| !s.is_empty())
            .collect(),
        Some(other) => vec![value_text(&other)],
    })
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_kebab_case_profile() {
        let yaml = r#"
first-name: John
last-name: Smith
nicknames: [Johnny, JS]
add-numbers:
  - "555-0100"
age: "41"
"#;
        let profile = from_yaml_str(yaml).unwrap();
        assert_eq!(profile.first_name, "John");
        assert_eq!(profile.last_name, "Smith");
        assert_eq!(profile.nicknames, vec!["Johnny", "JS"]);
        assert_eq!(profile.add_numbers, vec!["555-0100"]);
        assert_eq!(profile.age, "41");
        assert!(profile.pet.is_empty());
    }

    #[test]
    fn bare_numbers_and_csv_lists() {
        let yaml = r#"
age: 30
phone: 5558675309
years: [1990, "2004"]
keywords: "blue, rocket ,"
"#;
        let profile = from_yaml_str(yaml).unwrap();
        assert_eq!(profile.age, "30");
        assert_eq!(profile.phone, "5558675309");
        assert_eq!(profile.years, vec!["1990", "2004"]);
        assert_eq!(profile.keywords, vec!["blue", "rocket"]);
    }

    #[test]
    fn null_fields_are_empty() {
        let profile = from_yaml_str("pet: ~\nnicknames: ~\n").unwrap();
        assert!(profile.is_empty());
    }

    #[test]
    fn empty_document_is_empty_profile() {
        assert!(from_yaml_str("  \n").unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_yaml() {
        let err = from_yaml_str("first-name: [unclosed").unwrap_err();
        assert!(matches!(err, GenerateError::Profile(_)));
    }
}
