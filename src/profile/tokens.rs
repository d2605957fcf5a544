//! Token normalization.

use std::collections::BTreeSet;

use super::Profile;

/// Keep alphanumeric characters only, lowercased.
pub fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Collect every non-empty token the profile yields, sorted and unique.
///
/// Besides each scalar field and each list element, derives the email
/// local-part and, when both names are present, `first+last`,
/// `first.last`, `initial+last` and `first+initial`. Every token is
/// normalized, so the dotted join shows up in output only through the
/// separator pairs of the base permutations.
pub fn expand_profile_tokens(profile: &Profile) -> Vec<String> {
    let first = normalize(&profile.first_name);
    let last = normalize(&profile.last_name);

    let mut tokens = BTreeSet::new();
    let mut add = |value: &str| {
        let token = normalize(value);
        if !token.is_empty() {
            tokens.insert(token);
        }
    };

    for field in [
        &profile.first_name,
        &profile.last_name,
        &profile.partner,
        &profile.pet,
        &profile.company,
    ] {
        add(field);
    }
    for list in [&profile.nicknames, &profile.keywords, &profile.years] {
        list.iter().for_each(|item| add(item));
    }
    if let Some(local) = profile.email.split('@').next() {
        add(local);
    }

    if let (Some(fi), Some(li)) = (first.chars().next(), last.chars().next()) {
        add(&format!("{first}{last}"));
        // Collapses onto first+last once normalized.
        add(&format!("{first}.{last}"));
        add(&format!("{fi}{last}"));
        add(&format!("{first}{li}"));
    }

    tokens.into_iter().collect()
}
