//! Base permutations: tokens, years and phone fragments combined with the
//! common affixes. No leet, no symbols.

use std::collections::BTreeSet;

use super::{COMMON_PREFIXES, COMMON_SUFFIXES, SEPARATORS};
use crate::profile::{PhoneFragment, two_digit};

/// Sorted, unique, non-empty union of every construction rule.
pub fn base_permutations(
    tokens: &[String],
    years: &[String],
    phones: &[PhoneFragment],
    use_separators: bool,
) -> Vec<String> {
    let mut out = BTreeSet::new();

    for t in tokens {
        out.insert(t.clone());
        for pre in COMMON_PREFIXES {
            for suf in COMMON_SUFFIXES {
                out.insert(format!("{pre}{t}{suf}").trim().to_string());
            }
        }
        for y in years {
            out.insert(format!("{t}{y}"));
            out.insert(format!("{t}{}", two_digit(y)));
        }
    }

    for t in tokens {
        for phone in phones {
            for v in phone.variants() {
                out.insert(format!("{t}{v}"));
                out.insert(format!("{v}{t}"));
                if use_separators {
                    for s in SEPARATORS {
                        out.insert(format!("{t}{s}{v}"));
                        out.insert(format!("{v}{s}{t}"));
                    }
                }
            }
        }
    }

    for (i, a) in tokens.iter().enumerate() {
        for (j, b) in tokens.iter().enumerate() {
            if i == j {
                continue;
            }
            if use_separators {
                for sep in SEPARATORS {
                    for suf in COMMON_SUFFIXES {
                        out.insert(format!("{a}{sep}{b}{suf}").trim().to_string());
                    }
                }
            } else {
                out.insert(format!("{a}{b}"));
            }
        }
    }

    for phone in phones {
        let (p, last4) = (phone.as_str(), phone.last4());
        out.insert(p.to_string());
        out.insert(last4.to_string());
        for y in years {
            out.insert(format!("{p}{y}"));
            out.insert(format!("{last4}{y}"));
        }
    }

    out.into_iter().filter(|s| !s.is_empty()).collect()
}
