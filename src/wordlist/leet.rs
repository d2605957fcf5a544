//! Leetspeak transliteration.

const LEET_MAP: [(char, char); 7] = [
    ('a', '4'),
    ('e', '3'),
    ('i', '1'),
    ('o', '0'),
    ('s', '5'),
    ('t', '7'),
    ('l', '1'),
];

#[inline]
fn leet_char(c: char) -> char {
    LEET_MAP
        .iter()
        .find_map(|&(from, to)| (from == c).then_some(to))
        .unwrap_or(c)
}

/// Substitute `aeiostl` with `4310571`. `None` when nothing changed.
pub fn leet_variants(word: &str) -> Option<String> {
    let leet: String = word.chars().map(leet_char).collect();
    (!leet.is_empty() && leet != word).then_some(leet)
}
