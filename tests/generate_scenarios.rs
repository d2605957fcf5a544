use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use profilelist::profile::{expand_profile_tokens, normalize, phone_fragments, year_set};
use profilelist::wordlist::{
    SYMBOL_CHARS, base_permutations, inject_symbols, leet_variants, parse_prob_weights,
};
use profilelist::{GenerateOptions, Profile, generate};

fn john_smith() -> Profile {
    Profile {
        first_name: "John".into(),
        last_name: "Smith".into(),
        ..Default::default()
    }
}

fn plain(target: usize, seed: u64) -> GenerateOptions {
    GenerateOptions {
        use_leet: false,
        use_symbols: false,
        target_count: target,
        random_seed: Some(seed),
        reference_year: Some(2025),
        ..Default::default()
    }
}

fn assert_unique_normalized(words: &[String]) {
    let mut seen = HashSet::new();
    for word in words {
        assert!(seen.insert(normalize(word)), "duplicate normalized form: {word}");
    }
}

#[test]
fn name_profile_covers_derived_forms() {
    let words = generate(&john_smith(), &plain(100_000, 7)).unwrap();
    for expected in ["john", "smith", "johnsmith", "jsmith", "johns", "john123", "myjohn"] {
        assert!(words.words().contains(&expected.to_string()), "missing {expected}");
    }
    assert!(words.words().iter().all(|w| w.chars().all(char::is_alphanumeric)));
    assert_unique_normalized(words.words());
}

#[test]
fn name_profile_small_target_is_capped() {
    let words = generate(&john_smith(), &plain(50, 7)).unwrap();
    assert_eq!(words.len(), 50);
    assert_unique_normalized(words.words());
}

#[test]
fn keep_symbols_preserves_separators() {
    let options = GenerateOptions {
        keep_symbols: true,
        ..plain(100_000, 7)
    };
    let words = generate(&john_smith(), &options).unwrap();
    assert!(words.words().contains(&"john.smith".to_string()));
    assert!(words.words().contains(&"johnsmith".to_string()));
}

#[test]
fn phone_profile_keeps_full_number_and_last4() {
    let profile = Profile {
        phone: "555-867-5309".into(),
        ..Default::default()
    };
    let words = generate(&profile, &plain(10, 3)).unwrap();
    assert!(words.len() <= 10);
    assert!(words.words().contains(&"5558675309".to_string()));
    assert!(words.words().contains(&"5309".to_string()));
}

#[test]
fn age_derives_birth_years() {
    let profile = Profile {
        first_name: "Ann".into(),
        age: "30".into(),
        ..Default::default()
    };
    let years = year_set(&profile, 2025);
    assert!(years.contains(&"1995".to_string()));
    assert!(years.contains(&"95".to_string()));

    let words = generate(&profile, &plain(100_000, 11)).unwrap();
    assert!(words.words().contains(&"ann1995".to_string()));
    assert!(words.words().contains(&"ann95".to_string()));
}

#[test]
fn out_of_range_age_is_ignored() {
    let profile = Profile {
        first_name: "Ann".into(),
        age: i32::MIN.to_string(),
        ..Default::default()
    };
    assert!(year_set(&profile, 2025).is_empty());

    let words = generate(&profile, &plain(10_000, 1)).unwrap();
    assert!(!words.is_empty());
    assert!(words.words().contains(&"ann".to_string()));
}

#[test]
fn base_permutations_come_first() {
    let profile = Profile {
        phone: "555-010-4477".into(),
        age: "30".into(),
        ..john_smith()
    };
    let options = GenerateOptions {
        use_leet: true,
        ..plain(0, 21)
    };
    let words = generate(&profile, &options).unwrap();

    let tokens = expand_profile_tokens(&profile);
    let base: HashSet<String> = base_permutations(
        &tokens,
        &year_set(&profile, 2025),
        &phone_fragments(&profile),
        true,
    )
    .iter()
    .map(|w| normalize(w))
    .filter(|w| !w.is_empty())
    .collect();

    let n = base.len();
    assert!(words.len() > n, "later phases added nothing");
    let prefix: HashSet<String> = words.words()[..n].iter().cloned().collect();
    assert_eq!(prefix, base);

    let leet = leet_variants("john").map(|w| normalize(&w)).unwrap();
    let at = words.words().iter().position(|w| *w == leet);
    assert!(at.is_some_and(|i| i >= n), "{leet} missing or inside the base block");
}

#[test]
fn oversized_max_symbols_is_clamped() {
    let options = GenerateOptions {
        use_symbols: true,
        max_symbols: usize::MAX,
        symbol_weights: Some("1,1".into()),
        keep_symbols: true,
        ..plain(2000, 4)
    };
    let words = generate(&john_smith(), &options).unwrap();
    assert_eq!(words.len(), 2000);
}

#[test]
fn zero_symbol_weight_leaves_word_untouched() {
    let weights = parse_prob_weights("1,0,0", 2).unwrap();
    let mut rng = StdRng::seed_from_u64(99);
    let variants = inject_symbols("abc", 2, SYMBOL_CHARS, &mut rng, Some(&weights));
    assert_eq!(variants, vec!["abc".to_string()]);
}

#[test]
fn injected_variants_strip_back_to_the_word() {
    let mut rng = StdRng::seed_from_u64(5);
    for word in ["pass", "x", "summer2024"] {
        for variant in inject_symbols(word, 3, SYMBOL_CHARS, &mut rng, None) {
            let stripped: String = variant.chars().filter(|c| !SYMBOL_CHARS.contains(c)).collect();
            assert_eq!(stripped, word);
            let inserted = variant.chars().count() - word.chars().count();
            assert!(inserted <= 3, "{variant} has {inserted} symbols");
        }
    }
}

#[test]
fn same_seed_replays_identically() {
    let profile = Profile {
        first_name: "Maria".into(),
        pet: "Rex".into(),
        years: vec!["1988".into()],
        phone: "(555) 010-2233".into(),
        ..Default::default()
    };
    let options = GenerateOptions {
        use_symbols: true,
        max_symbols: 2,
        target_count: 3000,
        random_seed: Some(424242),
        reference_year: Some(2025),
        ..Default::default()
    };

    let first = generate(&profile, &options).unwrap();
    let second = generate(&profile, &options).unwrap();
    assert_eq!(first.words(), second.words());
    assert_eq!(first.seed(), 424242);
    assert_eq!(second.seed(), 424242);
}

#[test]
fn fresh_seed_is_reported_and_replays() {
    let options = GenerateOptions {
        random_seed: None,
        ..plain(200, 0)
    };
    let first = generate(&john_smith(), &options).unwrap();
    assert!((1..=1_000_000_000).contains(&first.seed()));

    let replay = GenerateOptions {
        random_seed: Some(first.seed()),
        ..options
    };
    let second = generate(&john_smith(), &replay).unwrap();
    assert_eq!(first.words(), second.words());
}

#[test]
fn symbols_survive_only_when_kept() {
    let base = GenerateOptions {
        use_symbols: true,
        max_symbols: 2,
        symbol_weights: Some("0,1,1".into()),
        ..plain(400_000, 21)
    };

    let normalized = generate(&john_smith(), &base).unwrap();
    assert!(normalized.words().iter().all(|w| w.chars().all(char::is_alphanumeric)));
    assert_unique_normalized(normalized.words());

    let kept = GenerateOptions {
        keep_symbols: true,
        ..base
    };
    let kept = generate(&john_smith(), &kept).unwrap();
    assert!(kept.words().iter().any(|w| w.chars().any(|c| SYMBOL_CHARS.contains(&c))));
    let unique: HashSet<&String> = kept.words().iter().collect();
    assert_eq!(unique.len(), kept.len());
}

#[test]
fn leet_adds_digit_forms() {
    let options = GenerateOptions {
        use_leet: true,
        ..plain(100_000, 2)
    };
    let words = generate(&john_smith(), &options).unwrap();
    assert!(words.words().contains(&"j0hn".to_string()));
    assert!(words.words().contains(&"5m17h".to_string()));
}

#[test]
fn results_never_exceed_target() {
    let profile = Profile {
        first_name: "Lee".into(),
        last_name: "Park".into(),
        nicknames: vec!["lp".into(), "parky".into()],
        keywords: vec!["seoul".into()],
        add_numbers: vec!["77".into()],
        phone: "010-1234-5678".into(),
        ..Default::default()
    };
    for target in [1, 9, 137, 2500] {
        let options = GenerateOptions {
            use_symbols: true,
            ..plain(target, target as u64)
        };
        let words = generate(&profile, &options).unwrap();
        assert!(words.len() <= target);
        assert_unique_normalized(words.words());
    }
}

#[test]
fn tokens_have_no_empty_or_duplicate_entries() {
    let profile = Profile {
        first_name: "  ".into(),
        last_name: "O'Brien".into(),
        nicknames: vec!["obrien".into(), "OBRIEN".into(), "".into()],
        email: "o.brien@example.com".into(),
        ..Default::default()
    };
    let tokens = expand_profile_tokens(&profile);
    assert!(!tokens.is_empty());
    assert!(tokens.iter().all(|t| !t.is_empty()));
    let unique: HashSet<String> = tokens.iter().map(|t| normalize(t)).collect();
    assert_eq!(unique.len(), tokens.len());
}

#[test]
fn empty_profile_yields_empty_list() {
    let words = generate(&Profile::default(), &plain(100, 1)).unwrap();
    assert!(words.is_empty());
}

#[test]
fn unusable_weights_fall_back_to_uniform() {
    let options = GenerateOptions {
        use_symbols: true,
        max_symbols: 2,
        symbol_weights: Some("1,nope".into()),
        keep_symbols: true,
        ..plain(5000, 8)
    };
    let words = generate(&john_smith(), &options).unwrap();
    assert_eq!(words.len(), 5000);
}
