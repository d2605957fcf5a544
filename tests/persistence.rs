use std::fs;

use profilelist::profile::from_yaml_file;
use profilelist::wordlist::output::default_file_name;
use profilelist::{GenerateError, GenerateOptions, Profile, Settings, generate};

#[test]
fn settings_round_trip_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config/settings");

    let settings = Settings {
        use_leet: false,
        use_symbols: true,
        max_symbols: 4,
        target_count: 123_456,
        symbol_weights: "5,4,3,2,1".into(),
        keep_symbols: true,
        preview_lines: 20,
        output_file_path: "out/a|b,c.txt".into(),
    };
    settings.save_to(&path).unwrap();

    assert_eq!(Settings::load_from(&path).unwrap(), settings);
}

#[test]
fn missing_settings_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings");

    assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
    assert!(path.exists());
}

#[test]
fn malformed_settings_file_is_rewritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings");
    fs::write(&path, "true,false,2\n").unwrap();

    assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
    assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
    let rewritten = fs::read_to_string(&path).unwrap();
    assert_eq!(rewritten.trim_end().split(',').count(), 8);
}

#[test]
fn out_of_range_max_symbols_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings");

    for max in ["0", "201", "18446744073709551615"] {
        fs::write(&path, format!("true,true,{max},5000,,false,500,\n")).unwrap();
        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.max_symbols, Settings::default().max_symbols, "{max}");
        assert!(loaded.use_symbols);
    }

    fs::write(&path, "true,true,200,5000,,false,500,\n").unwrap();
    assert_eq!(Settings::load_from(&path).unwrap().max_symbols, 200);
}

#[test]
fn wordlist_written_one_per_line() {
    let dir = tempfile::tempdir().unwrap();
    let profile = Profile {
        first_name: "Dana".into(),
        pet: "Biscuit".into(),
        ..Default::default()
    };
    let options = GenerateOptions {
        target_count: 300,
        random_seed: Some(17),
        ..Default::default()
    };
    let words = generate(&profile, &options).unwrap();

    let path = dir.path().join("lists").join(default_file_name(&profile, words.len()));
    words.write_to(&path).unwrap();

    assert_eq!(path.file_name().unwrap(), "dana_300.txt");
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.ends_with('\n'));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), words.len());
    assert!(lines.iter().zip(&words).all(|(line, word)| line == word));
}

#[test]
fn profile_file_feeds_generation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("target.yaml");
    fs::write(
        &path,
        "first-name: Ann\nage: 30\nyears: [2010, '2015']\nkeywords: sailing, chess\nphone: '555-010-4477'\n",
    )
    .unwrap();

    let profile = from_yaml_file(&path).unwrap();
    assert_eq!(profile.first_name, "Ann");
    assert_eq!(profile.age, "30");
    assert_eq!(profile.years, vec!["2010", "2015"]);
    assert_eq!(profile.keywords, vec!["sailing", "chess"]);

    let options = GenerateOptions {
        target_count: 0,
        use_leet: false,
        random_seed: Some(1),
        reference_year: Some(2025),
        ..Default::default()
    };
    let words = generate(&profile, &options).unwrap();
    for expected in ["ann1995", "chess2015", "sailing", "5550104477", "4477"] {
        assert!(words.words().contains(&expected.to_string()), "missing {expected}");
    }
}

#[test]
fn broken_profile_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    fs::write(&path, "first-name: [unclosed\n").unwrap();
    assert!(matches!(from_yaml_file(&path), Err(GenerateError::Profile(_))));

    let missing = dir.path().join("nope.yaml");
    assert!(matches!(from_yaml_file(&missing), Err(GenerateError::Io(_))));
}
