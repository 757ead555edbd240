// tests/unit_config.rs
use collicheck_core::cli::{resolve_config, CheckArgs};
use collicheck_core::config::io::parse_toml;
use collicheck_core::config::{Config, CONFIG_FILE};
use collicheck_core::exceptions::{RegionPair, DEFAULT_REGION_EXCEPTIONS};
use collicheck_core::Phase;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load(Some(&dir.path().join(CONFIG_FILE))).unwrap();
    assert_eq!(config.phase, Phase::Submission);
    assert!(config.parallel);
    assert_eq!(config.region_pairs.len(), DEFAULT_REGION_EXCEPTIONS.len());
    assert!(config
        .exclusions
        .matches(r#"//ldml/numbers/currencies/currency[@type="USD"]/symbol[@alt="narrow"]"#));
}

#[test]
fn test_load_phase_and_exceptions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    fs::write(
        &path,
        r#"
[check]
phase = "final-testing"
parallel = false
exclude_patterns = ['\[@alt="variant"\]']

[[exceptions]]
zone = "Europe/Monaco"
territory = "MC"
"#,
    )
    .unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.phase, Phase::FinalTesting);
    assert!(!config.parallel);
    assert_eq!(config.region_pairs, vec![RegionPair::new("Europe/Monaco", "MC")]);
    assert!(config.exclusions.matches(r#"//ldml/x[@alt="variant"]"#));
    assert!(!config.exclusions.matches(r#"//ldml/x[@alt="narrow"]"#));
}

#[test]
fn test_unknown_phase_rejected() {
    assert!(parse_toml("[check]\nphase = \"review\"\n").is_err());
}

#[test]
fn test_bad_pattern_rejected() {
    let toml = parse_toml("[check]\nexclude_patterns = [\"(unclosed\"]\n").unwrap();
    assert!(Config::from_toml(toml).is_err());
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    let mut config = Config::new();
    config.phase = Phase::Vetting;
    config.region_pairs.truncate(2);
    config.save(&path).unwrap();

    let loaded = Config::load(Some(&path)).unwrap();
    assert_eq!(loaded.phase, Phase::Vetting);
    assert_eq!(loaded.region_pairs, config.region_pairs);
    assert_eq!(loaded.exclude_patterns, config.exclude_patterns);
}

#[test]
fn test_cli_flags_override_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    fs::write(&path, "[check]\nphase = \"submission\"\nparallel = true\n").unwrap();

    let args = CheckArgs {
        config: Some(path),
        phase: Some(Phase::Vetting),
        sequential: true,
        ..CheckArgs::default()
    };
    let config = resolve_config(&args).unwrap();
    assert_eq!(config.phase, Phase::Vetting);
    assert!(!config.parallel);
}
