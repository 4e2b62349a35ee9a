use super::{load_settings_from, normalize_database_url, prepare_database_url, Settings};

use std::{collections::HashMap, fs};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn normalizes_plain_file_path_to_sqlite_url() {
    assert_eq!(
        normalize_database_url("./data/test.db"),
        "sqlite://./data/test.db"
    );
}

#[test]
fn keeps_memory_and_full_urls() {
    assert_eq!(normalize_database_url("sqlite::memory:"), "sqlite::memory:");
    assert_eq!(
        normalize_database_url("sqlite://./x.db?mode=rwc"),
        "sqlite://./x.db?mode=rwc"
    );
    assert_eq!(
        normalize_database_url("sqlite:projects.db"),
        "sqlite://projects.db"
    );
}

#[test]
fn blank_url_falls_back_to_default() {
    assert_eq!(normalize_database_url("   "), Settings::default().database_url);
}

#[test]
fn creates_parent_dir_for_database_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    let db_path = temp.path().join("data").join("test.db");

    let prepared = prepare_database_url(db_path.to_string_lossy().as_ref()).expect("prepare");
    assert!(prepared.starts_with("sqlite://"));
    assert!(temp.path().join("data").exists());
}

#[test]
fn defaults_apply_without_file_or_env() {
    let temp = tempfile::tempdir().expect("tempdir");
    let settings = load_settings_from(&temp.path().join("missing.toml"), env_from(&[]));
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.projects_key, "crochet_projects");
}

#[test]
fn file_overrides_defaults_and_env_overrides_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("tracker.toml");
    fs::write(
        &path,
        "database_url = \"sqlite://./from-file.db\"\nlog_filter = \"debug\"\n",
    )
    .expect("write config");

    let from_file = load_settings_from(&path, env_from(&[]));
    assert_eq!(from_file.database_url, "sqlite://./from-file.db");
    assert_eq!(from_file.log_filter, "debug");

    let with_env = load_settings_from(
        &path,
        env_from(&[
            ("TRACKER_DATABASE_URL", "sqlite://./tracker-env.db"),
            ("APP__DATABASE_URL", "sqlite://./app-env.db"),
            ("TRACKER_LOG", "warn"),
        ]),
    );
    assert_eq!(with_env.database_url, "sqlite://./app-env.db");
    assert_eq!(with_env.log_filter, "warn");
}

#[test]
fn malformed_file_is_ignored() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("tracker.toml");
    fs::write(&path, "database_url = [unterminated").expect("write config");

    assert_eq!(
        load_settings_from(&path, env_from(&[])),
        Settings::default()
    );
}

#[test]
fn blank_projects_key_override_is_ignored() {
    let temp = tempfile::tempdir().expect("tempdir");
    let settings = load_settings_from(
        &temp.path().join("missing.toml"),
        env_from(&[("APP__PROJECTS_KEY", "  ")]),
    );
    assert_eq!(settings.projects_key, "crochet_projects");
}
