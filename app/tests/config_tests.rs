//! Environment-driven configuration. Tests mutate process environment, so
//! they run serially.

#![cfg(feature = "ssr")]
#![allow(clippy::unwrap_used)]

use app::config::{Config, DEFAULT_DATABASE_URL, DEFAULT_TARGET_YEAR};
use serial_test::serial;
use temp_env::with_vars;

const VARS: [&str; 5] = [
    "DATABASE_URL",
    "DB_MAX_CONNECTIONS",
    "TARGET_YEAR",
    "BIND_ADDRESS",
    "RUN_MIGRATIONS",
];

fn unset_all() -> Vec<(&'static str, Option<&'static str>)> {
    VARS.iter().map(|v| (*v, None)).collect()
}

fn with_overrides(
    overrides: &[(&'static str, &'static str)],
) -> Vec<(&'static str, Option<&'static str>)> {
    let mut vars = unset_all();
    for (key, value) in overrides {
        if let Some(slot) = vars.iter_mut().find(|(k, _)| k == key) {
            slot.1 = Some(*value);
        }
    }
    vars
}

#[test]
#[serial]
fn test_defaults() {
    with_vars(unset_all(), || {
        let config = Config::from_env().unwrap();

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.max_connections, 1);
        assert_eq!(config.target_year, DEFAULT_TARGET_YEAR);
        assert_eq!(config.bind_address, "127.0.0.1:3000");
        assert!(!config.run_migrations);
    });
}

#[test]
#[serial]
fn test_overrides() {
    let vars = with_overrides(&[
        ("DATABASE_URL", "mysql://reader:secret@db/projectdb"),
        ("DB_MAX_CONNECTIONS", "4"),
        ("TARGET_YEAR", "2024"),
        ("BIND_ADDRESS", "0.0.0.0:8080"),
        ("RUN_MIGRATIONS", "true"),
    ]);

    with_vars(vars, || {
        let config = Config::from_env().unwrap();

        assert_eq!(config.database_url, "mysql://reader:secret@db/projectdb");
        assert_eq!(config.max_connections, 4);
        assert_eq!(config.target_year, 2024);
        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert!(config.run_migrations);
    });
}

#[test]
#[serial]
fn test_invalid_target_year() {
    with_vars(with_overrides(&[("TARGET_YEAR", "next year")]), || {
        let err = Config::from_env().unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: Invalid TARGET_YEAR");
    });
}

#[test]
#[serial]
fn test_zero_max_connections_rejected() {
    with_vars(with_overrides(&[("DB_MAX_CONNECTIONS", "0")]), || {
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("DB_MAX_CONNECTIONS"));
    });
}

#[test]
#[serial]
fn test_run_migrations_only_on_true() {
    with_vars(with_overrides(&[("RUN_MIGRATIONS", "yes")]), || {
        assert!(!Config::from_env().unwrap().run_migrations);
    });
}
