use crate::error::{DashboardError, Result};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/ev_dashboard.db?mode=rwc";
pub const DEFAULT_TARGET_YEAR: i32 = 2025;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub target_year: i32,
    pub bind_address: String,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let database_url =
            dotenvy::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let max_connections = dotenvy::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "1".to_string())
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| DashboardError::Config("Invalid DB_MAX_CONNECTIONS".to_string()))?;

        let target_year = dotenvy::var("TARGET_YEAR")
            .unwrap_or_else(|_| DEFAULT_TARGET_YEAR.to_string())
            .parse::<i32>()
            .map_err(|_| DashboardError::Config("Invalid TARGET_YEAR".to_string()))?;

        let bind_address =
            dotenvy::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

        let run_migrations = dotenvy::var("RUN_MIGRATIONS")
            .map(|v| v == "true")
            .unwrap_or(false);

        Ok(Config {
            database_url,
            max_connections,
            target_year,
            bind_address,
            run_migrations,
        })
    }
}

/// Get the [`Config`] provided to the Leptos context by the server.
pub fn get_config_from_context() -> std::result::Result<Config, leptos::prelude::ServerFnError> {
    use leptos::prelude::{ServerFnError, use_context};
    use_context::<Config>().ok_or_else(|| ServerFnError::new("Configuration missing from context"))
}
