use crate::error::{DashboardError, Result};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Open the handle every query borrows its connection from. A connection is
/// held only for the statement that needs it and goes back on drop, error
/// paths included.
pub async fn init_database(database_url: &str, max_connections: u32) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options
        .max_connections(max_connections)
        .sqlx_logging(false);

    Database::connect(options)
        .await
        .map_err(|e| DashboardError::Config(format!("Failed to connect to database: {e}")))
}

pub fn get_db_from_context() -> std::result::Result<DatabaseConnection, leptos::prelude::ServerFnError>
{
    use leptos::prelude::{ServerFnError, use_context};
    use_context::<DatabaseConnection>()
        .ok_or_else(|| ServerFnError::new("Database connection missing from context"))
}
