#![recursion_limit = "512"]

use app::{config::Config, db};
use migration::{Migrator, MigratorTrait};
use server_lib::{AppState, build_router};
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    info!(
        "Connecting to database (max {} connections)",
        config.max_connections
    );
    let db = db::init_database(&config.database_url, config.max_connections).await?;

    // The production store is managed elsewhere; only create tables when asked.
    if config.run_migrations {
        info!("Running migrations...");
        Migrator::up(&db, None).await?;
    }

    info!("Reporting vehicle registrations for {}", config.target_year);

    let bind_address = config.bind_address.clone();
    let app = build_router(AppState::new(db, config));

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on http://{}", bind_address);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutting down gracefully...");
}
