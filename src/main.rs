//! stock_service entry point
//!
//! ```text
//! stock_service [--env <name>] [--port <port>]
//! ```
//!
//! Reads `config/<name>.yaml` (default `dev`).

use std::sync::Arc;

use anyhow::Context;

use stock_service::config::{AppConfig, StorageBackend};
use stock_service::db::Database;
use stock_service::gateway::{run_server, state::AppState};
use stock_service::order::{MemoryProductStore, OrderService, PgProductStore, ProductStore};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut app_config = AppConfig::load(&env)?;
    if let Some(port) = get_port_override() {
        app_config.server.port = port;
    }
    let _log_guard = stock_service::logging::init_logging(&app_config);

    tracing::info!(
        "Starting stock_service {} in {} mode",
        stock_service::VERSION,
        env
    );

    let (store, pg_db): (Arc<dyn ProductStore>, Option<Database>) = match app_config.storage {
        StorageBackend::Postgres => {
            let db = Database::connect(&app_config.database)
                .await
                .context("Failed to connect to PostgreSQL")?;
            db.health_check()
                .await
                .context("PostgreSQL health check failed")?;
            tracing::info!("Connected to PostgreSQL");

            if app_config.database.init_schema {
                db.init_schema().await.context("Failed to init schema")?;
            }
            let store: Arc<dyn ProductStore> = Arc::new(PgProductStore::new(db.pool().clone()));
            (store, Some(db))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, data is lost on exit");
            let store: Arc<dyn ProductStore> = Arc::new(MemoryProductStore::new());
            (store, None)
        }
    };

    let state = Arc::new(AppState::new(OrderService::new(store), pg_db));
    run_server(&app_config.server.bind_addr(), state).await
}
