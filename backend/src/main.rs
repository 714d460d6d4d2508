//! Person service entry point: loads settings, prepares storage and runs the
//! HTTP server.

mod server;

use color_eyre::eyre::{WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use person_service::ServiceSettings;
use person_service::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use server::{ServerConfig, create_server};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %err, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();

    let settings = ServiceSettings::load()
        .map_err(|err| eyre!("failed to load configuration: {err}"))?;
    let bind_addr = settings.bind_addr().wrap_err("invalid bind address")?;
    let mut config = ServerConfig::new(bind_addr);

    match settings.database_url() {
        Some(url) => {
            let applied = run_pending_migrations(url)
                .await
                .wrap_err("failed to apply database migrations")?;
            let pool = DbPool::new(
                PoolConfig::new(url).with_max_size(settings.db_max_connections()),
            )
            .await
            .wrap_err("failed to build database pool")?;
            info!(applied, "using PostgreSQL storage");
            config = config.with_db_pool(pool);
        }
        None => warn!("no database URL configured; persons are kept in memory"),
    }

    create_server(config)
        .wrap_err("failed to start HTTP server")?
        .await
        .wrap_err("HTTP server terminated")
}
