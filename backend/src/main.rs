//! Backend entry-point: loads settings, wires adapters and serves HTTP.

mod server;

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use catapi_backend::domain::ports::UserStore;
use catapi_backend::inbound::http::health::HealthState;
use catapi_backend::outbound::catalog::CatApiHttpSource;
use catapi_backend::outbound::memory::InMemoryUserStore;
use catapi_backend::outbound::persistence::{DbPool, DieselUserStore, PoolConfig, run_migrations};
use catapi_backend::settings::AppSettings;
use server::{ServerConfig, create_server};

async fn build_user_store(settings: &AppSettings) -> std::io::Result<Arc<dyn UserStore>> {
    let Some(database_url) = settings.database_url() else {
        warn!("database_url not set; users are kept in memory and lost on restart");
        return Ok(Arc::new(InMemoryUserStore::new()));
    };
    run_migrations(database_url)
        .await
        .map_err(std::io::Error::other)?;
    let pool = DbPool::new(PoolConfig::new(database_url))
        .await
        .map_err(std::io::Error::other)?;
    Ok(Arc::new(DieselUserStore::new(pool)))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(std::io::Error::other)?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let page_bounds = settings.page_bounds().map_err(std::io::Error::other)?;

    let api_key = settings.cat_api_key();
    if api_key.is_none() {
        warn!("cat_api_key not set; catalog requests are sent without x-api-key");
    }
    let catalog = CatApiHttpSource::new(
        settings.cat_api_url().map_err(std::io::Error::other)?,
        api_key,
        settings.cat_api_timeout().map_err(std::io::Error::other)?,
    )
    .map_err(std::io::Error::other)?;
    let user_store = build_user_store(&settings).await?;

    let config = ServerConfig::new(bind_addr, Arc::new(catalog), user_store)
        .with_page_bounds(page_bounds);
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "listening");
    server.await
}
