use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use margindesk_core::margin::{MarginService, MarginServiceTrait};
use margindesk_core::market_data::providers::YahooProvider;
use margindesk_core::market_data::{MarketDataService, MarketDataServiceTrait};
use margindesk_core::positions::{PositionService, PositionServiceTrait};
use margindesk_storage_sqlite::clients::ClientRepository;
use margindesk_storage_sqlite::db::{create_pool, run_migrations, spawn_writer};
use margindesk_storage_sqlite::margin::MarginRepository;
use margindesk_storage_sqlite::market_data::PriceRepository;
use margindesk_storage_sqlite::positions::PositionRepository;
use margindesk_storage_sqlite::seed::seed_sample_data;

pub struct AppState {
    pub position_service: Arc<dyn PositionServiceTrait>,
    pub market_data_service: Arc<dyn MarketDataServiceTrait>,
    pub margin_service: Arc<dyn MarginServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("MARGINDESK_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Opens the database, runs migrations, spawns the writer, and wires the
/// repositories and services. Everything is injected; nothing global.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let pool = create_pool(&config.db_path)?;
    run_migrations(&pool)?;
    tracing::info!("Database path in use: {}", config.db_path);
    let writer = spawn_writer((*pool).clone());

    if config.seed {
        seed_sample_data(&writer).await?;
    }

    let client_repository = Arc::new(ClientRepository::new(pool.clone(), writer.clone()));
    let position_repository = Arc::new(PositionRepository::new(pool.clone(), writer.clone()));
    let price_repository = Arc::new(PriceRepository::new(pool.clone(), writer.clone()));
    let margin_repository = Arc::new(MarginRepository::new(pool.clone(), writer.clone()));

    let provider = Arc::new(YahooProvider::new().map_err(anyhow::Error::new)?);

    let position_service = Arc::new(PositionService::new(
        client_repository.clone(),
        position_repository.clone(),
    ));
    let market_data_service = Arc::new(MarketDataService::new(
        price_repository.clone(),
        provider,
    ));
    let margin_service = Arc::new(MarginService::new(
        client_repository,
        position_repository,
        price_repository,
        margin_repository,
        config.mmr_ratio,
    ));

    Ok(Arc::new(AppState {
        position_service,
        market_data_service,
        margin_service,
    }))
}
