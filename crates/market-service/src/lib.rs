use std::sync::Arc;

use apis::setup_routes;
use axum::Router;
use external_services::coingecko::CoinGeckoService;
use services::market_service::MarketService;
use tower_http::cors::CorsLayer;

pub mod aggregator;
pub mod apis;
pub mod external_services;
pub mod models;
pub mod services;
pub mod settings;
pub mod utils;

pub struct AppState {
    pub market_service: Arc<MarketService>,
}

pub fn setup_router(settings: &settings::Settings) -> Router {
    let market_service = setup_services(settings);

    setup_routes()
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(AppState { market_service }))
}

pub fn setup_services(settings: &settings::Settings) -> Arc<MarketService> {
    let coingecko_service = Arc::new(CoinGeckoService::new(
        settings.coingecko_base_url.clone(),
        settings.coingecko_api_key.clone(),
    ));

    Arc::new(MarketService::new(coingecko_service))
}

pub fn init_tracing(settings: &settings::Settings) {
    let env = settings.environment.clone().unwrap_or("DEV".to_string());
    let level = match env.as_str() {
        "PROD" => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_thread_names(true)
        .with_ansi(env != "PROD")
        .init();
}
