use dotenv::dotenv;
use market_service::settings;
use tokio::net::TcpListener;
use tracing::{debug, error};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    let settings = settings::load_settings().expect("Failed to load settings");
    market_service::init_tracing(&settings);
    let port = settings.port.unwrap_or(5001);

    if settings.environment == Some("DEV".to_string()) {
        debug!("Running in DEV environment");
    }
    let app = market_service::setup_router(&settings);
    let listener = TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    debug!("Server running on http://{}", listener.local_addr()?);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }

    Ok(())
}
