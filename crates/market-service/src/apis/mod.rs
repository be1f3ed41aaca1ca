use std::sync::Arc;

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_scalar::{Scalar, Servable};

use crate::AppState;

pub mod api_models;
pub mod market_handlers;

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "crypto", description = "Crypto market overview API")
    )
)]

pub struct ApiDoc;

pub fn setup_routes() -> Router<Arc<AppState>> {
    let api_doc = ApiDoc::openapi();

    let crypto_router = OpenApiRouter::new()
        .routes(routes!(market_handlers::get_coins_list))
        .routes(routes!(market_handlers::get_market_movers));

    let crypto_router =
        OpenApiRouter::with_openapi(api_doc).nest("/crypto", crypto_router);

    let (api_router, api_openapi) = OpenApiRouter::new()
        .nest("/api", crypto_router)
        .split_for_parts();

    Router::new()
        .merge(Scalar::with_url("/docs", api_openapi))
        .merge(api_router)
}
