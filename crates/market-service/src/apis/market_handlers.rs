use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    apis::api_models::query::MarketsQuery,
    models::markets::{CoinListItem, MoversResult},
    utils::errors::{app_error::AppError, error_payload::ErrorPayload},
    AppState,
};

const TAG: &str = "crypto";

#[utoipa::path(
    get,
    tag = TAG,
    path = "/list",
    responses(
        (status = 200, description = "Full coin catalogue", body = Vec<CoinListItem>),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    )
)]
pub(super) async fn get_coins_list(
    State(app_state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<Vec<CoinListItem>>), AppError> {
    let coins = app_state.market_service.coins_list().await?;

    Ok((StatusCode::OK, Json(coins)))
}

#[utoipa::path(
    get,
    tag = TAG,
    path = "/markets",
    responses(
        (status = 200, description = "Top gainers and losers by 24h change", body = MoversResult),
        (status = 400, description = "Invalid query parameter", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(MarketsQuery)
)]
pub(super) async fn get_market_movers(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<MarketsQuery>,
) -> Result<(StatusCode, Json<MoversResult>), AppError> {
    let movers = app_state.market_service.market_movers(query).await?;

    Ok((StatusCode::OK, Json(movers)))
}
