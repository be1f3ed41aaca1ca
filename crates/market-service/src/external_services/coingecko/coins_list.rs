use tracing::{debug, error};

use crate::{models::markets::CoinListItem, utils::errors::app_error::AppError};

use super::CoinGeckoService;

pub const COINGECKO_COINS_LIST_PATH: &str = "/coins/list";

impl CoinGeckoService {
    /// Fetches the provider's full coin catalogue (id, symbol, name).
    pub async fn get_coins_list(&self) -> Result<Vec<CoinListItem>, AppError> {
        debug!("Fetching coins list");
        let response = self
            .get(COINGECKO_COINS_LIST_PATH)
            .send()
            .await
            .map_err(|e| {
                error!("Error fetching coins list: {}", e);
                AppError::InternalServerError()
            })?;

        if !response.status().is_success() {
            error!("Coins list request failed with status {}", response.status());
            return Err(AppError::InternalServerError());
        }

        let coins: Vec<CoinListItem> = response.json().await.map_err(|e| {
            error!("Error deserializing coins list: {}", e);
            AppError::InternalServerError()
        })?;

        Ok(coins)
    }
}
