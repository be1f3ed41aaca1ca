use serde::Serialize;
use tracing::{debug, error};

use crate::{models::markets::CoinMarketRecord, utils::errors::app_error::AppError};

use super::CoinGeckoService;

pub const COINGECKO_MARKETS_PATH: &str = "/coins/markets";

#[derive(Serialize, Debug)]
pub struct CoinGeckoMarketsQuery {
    pub vs_currency: String,
    pub per_page: u32,
    pub page: u32,
    pub order: String,
    pub price_change_percentage: String,
}

impl CoinGeckoMarketsQuery {
    pub fn new(vs_currency: String, per_page: u32, page: u32) -> Self {
        Self {
            vs_currency,
            per_page,
            page,
            order: "market_cap_desc".to_string(),
            price_change_percentage: "24h".to_string(),
        }
    }
}

impl CoinGeckoService {
    /// Fetches one page of market records in the requested quote currency.
    pub async fn get_markets(
        &self,
        query: CoinGeckoMarketsQuery,
    ) -> Result<Vec<CoinMarketRecord>, AppError> {
        debug!(
            "Fetching markets for vs_currency: {}, per_page: {}, page: {}",
            query.vs_currency, query.per_page, query.page
        );
        let response = self
            .get(COINGECKO_MARKETS_PATH)
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                error!("Error fetching markets: {}", e);
                AppError::InternalServerError()
            })?;

        if !response.status().is_success() {
            error!(
                "Markets request failed with status {} for query: {:?}",
                response.status(),
                query
            );
            return Err(AppError::InternalServerError());
        }

        let records: Vec<CoinMarketRecord> = response.json().await.map_err(|e| {
            error!("Error deserializing markets: {} with query: {:?}", e, query);
            AppError::InternalServerError()
        })?;

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markets_query_carries_provider_parameters() {
        let query = CoinGeckoMarketsQuery::new("usd".to_string(), 100, 1);

        let encoded = serde_json::to_value(&query).unwrap();
        assert_eq!(encoded["vs_currency"], "usd");
        assert_eq!(encoded["per_page"], 100);
        assert_eq!(encoded["page"], 1);
        assert_eq!(encoded["order"], "market_cap_desc");
        assert_eq!(encoded["price_change_percentage"], "24h");
    }
}
