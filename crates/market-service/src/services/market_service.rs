use std::sync::Arc;

use tracing::debug;

use crate::{
    aggregator::top_movers,
    apis::api_models::query::MarketsQuery,
    external_services::coingecko::{markets::CoinGeckoMarketsQuery, CoinGeckoService},
    models::markets::{CoinListItem, MoversResult},
    utils::errors::app_error::AppError,
};

pub struct MarketService {
    coingecko_service: Arc<CoinGeckoService>,
}

impl MarketService {
    const DEFAULT_VS_CURRENCY: &'static str = "usd";
    const DEFAULT_PER_PAGE: u32 = 100;
    const DEFAULT_PAGE: u32 = 1;
    const DEFAULT_TOP_N: i64 = 5;

    pub fn new(coingecko_service: Arc<CoinGeckoService>) -> Self {
        Self { coingecko_service }
    }

    pub async fn coins_list(&self) -> Result<Vec<CoinListItem>, AppError> {
        self.coingecko_service.get_coins_list().await
    }

    /// Fetches one snapshot page and reduces it to top gainers and losers.
    pub async fn market_movers(&self, query: MarketsQuery) -> Result<MoversResult, AppError> {
        let top_n = query.top_n.unwrap_or(Self::DEFAULT_TOP_N);
        let provider_query = CoinGeckoMarketsQuery::new(
            query
                .vs_currency
                .unwrap_or_else(|| Self::DEFAULT_VS_CURRENCY.to_string()),
            query.per_page.unwrap_or(Self::DEFAULT_PER_PAGE),
            query.page.unwrap_or(Self::DEFAULT_PAGE),
        );

        let snapshot = self.coingecko_service.get_markets(provider_query).await?;
        debug!("Ranking {} records, top_n: {}", snapshot.len(), top_n);

        let movers = top_movers(&snapshot, top_n)?;
        Ok(movers)
    }
}
