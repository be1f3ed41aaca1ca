use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams, Default)]
pub struct MarketsQuery {
    /// Quote currency for prices and volumes
    #[param(default = "usd")]
    pub vs_currency: Option<String>,
    /// Snapshot page size requested from the provider
    #[param(default = 100)]
    pub per_page: Option<u32>,
    #[param(default = 1)]
    pub page: Option<u32>,
    /// How many gainers and losers to return
    #[param(default = 5)]
    pub top_n: Option<i64>,
}
