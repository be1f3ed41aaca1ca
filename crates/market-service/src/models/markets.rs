use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One coin's market state inside a fetched snapshot.
///
/// Field names follow the provider's `/coins/markets` payload so responses
/// stay byte-compatible with a plain pass-through, except `total_volume`
/// which is exposed as `volume_24h` internally.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default, ToSchema)]
pub struct CoinMarketRecord {
    /// Provider-assigned identifier, unique within one snapshot
    pub id: String,
    /// Ticker symbol, not guaranteed unique
    pub symbol: String,
    /// Display name, not guaranteed unique
    pub name: String,
    /// Logo URL
    pub image: Option<String>,
    /// Price in the snapshot's quote currency
    pub current_price: Option<Decimal>,
    /// Market capitalization in the quote currency
    pub market_cap: Option<Decimal>,
    /// Rank by market capitalization
    pub market_cap_rank: Option<u32>,
    /// Trading volume over the last 24h in the quote currency
    #[serde(rename = "total_volume")]
    pub volume_24h: Option<Decimal>,
    /// Signed 24h price change, percent. Absent when the provider
    /// lacks 24h history for the coin.
    pub price_change_percentage_24h: Option<Decimal>,
    /// Provider-side timestamp of the quote
    pub last_updated: Option<DateTime<Utc>>,
}

impl CoinMarketRecord {
    /// A record can be ranked only when its 24h change and the required
    /// market quantities are all present. Malformed records are skipped,
    /// never a reason to abort the whole snapshot.
    pub fn is_rankable(&self) -> bool {
        self.price_change_percentage_24h.is_some()
            && self.current_price.is_some()
            && self.market_cap.is_some()
            && self.volume_24h.is_some()
    }
}

/// One entry of the provider's full coin catalogue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default, ToSchema)]
pub struct CoinListItem {
    pub id: String,
    pub symbol: String,
    pub name: String,
}

/// Top movers derived from one snapshot. Recomputed per request,
/// never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoversResult {
    /// Ranked by 24h change, descending
    pub top_gainers: Vec<CoinMarketRecord>,
    /// Ranked by 24h change, ascending
    pub top_losers: Vec<CoinMarketRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_provider_market_record() {
        let raw = r#"{
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "image": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png",
            "current_price": 97211.0,
            "market_cap": 1922314868373.0,
            "market_cap_rank": 1,
            "total_volume": 51042561837.0,
            "price_change_percentage_24h": -1.23456,
            "last_updated": "2025-02-14T09:30:00.000Z",
            "ath": 108135.0
        }"#;

        let record: CoinMarketRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.id, "bitcoin");
        assert_eq!(record.market_cap_rank, Some(1));
        assert!(record.volume_24h.is_some());
        assert!(record.is_rankable());
    }

    #[test]
    fn null_change_percentage_maps_to_none() {
        let raw = r#"{
            "id": "wrapped-something",
            "symbol": "wsm",
            "name": "Wrapped Something",
            "image": null,
            "current_price": 1.0,
            "market_cap": 1000.0,
            "market_cap_rank": null,
            "total_volume": 10.0,
            "price_change_percentage_24h": null,
            "last_updated": null
        }"#;

        let record: CoinMarketRecord = serde_json::from_str(raw).unwrap();
        assert!(record.price_change_percentage_24h.is_none());
        assert!(!record.is_rankable());
    }

    #[test]
    fn movers_result_uses_camel_case_wire_names() {
        let result = MoversResult::default();
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("topGainers").is_some());
        assert!(json.get("topLosers").is_some());
    }
}
