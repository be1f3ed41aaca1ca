pub mod coins_list;
pub mod markets;

use reqwest::Client;

pub const COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Header CoinGecko expects the demo-tier credential in.
const API_KEY_HEADER: &str = "x-cg-demo-api-key";

pub struct CoinGeckoService {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl CoinGeckoService {
    pub fn new(base_url: Option<String>, api_key: Option<String>) -> Self {
        let client = Client::new();
        Self {
            client,
            base_url: base_url.unwrap_or_else(|| COINGECKO_BASE_URL.to_string()),
            api_key,
        }
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let request = self.client.get(format!("{}{}", self.base_url, path));
        match &self.api_key {
            Some(api_key) => request.header(API_KEY_HEADER, api_key),
            None => request,
        }
    }
}
