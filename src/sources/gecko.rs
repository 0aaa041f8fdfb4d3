use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::{JsonFeed, SourceError};

/// GeckoTerminal trending-pools feed for one network.
pub struct TrendingPools {
    client: Client,
    url: String,
}

impl TrendingPools {
    pub fn new(url: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .unwrap(),
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl JsonFeed for TrendingPools {
    fn name(&self) -> &'static str {
        "TrendingPools"
    }

    async fn fetch(&self) -> Result<Value, SourceError> {
        let resp = self.client.get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(SourceError::Http(resp.status().as_u16()));
        }

        resp.json::<Value>()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))
    }
}
