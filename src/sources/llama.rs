use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::{JsonFeed, SourceError};

/// Historical chain-TVL feed (DefiLlama shape: array of {date, tvl}).
pub struct TvlHistory {
    client: Client,
    url: String,
}

impl TvlHistory {
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
impl JsonFeed for TvlHistory {
    fn name(&self) -> &'static str {
        "TvlHistory"
    }

    async fn fetch(&self) -> Result<Value, SourceError> {
        let resp = self.client.get(&self.url)
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
