use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub watch: WatchConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EndpointsConfig {
    #[serde(default = "default_tvl_history")]
    pub tvl_history: String,
    #[serde(default = "default_trending_pools")]
    pub trending_pools: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    #[serde(default = "default_chart_points")]
    pub chart_points: usize,
    #[serde(default = "default_chart_height")]
    pub chart_height: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WatchConfig {
    #[serde(default = "default_interval")]
    pub interval: u64,
}

fn default_tvl_history() -> String {
    "https://api.llama.fi/v2/historicalChainTvl/Sei".to_string()
}

fn default_trending_pools() -> String {
    "https://api.geckoterminal.com/api/v2/networks/sei-evm/trending_pools".to_string()
}

fn default_chart_points() -> usize { 60 }
fn default_chart_height() -> usize { 10 }
fn default_interval() -> u64 { 60 }

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            tvl_history: default_tvl_history(),
            trending_pools: default_trending_pools(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            chart_points: default_chart_points(),
            chart_height: default_chart_height(),
        }
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self { interval: default_interval() }
    }
}

impl Config {
    /// Load config.toml if present, otherwise fall back to built-in defaults.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        match fs::read_to_string("config.toml") {
            Ok(content) => {
                let config: Config = toml::from_str(&content)?;
                Ok(config)
            }
            Err(_) => {
                tracing::debug!("config.toml not found, using defaults");
                Ok(Config::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_fills_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.display.chart_points, 60);
        assert_eq!(config.watch.interval, 60);
        assert!(config.endpoints.tvl_history.contains("llama.fi"));
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str(
            "[endpoints]\ntrending_pools = \"http://localhost:9999/pools\"\n",
        )
        .unwrap();
        assert_eq!(config.endpoints.trending_pools, "http://localhost:9999/pools");
        assert!(config.endpoints.tvl_history.contains("llama.fi"));
        assert_eq!(config.display.chart_height, 10);
    }
}
