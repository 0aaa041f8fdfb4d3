pub mod llama;
pub mod gecko;

use async_trait::async_trait;
use serde_json::Value;

/// A single JSON feed. Implementations own their HTTP client and URL; the
/// payload is handed back untyped so the derivation layer can guard shape
/// problems itself instead of failing the whole fetch.
#[async_trait]
pub trait JsonFeed: Send + Sync {
    fn name(&self) -> &'static str;
    async fn fetch(&self) -> Result<Value, SourceError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum SourceError {
    Network(String),
    /// Non-success response, carrying the status code.
    Http(u16),
    Parse(String),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Network(e) => write!(f, "Network error: {}", e),
            SourceError::Http(status) => write!(f, "Request failed: {}", status),
            SourceError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}
