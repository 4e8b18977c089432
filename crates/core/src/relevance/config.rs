//! Relevance service configuration types.

use serde::{Deserialize, Serialize};

/// Relevance provider type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelevanceProvider {
    /// Google Gemini `generateContent` API.
    Gemini,
}

/// Relevance service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelevanceConfig {
    /// Provider backing the ranking calls.
    pub provider: RelevanceProvider,
    /// Model name/identifier (e.g. "gemini-2.5-flash").
    pub model: String,
    /// API key.
    pub api_key: String,
    /// Custom API base URL (for proxies or test servers).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

fn default_timeout() -> u32 {
    30
}
