use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

use crate::relevance::{RelevanceConfig, RelevanceProvider};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub relevance: Option<RelevanceConfig>,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    "0.0.0.0".parse().unwrap()
}

fn default_port() -> u16 {
    8080
}

/// Catalog data source configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Path to a fort dataset JSON file. When absent the embedded
    /// dataset is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub catalog: SanitizedCatalogConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance: Option<SanitizedRelevanceConfig>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedCatalogConfig {
    /// "embedded" or the configured file path.
    pub source: String,
}

/// Sanitized relevance config (API key hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedRelevanceConfig {
    pub provider: String,
    pub model: String,
    pub api_key_configured: bool,
    pub timeout_secs: u32,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            catalog: SanitizedCatalogConfig {
                source: config
                    .catalog
                    .data_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "embedded".to_string()),
            },
            relevance: config.relevance.as_ref().map(|r| SanitizedRelevanceConfig {
                provider: match r.provider {
                    RelevanceProvider::Gemini => "gemini".to_string(),
                },
                model: r.model.clone(),
                api_key_configured: !r.api_key.is_empty(),
                timeout_secs: r.timeout_secs,
            }),
        }
    }
}
