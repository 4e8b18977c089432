use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Relevance section, when present, has a model and an api key
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    // Relevance validation
    if let Some(relevance) = &config.relevance {
        if relevance.model.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "relevance.model cannot be empty".to_string(),
            ));
        }
        if relevance.api_key.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "relevance.api_key cannot be empty".to_string(),
            ));
        }
        if relevance.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "relevance.timeout_secs cannot be 0".to_string(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ServerConfig};
    use crate::relevance::{RelevanceConfig, RelevanceProvider};

    fn relevance(api_key: &str, model: &str, timeout_secs: u32) -> RelevanceConfig {
        RelevanceConfig {
            provider: RelevanceProvider::Gemini,
            model: model.to_string(),
            api_key: api_key.to_string(),
            api_base: None,
            timeout_secs,
        }
    }

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_port_zero_fails() {
        let config = Config {
            server: ServerConfig {
                host: "0.0.0.0".parse().unwrap(),
                port: 0,
            },
            ..Config::default()
        };
        let result = validate_config(&config);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::ValidationError(_)
        ));
    }

    #[test]
    fn test_validate_relevance_sections() {
        let ok = Config {
            relevance: Some(relevance("key", "gemini-2.5-flash", 30)),
            ..Config::default()
        };
        assert!(validate_config(&ok).is_ok());

        let empty_key = Config {
            relevance: Some(relevance("  ", "gemini-2.5-flash", 30)),
            ..Config::default()
        };
        assert!(validate_config(&empty_key).is_err());

        let empty_model = Config {
            relevance: Some(relevance("key", "", 30)),
            ..Config::default()
        };
        assert!(validate_config(&empty_model).is_err());

        let zero_timeout = Config {
            relevance: Some(relevance("key", "gemini-2.5-flash", 0)),
            ..Config::default()
        };
        assert!(validate_config(&zero_timeout).is_err());
    }
}
