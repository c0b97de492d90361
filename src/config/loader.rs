//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServiceConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid {field}: {source}")]
    InvalidUrl {
        field: &'static str,
        source: url::ParseError,
    },

    #[error("Invalid render.cell_size: must be greater than zero")]
    ZeroCellSize,
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ServiceConfig = toml::from_str(&content)?;

    validate_config(&config)?;

    Ok(config)
}

/// Semantic checks beyond what serde enforces.
pub fn validate_config(config: &ServiceConfig) -> Result<(), ConfigError> {
    url::Url::parse(&config.upstream.history_base_url).map_err(|source| {
        ConfigError::InvalidUrl {
            field: "upstream.history_base_url",
            source,
        }
    })?;
    url::Url::parse(&config.upstream.assets_base_url).map_err(|source| {
        ConfigError::InvalidUrl {
            field: "upstream.assets_base_url",
            source,
        }
    })?;

    if config.render.cell_size == 0 {
        return Err(ConfigError::ZeroCellSize);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: ServiceConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "127.0.0.1:9000"

            [render]
            cell_size = 64
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        assert_eq!(config.render.cell_size, 64);
        // Untouched sections keep their defaults.
        assert_eq!(config.render.blur_sigma, 5.0);
        assert_eq!(
            config.upstream.history_base_url,
            "https://rat.kajotgames.dev"
        );
    }

    #[test]
    fn rejects_unparseable_upstream_url() {
        let mut config = ServiceConfig::default();
        config.upstream.history_base_url = "not a url".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn rejects_zero_cell_size() {
        let mut config = ServiceConfig::default();
        config.render.cell_size = 0;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ZeroCellSize)
        ));
    }
}
