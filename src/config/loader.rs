//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::DEFAULT_ENDPOINT;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.endpoint.url, DEFAULT_ENDPOINT);
        assert_eq!(config.observability.log_level, "info");
        assert!(!config.observability.json);
    }

    #[test]
    fn test_partial_sections() {
        let config = parse_config(
            r#"
            [endpoint]
            url = "http://127.0.0.1:9000/api/hello"
            "#,
        )
        .unwrap();
        assert_eq!(config.endpoint.url, "http://127.0.0.1:9000/api/hello");
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = parse_config(
            r#"
            [endpoint]
            url = "not a url"

            [observability]
            log_level = "loud"
            "#,
        )
        .unwrap_err();

        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn test_malformed_toml() {
        let err = parse_config("[endpoint\nurl = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("backend-status-{}.toml", uuid::Uuid::new_v4()));
        fs::write(
            &path,
            "[observability]\nlog_level = \"debug\"\njson = true\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.observability.log_level, "debug");
        assert!(config.observability.json);

        fs::remove_file(&path).unwrap_or_default();
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/backend-status.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
