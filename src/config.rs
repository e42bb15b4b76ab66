use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "top.secret.json";
pub const DEFAULT_CURRENCY_URL: &str = "https://api.privatbank.ua/p24api/pubinfo?json&exchange&coursid=5";
pub const DEFAULT_REGIONS_FILE: &str = "regions.json";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Startup configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Config value {0} is missing or empty")]
    Missing(&'static str),
}

/// On-disk shape of the config file
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawConfig {
    #[serde(default)]
    token: String,
    #[serde(default)]
    map_data_url: String,
    #[serde(default)]
    covid_info_url: String,
    currency_url: Option<String>,
    regions_file: Option<PathBuf>,
    request_timeout_secs: Option<u64>,
}

/// Immutable process configuration, built once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub map_data_url: String,
    pub covid_info_url: String,
    pub currency_url: String,
    pub regions_file: PathBuf,
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load the config file at `path`. `token_override` (the `DISCORD_TOKEN`
    /// environment variable) wins over the file's `Token` when non-empty.
    pub fn load(path: &Path, token_override: Option<String>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let raw: RawConfig = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let token = token_override
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(raw.token);

        let config = Config {
            token: require("Token", token)?,
            map_data_url: require("MapDataUrl", raw.map_data_url)?,
            covid_info_url: require("CovidInfoUrl", raw.covid_info_url)?,
            currency_url: raw
                .currency_url
                .filter(|u| !u.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CURRENCY_URL.to_string()),
            regions_file: raw
                .regions_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_REGIONS_FILE)),
            request_timeout_secs: raw
                .request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(config)
    }

    /// Load using `BOT_CONFIG` and `DISCORD_TOKEN` from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::var("BOT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load(Path::new(&path), std::env::var("DISCORD_TOKEN").ok())
    }
}

fn require(name: &'static str, value: String) -> Result<String, ConfigError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        Err(ConfigError::Missing(name))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_required_values_and_defaults() {
        let file = write_config(
            r#"{"Token":"abc","MapDataUrl":"http://map","CovidInfoUrl":"http://info?region"}"#,
        );
        let config = Config::load(file.path(), None).unwrap();

        assert_eq!(config.token, "abc");
        assert_eq!(config.map_data_url, "http://map");
        assert_eq!(config.covid_info_url, "http://info?region");
        assert_eq!(config.currency_url, DEFAULT_CURRENCY_URL);
        assert_eq!(config.regions_file, PathBuf::from(DEFAULT_REGIONS_FILE));
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn test_load_optional_values() {
        let file = write_config(
            r#"{"Token":"abc","MapDataUrl":"http://map","CovidInfoUrl":"http://info",
                "CurrencyUrl":"http://cur","RegionsFile":"data/regions.json","RequestTimeoutSecs":5}"#,
        );
        let config = Config::load(file.path(), None).unwrap();

        assert_eq!(config.currency_url, "http://cur");
        assert_eq!(config.regions_file, PathBuf::from("data/regions.json"));
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn test_token_override_wins() {
        let file = write_config(
            r#"{"Token":"from-file","MapDataUrl":"http://map","CovidInfoUrl":"http://info"}"#,
        );
        let config = Config::load(file.path(), Some("from-env".to_string())).unwrap();
        assert_eq!(config.token, "from-env");

        let config = Config::load(file.path(), Some("  ".to_string())).unwrap();
        assert_eq!(config.token, "from-file");
    }

    #[test]
    fn test_missing_required_value() {
        let file = write_config(r#"{"Token":"abc","MapDataUrl":"http://map"}"#);
        let err = Config::load(file.path(), None).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("CovidInfoUrl")));
    }

    #[test]
    fn test_malformed_config() {
        let file = write_config("{not json");
        let err = Config::load(file.path(), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/nonexistent/top.secret.json"), None).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
