//! Runtime configuration, read once from the environment.

use std::path::PathBuf;

use stockkeep_infra::DEFAULT_DATA_FILE;
use stockkeep_inventory::DEFAULT_LOW_STOCK_THRESHOLD;
use stockkeep_observability::LogFormat;

pub const ENV_DATA_FILE: &str = "STOCKKEEP_DATA_FILE";
pub const ENV_LOW_STOCK_THRESHOLD: &str = "STOCKKEEP_LOW_STOCK_THRESHOLD";
pub const ENV_LOG_FORMAT: &str = "STOCKKEEP_LOG_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub data_file: PathBuf,
    pub low_stock_threshold: i64,
    pub log_format: LogFormat,
    /// Problems found while reading the environment. Logging is not set up
    /// yet at that point, so they are reported by the caller afterwards.
    pub warnings: Vec<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            log_format: LogFormat::default(),
            warnings: Vec::new(),
        }
    }
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup. Unset or blank
    /// values fall back to defaults; unparsable ones fall back with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = CliConfig::default();

        if let Some(path) = get(ENV_DATA_FILE) {
            config.data_file = PathBuf::from(path);
        }

        if let Some(raw) = get(ENV_LOW_STOCK_THRESHOLD) {
            match raw.trim().parse::<i64>() {
                Ok(threshold) => config.low_stock_threshold = threshold,
                Err(e) => config.warnings.push(format!(
                    "{ENV_LOW_STOCK_THRESHOLD}='{raw}' is not an integer ({e}); using {DEFAULT_LOW_STOCK_THRESHOLD}"
                )),
            }
        }

        if let Some(raw) = get(ENV_LOG_FORMAT) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.log_format = format,
                Err(e) => config
                    .warnings
                    .push(format!("{ENV_LOG_FORMAT}: {e}; using text")),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = CliConfig::from_lookup(lookup(&[]));
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.data_file, PathBuf::from("inventory.json"));
        assert_eq!(config.low_stock_threshold, 5);
    }

    #[test]
    fn reads_all_keys() {
        let config = CliConfig::from_lookup(lookup(&[
            (ENV_DATA_FILE, "/tmp/stock.json"),
            (ENV_LOW_STOCK_THRESHOLD, " 12 "),
            (ENV_LOG_FORMAT, "json"),
        ]));
        assert_eq!(config.data_file, PathBuf::from("/tmp/stock.json"));
        assert_eq!(config.low_stock_threshold, 12);
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn bad_values_fall_back_with_warnings() {
        let config = CliConfig::from_lookup(lookup(&[
            (ENV_DATA_FILE, "   "),
            (ENV_LOW_STOCK_THRESHOLD, "lots"),
            (ENV_LOG_FORMAT, "xml"),
        ]));
        assert_eq!(config.data_file, PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(config.low_stock_threshold, DEFAULT_LOW_STOCK_THRESHOLD);
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.warnings.len(), 2);
    }
}
