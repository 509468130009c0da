//! Runtime configuration read from the environment.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `BEER_STOCK_STORE_BUFFER` | `32` | request queue size of the store actor |
//! | `BEER_STOCK_LOG` | `info` | log filter used when `RUST_LOG` is unset |

use thiserror::Error;

pub const STORE_BUFFER_VAR: &str = "BEER_STOCK_STORE_BUFFER";
pub const LOG_FILTER_VAR: &str = "BEER_STOCK_LOG";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockConfig {
    pub store_buffer: usize,
    pub log_filter: String,
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            store_buffer: 32,
            log_filter: "info".to_string(),
        }
    }
}

impl StockConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let store_buffer = match lookup(STORE_BUFFER_VAR) {
            Some(raw) => parse_buffer(&raw)?,
            None => defaults.store_buffer,
        };
        let log_filter = lookup(LOG_FILTER_VAR).unwrap_or(defaults.log_filter);

        Ok(Self { store_buffer, log_filter })
    }
}

fn parse_buffer(raw: &str) -> Result<usize, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidValue {
        key: STORE_BUFFER_VAR,
        value: raw.to_string(),
        reason,
    };

    match raw.trim().parse::<usize>() {
        Ok(0) => Err(invalid("must be greater than zero".to_string())),
        Ok(size) => Ok(size),
        Err(e) => Err(invalid(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = StockConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, StockConfig::default());
    }

    #[test]
    fn test_reads_overrides() {
        let config = StockConfig::from_lookup(lookup_from(&[
            (STORE_BUFFER_VAR, " 8 "),
            (LOG_FILTER_VAR, "beer_stock=debug"),
        ]))
        .unwrap();

        assert_eq!(config.store_buffer, 8);
        assert_eq!(config.log_filter, "beer_stock=debug");
    }

    #[test]
    fn test_rejects_zero_and_garbage_buffer() {
        for raw in ["0", "many"] {
            let err = StockConfig::from_lookup(lookup_from(&[(STORE_BUFFER_VAR, raw)])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { key: STORE_BUFFER_VAR, .. }));
        }
    }
}
