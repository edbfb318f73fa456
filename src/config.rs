// src/config.rs
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

use crate::errors::CoreError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    pub min_base_rally_ratio: f64, // Rally must exceed base length times this ratio
    pub extrema_window: usize,     // Half-width of the extrema window, also the base width
    pub min_momentum_candles: usize, // Strong candles required leaving the base
    pub detect_continuation_patterns: bool,
    pub doji_body_ratio: f64, // Body at or below this share of the range counts as a doji
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            min_base_rally_ratio: 1.5,
            extrema_window: 4,
            min_momentum_candles: 2,
            detect_continuation_patterns: false,
            doji_body_ratio: 0.1,
        }
    }
}

/// Optional overrides, as they arrive from an HTTP body or CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatcherParams {
    pub min_base_rally_ratio: Option<f64>,
    pub extrema_window: Option<usize>,
    pub min_momentum_candles: Option<usize>,
    pub detect_continuation_patterns: Option<bool>,
    pub doji_body_ratio: Option<f64>,
}

impl MatcherConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.min_base_rally_ratio.is_finite() || self.min_base_rally_ratio <= 0.0 {
            return Err(CoreError::Config(format!(
                "min_base_rally_ratio must be a positive number, got {}",
                self.min_base_rally_ratio
            )));
        }
        if self.extrema_window == 0 {
            return Err(CoreError::Config(
                "extrema_window must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.doji_body_ratio) {
            return Err(CoreError::Config(format!(
                "doji_body_ratio must be within [0, 1], got {}",
                self.doji_body_ratio
            )));
        }
        Ok(())
    }

    pub fn with_overrides(&self, params: &MatcherParams) -> Self {
        Self {
            min_base_rally_ratio: params
                .min_base_rally_ratio
                .unwrap_or(self.min_base_rally_ratio),
            extrema_window: params.extrema_window.unwrap_or(self.extrema_window),
            min_momentum_candles: params
                .min_momentum_candles
                .unwrap_or(self.min_momentum_candles),
            detect_continuation_patterns: params
                .detect_continuation_patterns
                .unwrap_or(self.detect_continuation_patterns),
            doji_body_ratio: params.doji_body_ratio.unwrap_or(self.doji_body_ratio),
        }
    }

    /// Defaults overridden by `ZONE_*` environment variables.
    pub fn from_env() -> Result<Self, CoreError> {
        let defaults = Self::default();
        let params = MatcherParams {
            min_base_rally_ratio: env_var_parsed("ZONE_MIN_BASE_RALLY_RATIO")?,
            extrema_window: env_var_parsed("ZONE_EXTREMA_WINDOW")?,
            min_momentum_candles: env_var_parsed("ZONE_MIN_MOMENTUM_CANDLES")?,
            detect_continuation_patterns: env_var_parsed("ZONE_DETECT_CONTINUATION")?,
            doji_body_ratio: env_var_parsed("ZONE_DOJI_BODY_RATIO")?,
        };
        let config = defaults.with_overrides(&params);
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origin: String,
    pub log_config: String,
    pub min_candles: usize,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, CoreError> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env_var_parsed("PORT")?.unwrap_or(8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:4200".to_string()),
            log_config: env::var("LOG_CONFIG").unwrap_or_else(|_| "log4rs.yaml".to_string()),
            min_candles: env_var_parsed("MIN_CANDLES")?.unwrap_or(1),
        })
    }
}

fn env_var_parsed<T: FromStr>(name: &str) -> Result<Option<T>, CoreError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
            CoreError::Config(format!("Environment variable {} has invalid value '{}'", name, raw))
        }),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(CoreError::Config(format!("Environment variable {}: {}", name, e))),
    }
}
