//! Runtime configuration.
//!
//! Defaults cover the first week of September 2023; every value can be overridden
//! through environment variables:
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `NEO_API_KEY` | NeoWs API key | `DEMO_KEY` |
//! | `NEO_API_BASE` | API root URL | `https://api.nasa.gov/neo/rest/v1` |
//! | `NEO_FEED_START` | first day of the feed window | `2023-09-01` |
//! | `NEO_FEED_END` | last day of the feed window | `2023-09-08` |
//! | `NEO_FETCH_TIMEOUT_SECS` | HTTP timeout | `15` |
//! | `NEO_ORRERY_SEED` | RNG seed for a reproducible layout | random |

use std::time::Duration;

use bevy::prelude::*;
use chrono::NaiveDate;

use crate::orbit::OrbitSampling;

/// Longest date window the feed endpoint accepts, in days.
pub const MAX_FEED_SPAN_DAYS: i64 = 7;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{var}: invalid date {value:?} (expected YYYY-MM-DD)")]
    InvalidDate { var: &'static str, value: String },

    #[error("{var}: invalid number {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("feed window ends ({end}) before it starts ({start})")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },

    #[error("feed window spans {days} days, the API allows at most {max}", max = MAX_FEED_SPAN_DAYS)]
    WindowTooLong { days: i64 },

    #[error("fetch timeout must be positive")]
    ZeroTimeout,

    #[error("orbit sampling ranges must be non-empty and strictly positive")]
    DegenerateSampling,
}

/// Application configuration, inserted as a resource at startup.
#[derive(Resource, Clone, Debug)]
pub struct OrreryConfig {
    pub api_base: String,
    pub api_key: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub timeout: Duration,
    pub seed: Option<u64>,
    pub sampling: OrbitSampling,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.nasa.gov/neo/rest/v1".to_string(),
            api_key: "DEMO_KEY".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 9, 1).unwrap_or_default(),
            end_date: NaiveDate::from_ymd_opt(2023, 9, 8).unwrap_or_default(),
            timeout: Duration::from_secs(15),
            seed: None,
            sampling: OrbitSampling::default(),
        }
    }
}

impl OrreryConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults overridden by `lookup`, then validated.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(key) = lookup("NEO_API_KEY").filter(|k| !k.trim().is_empty()) {
            config.api_key = key.trim().to_string();
        }
        if let Some(base) = lookup("NEO_API_BASE").filter(|b| !b.trim().is_empty()) {
            config.api_base = base.trim().to_string();
        }
        if let Some(raw) = lookup("NEO_FEED_START") {
            config.start_date = parse_date("NEO_FEED_START", &raw)?;
        }
        if let Some(raw) = lookup("NEO_FEED_END") {
            config.end_date = parse_date("NEO_FEED_END", &raw)?;
        }
        if let Some(raw) = lookup("NEO_FETCH_TIMEOUT_SECS") {
            let secs: u64 = parse_number("NEO_FETCH_TIMEOUT_SECS", &raw)?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(raw) = lookup("NEO_ORRERY_SEED") {
            config.seed = Some(parse_number("NEO_ORRERY_SEED", &raw)?);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.end_date < self.start_date {
            return Err(ConfigError::EndBeforeStart {
                start: self.start_date,
                end: self.end_date,
            });
        }
        let days = (self.end_date - self.start_date).num_days();
        if days > MAX_FEED_SPAN_DAYS {
            return Err(ConfigError::WindowTooLong { days });
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        if !self.sampling.is_positive() {
            return Err(ConfigError::DegenerateSampling);
        }
        Ok(())
    }
}

fn parse_date(var: &'static str, raw: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| ConfigError::InvalidDate {
        var,
        value: raw.to_string(),
    })
}

fn parse_number<T: std::str::FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        var,
        value: raw.to_string(),
    })
}
