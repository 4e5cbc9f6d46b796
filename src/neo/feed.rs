//! Blocking client for the NeoWs `/feed` endpoint.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::NaiveDate;

use super::record::{FeedResponse, NeoRecord};
use crate::config::OrreryConfig;

/// Why a feed request produced no data.
#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("upstream returned HTTP {status}")]
    Upstream { status: u16 },

    #[error("malformed feed payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Records of one feed response, keyed by calendar date.
pub type FeedByDate = BTreeMap<String, Vec<NeoRecord>>;

/// HTTP client bound to one API endpoint and key.
#[derive(Clone)]
pub struct FeedClient {
    http: reqwest::blocking::Client,
    api_base: String,
    api_key: String,
}

impl FeedClient {
    pub fn new(
        api_base: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FeedError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("neo-orrery/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &OrreryConfig) -> Result<Self, FeedError> {
        Self::new(&config.api_base, &config.api_key, config.timeout)
    }

    /// URL of the feed request for a date range (inclusive).
    pub fn feed_url(&self, start: NaiveDate, end: NaiveDate) -> String {
        format!(
            "{}/feed?start_date={}&end_date={}&api_key={}",
            self.api_base,
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d"),
            self.api_key
        )
    }

    /// Fetch every NEO with a close approach between `start` and `end`.
    pub fn fetch_neo_feed(&self, start: NaiveDate, end: NaiveDate) -> Result<FeedByDate, FeedError> {
        let response = self
            .http
            .get(self.feed_url(start, end))
            .header("Accept", "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Upstream {
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        Ok(parse_feed(&body)?.near_earth_objects)
    }
}

/// Decode a `/feed` response body.
pub fn parse_feed(body: &str) -> Result<FeedResponse, serde_json::Error> {
    serde_json::from_str(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_url_layout() {
        let client = FeedClient::new(
            "https://api.nasa.gov/neo/rest/v1/",
            "KEY",
            Duration::from_secs(5),
        )
        .unwrap();
        let start = NaiveDate::from_ymd_opt(2023, 9, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2023, 9, 8).unwrap();
        assert_eq!(
            client.feed_url(start, end),
            "https://api.nasa.gov/neo/rest/v1/feed?start_date=2023-09-01&end_date=2023-09-08&api_key=KEY"
        );
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        assert!(parse_feed("{\"near_earth_objects\": 5}").is_err());
        assert!(parse_feed("<html>").is_err());
    }

    #[test]
    fn test_empty_payload_is_valid() {
        let feed = parse_feed("{}").unwrap();
        assert_eq!(feed.element_count, 0);
        assert!(feed.flatten().is_empty());
    }
}
