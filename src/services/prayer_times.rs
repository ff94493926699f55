//! Prayer-times lookup against the Aladhan `timingsByCity` endpoint.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::utils::datetime::{format_api_date, normalize_clock_time};
use crate::utils::logging::{log_lookup, log_lookup_error, log_timeout};

/// Country sent with every lookup.
pub const LOOKUP_COUNTRY: &str = "Uzbekistan";
/// Aladhan calculation method 2 (ISNA).
pub const CALCULATION_METHOD: u8 = 2;

/// Dawn (suhoor ends) and dusk (iftar) for one region on one date, as `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerWindow {
    pub dawn: String,
    pub dusk: String,
}

impl PrayerWindow {
    pub fn new(dawn: impl Into<String>, dusk: impl Into<String>) -> Self {
        Self {
            dawn: dawn.into(),
            dusk: dusk.into(),
        }
    }
}

/// A failed lookup. Callers treat every variant the same way; the kind
/// exists for logs.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request timed out")]
    Timeout,
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed payload: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LookupError::Timeout
        } else if let Some(status) = err.status() {
            LookupError::Status(status.as_u16())
        } else if err.is_decode() {
            LookupError::Malformed(err.to_string())
        } else {
            LookupError::Transport(err.to_string())
        }
    }
}

/// Source of the daily dawn and dusk times for a city.
#[async_trait]
pub trait PrayerTimeProvider: Send + Sync {
    async fn fetch(&self, lookup_id: &str, date: NaiveDate) -> Result<PrayerWindow, LookupError>;
}

#[derive(Debug, Deserialize)]
struct TimingsEnvelope {
    data: TimingsData,
}

#[derive(Debug, Deserialize)]
struct TimingsData {
    timings: Timings,
}

#[derive(Debug, Deserialize)]
struct Timings {
    #[serde(rename = "Fajr")]
    fajr: String,
    #[serde(rename = "Maghrib")]
    maghrib: String,
}

/// HTTP client for the Aladhan API. One outbound request per call, no retry.
#[derive(Debug, Clone)]
pub struct AladhanClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl AladhanClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ramadan-schedule-bot/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    async fn request(&self, lookup_id: &str, date: &str) -> Result<PrayerWindow, LookupError> {
        let url = format!("{}/timingsByCity/{}", self.base_url, date);
        let method = CALCULATION_METHOD.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[("city", lookup_id), ("country", LOOKUP_COUNTRY), ("method", method.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status().as_u16()));
        }

        let body = response.bytes().await?;
        parse_timings(&body)
    }
}

/// Extracts dawn and dusk from a `timingsByCity` response body.
pub fn parse_timings(body: &[u8]) -> Result<PrayerWindow, LookupError> {
    let envelope: TimingsEnvelope =
        serde_json::from_slice(body).map_err(|e| LookupError::Malformed(e.to_string()))?;
    let timings = envelope.data.timings;

    let dawn = normalize_clock_time(&timings.fajr)
        .ok_or_else(|| LookupError::Malformed(format!("bad Fajr value '{}'", timings.fajr)))?;
    let dusk = normalize_clock_time(&timings.maghrib)
        .ok_or_else(|| LookupError::Malformed(format!("bad Maghrib value '{}'", timings.maghrib)))?;

    Ok(PrayerWindow { dawn, dusk })
}

#[async_trait]
impl PrayerTimeProvider for AladhanClient {
    async fn fetch(&self, lookup_id: &str, date: NaiveDate) -> Result<PrayerWindow, LookupError> {
        let date = format_api_date(date);
        log_lookup(lookup_id, &date, None);

        match self.request(lookup_id, &date).await {
            Ok(window) => {
                log_lookup(lookup_id, &date, Some(&format!("{} / {}", window.dawn, window.dusk)));
                Ok(window)
            }
            Err(LookupError::Timeout) => {
                log_timeout("prayer times lookup", self.timeout.as_secs(), Some(lookup_id));
                Err(LookupError::Timeout)
            }
            Err(e) => {
                log_lookup_error(lookup_id, &date, &e.to_string());
                Err(e)
            }
        }
    }
}
