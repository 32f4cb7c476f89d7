// ABOUTME: OuraClient implementation - authenticated GETs against the usercollection routes
// ABOUTME: One parameterized date-ranged fetch plus the hand-written heartrate fetch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 oura-client contributors

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::endpoint::DateRangeEndpoint;
use crate::errors::{classify_status, OuraApiError, OuraResult};
use crate::http_client::shared_client;

/// Base URL all requests are issued against
pub const OURA_API_BASE_URL: &str = "https://api.ouraring.com/v2/usercollection/";

/// Calendar-date matcher for `start_date`/`end_date` arguments.
/// Hardcoded pattern - should always compile; validation fails closed if not.
static DATE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").ok());

/// Check a date argument before any network call is made.
fn validate_date(value: &str, param: &'static str) -> OuraResult<()> {
    let valid =
        value.len() == 10 && DATE_PATTERN.as_ref().is_some_and(|re| re.is_match(value));
    if valid {
        Ok(())
    } else {
        Err(OuraApiError::InvalidDateFormat { param })
    }
}

/// Client for the Oura Ring API v2.
///
/// Holds the caller's personal access token and the base URL; both are
/// immutable for the life of the instance. The underlying HTTP transport
/// is the process-wide [`shared_client`], so cloning is cheap and one
/// instance can be shared freely across tasks. Every fetch issues exactly
/// one request with exactly one `Authorization: Bearer` header; there are
/// no retries and no caching.
#[derive(Clone)]
pub struct OuraClient {
    base_url: String,
    token: String,
    client: Client,
}

impl OuraClient {
    /// Create a client for the production Oura API.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, OURA_API_BASE_URL)
    }

    /// Create a client against a custom base URL.
    ///
    /// The base URL must end with a trailing slash; endpoint path segments
    /// are appended to it verbatim. Intended for gateways and tests.
    #[must_use]
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            client: shared_client().clone(),
        }
    }

    /// Fetch one date-ranged endpoint.
    ///
    /// `start` and `end` must each be exactly 10 characters in
    /// `YYYY-MM-DD` form; a malformed argument fails with
    /// [`OuraApiError::InvalidDateFormat`] before any request is sent.
    /// On success the decoded JSON body is returned verbatim.
    #[instrument(skip(self), fields(endpoint = %endpoint))]
    pub async fn fetch_by_date_range(
        &self,
        endpoint: DateRangeEndpoint,
        start: &str,
        end: &str,
    ) -> OuraResult<Value> {
        validate_date(start, "start date")?;
        validate_date(end, "end date")?;

        let response = self
            .get(endpoint.path(), &[("start_date", start), ("end_date", end)])
            .await?;

        if let Err(err) = classify_status(response.status()) {
            warn!(endpoint = endpoint.path(), "Oura API request rejected");
            return Err(err);
        }

        Ok(response.json().await?)
    }

    /// Fetch heart rate samples within a datetime range.
    ///
    /// Unlike the date-ranged endpoints, `start_datetime` and
    /// `end_datetime` are passed through without local format validation:
    /// the heartrate route accepts full ISO-8601 timestamps, which the
    /// `YYYY-MM-DD` check would reject.
    #[instrument(skip(self))]
    pub async fn get_heart_rate(
        &self,
        start_datetime: &str,
        end_datetime: &str,
    ) -> OuraResult<Value> {
        let response = self
            .get(
                "heartrate",
                &[
                    ("start_datetime", start_datetime),
                    ("end_datetime", end_datetime),
                ],
            )
            .await?;

        classify_status(response.status())?;
        Ok(response.json().await?)
    }

    /// Fetch daily activity summaries within a date range.
    pub async fn get_daily_activity(&self, start: &str, end: &str) -> OuraResult<Value> {
        self.fetch_by_date_range(DateRangeEndpoint::DailyActivity, start, end)
            .await
    }

    /// Fetch daily readiness scores within a date range.
    pub async fn get_daily_readiness(&self, start: &str, end: &str) -> OuraResult<Value> {
        self.fetch_by_date_range(DateRangeEndpoint::DailyReadiness, start, end)
            .await
    }

    /// Fetch daily sleep scores within a date range.
    pub async fn get_daily_sleep(&self, start: &str, end: &str) -> OuraResult<Value> {
        self.fetch_by_date_range(DateRangeEndpoint::DailySleep, start, end)
            .await
    }

    /// Fetch moment and rest sessions within a date range.
    pub async fn get_session(&self, start: &str, end: &str) -> OuraResult<Value> {
        self.fetch_by_date_range(DateRangeEndpoint::Session, start, end)
            .await
    }

    /// Fetch individual sleep periods within a date range.
    pub async fn get_sleep(&self, start: &str, end: &str) -> OuraResult<Value> {
        self.fetch_by_date_range(DateRangeEndpoint::Sleep, start, end)
            .await
    }

    /// Fetch user-entered tags within a date range.
    pub async fn get_tag(&self, start: &str, end: &str) -> OuraResult<Value> {
        self.fetch_by_date_range(DateRangeEndpoint::Tag, start, end)
            .await
    }

    /// Fetch workouts within a date range.
    pub async fn get_workout(&self, start: &str, end: &str) -> OuraResult<Value> {
        self.fetch_by_date_range(DateRangeEndpoint::Workout, start, end)
            .await
    }

    /// Fetch personal info within a date range.
    pub async fn get_personal_info(&self, start: &str, end: &str) -> OuraResult<Value> {
        self.fetch_by_date_range(DateRangeEndpoint::PersonalInfo, start, end)
            .await
    }

    /// Issue the GET and return the raw response; status is classified by
    /// the caller so the date-ranged path can name the failing endpoint.
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> OuraResult<Response> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "issuing Oura API request");

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .query(query)
            .send()
            .await?;

        debug!(status = %response.status(), "Oura API response received");
        Ok(response)
    }
}

// Manual Debug so the token can never leak through logs or error chains.
impl fmt::Debug for OuraClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OuraClient")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
