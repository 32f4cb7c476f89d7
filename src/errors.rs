// ABOUTME: Typed error taxonomy for Oura API calls and local input validation
// ABOUTME: Maps upstream HTTP status bands to distinct error kinds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 oura-client contributors

use reqwest::StatusCode;
use thiserror::Error;

/// Result alias used throughout the crate
pub type OuraResult<T> = Result<T, OuraApiError>;

/// Everything that can go wrong talking to the Oura API.
///
/// The first four variants mirror the status bands the upstream API
/// documents and carry its fixed messages. `InvalidDateFormat` is a local
/// validation failure raised before any network call. `UnexpectedStatus`
/// covers every other non-2xx code (3xx, 401, 403, 404, 422, ...) so that
/// no response is ever silently treated as success.
#[derive(Debug, Error)]
pub enum OuraApiError {
    /// Upstream rejected the request's query parameters (HTTP 400)
    #[error(
        "The request contains query parameters that are invalid or incorrectly formatted."
    )]
    QueryParameterValidation,

    /// The user's mobile app is too old to share this data type (HTTP 426)
    #[error(
        "The Oura user's mobile app does not meet the minimum app version requirement \
         to support sharing the requested data type. The Oura user must update their \
         mobile app to enable API access for the requested data type."
    )]
    MinimumAppVersion,

    /// Upstream rate limit exceeded (HTTP 429)
    #[error(
        "The API is rate limited to 5000 requests in a 5 minute period. You will \
         receive a 429 error code if you exceed this limit. Contact us if you expect \
         your usage to exceed this limit."
    )]
    RateLimitExceeded,

    /// Upstream server-side failure (HTTP 5xx)
    #[error("Internal Oura API server error.")]
    InternalServer,

    /// A date argument failed local validation; no request was sent
    #[error("{param} is not in YYYY-MM-DD format")]
    InvalidDateFormat {
        /// Which argument failed validation
        param: &'static str,
    },

    /// A non-2xx status outside the documented bands
    #[error("unexpected status {status} from the Oura API")]
    UnexpectedStatus {
        /// The raw HTTP status code
        status: u16,
    },

    /// Network-level failure or undecodable response body
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Classify an upstream HTTP status code.
///
/// Pure function of the status: 2xx is success, the four documented bands
/// map to their error kinds, and anything else becomes
/// [`OuraApiError::UnexpectedStatus`].
pub fn classify_status(status: StatusCode) -> OuraResult<()> {
    if status.is_success() {
        return Ok(());
    }
    match status.as_u16() {
        400 => Err(OuraApiError::QueryParameterValidation),
        426 => Err(OuraApiError::MinimumAppVersion),
        429 => Err(OuraApiError::RateLimitExceeded),
        code if code >= 500 => Err(OuraApiError::InternalServer),
        code => Err(OuraApiError::UnexpectedStatus { status: code }),
    }
}
