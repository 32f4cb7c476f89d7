// ABOUTME: Async client library for the Oura Ring API v2 usercollection routes
// ABOUTME: Exposes OuraClient, the endpoint selector, and the typed error taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 oura-client contributors

//! Thin async client for the Oura Ring API v2.
//!
//! The crate does one thing: issue authenticated GET requests against the
//! `usercollection` routes, validate the two date-range parameters, map the
//! upstream status code to a typed error, and hand back the JSON body
//! untouched. There is no retry logic, no pagination handling, no caching,
//! and no schema enforcement on responses.
//!
//! ```no_run
//! use oura_client::OuraClient;
//!
//! # async fn run() -> Result<(), oura_client::OuraApiError> {
//! let client = OuraClient::new("my-personal-access-token");
//! let activity = client.get_daily_activity("2023-01-01", "2023-01-31").await?;
//! println!("{activity}");
//! # Ok(())
//! # }
//! ```

/// The Oura API client and its fetch operations
pub mod client;
/// Date-ranged endpoint selector
pub mod endpoint;
/// Error taxonomy and upstream status classification
pub mod errors;
/// Shared HTTP client with connection pooling
pub mod http_client;

pub use client::{OuraClient, OURA_API_BASE_URL};
pub use endpoint::DateRangeEndpoint;
pub use errors::{classify_status, OuraApiError, OuraResult};
pub use http_client::{initialize_shared_client, shared_client};
