// ABOUTME: Shared HTTP client with connection pooling for Oura API calls
// ABOUTME: Process-wide singleton with timeouts configurable once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 oura-client contributors

use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection timeout
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeouts applied when the shared client is first built
static CLIENT_TIMEOUTS: OnceLock<(Duration, Duration)> = OnceLock::new();

/// Lazily built process-wide HTTP client
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Configure the timeouts used by the shared HTTP client.
///
/// Call once at process startup, before the first [`OuraClient`] is
/// constructed. Calls made after the client has been built have no
/// effect. Without it the defaults apply (30s request, 10s connect).
///
/// [`OuraClient`]: crate::client::OuraClient
pub fn initialize_shared_client(timeout: Duration, connect_timeout: Duration) {
    let _ = CLIENT_TIMEOUTS.set((timeout, connect_timeout));
}

/// Get the shared HTTP client used for all Oura API calls.
///
/// Connection pooling and TLS configuration live here; every
/// [`OuraClient`](crate::client::OuraClient) clones this handle.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let (timeout, connect_timeout) = CLIENT_TIMEOUTS
            .get()
            .copied()
            .unwrap_or((DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT));

        ClientBuilder::new()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}
