//! HTTP client wrapper for talking to OAI-PMH providers.
//!
//! Transport failures are fatal to the harvest call: there is no retry
//! here, because a half-fetched resumption chain cannot be resumed and the
//! caller must re-run the whole harvest anyway.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::HTTP_TIMEOUT_SECS;
use crate::error::Result;

/// User agent string identifying this harvester.
const USER_AGENT: &str = concat!("oai-harvester/", env!("CARGO_PKG_VERSION"));

/// Create a configured HTTP client.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Fetch one `ListRecords` page as text.
///
/// Non-2xx responses are errors; the response body is assumed to be the
/// XML envelope and is parsed by the caller.
pub fn fetch_page(client: &Client, url: &str) -> Result<String> {
    tracing::info!(url, "requesting page for harvesting");
    let response = client.get(url).send()?.error_for_status()?;
    Ok(response.text()?)
}
