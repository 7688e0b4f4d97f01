//! npm registry search client
//!
//! Queries a Verdaccio-compatible registry's web search endpoint.

use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, Url};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use super::{Lookup, LookupError, LookupResult};
use crate::error::TypeaheadError;
use crate::search::{Suggestion, SuggestionId};

const SEARCH_PATH: [&str; 3] = ["-", "verdaccio", "search"];

/// One package in a search response
#[derive(Debug, Deserialize)]
struct PackageHit {
    name: String,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl From<PackageHit> for Suggestion {
    fn from(hit: PackageHit) -> Self {
        let detail = match (hit.version, hit.description) {
            (Some(version), Some(description)) if !description.is_empty() => {
                Some(format!("{} {}", version, description))
            }
            (Some(version), _) => Some(version),
            (None, description) => description.filter(|d| !d.is_empty()),
        };

        Suggestion {
            id: SuggestionId::new(hit.name.clone()),
            label: hit.name,
            detail,
        }
    }
}

/// HTTP lookup against a package registry
#[derive(Debug, Clone)]
pub struct RegistryLookup {
    client: Client,
    base: Url,
}

impl RegistryLookup {
    /// Create a client for the registry at `base`
    ///
    /// `timeout` bounds each request end to end; `None` waits indefinitely.
    pub fn new(base: &str, timeout: Option<Duration>) -> Result<Self, TypeaheadError> {
        let base = Url::parse(base)
            .map_err(|e| TypeaheadError::InvalidRegistryUrl(format!("{}: {}", base, e)))?;
        if base.cannot_be_a_base() {
            return Err(TypeaheadError::InvalidRegistryUrl(base.to_string()));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TypeaheadError::HttpClient(e.to_string()))?;

        Ok(Self { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Search URL for `query`, which is encoded as a single path segment
    pub fn search_url(&self, query: &str) -> Url {
        let mut url = self.base.clone();
        // Checked in new(): the base can always take path segments
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(SEARCH_PATH).push(query);
        }
        url
    }
}

impl Lookup for RegistryLookup {
    fn search(&self, query: String, token: CancellationToken) -> BoxFuture<'static, LookupResult> {
        let request = self
            .client
            .get(self.search_url(&query))
            .header(ACCEPT, "application/json");

        Box::pin(async move {
            tokio::select! {
                biased;
                () = token.cancelled() => Err(LookupError::Cancelled),
                outcome = fetch(request) => outcome,
            }
        })
    }
}

async fn fetch(request: RequestBuilder) -> LookupResult {
    let response = request.send().await.map_err(|e| {
        log::debug!("Registry request failed: {}", e);
        LookupError::Network(e.to_string())
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            status.canonical_reason().unwrap_or("unknown status").to_string()
        } else {
            body.trim().to_string()
        };
        log::debug!("Registry answered {}: {}", status, message);
        return Err(LookupError::Status {
            code: status.as_u16(),
            message,
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| LookupError::Network(e.to_string()))?;
    parse_hits(&body)
}

/// Decode a search response body, keeping the registry's order
fn parse_hits(body: &[u8]) -> LookupResult {
    let hits: Vec<PackageHit> =
        serde_json::from_slice(body).map_err(|e| LookupError::Parse(e.to_string()))?;
    Ok(hits.into_iter().map(Suggestion::from).collect())
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
