//! Price sources: live HTTP and on-disk fixtures.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use coinpane_core::payload::PricePayload;

use crate::error::FetchError;
use crate::url::price_url;

/// Trait for anything that can answer a price request with a JSON body.
pub trait PriceSource: Send + Sync {
    /// Fetch and parse the body for a pair.
    fn fetch(&self, from: &str, to: &str) -> Result<Value, FetchError>;

    /// Name used in logs.
    fn name(&self) -> &str;

    /// Fetch, folding any failure into an error payload.
    fn fetch_payload(&self, from: &str, to: &str) -> PricePayload {
        match self.fetch(from, to) {
            Ok(body) => PricePayload::new(body),
            Err(err) => {
                warn!(source = self.name(), from, to, error = %err, "price fetch failed");
                PricePayload::error(err.to_string())
            }
        }
    }
}

/// Live source backed by a blocking `reqwest` client.
pub struct HttpPriceSource {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpPriceSource {
    /// Create a source for `endpoint`. `None` means no request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PriceSource for HttpPriceSource {
    fn fetch(&self, from: &str, to: &str) -> Result<Value, FetchError> {
        let url = price_url(&self.endpoint, from, to);
        debug!(%url, "GET");
        // Error statuses still carry a JSON body with the error marker.
        let body = self.client.get(&url).send()?.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// Source that answers every request with the JSON document in a file.
///
/// The file is re-read on each request, so it can be edited while running.
pub struct FixtureSource {
    path: PathBuf,
}

impl FixtureSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PriceSource for FixtureSource {
    fn fetch(&self, _from: &str, _to: &str) -> Result<Value, FetchError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| FetchError::Fixture {
            path: self.path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    fn name(&self) -> &str {
        "fixture"
    }
}
