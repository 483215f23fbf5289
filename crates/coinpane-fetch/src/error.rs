//! Fetch error type.

/// Reasons a request produced no usable JSON body.
///
/// These never reach the pane as errors: [`crate::PriceSource::fetch_payload`]
/// folds them into an error payload.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP request failed before a body was read.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The body was not valid JSON.
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    /// A fixture file could not be read.
    #[error("cannot read fixture {path}: {source}")]
    Fixture {
        path: String,
        source: std::io::Error,
    },
}
