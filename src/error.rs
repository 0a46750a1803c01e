use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid search url {url}: {reason}")]
    Url { url: String, reason: String },

    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("search backend answered {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed search response: {0}")]
    Decode(#[from] serde_json::Error),
}
