use reqwest::StatusCode;
use thiserror::Error;

/// Why a catalog page could not be retrieved.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request for page {page} failed: {source}")]
    Request {
        page: u32,
        #[source]
        source: reqwest::Error,
    },

    #[error("page {page} request failed with status {status}")]
    Status { page: u32, status: StatusCode },

    #[error("could not read body of page {page}: {source}")]
    Body {
        page: u32,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
