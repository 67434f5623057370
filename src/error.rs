use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("keyword cannot be empty")]
    EmptyKeyword,

    #[error("search API key not configured")]
    MissingApiKey,

    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("search request failed with status {status}: {body}")]
    Upstream { status: StatusCode, body: String },
}

pub type Result<T> = std::result::Result<T, SearchError>;
