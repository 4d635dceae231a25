//! API Errors
//!
//! Every remote failure is turned into an `ApiError`; its `Display` text is
//! what the UI shows inline.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with status {status}")]
    Http { status: u16 },

    /// Messages from the GraphQL `errors` array, joined
    #[error("{0}")]
    GraphQl(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Response is missing `{0}`")]
    MissingField(&'static str),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
