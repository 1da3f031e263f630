//! Todo Endpoint
//!
//! Single GET of the full collection. No pagination, retry or timeout.

use gloo::net::http::Request;
use thiserror::Error;

use crate::models::RemoteTodo;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("could not decode todos: {0}")]
    Decode(String),
}

pub async fn fetch_all(endpoint: &str) -> Result<Vec<RemoteTodo>, FetchError> {
    let response = Request::get(endpoint)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json::<Vec<RemoteTodo>>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}
