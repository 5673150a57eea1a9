use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use thiserror::Error;

use crate::config::ApiConfig;

#[derive(Error, Debug)]
pub enum HttpError {
    #[error(transparent)]
    Client(#[from] reqwest::Error),
    #[error("the configured API token is not a valid header value")]
    InvalidToken,
}

/// Builds the shared HTTP client. When a token is configured it is attached as
/// a default `Authorization: Bearer` header and marked sensitive so it never
/// shows up in debug output.
pub fn connect(api_config: &ApiConfig) -> Result<reqwest::Client, HttpError> {
    let mut headers = HeaderMap::new();

    if let Some(token) = &api_config.token {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| HttpError::InvalidToken)?;
        value.set_sensitive(true);

        headers.insert(header::AUTHORIZATION, value);
    }

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(api_config.timeout_secs))
        .default_headers(headers)
        .build()?;

    Ok(client)
}
