use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use url::Url;

use crate::domain::error::{GatewayError, GatewayResult};
use crate::domain::models::client::{Client, UpdateClient};
use crate::domain::services::account::AccountGateway;
use crate::infrastructure::models::account::{ApiAccount, ApiAccountUpdate, ApiErrorBody};

const ACCOUNT_PATH: &str = "api/clients/account";

/// Gateway backed by the REST API. The client carries the bearer token and the
/// request timeout; this type only knows the account routes.
pub struct HttpAccountGateway {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpAccountGateway {
    pub fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    fn account_url(&self) -> GatewayResult<Url> {
        self.base_url
            .join(ACCOUNT_PATH)
            .map_err(|err| GatewayError::unclassified().trace(&err.to_string()))
    }

    async fn parse_account(response: Response) -> GatewayResult<Client> {
        let account = response
            .json::<ApiAccount>()
            .await
            .map_err(transport_error)?;

        Ok(account.into())
    }
}

#[async_trait]
impl AccountGateway for HttpAccountGateway {
    async fn fetch_account(&self) -> GatewayResult<Client> {
        let response = self
            .http
            .get(self.account_url()?)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(failure(response).await);
        }

        Self::parse_account(response).await
    }

    async fn update_account(&self, update: UpdateClient) -> GatewayResult<Client> {
        let response = self
            .http
            .patch(self.account_url()?)
            .json(&ApiAccountUpdate::from(update))
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(failure(response).await);
        }

        Self::parse_account(response).await
    }
}

/// Maps a request that never produced a response. Connectivity failures
/// collapse to the offline error; anything else keeps whatever status reqwest
/// attached.
fn transport_error(err: reqwest::Error) -> GatewayError {
    let error = if err.is_connect() || err.is_timeout() {
        GatewayError::offline()
    } else {
        match err.status() {
            Some(status) => GatewayError::status(status.as_u16()),
            None => GatewayError::unclassified(),
        }
    };

    error.trace(&err.to_string())
}

/// Maps a non-2xx response, salvaging the business message from the body when
/// the server sent one.
async fn failure(response: Response) -> GatewayError {
    let status = response.status();
    let error = GatewayError::status(status.as_u16());

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return error;
    }

    match response.json::<ApiErrorBody>().await {
        Ok(ApiErrorBody {
            message: Some(message),
        }) => error.with_message(message),
        _ => error,
    }
}
