use async_trait::async_trait;

use crate::domain::error::GatewayResult;
use crate::domain::models::client::{Client, UpdateClient};

/// Outbound contract for the authenticated customer's account resource.
#[async_trait]
pub trait AccountGateway: Send + Sync {
    async fn fetch_account(&self) -> GatewayResult<Client>;
    async fn update_account(&self, update: UpdateClient) -> GatewayResult<Client>;
}
