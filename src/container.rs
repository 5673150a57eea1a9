use std::sync::Arc;

use url::Url;

use crate::domain::services::account::AccountGateway;
use crate::domain::services::notification::NotificationService;

use crate::infrastructure::console::LogNotifier;
use crate::infrastructure::gateways::account::HttpAccountGateway;

pub struct Container {
    pub account_gateway: Arc<dyn AccountGateway>,
    pub notifications: Arc<dyn NotificationService>,
}

impl Container {
    pub fn new(http: reqwest::Client, base_url: Url) -> Self {
        Container {
            account_gateway: account_gateway(http, base_url),
            notifications: Arc::new(LogNotifier),
        }
    }
}

fn account_gateway(http: reqwest::Client, base_url: Url) -> Arc<dyn AccountGateway> {
    Arc::new(HttpAccountGateway::new(http, base_url))
}
