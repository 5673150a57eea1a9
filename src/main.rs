mod config;
mod container;
mod domain;
mod infrastructure;
mod services;
mod telemetry;

use std::sync::Arc;

use config::AppConfig;
use container::Container;
use infrastructure::console::ConsolePresenter;
use infrastructure::http;
use services::account_view::AccountView;

use thiserror::Error;
use url::Url;

#[cfg(test)]
mod tests;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Configuration(#[from] figment::Error),
    #[error(transparent)]
    Telemetry(#[from] telemetry::TelemetryError),
    #[error(transparent)]
    Http(#[from] http::HttpError),
    #[error("{1}: {0}")]
    BaseUrl(url::ParseError, String),
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;

    telemetry::configure(&config.service, &config.logging)?;

    let base_url = Url::parse(&config.api.base_url)
        .map_err(|err| AppError::BaseUrl(err, config.api.base_url.clone()))?;

    let http = http::connect(&config.api)?;

    let container = Container::new(http, base_url);

    let mut view = AccountView::new(container.account_gateway, container.notifications);
    view.subscribe(Arc::new(ConsolePresenter));

    view.load_account().await;

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        panic!("{err}");
    }
}
