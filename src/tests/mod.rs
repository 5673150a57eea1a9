
use axum::Router;
use tokio::net::TcpListener;
use url::Url;

use crate::config::ApiConfig;
use crate::container::Container;
use crate::infrastructure::http;

/// Serves the router on an ephemeral local port and returns its base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

pub fn connect_container(base_url: &str) -> Container {
    let api_config = ApiConfig {
        base_url: base_url.to_string(),
        timeout_secs: 2,
        token: Some("test-token".to_string()),
    };

    let http = http::connect(&api_config).unwrap();
    let base_url = Url::parse(&api_config.base_url).unwrap();

    Container::new(http, base_url)
}
