// Test helpers: an in-process stub backend on an ephemeral port.

use axum::Router;
use reqwest::Url;

use crate::config::{Config, Environment};
use crate::http::ApiClient;

/// Serves `router` on 127.0.0.1 and returns its base URL (no trailing slash)
pub(crate) async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub backend");
    let addr = listener.local_addr().expect("stub backend address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub backend");
    });
    format!("http://{addr}")
}

pub(crate) fn config_for(base: &str) -> Config {
    Config {
        environment: Environment::Development,
        api_uri: Url::parse(base).expect("stub backend url"),
        clt_mod: String::new(),
        with_credentials: true,
    }
}

pub(crate) async fn client_for(router: Router) -> ApiClient {
    let base = spawn_backend(router).await;
    ApiClient::new(&config_for(&base)).expect("client for stub backend")
}
