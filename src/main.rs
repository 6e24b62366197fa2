use std::env;

use nexis_client::auth::AuthService;
use nexis_client::config::Config;
use nexis_client::http::ApiClient;
use nexis_client::pages::{Cookies, PageLoad, counter, user};
use nexis_client::stores::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn setup_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Defaults when RUST_LOG is not set
        tracing_subscriber::EnvFilter::new("info,nexis_client=debug,reqwest=warn,hyper_util=warn")
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

// ----------------- Main -----------------

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();
    tracing::info!("Starting nexis-client...");

    let config = Config::from_env()?;
    let client = ApiClient::new(&config)?;
    let state = AppState::new();

    // Cookies the page would receive from the browser
    let cookies = Cookies::parse(&env::var("NEXIS_COOKIE").unwrap_or_default());

    let auth = AuthService::new(&client, &state);
    if auth.verify_session().await {
        tracing::info!("Session is active");
    }

    match user::load(&client, &config, &cookies).await {
        PageLoad::Redirect(redirect) => {
            tracing::info!(status = redirect.status, location = %redirect.location, "Redirect issued");
        }
        PageLoad::Render(session) => {
            tracing::info!(user_id = %session.user_id, "User page rendered");
        }
    }

    let mut data = counter::load(&client).await;
    if let Some(amount) = env::var("NEXIS_ADD").ok().and_then(|n| n.trim().parse().ok()) {
        data = counter::add_num(&client, amount).await;
    }

    state.push_errors(data.errors);
    match data.initial_value {
        Some(value) => tracing::info!(value, "Counter value loaded"),
        None => {
            for err in state.errors.get() {
                tracing::error!(id = err.id, "{}", err.message());
            }
        }
    }

    Ok(())
}
