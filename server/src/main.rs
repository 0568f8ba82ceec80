#![recursion_limit = "256"]
mod config;
mod error;
mod fixtures;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env();
    let state = state::AppState::from_config(config);

    // Non-fatal: without Leptos options only the API is served.
    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos configuration unavailable; serving API only");
            routes::api_routes(state)
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, seeded = config.seed_fixtures, "aci dashboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
