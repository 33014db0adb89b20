use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;

use chat_relay::config::Config;
use chat_relay::routes;
use chat_relay::services::gemini::GeminiClient;
use chat_relay::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let generator = Arc::new(GeminiClient::new(
        &config.api_key,
        &config.model,
        &config.base_url,
    ));
    let state = Arc::new(AppState::new(generator));

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("chat relay listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
