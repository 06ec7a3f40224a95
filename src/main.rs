use axum::Router;
use genmaps::config::Config;
use genmaps::services::completion::{ChatCompletionClient, CompletionClient};
use genmaps::services::profile_generator::ProfileGenerator;
use genmaps::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "genmaps=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting profile dashboard API server");
    tracing::info!(
        model = %config.completion.model,
        base_url = %config.completion.base_url,
        timeout_secs = config.completion.timeout_secs,
        "Completion provider configured"
    );

    // One client for the lifetime of the process
    let timeout = config.completion.timeout();
    let completion_client: Arc<dyn CompletionClient> =
        Arc::new(ChatCompletionClient::new(config.completion.clone())?);
    let profile_generator = ProfileGenerator::new(completion_client, timeout);

    // Create application state
    let state = Arc::new(AppState { profile_generator });

    // Build router with CORS and tracing
    let app = Router::new()
        .merge(genmaps::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
