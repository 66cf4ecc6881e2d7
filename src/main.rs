use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use thumbnail_relay::{
    config::Config,
    api::routes::create_router,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = Config::load()?;
    let server_addr = config.server_addr;

    if config.screenshot.token.is_none() {
        tracing::warn!("SCREENSHOT_API_KEY is not set; /api/thumbnail will fail");
    }
    if config.completion.api_key.is_none() {
        tracing::warn!("COMPLETION_API_KEY is not set; /api/prompt will fail");
    }
    if config.paraphrase.endpoint.is_none() || config.paraphrase.api_key.is_none() {
        tracing::warn!("PARAPHRASE_API_URL or PARAPHRASE_API_KEY is not set; /api/prompt will fail");
    }

    let static_dir = config.static_dir.clone();
    let app = create_router(AppState::new(config));

    let listener = TcpListener::bind(server_addr).await?;

    tracing::info!(addr = %server_addr, static_dir = %static_dir.display(), "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
