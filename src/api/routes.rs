use axum::{
    routing::post,
    Router,
    extract::{Json, State},
    http::header,
    response::IntoResponse,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::api::models::{PromptRequest, ThumbnailRequest};
use crate::error::{JsonBody, Result};
use crate::screenshot::{self, ScreenshotApiResponse};
use crate::{llm, paraphrase, AppState};

pub fn create_router(app_state: AppState) -> Router {
    let assets = ServeDir::new(&app_state.config.static_dir);

    Router::new()
        .route("/api/thumbnail", post(thumbnail_handler))
        .route("/api/prompt", post(prompt_handler))
        .fallback_service(assets)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn thumbnail_handler(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ThumbnailRequest>,
) -> Result<Json<ScreenshotApiResponse>> {
    tracing::info!(url = %req.url, "Capturing thumbnail");

    let shot = screenshot::capture(&state.client, &state.config.screenshot, &req.url)
        .await
        .inspect_err(|e| tracing::error!(url = %req.url, error = %e, "Screenshot API failed"))?;

    tracing::info!(url = %req.url, screenshot = %shot.screenshot, "Thumbnail ready");
    Ok(Json(shot))
}

async fn prompt_handler(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<PromptRequest>,
) -> Result<impl IntoResponse> {
    tracing::info!(chars = req.text.len(), "Processing prompt");
    let start_time = std::time::Instant::now();

    let generated = llm::complete(&state.client, &state.config.completion, &req.text)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Completion API failed"))?;
    tracing::debug!(chars = generated.len(), elapsed = ?start_time.elapsed(), "Completion received");

    let paraphrased = paraphrase::rewrite(&state.client, &state.config.paraphrase, &generated)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Paraphrase API failed"))?;

    tracing::info!(elapsed = ?start_time.elapsed(), "Prompt processed");
    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        format!("Paraphrased text: {}", paraphrased),
    ))
}
