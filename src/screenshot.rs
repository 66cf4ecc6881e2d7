use reqwest::Client;
use serde::{Deserialize, Serialize};
use crate::config::ScreenshotConfig;
use crate::error::{AppError, Result};

pub const VIEWPORT_WIDTH: u32 = 1920;
pub const VIEWPORT_HEIGHT: u32 = 1080;
pub const THUMBNAIL_WIDTH: u32 = 300;

#[derive(Serialize, Debug)]
pub struct ScreenshotApiRequest<'a> {
    pub token: &'a str,
    pub url: &'a str,
    pub output: &'static str,
    pub width: u32,
    pub height: u32,
    pub thumbnail_width: u32,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ScreenshotApiResponse {
    pub screenshot: String,
}

/// Asks the screenshot service for a thumbnail of `url`.
pub async fn capture(client: &Client, config: &ScreenshotConfig, url: &str) -> Result<ScreenshotApiResponse> {
    let token = config
        .token
        .as_deref()
        .ok_or_else(|| AppError::UpstreamError("Screenshot API key is not set".to_string()))?;

    let body = ScreenshotApiRequest {
        token,
        url,
        output: "json",
        width: VIEWPORT_WIDTH,
        height: VIEWPORT_HEIGHT,
        thumbnail_width: THUMBNAIL_WIDTH,
    };

    let res = client.post(&config.endpoint).json(&body).send().await?;

    let status = res.status();
    if !status.is_success() {
        return Err(AppError::UpstreamError(format!("Screenshot API returned {}", status)));
    }

    res.json::<ScreenshotApiResponse>()
        .await
        .map_err(|e| AppError::UpstreamError(format!("Invalid response from screenshot API: {}", e)))
}
