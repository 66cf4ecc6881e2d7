use serde::{Deserialize, Serialize};
use reqwest::{Client, StatusCode};
use crate::config::CompletionConfig;
use crate::error::{Result, AppError};

pub const MAX_TOKENS: u32 = 2500;

#[derive(Serialize, Debug)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize, Debug)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    max_tokens: u32,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize, Debug)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Sends `prompt` as a single user message and returns the first choice's
/// content, or an empty string when the API returns no choices.
pub async fn complete(client: &Client, config: &CompletionConfig, prompt: &str) -> Result<String> {
    let api_key = config
        .api_key
        .as_deref()
        .ok_or_else(|| AppError::UpstreamError("Completion API key is not set".to_string()))?;

    let body = ChatRequest {
        model: &config.model,
        messages: vec![
            Message {
                role: "user",
                content: prompt,
            }
        ],
        max_tokens: MAX_TOKENS,
    };

    let res = client
        .post(&config.endpoint)
        .bearer_auth(api_key)
        .json(&body)
        .send()
        .await?;

    if res.status() != StatusCode::OK {
        return Err(AppError::UpstreamError(format!("Completion API returned {}", res.status())));
    }

    let json: ChatResponse = res
        .json()
        .await
        .map_err(|e| AppError::UpstreamError(format!("Invalid response format from completion API: {}", e)))?;

    let reply = json
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .unwrap_or_default();

    Ok(reply)
}
