use reqwest::{Client, StatusCode};
use serde::Serialize;
use crate::config::ParaphraseConfig;
use crate::error::{AppError, Result};

#[derive(Serialize, Debug)]
struct ParaphraseRequest<'a> {
    text: &'a str,
    result_type: &'static str,
}

/// Rewrites `text` through the paraphrasing service and returns the first
/// candidate, or an empty string when none came back.
///
/// The service answers with a plain JSON array of strings.
// TODO: confirm against the provider schema, which also documents a list of
// `{ "alt": ... }` records.
pub async fn rewrite(client: &Client, config: &ParaphraseConfig, text: &str) -> Result<String> {
    let endpoint = config
        .endpoint
        .as_deref()
        .ok_or_else(|| AppError::UpstreamError("Paraphrase API URL is not set".to_string()))?;
    let api_key = config
        .api_key
        .as_deref()
        .ok_or_else(|| AppError::UpstreamError("Paraphrase API key is not set".to_string()))?;

    let body = ParaphraseRequest {
        text,
        result_type: "single",
    };

    let res = client
        .post(endpoint)
        .bearer_auth(api_key)
        .json(&body)
        .send()
        .await?;

    if res.status() != StatusCode::OK {
        return Err(AppError::UpstreamError(format!("Paraphrase API returned {}", res.status())));
    }

    let candidates: Vec<String> = res
        .json()
        .await
        .map_err(|e| AppError::UpstreamError(format!("Invalid response format from paraphrase API: {}", e)))?;

    Ok(candidates.into_iter().next().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn config(server: &MockServer) -> ParaphraseConfig {
        ParaphraseConfig {
            endpoint: Some(server.url("/paraphrase")),
            api_key: Some("para-key".to_string()),
        }
    }

    #[tokio::test]
    async fn returns_first_candidate() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/paraphrase")
                    .header("authorization", "Bearer para-key")
                    .json_body(json!({ "text": "the cat sat", "result_type": "single" }));
                then.status(200).json_body(json!(["a feline rested", "the cat was seated"]));
            })
            .await;

        let out = rewrite(&Client::new(), &config(&server), "the cat sat").await.unwrap();

        mock.assert_async().await;
        assert_eq!(out, "a feline rested");
    }

    #[tokio::test]
    async fn empty_list_yields_empty_string() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/paraphrase");
                then.status(200).json_body(json!([]));
            })
            .await;

        let out = rewrite(&Client::new(), &config(&server), "anything").await.unwrap();
        assert_eq!(out, "");
    }

    #[tokio::test]
    async fn unconfigured_endpoint_is_an_upstream_error() {
        let config = ParaphraseConfig {
            endpoint: None,
            api_key: Some("para-key".to_string()),
        };

        let err = rewrite(&Client::new(), &config, "anything").await.unwrap_err();
        assert!(matches!(err, AppError::UpstreamError(_)));
    }

    #[tokio::test]
    async fn record_shaped_body_is_rejected() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/paraphrase");
                then.status(200).json_body(json!([{ "alt": "rewritten" }]));
            })
            .await;

        let err = rewrite(&Client::new(), &config(&server), "anything").await.unwrap_err();
        assert!(matches!(err, AppError::UpstreamError(_)));
    }

    #[tokio::test]
    async fn server_error_is_an_upstream_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/paraphrase");
                then.status(500);
            })
            .await;

        let err = rewrite(&Client::new(), &config(&server), "anything").await.unwrap_err();
        assert!(err.to_string().contains("500"));
    }
}
