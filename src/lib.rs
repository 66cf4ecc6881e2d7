pub mod api;
pub mod config;
pub mod error;
pub mod llm;
pub mod paraphrase;
pub mod screenshot;

use std::sync::Arc;
use config::Config;
use reqwest::Client;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config: Arc::new(config),
            client: Client::new(),
        }
    }
}
