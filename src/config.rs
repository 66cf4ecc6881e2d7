use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use crate::error::{AppError, Result};

pub const SCREENSHOT_API_URL: &str = "https://shot.screenshotapi.net/screenshot";
pub const COMPLETION_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const COMPLETION_MODEL: &str = "gpt-3.5-turbo";

#[derive(Clone, Debug)]
pub struct ScreenshotConfig {
    pub endpoint: String,
    pub token: Option<String>,
}

#[derive(Clone, Debug)]
pub struct CompletionConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub model: String,
}

#[derive(Clone, Debug)]
pub struct ParaphraseConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub static_dir: PathBuf,
    pub screenshot: ScreenshotConfig,
    pub completion: CompletionConfig,
    pub paraphrase: ParaphraseConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Empty values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = get("PORT").unwrap_or_else(|| "3000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

        let static_dir = get("STATIC_DIR").unwrap_or_else(|| "./frontend/dist".to_string());

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            static_dir: PathBuf::from(static_dir),
            screenshot: ScreenshotConfig {
                endpoint: get("SCREENSHOT_API_URL").unwrap_or_else(|| SCREENSHOT_API_URL.to_string()),
                token: get("SCREENSHOT_API_KEY").or_else(|| get("API_KEY")),
            },
            completion: CompletionConfig {
                endpoint: get("COMPLETION_API_URL").unwrap_or_else(|| COMPLETION_API_URL.to_string()),
                api_key: get("COMPLETION_API_KEY").or_else(|| get("OPENAI_API_KEY")),
                model: get("COMPLETION_MODEL").unwrap_or_else(|| COMPLETION_MODEL.to_string()),
            },
            paraphrase: ParaphraseConfig {
                endpoint: get("PARAPHRASE_API_URL"),
                api_key: get("PARAPHRASE_API_KEY"),
            },
        })
    }
}
