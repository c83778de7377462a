use crate::deck::{DEFAULT_DECK_SIZE, DEFAULT_IMAGE_TEMPLATE, ID_PLACEHOLDER};
use crate::swipe::SWIPE_THRESHOLD;
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_URL: &str = "assets/config.json";
pub const DEFAULT_EXIT_DELAY_MS: u32 = 300;
pub const MAX_DECK_SIZE: usize = 1000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    pub deck_size: usize,
    pub swipe_threshold: f64,
    pub exit_delay_ms: u32,
    pub image_url_template: String,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            deck_size: DEFAULT_DECK_SIZE,
            swipe_threshold: SWIPE_THRESHOLD,
            exit_delay_ms: DEFAULT_EXIT_DELAY_MS,
            image_url_template: DEFAULT_IMAGE_TEMPLATE.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config not found at {0}")]
    NotFound(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed config: {0}")]
    Parse(String),
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    #[cfg(target_arch = "wasm32")]
    fn network<E: std::fmt::Display>(err: E) -> Self {
        Self::Network(err.to_string())
    }
}

impl SwipeConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: SwipeConfig =
            serde_json::from_str(text).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.deck_size > MAX_DECK_SIZE {
            return Err(ConfigError::Invalid(format!(
                "deck_size must be at most {MAX_DECK_SIZE}, got {}",
                self.deck_size
            )));
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "swipe_threshold must be a positive number, got {}",
                self.swipe_threshold
            )));
        }
        if !self.image_url_template.contains(ID_PLACEHOLDER) {
            return Err(ConfigError::Invalid(format!(
                "image_url_template must contain {ID_PLACEHOLDER}"
            )));
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn load_config() -> Result<SwipeConfig, ConfigError> {
    use gloo_net::http::Request;

    let response = Request::get(CONFIG_URL)
        .send()
        .await
        .map_err(ConfigError::network)?;

    if response.status() == 404 {
        return Err(ConfigError::NotFound(CONFIG_URL.to_owned()));
    }

    if !response.ok() {
        return Err(ConfigError::Network(format!(
            "HTTP {} while fetching {}",
            response.status(),
            CONFIG_URL
        )));
    }

    let text = response.text().await.map_err(ConfigError::network)?;
    SwipeConfig::from_json(&text)
}
