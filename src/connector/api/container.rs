use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::application::{AnalyzeMessageUseCase, ChatClient};
use crate::connector::adapter::{
    ChatCompletionsClient, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS,
};

pub const API_KEY_ENV: &str = "AI_GATEWAY_API_KEY";
pub const BASE_URL_ENV: &str = "AI_GATEWAY_BASE_URL";
pub const MODEL_ENV: &str = "AI_GATEWAY_MODEL";

#[derive(Debug, Clone)]
pub struct ContainerConfig {
    /// Bearer credential for the reasoning gateway. `None` is a valid state:
    /// every analysis then answers with an error fallback.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ContainerConfig {
    /// Reads the gateway settings from the environment:
    ///
    /// | Variable              | Default                           |
    /// |-----------------------|-----------------------------------|
    /// | `AI_GATEWAY_API_KEY`  | none (analysis falls back)        |
    /// | `AI_GATEWAY_BASE_URL` | `https://ai.gateway.lovable.dev`  |
    /// | `AI_GATEWAY_MODEL`    | `google/gemini-3-flash-preview`   |
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(API_KEY_ENV).ok(),
            base_url: std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            model: std::env::var(MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
        .normalized()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self.normalized()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs.max(1);
        self
    }

    /// Blank keys count as missing.
    fn normalized(mut self) -> Self {
        if self.api_key.as_deref().is_some_and(|k| k.trim().is_empty()) {
            self.api_key = None;
        }
        self
    }
}

pub struct Container {
    chat_client: Option<Arc<dyn ChatClient>>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let chat_client: Option<Arc<dyn ChatClient>> = match config.api_key.as_deref() {
            Some(key) => {
                debug!(
                    "Using reasoning gateway at {} with model {}",
                    config.base_url, config.model
                );
                Some(Arc::new(ChatCompletionsClient::new(
                    key,
                    config.model.clone(),
                    config.base_url.clone(),
                    Duration::from_secs(config.timeout_secs),
                )))
            }
            None => {
                warn!("{API_KEY_ENV} is not set; analyses will return fallback results");
                None
            }
        };

        Self {
            chat_client,
            config,
        }
    }

    /// Builds a container around an already constructed client, bypassing the
    /// credential check.
    pub fn with_chat_client(chat_client: Option<Arc<dyn ChatClient>>, config: ContainerConfig) -> Self {
        Self {
            chat_client,
            config,
        }
    }

    pub fn analyze_use_case(&self) -> AnalyzeMessageUseCase {
        AnalyzeMessageUseCase::new(self.chat_client.clone())
    }

    pub fn is_configured(&self) -> bool {
        self.chat_client.is_some()
    }

    pub fn model(&self) -> &str {
        self.chat_client
            .as_deref()
            .map(|c| c.model_name())
            .unwrap_or(self.config.model.as_str())
    }

    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_api_key_counts_as_missing() {
        let config = ContainerConfig::default().with_api_key("   ");
        assert!(config.api_key.is_none());
        assert!(!Container::new(config).is_configured());
    }

    #[test]
    fn api_key_enables_the_client() {
        let config = ContainerConfig::default()
            .with_api_key("secret")
            .with_base_url("http://127.0.0.1:1");
        let container = Container::new(config);
        assert!(container.is_configured());
        assert!(container.analyze_use_case().is_configured());
        assert_eq!(container.model(), DEFAULT_MODEL);
    }

    #[test]
    fn timeout_is_at_least_one_second() {
        assert_eq!(ContainerConfig::default().with_timeout_secs(0).timeout_secs, 1);
    }
}
