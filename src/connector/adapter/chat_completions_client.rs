use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, error};

use crate::application::ChatClient;
use crate::domain::DomainError;

/// Default target: the hosted AI gateway.
pub const DEFAULT_BASE_URL: &str = "https://ai.gateway.lovable.dev";
pub const DEFAULT_MODEL: &str = "google/gemini-3-flash-preview";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
const COMPLETIONS_PATH: &str = "/v1/chat/completions";

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// HTTP client for OpenAI-style chat-completions endpoints authenticated with
/// a bearer token.
///
/// Implements [`ChatClient`] so the analysis use case stays decoupled from
/// transport and serialization details. One request per call, no retries;
/// the request timeout is left to reqwest.
///
/// ```text
/// AI_GATEWAY_API_KEY=...                         (required)
/// AI_GATEWAY_BASE_URL=https://ai.gateway.lovable.dev
/// AI_GATEWAY_MODEL=google/gemini-3-flash-preview
/// ```
pub struct ChatCompletionsClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl ChatCompletionsClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model: model.into(),
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Pulls the completion text out of a response body. A reply without the
    /// completion field yields an empty string.
    fn completion_text(body: ApiResponse) -> String {
        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .unwrap_or_default()
    }
}

#[async_trait]
impl ChatClient for ChatCompletionsClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, DomainError> {
        let request = ApiRequest {
            model: &self.model,
            messages: vec![
                ApiMessage {
                    role: "system",
                    content: system,
                },
                ApiMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        debug!("POST {} (model {})", self.url, self.model);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("AI gateway request failed: {e}");
                DomainError::service(format!("request failed: {e}"))
            })?;

        let status = response.status();
        match status {
            StatusCode::TOO_MANY_REQUESTS => {
                return Err(DomainError::rate_limited(format!("gateway returned {status}")));
            }
            StatusCode::PAYMENT_REQUIRED => {
                return Err(DomainError::usage_limit_exceeded(format!(
                    "gateway returned {status}"
                )));
            }
            _ if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                error!("AI gateway error: {status} {body}");
                return Err(DomainError::service(format!(
                    "AI gateway error: {}",
                    status.as_u16()
                )));
            }
            _ => {}
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| {
                error!("AI gateway response unreadable: {e}");
                DomainError::service(format!("failed to parse gateway response: {e}"))
            })?;

        Ok(Self::completion_text(api_response))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
