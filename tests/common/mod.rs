//! Shared helpers for integration tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use scamcheck::{ChatClient, Container, ContainerConfig, DomainError};

/// Canned reply for a [`StubChatClient`].
#[derive(Clone)]
pub enum StubReply {
    Text(String),
    RateLimited,
    UsageLimit,
    Failure,
}

/// A [`ChatClient`] that records prompts and answers with a fixed reply.
pub struct StubChatClient {
    reply: StubReply,
    prompts: Mutex<Vec<(String, String)>>,
}

impl StubChatClient {
    pub fn new(reply: StubReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn text(reply: &str) -> Arc<Self> {
        Self::new(StubReply::Text(reply.to_string()))
    }

    pub fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatClient for StubChatClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, DomainError> {
        self.prompts
            .lock()
            .unwrap()
            .push((system.to_string(), user.to_string()));
        match &self.reply {
            StubReply::Text(text) => Ok(text.clone()),
            StubReply::RateLimited => Err(DomainError::rate_limited("gateway returned 429")),
            StubReply::UsageLimit => Err(DomainError::usage_limit_exceeded("gateway returned 402")),
            StubReply::Failure => Err(DomainError::service("AI gateway error: 503")),
        }
    }

    fn model_name(&self) -> &str {
        "stub-model"
    }
}

pub fn container_with(client: &Arc<StubChatClient>) -> Arc<Container> {
    Arc::new(Container::with_chat_client(
        Some(client.clone() as Arc<dyn ChatClient>),
        ContainerConfig::default(),
    ))
}

pub fn unconfigured_container() -> Arc<Container> {
    Arc::new(Container::with_chat_client(None, ContainerConfig::default()))
}
