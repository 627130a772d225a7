use async_trait::async_trait;

use crate::domain::DomainError;

/// An interface for sending chat-style prompts to the reasoning service and
/// receiving the raw completion text.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. Exactly one attempt is made per call; quota responses surface as
/// [`DomainError::RateLimited`] or [`DomainError::UsageLimitExceeded`], any
/// other failure as [`DomainError::ServiceError`].
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send a `system` instruction followed by a `user` prompt and return the
    /// assistant's response text.
    async fn complete(&self, system: &str, user: &str) -> Result<String, DomainError>;

    fn model_name(&self) -> &str;
}
