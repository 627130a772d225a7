use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No credential for the reasoning service.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Gateway answered 429.
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Gateway answered 402.
    #[error("Usage limit exceeded: {0}")]
    UsageLimitExceeded(String),

    #[error("Reasoning service error: {0}")]
    ServiceError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn rate_limited(msg: impl Into<String>) -> Self {
        Self::RateLimited(msg.into())
    }

    pub fn usage_limit_exceeded(msg: impl Into<String>) -> Self {
        Self::UsageLimitExceeded(msg.into())
    }

    pub fn service(msg: impl Into<String>) -> Self {
        Self::ServiceError(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Soft errors are reported to the caller as a 200-status `{error}` body.
    pub fn is_soft(&self) -> bool {
        matches!(self, Self::RateLimited(_) | Self::UsageLimitExceeded(_))
    }

    pub fn is_service_error(&self) -> bool {
        matches!(self, Self::ServiceError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_errors_are_soft() {
        assert!(DomainError::rate_limited("slow down").is_soft());
        assert!(DomainError::usage_limit_exceeded("pay up").is_soft());
    }

    #[test]
    fn missing_credential_is_neither_soft_nor_service() {
        let err = DomainError::configuration("reasoning service credential is not set");
        assert!(!err.is_soft());
        assert!(!err.is_service_error());
        assert_eq!(
            err.to_string(),
            "Configuration error: reasoning service credential is not set"
        );
    }

    #[test]
    fn transport_errors_are_hard() {
        let err = DomainError::service("gateway returned 500");
        assert!(!err.is_soft());
        assert!(err.is_service_error());
        assert_eq!(
            err.to_string(),
            "Reasoning service error: gateway returned 500"
        );
    }
}
