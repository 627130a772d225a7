use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::application::use_cases::interpret::interpret_completion;
use crate::application::use_cases::prompt::build_prompts;
use crate::application::ChatClient;
use crate::domain::{AnalysisRequest, AnalysisResult, DomainError, ErrorBody};

/// Minimum trimmed length, in characters, of an analysable message.
pub const MIN_MESSAGE_CHARS: usize = 2;

const RATE_LIMITED_NOTICE: &str = "요청이 너무 많습니다. 잠시 후 다시 시도해주세요.";
const USAGE_LIMIT_NOTICE: &str = "서비스 이용 한도를 초과했습니다.";
const INVALID_INPUT_ANALYSIS: &str = "분석할 메시지를 입력해주세요.";
const INVALID_INPUT_FACTOR: &str = "message too short or missing";
const MISSING_CREDENTIAL_ANALYSIS: &str = "API 키가 설정되지 않았습니다.";

/// What the caller receives for a request that did not hit a hard error.
///
/// Serializes either as the full result object or as `{ "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Completed(AnalysisResult),
    /// Quota or billing refusal from the reasoning service; the caller should
    /// offer a retry instead of a result card.
    Unavailable(ErrorBody),
}

impl AnalysisOutcome {
    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            AnalysisOutcome::Completed(result) => Some(result),
            AnalysisOutcome::Unavailable(_) => None,
        }
    }
}

/// Checks that the request carries a message of at least
/// [`MIN_MESSAGE_CHARS`] characters once trimmed.
pub fn validate_message(request: &AnalysisRequest) -> Result<&str, DomainError> {
    match request.message() {
        Some(message) if message.trim().chars().count() >= MIN_MESSAGE_CHARS => Ok(message),
        Some(_) => Err(DomainError::invalid_input("message too short")),
        None => Err(DomainError::invalid_input("message missing")),
    }
}

/// Stamps the elapsed time since `started` onto `result`, replacing whatever
/// value it carried.
pub fn finalize(result: AnalysisResult, started: Instant) -> AnalysisResult {
    result.with_processing_time(started.elapsed().as_secs_f64())
}

/// Runs one message through validation, prompting, the reasoning service and
/// reply interpretation.
///
/// Holds no per-request state; one instance can serve concurrent requests.
pub struct AnalyzeMessageUseCase {
    chat_client: Option<Arc<dyn ChatClient>>,
}

impl AnalyzeMessageUseCase {
    /// `chat_client` is `None` when no credential is configured; requests are
    /// then answered with an error fallback instead of failing.
    pub fn new(chat_client: Option<Arc<dyn ChatClient>>) -> Self {
        Self { chat_client }
    }

    pub fn is_configured(&self) -> bool {
        self.chat_client.is_some()
    }

    /// Only transport failures of the reasoning service come back as `Err`.
    pub async fn execute(&self, request: &AnalysisRequest) -> Result<AnalysisOutcome, DomainError> {
        let span = info_span!("analyze", request_id = %Uuid::new_v4());
        self.run(request).instrument(span).await
    }

    async fn run(&self, request: &AnalysisRequest) -> Result<AnalysisOutcome, DomainError> {
        let started = Instant::now();

        let message = match validate_message(request) {
            Ok(message) => message,
            Err(e) => {
                info!("Rejecting request: {e}");
                let result =
                    AnalysisResult::error_fallback(INVALID_INPUT_ANALYSIS, Some(INVALID_INPUT_FACTOR));
                return Ok(AnalysisOutcome::Completed(finalize(result, started)));
            }
        };

        let Some(client) = self.chat_client.as_ref() else {
            let e = DomainError::configuration("reasoning service credential is not set");
            warn!("Rejecting request: {e}");
            let result = AnalysisResult::error_fallback(MISSING_CREDENTIAL_ANALYSIS, None);
            return Ok(AnalysisOutcome::Completed(finalize(result, started)));
        };

        info!("Analyzing message: {}", request.preview(50));
        info!("Sender: {}", request.sender().unwrap_or("Unknown"));

        let prompts = build_prompts(message, request.sender());

        let completion = match client.complete(&prompts.system, &prompts.user).await {
            Ok(text) => text,
            Err(DomainError::RateLimited(detail)) => {
                warn!("Reasoning service rate limited the request: {detail}");
                return Ok(AnalysisOutcome::Unavailable(ErrorBody::new(RATE_LIMITED_NOTICE)));
            }
            Err(DomainError::UsageLimitExceeded(detail)) => {
                warn!("Reasoning service usage limit exceeded: {detail}");
                return Ok(AnalysisOutcome::Unavailable(ErrorBody::new(USAGE_LIMIT_NOTICE)));
            }
            Err(e) => {
                debug!("Reasoning service call failed ({}): {e}", client.model_name());
                return Err(e);
            }
        };

        debug!("Model reply: {completion}");

        let result = finalize(interpret_completion(&completion).into_result(), started);

        info!(
            "Analysis complete: {} [{}] (risk score {}) in {}",
            result.risk_level,
            result.tier().tag(),
            result.risk_score,
            result.processing_time
        );

        Ok(AnalysisOutcome::Completed(result))
    }
}
