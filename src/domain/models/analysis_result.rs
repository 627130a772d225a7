use serde::{Deserialize, Serialize};

use super::RiskLevel;

/// Scam type reported when the model reply could not be interpreted.
pub const SCAM_TYPE_UNCLASSIFIABLE: &str = "분석 불가";
/// Scam type reported when the request never reached the model.
pub const SCAM_TYPE_ERROR: &str = "분석 오류";

const PARSE_FAILURE_FACTOR: &str = "AI 분석 결과를 파싱할 수 없습니다";
const ERROR_FACTOR: &str = "분석 중 오류가 발생했습니다. 다시 시도해주세요.";
const EMPTY_COMPLETION_ANALYSIS: &str = "분석을 완료할 수 없습니다.";
const NEUTRAL_RISK_SCORE: u8 = 50;

/// The assessment returned to callers. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub is_scam: bool,
    /// Risk label as the model wrote it; see [`AnalysisResult::tier`].
    pub risk_level: String,
    pub risk_score: u8,
    pub scam_type: String,
    pub confidence: f64,
    pub risk_factors: Vec<String>,
    pub analysis: String,
    pub patterns_count: u32,
    pub cases_count: u32,
    pub processing_time: String,
}

impl AnalysisResult {
    /// Fallback for a model reply that held no usable JSON object. The raw
    /// completion is echoed back as the analysis text.
    pub fn parse_fallback(raw_completion: &str) -> Self {
        let analysis = if raw_completion.trim().is_empty() {
            EMPTY_COMPLETION_ANALYSIS.to_string()
        } else {
            raw_completion.to_string()
        };

        Self {
            is_scam: false,
            risk_level: RiskLevel::Medium.label().to_string(),
            risk_score: NEUTRAL_RISK_SCORE,
            scam_type: SCAM_TYPE_UNCLASSIFIABLE.to_string(),
            confidence: 50.0,
            risk_factors: vec![PARSE_FAILURE_FACTOR.to_string()],
            analysis,
            patterns_count: 0,
            cases_count: 0,
            processing_time: format_processing_time(0.0),
        }
    }

    /// Fallback for requests rejected before the model was consulted
    /// (invalid input, missing credential).
    pub fn error_fallback(analysis: impl Into<String>, risk_factor: Option<&str>) -> Self {
        Self {
            is_scam: false,
            risk_level: RiskLevel::Medium.label().to_string(),
            risk_score: NEUTRAL_RISK_SCORE,
            scam_type: SCAM_TYPE_ERROR.to_string(),
            confidence: 0.0,
            risk_factors: vec![risk_factor.unwrap_or(ERROR_FACTOR).to_string()],
            analysis: analysis.into(),
            patterns_count: 0,
            cases_count: 0,
            processing_time: format_processing_time(0.0),
        }
    }

    /// Tier for renderers. Unrecognised labels map to [`RiskLevel::Safe`].
    pub fn tier(&self) -> RiskLevel {
        RiskLevel::from_label(&self.risk_level)
    }

    pub fn with_processing_time(mut self, seconds: f64) -> Self {
        self.processing_time = format_processing_time(seconds);
        self
    }
}

/// Fields recovered from a model reply. Any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelAssessment {
    pub is_scam: Option<bool>,
    pub risk_level: Option<String>,
    pub risk_score: Option<u8>,
    pub scam_type: Option<String>,
    pub confidence: Option<f64>,
    pub risk_factors: Option<Vec<String>>,
    pub analysis: Option<String>,
    pub patterns_count: Option<u32>,
    pub cases_count: Option<u32>,
}

impl ModelAssessment {
    /// Completes the assessment into a full result, filling omitted fields
    /// with neutral values. `processing_time` is left for the finalizer.
    pub fn into_result(self) -> AnalysisResult {
        AnalysisResult {
            is_scam: self.is_scam.unwrap_or(false),
            risk_level: self
                .risk_level
                .unwrap_or_else(|| RiskLevel::Medium.label().to_string()),
            risk_score: self.risk_score.unwrap_or(NEUTRAL_RISK_SCORE),
            scam_type: self
                .scam_type
                .unwrap_or_else(|| SCAM_TYPE_UNCLASSIFIABLE.to_string()),
            confidence: self.confidence.unwrap_or(0.0),
            risk_factors: self.risk_factors.unwrap_or_default(),
            analysis: self.analysis.unwrap_or_default(),
            patterns_count: self.patterns_count.unwrap_or(0),
            cases_count: self.cases_count.unwrap_or(0),
            processing_time: format_processing_time(0.0),
        }
    }
}

/// Formats elapsed seconds as `"<seconds, one decimal>초"`.
pub fn format_processing_time(seconds: f64) -> String {
    let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
    format!("{:.1}초", seconds)
}
