use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::{AnalysisResult, DomainError, ModelAssessment};

/// Outcome of interpreting a raw completion. The fallback branch is an
/// ordinary result, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Interpretation {
    Parsed(ModelAssessment),
    Fallback(AnalysisResult),
}

impl Interpretation {
    pub fn into_result(self) -> AnalysisResult {
        match self {
            Interpretation::Parsed(assessment) => assessment.into_result(),
            Interpretation::Fallback(result) => result,
        }
    }
}

/// Interprets the model's free-form reply, degrading to
/// [`AnalysisResult::parse_fallback`] when no usable JSON object is found.
pub fn interpret_completion(raw: &str) -> Interpretation {
    match parse_assessment(raw) {
        Ok(assessment) => Interpretation::Parsed(assessment),
        Err(e) => {
            warn!("Failed to parse model reply: {e}");
            Interpretation::Fallback(AnalysisResult::parse_fallback(raw))
        }
    }
}

/// Parses the first JSON object embedded in `raw` into a [`ModelAssessment`].
/// Fields that are missing or carry an unusable type are left as `None`.
pub fn parse_assessment(raw: &str) -> Result<ModelAssessment, DomainError> {
    let object = extract_json_object(raw)
        .ok_or_else(|| DomainError::parse("no JSON object found in model reply"))?;

    Ok(ModelAssessment {
        is_scam: object.get("isScam").and_then(as_bool),
        risk_level: object.get("riskLevel").and_then(as_string),
        risk_score: object
            .get("riskScore")
            .and_then(as_number)
            .map(|n| n.round().clamp(0.0, 100.0) as u8),
        scam_type: object.get("scamType").and_then(as_string),
        confidence: object
            .get("confidence")
            .and_then(as_number)
            .map(|n| n.clamp(0.0, 100.0)),
        risk_factors: object.get("riskFactors").and_then(as_string_list),
        analysis: object.get("analysis").and_then(as_string),
        patterns_count: object.get("patternsCount").and_then(as_count),
        cases_count: object.get("casesCount").and_then(as_count),
    })
}

/// Finds the first balanced `{...}` substring that parses as a JSON object.
///
/// Braces inside JSON string literals are ignored while balancing. When a
/// balanced candidate fails to parse the scan resumes after its closing `}`,
/// and an unterminated `{` ends the scan, so every byte is balanced once.
pub fn extract_json_object(text: &str) -> Option<Map<String, Value>> {
    let bytes = text.as_bytes();
    let mut start = 0;

    while let Some(offset) = text[start..].find('{') {
        let open = start + offset;
        let close = balanced_end(bytes, open)?;
        if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(&text[open..=close]) {
            return Some(map);
        }
        start = close + 1;
    }

    None
}

/// Index of the `}` closing the object opened at `open`.
fn balanced_end(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate().skip(open) {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }

    None
}

fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn as_number(value: &Value) -> Option<f64> {
    let number: Option<f64> = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

fn as_count(value: &Value) -> Option<u32> {
    as_number(value).map(|n| n.round().clamp(0.0, u32::MAX as f64) as u32)
}

fn as_string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

fn as_string_list(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
        ),
        Value::String(s) => Some(vec![s.clone()]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RiskLevel;

    #[test]
    fn extracts_object_wrapped_in_prose() {
        let raw = r#"Sure! {"isScam":true,"riskLevel":"높음","riskScore":85,"scamType":"보이스피싱"} Hope this helps."#;
        let assessment = parse_assessment(raw).unwrap();
        assert_eq!(assessment.is_scam, Some(true));
        assert_eq!(assessment.risk_level.as_deref(), Some("높음"));
        assert_eq!(assessment.risk_score, Some(85));
        assert_eq!(assessment.scam_type.as_deref(), Some("보이스피싱"));
        assert_eq!(assessment.confidence, None);
    }

    #[test]
    fn extracts_object_from_markdown_fence() {
        let raw = "```json\n{\"isScam\": false, \"riskLevel\": \"안전\"}\n```";
        let assessment = parse_assessment(raw).unwrap();
        assert_eq!(assessment.is_scam, Some(false));
        assert_eq!(assessment.risk_level.as_deref(), Some("안전"));
    }

    #[test]
    fn braces_inside_strings_do_not_break_balancing() {
        let raw = r#"{"analysis":"링크 {클릭} 유도 \"}\" 포함","riskScore":70} trailing }"#;
        let assessment = parse_assessment(raw).unwrap();
        assert_eq!(assessment.analysis.as_deref(), Some("링크 {클릭} 유도 \"}\" 포함"));
        assert_eq!(assessment.risk_score, Some(70));
    }

    #[test]
    fn skips_unparseable_candidate_and_takes_next() {
        let raw = r#"{not json} then {"riskScore": 12}"#;
        let assessment = parse_assessment(raw).unwrap();
        assert_eq!(assessment.risk_score, Some(12));
    }

    #[test]
    fn nested_objects_stay_inside_outer_object() {
        let raw = r#"{"riskScore": 40, "extra": {"a": 1}}"#;
        let object = extract_json_object(raw).unwrap();
        assert!(object.contains_key("extra"));
        assert_eq!(object["riskScore"], 40);
    }

    #[test]
    fn no_object_yields_fallback() {
        let interpretation = interpret_completion("I cannot analyze this.");
        assert!(matches!(interpretation, Interpretation::Fallback(_)));
        let result = interpretation.into_result();
        assert_eq!(result.risk_score, 50);
        assert_eq!(result.scam_type, "분석 불가");
        assert_eq!(result.risk_factors.len(), 1);
        assert_eq!(result.analysis, "I cannot analyze this.");
    }

    #[test]
    fn unbalanced_object_yields_fallback() {
        assert!(matches!(
            interpret_completion(r#"{"isScam": true"#),
            Interpretation::Fallback(_)
        ));
    }

    #[test]
    fn unterminated_object_ends_the_scan() {
        let raw = r#"{"isScam": true {"riskScore": 5}"#;
        assert!(extract_json_object(raw).is_none());
    }

    #[test]
    fn brace_heavy_reply_without_object_yields_none() {
        let raw = "{".repeat(100_000);
        assert!(extract_json_object(&raw).is_none());

        let raw = "{x} ".repeat(50_000);
        assert!(extract_json_object(&raw).is_none());
    }

    #[test]
    fn unrecognised_risk_label_passes_through_unchanged() {
        let raw = r#"{"isScam":true,"riskLevel":"매우 높음","riskScore":97}"#;
        let result = interpret_completion(raw).into_result();
        assert_eq!(result.risk_level, "매우 높음");
        assert_eq!(result.risk_score, 97);
        assert_eq!(result.tier(), RiskLevel::Safe);
    }

    #[test]
    fn coerces_loose_field_types() {
        let raw = r#"{"isScam":"true","riskScore":87.6,"confidence":"92%","riskFactors":["긴급성",3],"patternsCount":-2,"casesCount":4.0}"#;
        let assessment = parse_assessment(raw).unwrap();
        assert_eq!(assessment.is_scam, Some(true));
        assert_eq!(assessment.risk_score, Some(88));
        assert_eq!(assessment.confidence, Some(92.0));
        assert_eq!(
            assessment.risk_factors,
            Some(vec!["긴급성".to_string(), "3".to_string()])
        );
        assert_eq!(assessment.patterns_count, Some(0));
        assert_eq!(assessment.cases_count, Some(4));
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        let assessment = parse_assessment(r#"{"riskScore":250,"confidence":-5}"#).unwrap();
        assert_eq!(assessment.risk_score, Some(100));
        assert_eq!(assessment.confidence, Some(0.0));
    }

    #[test]
    fn wrong_typed_fields_are_treated_as_omitted() {
        let assessment = parse_assessment(r#"{"isScam":{"x":1},"scamType":7}"#).unwrap();
        assert_eq!(assessment.is_scam, None);
        assert_eq!(assessment.scam_type, None);
    }
}
