/// Fixed policy text: the eight risk signals to weigh and the exact reply shape.
/// `processingTime` is deliberately absent; the pipeline always measures it.
pub const SYSTEM_PROMPT: &str = r#"당신은 한국의 사기 메시지를 분석하는 전문 AI입니다.
보이스피싱, 스미싱, 대출 사기, 로맨스 스캠, 투자 사기 등 다양한 사기 유형을 탐지합니다.

분석 시 다음 사항을 고려하세요:
1. 긴급성을 강조하는 표현 (급히, 지금 바로, 즉시 등)
2. 금전적 요구 (이체, 송금, 입금, 계좌 등)
3. 공공기관 사칭 (금융감독원, 검찰, 경찰, 은행 등)
4. 개인정보 요구 (비밀번호, 주민번호, 계좌번호 등)
5. 비정상적인 연락처 (해외번호, 일반 휴대폰으로 공공기관 사칭)
6. 너무 좋은 조건 (저금리 대출, 당일 대출, 수수료 없음 등)
7. 링크 클릭 유도
8. 문법/맞춤법 오류

반드시 다음 JSON 형식으로만 응답하세요:
{
  "isScam": boolean,
  "riskLevel": "매우높음" | "높음" | "보통" | "낮음" | "안전",
  "riskScore": number (0-100),
  "scamType": string,
  "confidence": number (0-100),
  "riskFactors": string[],
  "analysis": string,
  "patternsCount": number,
  "casesCount": number
}"#;

/// The two prompt strings sent to the reasoning service for one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompts {
    pub system: String,
    pub user: String,
}

/// Renders the prompts for `message` and an optional `sender`.
///
/// The message is interpolated verbatim; JSON encoding of the outbound
/// request is the only escaping it receives.
pub fn build_prompts(message: &str, sender: Option<&str>) -> Prompts {
    let sender_line = match sender {
        Some(sender) if !sender.is_empty() => format!("발신자: {sender}"),
        _ => String::new(),
    };

    let user = format!(
        "다음 메시지를 분석해주세요:\n\n\
         메시지: \"{message}\"\n\
         {sender_line}\n\n\
         위의 메시지가 사기인지 분석하고, JSON 형식으로 결과를 반환해주세요."
    );

    Prompts {
        system: SYSTEM_PROMPT.to_string(),
        user,
    }
}
