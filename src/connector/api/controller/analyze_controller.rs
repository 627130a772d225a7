use anyhow::Result;

use crate::domain::AnalysisRequest;

use super::super::Container;

pub struct AnalyzeController<'a> {
    container: &'a Container,
}

impl<'a> AnalyzeController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Runs a one-shot analysis and renders the caller-facing JSON payload:
    /// the full result, or `{ "error": ... }` for quota refusals.
    pub async fn analyze(&self, message: String, sender: Option<String>) -> Result<String> {
        let mut request = AnalysisRequest::new(message);
        if let Some(sender) = sender {
            request = request.with_sender(sender);
        }

        let use_case = self.container.analyze_use_case();
        let outcome = use_case.execute(&request).await?;

        Ok(serde_json::to_string_pretty(&outcome)?)
    }
}
