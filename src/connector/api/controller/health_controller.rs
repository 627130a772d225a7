use anyhow::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::super::Container;

pub const SERVICE_NAME: &str = "scamcheck";
pub const ANALYZE_PATH: &str = "/analyze-message";
pub const DETECT_PATH: &str = "/api/v1/detect";
pub const HEALTH_PATH: &str = "/health";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: String,
    pub version: String,
    pub timestamp: String,
    pub reasoning_configured: bool,
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoints {
    pub health: String,
    pub analyze: String,
    pub detect: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub description: String,
    pub status: String,
    pub endpoints: Endpoints,
}

pub struct HealthController<'a> {
    container: &'a Container,
}

impl<'a> HealthController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub fn health(&self) -> HealthReport {
        HealthReport {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now().to_rfc3339(),
            reasoning_configured: self.container.is_configured(),
            model: self.container.model().to_string(),
        }
    }

    pub fn info(&self) -> ServiceInfo {
        ServiceInfo {
            service: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "Fraud-risk assessment for short text messages".to_string(),
            status: "running".to_string(),
            endpoints: Endpoints {
                health: HEALTH_PATH.to_string(),
                analyze: ANALYZE_PATH.to_string(),
                detect: DETECT_PATH.to_string(),
            },
        }
    }

    /// Human-readable status for the `status` command.
    pub fn status(&self) -> Result<String> {
        let report = self.health();
        let config = self.container.config();

        Ok(format!(
            "ScamCheck Status\n================\nVersion:    {}\nGateway:    {}\nModel:      {}\nCredential: {}\nTimeout:    {}s",
            report.version,
            config.base_url,
            report.model,
            if report.reasoning_configured { "configured" } else { "missing" },
            config.timeout_secs,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::api::ContainerConfig;

    #[test]
    fn health_reports_missing_credential() {
        let container = Container::new(ContainerConfig::default());
        let report = HealthController::new(&container).health();
        assert_eq!(report.status, "healthy");
        assert!(!report.reasoning_configured);
        assert!(chrono::DateTime::parse_from_rfc3339(&report.timestamp).is_ok());
    }

    #[test]
    fn status_mentions_credential_state() {
        let container = Container::new(ContainerConfig::default());
        let status = HealthController::new(&container).status().unwrap();
        assert!(status.contains("Credential: missing"));
    }
}
