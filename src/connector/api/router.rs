use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{AnalyzeController, HealthController};

/// Dispatches one-shot CLI commands to their controllers.
pub struct Router<'a> {
    analyze_controller: AnalyzeController<'a>,
    health_controller: HealthController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            analyze_controller: AnalyzeController::new(container),
            health_controller: HealthController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Analyze { message, sender } => {
                self.analyze_controller.analyze(message, sender).await
            }
            Commands::Status => self.health_controller.status(),
            Commands::Serve { .. } => unreachable!("Serve command is handled separately in main"),
        }
    }
}
