pub mod analyze_controller;
pub mod health_controller;

pub use analyze_controller::AnalyzeController;
pub use health_controller::{
    HealthController, HealthReport, ServiceInfo, ANALYZE_PATH, DETECT_PATH, HEALTH_PATH,
};
