mod analysis_request;
mod analysis_result;
mod error_body;
mod risk_level;

pub use analysis_request::*;
pub use analysis_result::*;
pub use error_body::*;
pub use risk_level::*;
