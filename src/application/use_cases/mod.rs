mod analyze_message;
pub mod interpret;
pub mod prompt;

pub use analyze_message::*;
pub use interpret::{extract_json_object, interpret_completion, parse_assessment, Interpretation};
pub use prompt::{build_prompts, Prompts, SYSTEM_PROMPT};
