use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A message submitted for assessment, optionally with the claimed sender.
///
/// `message` is kept as `None` when the caller omitted it or sent a non-string
/// value; the input guard turns that into a validation fallback.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    message: Option<String>,
    sender: Option<String>,
}

impl AnalysisRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            sender: None,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Blank senders are dropped.
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        let sender = sender.into();
        self.sender = if sender.trim().is_empty() {
            None
        } else {
            Some(sender)
        };
        self
    }

    /// Lenient decoding of a raw request body. Anything that is not a JSON
    /// object, or fields of the wrong type, are treated as absent.
    pub fn from_json_bytes(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(value) => Self::from_value(&value),
            Err(_) => Self::empty(),
        }
    }

    pub fn from_value(value: &Value) -> Self {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string);
        let request = Self {
            message,
            sender: None,
        };
        match value.get("sender").and_then(Value::as_str) {
            Some(sender) => request.with_sender(sender),
            None => request,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn sender(&self) -> Option<&str> {
        self.sender.as_deref()
    }

    /// First `max_chars` characters of the message, for logging.
    pub fn preview(&self, max_chars: usize) -> String {
        let message = self.message.as_deref().unwrap_or_default();
        let mut preview: String = message.chars().take(max_chars).collect();
        if message.chars().count() > max_chars {
            preview.push_str("...");
        }
        preview
    }
}
