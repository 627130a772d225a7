//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Reasoning service (OpenAI-style chat completions over HTTP)
//! - HTTP API (axum router, controllers, dependency container)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
