mod chat_completions_client;

pub use chat_completions_client::*;
