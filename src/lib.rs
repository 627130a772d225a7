pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    build_prompts, interpret_completion, AnalysisOutcome, AnalyzeMessageUseCase, ChatClient,
    Interpretation, Prompts,
};

pub use cli::Commands;

pub use connector::{create_router, serve, ChatCompletionsClient, Container, ContainerConfig, Router};

pub use domain::{
    AnalysisRequest, AnalysisResult, DomainError, ErrorBody, ModelAssessment, RiskLevel,
};
