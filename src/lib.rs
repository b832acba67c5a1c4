//! IdeaForge - idea refinement and plan generation engine
//!
//! Captures a raw idea, refines it through model-generated clarifying
//! questions, and produces a structured implementation plan exportable as
//! JSON or markdown. Every generation path has a deterministic fallback, and
//! a model-free markdown parser reconstructs the same plan structures from
//! uploaded or legacy documents.
//!
//! # Modules
//!
//! - [`domain`] - canonical value types (questions, answers, plans)
//! - [`classify`] - keyword-based project classification
//! - [`prompts`] - embedded prompt templates and rendering
//! - [`llm`] - generative client trait and HTTP implementations
//! - [`planning`] - generation engine, response validation, fallbacks
//! - [`markdown`] - model-free plan parsing and rendering
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod classify;
pub mod cli;
pub mod config;
pub mod domain;
pub mod llm;
pub mod markdown;
pub mod planning;
pub mod prompts;

// Re-export commonly used types
pub use config::{Config, GenerationConfig, LlmConfig};
pub use domain::{
    AnswerSet, Plan, PlanStep, ProjectCategory, ProjectClassification, Question, Resource, ResourceKind,
};
pub use llm::{CompletionRequest, CompletionResponse, GenerativeClient, LlmError, create_client};
pub use markdown::{parse_markdown, render_markdown};
pub use planning::{GenerationError, PlanningEngine};
pub use prompts::PromptBuilder;
