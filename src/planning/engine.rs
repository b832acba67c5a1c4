//! Planning engine
//!
//! Orchestrates classifier, prompt builder, generative client, and response
//! validation. The public operations never fail: any error on the generation
//! path is logged and replaced by deterministic fallback output, as an
//! explicit substitution here rather than incidental exception handling.

use std::sync::Arc;

use tracing::{info, warn};

use super::{GenerationError, fallback, response};
use crate::classify::classify;
use crate::config::GenerationConfig;
use crate::domain::{AnswerSet, Plan, Question};
use crate::llm::{CompletionRequest, GenerativeClient, Message};
use crate::prompts::PromptBuilder;

/// System prompt for question generation
const QUESTION_SYSTEM: &str = "You are a helpful business consultant. Always respond with valid JSON only.";

/// System prompt for plan generation
const PLAN_SYSTEM: &str = "You are a helpful project planner. Always respond with valid JSON only.";

/// Generates refinement questions and implementation plans
///
/// Stateless apart from the injected client; safe to share behind an `Arc`.
pub struct PlanningEngine {
    client: Arc<dyn GenerativeClient>,
    prompts: PromptBuilder,
    generation: GenerationConfig,
}

impl PlanningEngine {
    pub fn new(client: Arc<dyn GenerativeClient>, generation: GenerationConfig) -> Self {
        Self {
            client,
            prompts: PromptBuilder::new(),
            generation,
        }
    }

    /// Generate 3-7 clarifying questions for an idea
    ///
    /// Falls back to the four generic questions on any failure.
    pub async fn generate_questions(&self, title: &str, description: &str) -> Vec<Question> {
        match self.try_questions(title, description, None).await {
            Ok(questions) => {
                info!(count = questions.len(), "generated questions");
                questions
            }
            Err(e) => {
                warn!(error = %e, "question generation failed, using fallback questions");
                fallback::fallback_questions()
            }
        }
    }

    /// Generate follow-up questions for a continuation round, seeded with
    /// the answers already collected
    pub async fn generate_followup_questions(
        &self,
        title: &str,
        description: &str,
        prior: &AnswerSet,
    ) -> Vec<Question> {
        match self.try_questions(title, description, Some(prior)).await {
            Ok(questions) => {
                info!(count = questions.len(), "generated follow-up questions");
                questions
            }
            Err(e) => {
                warn!(error = %e, "follow-up generation failed, using fallback questions");
                fallback::fallback_questions()
            }
        }
    }

    /// Generate an implementation plan from an idea and its answers
    ///
    /// Falls back to the category-appropriate skeleton plan on any failure.
    pub async fn generate_plan(&self, title: &str, description: &str, answers: &AnswerSet) -> Plan {
        match self.try_plan(title, description, answers).await {
            Ok(plan) => {
                info!(
                    steps = plan.steps.len(),
                    resources = plan.resources.len(),
                    "generated plan"
                );
                plan
            }
            Err(e) => {
                warn!(error = %e, "plan generation failed, using fallback plan");
                fallback::fallback_plan(title, description)
            }
        }
    }

    async fn try_questions(
        &self,
        title: &str,
        description: &str,
        prior: Option<&AnswerSet>,
    ) -> Result<Vec<Question>, GenerationError> {
        let prompt = self.prompts.build_question_prompt(title, description, prior)?;
        let content = self.complete(QUESTION_SYSTEM, prompt, self.generation.question_max_tokens).await?;
        response::parse_questions(&content)
    }

    async fn try_plan(&self, title: &str, description: &str, answers: &AnswerSet) -> Result<Plan, GenerationError> {
        let classification = classify(title, description, Some(answers));
        info!(category = %classification.category, "classified idea for plan generation");

        let prompt = self
            .prompts
            .build_plan_prompt(&classification, title, description, answers)?;
        let content = self.complete(PLAN_SYSTEM, prompt, self.generation.plan_max_tokens).await?;
        response::parse_plan(&content)
    }

    async fn complete(&self, system: &str, prompt: String, max_tokens: u32) -> Result<String, GenerationError> {
        let request = CompletionRequest {
            system_prompt: system.to_string(),
            messages: vec![Message::user(prompt)],
            max_tokens,
        };

        let response = self.client.complete(request).await?;
        response
            .content
            .ok_or_else(|| GenerationError::MalformedResponse("model returned no text".to_string()))
    }
}
