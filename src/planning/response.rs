//! Strict validation of raw model responses
//!
//! The model is instructed to emit bare JSON; these parsers hold it to that.
//! The only tolerated deviation is a surrounding markdown code fence, which
//! models add habitually and which is stripped before parsing. Everything
//! else is all-or-nothing: a structural violation fails the whole response,
//! and the caller decides between retry and fallback.

use serde::Deserialize;

use super::GenerationError;
use crate::domain::{Plan, PlanStep, Question, Resource, ResourceKind};

// Wire shapes the model is asked to produce

#[derive(Debug, Deserialize)]
struct QuestionWire {
    id: String,
    question: String,
}

#[derive(Debug, Deserialize)]
struct PlanWire {
    summary: String,
    steps: Vec<StepWire>,
    #[serde(default)]
    resources: Vec<ResourceWire>,
}

#[derive(Debug, Deserialize)]
struct StepWire {
    order: u32,
    title: String,
    description: String,
    estimated_time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResourceWire {
    title: String,
    url: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    description: Option<String>,
}

/// Parse a raw model response into questions
///
/// Fails when the text is not a JSON array of `{id, question}` objects, or
/// when the array is empty or contains an empty question.
pub fn parse_questions(raw: &str) -> Result<Vec<Question>, GenerationError> {
    let body = strip_code_fence(raw);
    let wire: Vec<QuestionWire> =
        serde_json::from_str(body).map_err(|e| GenerationError::MalformedResponse(format!("questions: {}", e)))?;

    if wire.is_empty() {
        return Err(GenerationError::MalformedResponse(
            "questions: response contained no questions".to_string(),
        ));
    }
    if wire.iter().any(|q| q.question.trim().is_empty()) {
        return Err(GenerationError::MalformedResponse(
            "questions: response contained an empty question".to_string(),
        ));
    }

    Ok(wire.into_iter().map(|q| Question::new(q.id, q.question)).collect())
}

/// Parse a raw model response into a plan
///
/// Fails when the text is not a JSON object with `summary` and a non-empty
/// `steps` array whose entries carry `order`, `title`, and `description`.
/// `resources` is optional; unknown resource types degrade to `tool`.
pub fn parse_plan(raw: &str) -> Result<Plan, GenerationError> {
    let body = strip_code_fence(raw);
    let wire: PlanWire =
        serde_json::from_str(body).map_err(|e| GenerationError::MalformedResponse(format!("plan: {}", e)))?;

    if wire.steps.is_empty() {
        return Err(GenerationError::MalformedResponse(
            "plan: response contained no steps".to_string(),
        ));
    }

    let steps = wire
        .steps
        .into_iter()
        .map(|s| PlanStep {
            order: s.order,
            title: s.title,
            description: s.description,
            estimated_time: s.estimated_time,
        })
        .collect();

    let resources = wire
        .resources
        .into_iter()
        .map(|r| Resource {
            title: r.title,
            url: r.url,
            kind: r.kind.as_deref().map(ResourceKind::from_wire).unwrap_or_default(),
            description: r.description.unwrap_or_default(),
        })
        .collect();

    Ok(Plan::new(wire.summary, steps, resources))
}

/// Strip one surrounding markdown code fence, if present
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") up to the end of the opening line
    let Some(newline) = rest.find('\n') else {
        return trimmed;
    };
    let body = &rest[newline + 1..];
    match body.trim_end().strip_suffix("```") {
        Some(inner) => inner.trim(),
        None => trimmed,
    }
}
