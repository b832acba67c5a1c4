//! Prompt builder
//!
//! Renders the embedded templates with request-specific context. Escaping is
//! disabled so titles and descriptions containing quotes or angle brackets
//! reach the model verbatim.

use handlebars::{Handlebars, RenderError};
use serde::Serialize;

use super::embedded;
use crate::domain::{AnswerSet, ProjectClassification};

#[derive(Debug, Serialize)]
struct QuestionContext<'a> {
    title: &'a str,
    description: &'a str,
    prior_answers: Option<String>,
}

#[derive(Debug, Serialize)]
struct PlanContext<'a> {
    title: &'a str,
    description: &'a str,
    persona: &'static str,
    breakdown: &'static str,
    answers: String,
}

/// Builds the exact prompt text for question and plan generation
///
/// Output is fully determined by the inputs: the templates are embedded
/// constants and [`AnswerSet`] iterates in a stable order.
pub struct PromptBuilder {
    hbs: Handlebars<'static>,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptBuilder {
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }

    /// Prompt asking the model for 3-7 clarifying questions
    ///
    /// When `prior` answers from an earlier refinement round are supplied,
    /// they are embedded so the model asks deeper follow-ups instead of
    /// repeating itself.
    pub fn build_question_prompt(
        &self,
        title: &str,
        description: &str,
        prior: Option<&AnswerSet>,
    ) -> Result<String, RenderError> {
        let context = QuestionContext {
            title,
            description,
            prior_answers: prior.filter(|a| !a.is_empty()).map(format_answers),
        };
        self.hbs.render_template(embedded::QUESTIONS, &context)
    }

    /// Prompt asking the model for a structured implementation plan
    pub fn build_plan_prompt(
        &self,
        classification: &ProjectClassification,
        title: &str,
        description: &str,
        answers: &AnswerSet,
    ) -> Result<String, RenderError> {
        let context = PlanContext {
            title,
            description,
            persona: classification.persona,
            breakdown: embedded::breakdown(classification.category),
            answers: format_answers(answers),
        };
        self.hbs.render_template(embedded::PLAN, &context)
    }
}

/// Format answers as Q/A pairs, one per line pair
fn format_answers(answers: &AnswerSet) -> String {
    if answers.is_empty() {
        return "(no answers collected)".to_string();
    }
    answers
        .iter()
        .map(|(id, answer)| format!("Q: {}\nA: {}", id, answer))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProjectCategory;

    fn answers() -> AnswerSet {
        let mut set = AnswerSet::new();
        set.insert("q1", "indie developers");
        set.insert("q2", "a hosted web app");
        set
    }

    #[test]
    fn test_question_prompt_embeds_idea() {
        let builder = PromptBuilder::new();
        let prompt = builder
            .build_question_prompt("Recipe box", "organize family recipes", None)
            .unwrap();

        assert!(prompt.contains(r#"Title: "Recipe box""#));
        assert!(prompt.contains(r#"Description: "organize family recipes""#));
        assert!(prompt.contains("JSON array"));
        assert!(!prompt.contains("Earlier refinement rounds"));
    }

    #[test]
    fn test_question_prompt_includes_prior_answers() {
        let builder = PromptBuilder::new();
        let prompt = builder
            .build_question_prompt("Recipe box", "organize family recipes", Some(&answers()))
            .unwrap();

        assert!(prompt.contains("Earlier refinement rounds"));
        assert!(prompt.contains("Q: q1\nA: indie developers"));
    }

    #[test]
    fn test_quotes_survive_unescaped() {
        let builder = PromptBuilder::new();
        let prompt = builder
            .build_question_prompt(r#"The "best" tool"#, "it's <great>", None)
            .unwrap();

        assert!(prompt.contains(r#"The "best" tool"#));
        assert!(prompt.contains("it's <great>"));
    }

    #[test]
    fn test_plan_prompt_carries_persona_and_breakdown() {
        let builder = PromptBuilder::new();
        let classification = ProjectClassification::from(ProjectCategory::TechnicalTool);
        let prompt = builder
            .build_plan_prompt(&classification, "Log scraper", "scrape logs", &answers())
            .unwrap();

        assert!(prompt.contains(classification.persona));
        assert!(prompt.contains("What data sources does the tool consume"));
        assert!(prompt.contains("Q: q1\nA: indie developers"));
        assert!(prompt.contains("Research, Planning, Development, Testing, Launch"));
    }

    #[test]
    fn test_plan_prompt_empty_answers_placeholder() {
        let builder = PromptBuilder::new();
        let classification = ProjectClassification::from(ProjectCategory::General);
        let prompt = builder
            .build_plan_prompt(&classification, "Thing", "a thing", &AnswerSet::new())
            .unwrap();

        assert!(prompt.contains("(no answers collected)"));
    }

    #[test]
    fn test_prompts_are_deterministic() {
        let builder = PromptBuilder::new();
        let classification = ProjectClassification::from(ProjectCategory::Application);

        let a = builder
            .build_plan_prompt(&classification, "App", "an app", &answers())
            .unwrap();
        let b = builder
            .build_plan_prompt(&classification, "App", "an app", &answers())
            .unwrap();
        assert_eq!(a, b);
    }
}
