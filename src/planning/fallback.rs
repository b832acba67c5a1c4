//! Deterministic fallback content
//!
//! Used whenever the model call or response validation fails. Nothing here
//! can fail, for any input.

use crate::classify::classify;
use crate::domain::{Plan, PlanStep, ProjectCategory, Question, Resource, ResourceKind};

/// Four generic clarifying questions, ids `q1`..`q4`
pub fn fallback_questions() -> Vec<Question> {
    vec![
        Question::new(
            "q1",
            "Who are your target users and what specific problem does this solve for them?",
        ),
        Question::new("q2", "How do you plan to build and deliver this solution?"),
        Question::new("q3", "What makes your approach different from existing solutions?"),
        Question::new("q4", "What's your timeline and what resources do you have available?"),
    ]
}

/// A category-appropriate five-step skeleton plan with two generic resources
///
/// Classification runs on title and description only; no answers are
/// available on the fallback path.
pub fn fallback_plan(title: &str, description: &str) -> Plan {
    let category = classify(title, description, None).category;

    let steps = match category {
        ProjectCategory::TechnicalTool => technical_tool_steps(),
        ProjectCategory::ContentCreation => content_creation_steps(),
        _ => generic_steps(),
    };

    let resources = vec![
        Resource::new(
            "Project Documentation",
            ResourceKind::Tool,
            "Use Notion, Obsidian, or similar to track decisions and progress",
        ),
        Resource::new(
            "Version Control",
            ResourceKind::Tool,
            "Host the work on GitHub or GitLab from day one",
        ),
    ];

    let summary = format!(
        "Implementation plan for '{}': {}... This plan needs to be refined with more specific details.",
        title,
        truncate_chars(description, 100)
    );

    Plan::new(summary, steps, resources)
}

fn technical_tool_steps() -> Vec<PlanStep> {
    vec![
        PlanStep::with_estimate(
            1,
            "Data Source Integration",
            "Connect to and validate the data sources the tool depends on",
            "1 week",
        ),
        PlanStep::with_estimate(
            2,
            "Processing Pipeline",
            "Implement the core transformation and processing logic",
            "2 weeks",
        ),
        PlanStep::with_estimate(3, "Storage Layer", "Persist processed results in a queryable form", "1 week"),
        PlanStep::with_estimate(
            4,
            "Error Handling and Recovery",
            "Handle bad input, unreachable sources, and partial runs",
            "1 week",
        ),
        PlanStep::with_estimate(
            5,
            "Tool Interface",
            "Expose the tool through a CLI or a small API",
            "1-2 weeks",
        ),
    ]
}

fn content_creation_steps() -> Vec<PlanStep> {
    vec![
        PlanStep::with_estimate(
            1,
            "Content Strategy",
            "Define the content pillars, formats, and target audience",
            "1 week",
        ),
        PlanStep::with_estimate(
            2,
            "Production Workflow",
            "Set up the drafting, editing, and publishing pipeline",
            "1 week",
        ),
        PlanStep::with_estimate(
            3,
            "Publishing Platform",
            "Stand up the site, newsletter, or channel that hosts the content",
            "1 week",
        ),
        PlanStep::with_estimate(
            4,
            "Distribution Channels",
            "Establish where and how each piece gets promoted",
            "2 weeks",
        ),
        PlanStep::with_estimate(
            5,
            "Audience Feedback Loop",
            "Wire up analytics and a cadence for acting on them",
            "1 week",
        ),
    ]
}

fn generic_steps() -> Vec<PlanStep> {
    vec![
        PlanStep::with_estimate(
            1,
            "Core Functionality",
            "Build the essential features that deliver the main value",
            "2-3 weeks",
        ),
        PlanStep::with_estimate(
            2,
            "User Interface",
            "Design and build the way users interact with it",
            "1-2 weeks",
        ),
        PlanStep::with_estimate(
            3,
            "Data Management",
            "Set up storage for the information the idea depends on",
            "1 week",
        ),
        PlanStep::with_estimate(4, "Integrations", "Connect any third-party services the idea needs", "1 week"),
        PlanStep::with_estimate(5, "Deployment", "Ship an initial version and set up hosting", "1 week"),
    ]
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_questions_fixed_ids() {
        let questions = fallback_questions();
        assert_eq!(questions.len(), 4);
        let ids: Vec<&str> = questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["q1", "q2", "q3", "q4"]);
        assert!(questions.iter().all(|q| !q.text.is_empty()));
    }

    #[test]
    fn test_fallback_plan_shape() {
        let plan = fallback_plan("My idea", "a description of the idea");
        assert_eq!(plan.steps.len(), 5);
        assert_eq!(plan.resources.len(), 2);
        assert!(plan.summary.contains("My idea"));
    }

    #[test]
    fn test_fallback_plan_empty_inputs() {
        let plan = fallback_plan("", "");
        assert_eq!(plan.steps.len(), 5);
        assert_eq!(plan.resources.len(), 2);
        assert!(!plan.summary.is_empty());
    }

    #[test]
    fn test_technical_tool_skeleton_selected() {
        let plan = fallback_plan("Log scraper", "a cli that scrapes logs");
        assert_eq!(plan.steps[0].title, "Data Source Integration");
        assert_eq!(plan.steps[4].title, "Tool Interface");
    }

    #[test]
    fn test_content_creation_skeleton_selected() {
        let plan = fallback_plan("Food blog", "writing about food");
        assert_eq!(plan.steps[0].title, "Content Strategy");
    }

    #[test]
    fn test_generic_skeleton_for_everything_else() {
        let plan = fallback_plan("Mystery", "no matching keywords here");
        assert_eq!(plan.steps[0].title, "Core Functionality");
        assert_eq!(plan.steps[4].title, "Deployment");
    }

    #[test]
    fn test_summary_truncates_long_descriptions() {
        let long = "x".repeat(500);
        let plan = fallback_plan("Idea", &long);
        // 100 chars of description plus the fixed sentence around it
        assert!(plan.summary.len() < 250);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(fallback_plan("A", "b"), fallback_plan("A", "b"));
    }
}
