//! Markdown plan renderer
//!
//! Serializes a [`Plan`] into a human-readable markdown document. Structural
//! inverse of the parser: not byte-for-byte round-trippable, but step count,
//! order values, and titles survive a render/parse cycle.

use crate::domain::Plan;

/// Render a plan as markdown under the given idea title
pub fn render_markdown(plan: &Plan, title: &str) -> String {
    let mut md = format!(
        "# {} - Implementation Plan\n\n## Summary\n{}\n\n## Steps\n\n",
        title, plan.summary
    );

    for step in &plan.steps {
        md.push_str(&format!("### {}. {}\n", step.order, step.title));
        md.push_str(&format!("{}\n", step.description));
        if let Some(estimate) = &step.estimated_time {
            md.push_str(&format!("**Estimated Time:** {}\n", estimate));
        }
        md.push('\n');
    }

    if !plan.resources.is_empty() {
        md.push_str("## Resources\n\n");
        for resource in &plan.resources {
            md.push_str(&format!("- **{}**", resource.title));
            if let Some(url) = &resource.url {
                md.push_str(&format!(" ([Link]({}))", url));
            }
            md.push_str(&format!(" - {}\n", resource.description));
        }
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PlanStep, Resource, ResourceKind};
    use crate::markdown::parse_markdown;
    use crate::planning::fallback::fallback_plan;

    fn sample_plan() -> Plan {
        Plan::new(
            "A small sample plan.",
            vec![
                PlanStep::with_estimate(1, "First", "do the first thing", "2 days"),
                PlanStep::new(2, "Second", "do the second thing"),
            ],
            vec![Resource::with_url(
                "Figma",
                "https://figma.com",
                ResourceKind::Tool,
                "design tool",
            )],
        )
    }

    #[test]
    fn test_render_structure() {
        let md = render_markdown(&sample_plan(), "Sample");

        assert!(md.starts_with("# Sample - Implementation Plan\n"));
        assert!(md.contains("## Summary\nA small sample plan.\n"));
        assert!(md.contains("### 1. First\ndo the first thing\n**Estimated Time:** 2 days\n"));
        assert!(md.contains("### 2. Second\ndo the second thing\n"));
        assert!(md.contains("## Resources\n"));
        assert!(md.contains("- **Figma** ([Link](https://figma.com)) - design tool\n"));
    }

    #[test]
    fn test_render_without_resources_omits_section() {
        let plan = Plan::new("Summary.", vec![PlanStep::new(1, "Only", "step")], vec![]);
        let md = render_markdown(&plan, "Bare");
        assert!(!md.contains("## Resources"));
    }

    #[test]
    fn test_render_without_estimate_omits_line() {
        let plan = Plan::new("Summary.", vec![PlanStep::new(1, "Only", "step")], vec![]);
        let md = render_markdown(&plan, "Bare");
        assert!(!md.contains("Estimated Time"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let plan = sample_plan();
        assert_eq!(render_markdown(&plan, "X"), render_markdown(&plan, "X"));
    }

    // Weak round-trip invariant: parsing a rendered plan preserves step
    // count, order values, and titles exactly.
    #[test]
    fn test_round_trip_preserves_step_structure() {
        for (title, description) in [
            ("Log scraper", "a cli that scrapes logs"),
            ("Food blog", "writing about food"),
            ("Mystery", "no matching keywords here"),
        ] {
            let original = fallback_plan(title, description);
            let reparsed = parse_markdown(&render_markdown(&original, title));

            assert_eq!(reparsed.steps.len(), original.steps.len(), "plan for {}", title);
            for (a, b) in original.steps.iter().zip(reparsed.steps.iter()) {
                assert_eq!(a.order, b.order);
                assert_eq!(a.title, b.title);
            }
        }
    }

    #[test]
    fn test_round_trip_preserves_resource_count() {
        let original = fallback_plan("Anything", "generic description");
        let reparsed = parse_markdown(&render_markdown(&original, "Anything"));
        assert_eq!(reparsed.resources.len(), original.resources.len());
    }
}
