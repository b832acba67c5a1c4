//! Keyword-based project classifier
//!
//! Maps free idea text to a [`ProjectCategory`] by substring membership
//! against an ordered keyword table. The first matching category wins, so
//! priority is fixed by declaration order, not match count; an idea
//! mentioning both "api" and "blog" classifies as `TechnicalTool`. Ideas
//! matching nothing fall through to `General`.

use crate::domain::{AnswerSet, ProjectCategory, ProjectClassification};

/// Ordered (category, keywords) table. Evaluated top to bottom.
const CATEGORY_KEYWORDS: &[(ProjectCategory, &[&str])] = &[
    (
        ProjectCategory::TechnicalTool,
        &["api", "scrape", "crawl", "data pipeline", "etl", "automation", "bot", "script", "cli"],
    ),
    (
        ProjectCategory::ContentCreation,
        &["blog", "content", "newsletter", "course", "book", "writing", "publish"],
    ),
    (
        ProjectCategory::BusinessService,
        &["marketplace", "ecommerce", "subscription", "saas", "platform", "service"],
    ),
    (
        ProjectCategory::ResearchAnalysis,
        &["research", "analysis", "study", "survey", "report", "dashboard"],
    ),
    (
        ProjectCategory::Application,
        &["app", "mobile", "web app", "website", "frontend", "ui"],
    ),
    (
        ProjectCategory::CommunityPlatform,
        &["community", "network", "forum", "social", "group"],
    ),
];

/// Classify an idea from its title, description, and any collected answers.
///
/// Deterministic and side-effect free: the same text always yields the same
/// classification.
pub fn classify(title: &str, description: &str, answers: Option<&AnswerSet>) -> ProjectClassification {
    let mut blob = format!("{} {}", title, description);
    if let Some(answers) = answers {
        for (_, answer) in answers.iter() {
            blob.push(' ');
            blob.push_str(answer);
        }
    }
    let blob = blob.to_lowercase();

    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|kw| blob.contains(kw)) {
            return ProjectClassification::from(*category);
        }
    }

    ProjectClassification::from(ProjectCategory::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technical_tool_keywords() {
        let c = classify("Log scraper", "a script that scrapes server logs", None);
        assert_eq!(c.category, ProjectCategory::TechnicalTool);
    }

    #[test]
    fn test_priority_order_first_match_wins() {
        // Contains both "api" (technical_tool) and "blog" (content_creation);
        // the earlier category wins.
        let c = classify("Blog API", "an api that powers my blog", None);
        assert_eq!(c.category, ProjectCategory::TechnicalTool);
    }

    #[test]
    fn test_content_creation() {
        let c = classify("Cooking newsletter", "weekly writing about recipes", None);
        assert_eq!(c.category, ProjectCategory::ContentCreation);
    }

    #[test]
    fn test_business_service() {
        let c = classify("Pet sitters", "a marketplace for local pet sitters", None);
        assert_eq!(c.category, ProjectCategory::BusinessService);
    }

    #[test]
    fn test_research_analysis() {
        let c = classify("Housing trends", "a survey of rental prices by district", None);
        assert_eq!(c.category, ProjectCategory::ResearchAnalysis);
    }

    #[test]
    fn test_application() {
        let c = classify("Habit tracker", "a mobile habit tracker with reminders", None);
        assert_eq!(c.category, ProjectCategory::Application);
    }

    #[test]
    fn test_community_platform() {
        let c = classify("Gardeners", "a forum for urban gardeners", None);
        assert_eq!(c.category, ProjectCategory::CommunityPlatform);
    }

    #[test]
    fn test_general_fallback() {
        let c = classify("Something", "an idea that matches no keywords", None);
        assert_eq!(c.category, ProjectCategory::General);
        assert_eq!(c.persona, ProjectCategory::General.persona());
    }

    #[test]
    fn test_answers_participate_in_classification() {
        let mut answers = AnswerSet::new();
        answers.insert("q1", "it will expose a public api for integrations");

        let c = classify("Thing", "no keywords here", Some(&answers));
        assert_eq!(c.category, ProjectCategory::TechnicalTool);
    }

    #[test]
    fn test_case_insensitive() {
        let c = classify("NEWSLETTER", "ALL CAPS DESCRIPTION", None);
        assert_eq!(c.category, ProjectCategory::ContentCreation);
    }

    #[test]
    fn test_deterministic() {
        let a = classify("Blog API", "an api for blogs", None);
        let b = classify("Blog API", "an api for blogs", None);
        assert_eq!(a.category, b.category);
    }
}
