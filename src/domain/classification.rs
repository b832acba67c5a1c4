//! Project classification types
//!
//! A classification is a pure derived value: the project-domain category
//! inferred from idea text plus the advisor persona used when prompting the
//! model. It is recomputed per request, never persisted.

use serde::{Deserialize, Serialize};

/// Project domain category inferred from idea text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectCategory {
    TechnicalTool,
    ContentCreation,
    BusinessService,
    ResearchAnalysis,
    Application,
    CommunityPlatform,
    General,
}

impl ProjectCategory {
    /// Advisor persona voice used in plan prompts for this category
    pub fn persona(&self) -> &'static str {
        match self {
            Self::TechnicalTool => {
                "an experienced software architect who specializes in developer tools and data infrastructure"
            }
            Self::ContentCreation => {
                "a content strategist who has launched successful blogs, newsletters, and online courses"
            }
            Self::BusinessService => {
                "a startup advisor who has guided dozens of founders from first idea to paying customers"
            }
            Self::ResearchAnalysis => {
                "a research director who turns open questions into rigorous, actionable studies"
            }
            Self::Application => "a product engineer who ships polished web and mobile applications",
            Self::CommunityPlatform => {
                "a community builder who has grown online communities from zero to thousands of members"
            }
            Self::General => "a pragmatic product consultant who helps people turn rough ideas into concrete plans",
        }
    }
}

impl std::fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::TechnicalTool => "technical_tool",
            Self::ContentCreation => "content_creation",
            Self::BusinessService => "business_service",
            Self::ResearchAnalysis => "research_analysis",
            Self::Application => "application",
            Self::CommunityPlatform => "community_platform",
            Self::General => "general",
        };
        write!(f, "{}", name)
    }
}

/// Category plus its advisor persona
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectClassification {
    pub category: ProjectCategory,
    pub persona: &'static str,
}

impl From<ProjectCategory> for ProjectClassification {
    fn from(category: ProjectCategory) -> Self {
        Self {
            category,
            persona: category.persona(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_a_persona() {
        let categories = [
            ProjectCategory::TechnicalTool,
            ProjectCategory::ContentCreation,
            ProjectCategory::BusinessService,
            ProjectCategory::ResearchAnalysis,
            ProjectCategory::Application,
            ProjectCategory::CommunityPlatform,
            ProjectCategory::General,
        ];
        for category in categories {
            assert!(!category.persona().is_empty());
        }
    }

    #[test]
    fn test_display_matches_wire_names() {
        assert_eq!(ProjectCategory::TechnicalTool.to_string(), "technical_tool");
        assert_eq!(ProjectCategory::General.to_string(), "general");
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&ProjectCategory::CommunityPlatform).unwrap();
        assert_eq!(json, r#""community_platform""#);
    }

    #[test]
    fn test_classification_from_category() {
        let classification = ProjectClassification::from(ProjectCategory::Application);
        assert_eq!(classification.category, ProjectCategory::Application);
        assert_eq!(classification.persona, ProjectCategory::Application.persona());
    }
}
