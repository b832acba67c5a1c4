//! Plan domain types
//!
//! A Plan is the structured implementation breakdown derived from an idea:
//! a one-paragraph summary, an ordered list of steps, and supporting
//! resources. The serde representation doubles as the JSON export format.

use serde::{Deserialize, Serialize};

/// Kind of supporting resource attached to a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    #[default]
    Tool,
    Service,
    Article,
    Repository,
}

impl ResourceKind {
    /// Parse a wire-format `type` string; anything unrecognized degrades to
    /// `Tool` rather than failing the parse.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "service" => Self::Service,
            "article" => Self::Article,
            "repository" => Self::Repository,
            _ => Self::Tool,
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tool => write!(f, "tool"),
            Self::Service => write!(f, "service"),
            Self::Article => write!(f, "article"),
            Self::Repository => write!(f, "repository"),
        }
    }
}

/// A single actionable step within a plan
///
/// Order values need not be contiguous; steps parsed from a numbered list
/// keep their literal numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanStep {
    pub order: u32,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
}

impl PlanStep {
    pub fn new(order: u32, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            order,
            title: title.into(),
            description: description.into(),
            estimated_time: None,
        }
    }

    pub fn with_estimate(
        order: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        estimate: impl Into<String>,
    ) -> Self {
        Self {
            order,
            title: title.into(),
            description: description.into(),
            estimated_time: Some(estimate.into()),
        }
    }
}

/// A supporting resource referenced by a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub description: String,
}

impl Resource {
    pub fn new(title: impl Into<String>, kind: ResourceKind, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: None,
            kind,
            description: description.into(),
        }
    }

    pub fn with_url(
        title: impl Into<String>,
        url: impl Into<String>,
        kind: ResourceKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: Some(url.into()),
            kind,
            description: description.into(),
        }
    }
}

/// Structured implementation plan
///
/// Invariant: after generation or parsing, `steps` is never empty. Inputs
/// with zero parseable structure get a single synthetic step instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub summary: String,
    pub steps: Vec<PlanStep>,
    pub resources: Vec<Resource>,
}

impl Plan {
    pub fn new(summary: impl Into<String>, steps: Vec<PlanStep>, resources: Vec<Resource>) -> Self {
        Self {
            summary: summary.into(),
            steps,
            resources,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_kind_from_wire() {
        assert_eq!(ResourceKind::from_wire("service"), ResourceKind::Service);
        assert_eq!(ResourceKind::from_wire("article"), ResourceKind::Article);
        assert_eq!(ResourceKind::from_wire("repository"), ResourceKind::Repository);
        assert_eq!(ResourceKind::from_wire("tool"), ResourceKind::Tool);
        assert_eq!(ResourceKind::from_wire("framework"), ResourceKind::Tool);
        assert_eq!(ResourceKind::from_wire(""), ResourceKind::Tool);
    }

    #[test]
    fn test_resource_kind_display() {
        assert_eq!(ResourceKind::Service.to_string(), "service");
        assert_eq!(ResourceKind::Tool.to_string(), "tool");
    }

    #[test]
    fn test_plan_serde_round_trip() {
        let plan = Plan::new(
            "Build a thing",
            vec![
                PlanStep::with_estimate(1, "First", "do it", "1 week"),
                PlanStep::new(2, "Second", ""),
            ],
            vec![Resource::with_url("Figma", "https://figma.com", ResourceKind::Tool, "design")],
        );

        let json = serde_json::to_string(&plan).unwrap();
        let back: Plan = serde_json::from_str(&json).unwrap();
        assert_eq!(plan, back);
    }

    #[test]
    fn test_resource_kind_serializes_as_type() {
        let resource = Resource::new("Docs", ResourceKind::Article, "reference");
        let json = serde_json::to_value(&resource).unwrap();
        assert_eq!(json["type"], "article");
        assert!(json.get("url").is_none());
    }

    #[test]
    fn test_step_estimate_omitted_when_absent() {
        let step = PlanStep::new(1, "Title", "desc");
        let json = serde_json::to_value(&step).unwrap();
        assert!(json.get("estimated_time").is_none());
    }
}
