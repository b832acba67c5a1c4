//! Markdown plan parser
//!
//! Reconstructs a canonical [`Plan`] from free-form markdown or plain text
//! without calling any model. Total over arbitrary input: every string in,
//! a valid plan out, degrading through an unstructured fallback when the
//! document has no recognizable sections.
//!
//! The scanner is an explicit state machine: a current-section state plus a
//! line buffer, flushed into the section's sub-parser on every section
//! switch. Only `##` headers switch sections; a single `#` line is the
//! document title and is ignored; `###`+ headings are ordinary content, which
//! is what lets rendered plans re-parse with their step structure intact.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{Plan, PlanStep, Resource, ResourceKind};

/// Numbered step line: `1. Title - description`
static NUMBERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)\.\s*(.+)").expect("valid regex"));

/// Bullet step line: `- Title` or `* Title` (marker must be followed by
/// whitespace, so `**bold**` text is not a bullet)
static BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*]\s+(.+)").expect("valid regex"));

/// Heading step line: one to four hashes
static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,4}\s*(.+)").expect("valid regex"));

/// Parenthesized time estimate: `(time: X)`, `(duration: X)`, `(estimate: X)`
/// or bare `(X)`
static TIME_ESTIMATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\((?:time:|duration:|estimate:)?\s*([^)]+)\)").expect("valid regex"));

/// Markdown link: `[text](url)`
static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid regex"));

/// Leading bullet/heading marker on a captured title
static LEADING_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[*#-]\s*").expect("valid regex"));

/// Leading ` - ` left over after removing a link from a resource line
static LEADING_DASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*-\s*").expect("valid regex"));

/// Title/description separators, tried in this priority order
const SEPARATORS: [&str; 4] = [" - ", ": ", " – ", " — "];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Summary,
    Steps,
    Resources,
}

/// Parse markdown or plain text into a plan. Never fails.
pub fn parse_markdown(content: &str) -> Plan {
    let mut summary = String::new();
    let mut steps: Vec<PlanStep> = Vec::new();
    let mut resources: Vec<Resource> = Vec::new();

    let mut section = Section::None;
    let mut buffer: Vec<&str> = Vec::new();

    for raw_line in content.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        match leading_hashes(line) {
            2 => {
                flush(section, &mut buffer, &mut summary, &mut steps, &mut resources);
                section = section_for(line);
            }
            1 => {} // document title
            _ => {
                if section != Section::None {
                    buffer.push(line);
                }
            }
        }
    }
    flush(section, &mut buffer, &mut summary, &mut steps, &mut resources);

    // No recognizable sections at all: treat the whole document as
    // unstructured text.
    if summary.is_empty() && steps.is_empty() && resources.is_empty() {
        return parse_unstructured(content);
    }

    if summary.is_empty() {
        summary = default_summary(content, &steps);
    }
    if steps.is_empty() {
        steps.push(synthetic_step(content));
    }

    Plan::new(summary, steps, resources)
}

fn leading_hashes(line: &str) -> usize {
    line.chars().take_while(|c| *c == '#').count()
}

/// Map a `##` header line to a section by keyword
fn section_for(line: &str) -> Section {
    let header = line.to_lowercase();
    if header.contains("summary") {
        Section::Summary
    } else if ["step", "implementation", "plan", "breakdown"].iter().any(|w| header.contains(w)) {
        Section::Steps
    } else if ["resource", "tool", "reference", "link"].iter().any(|w| header.contains(w)) {
        Section::Resources
    } else {
        Section::None
    }
}

/// Hand the accumulated buffer to the finished section's sub-parser
fn flush(
    section: Section,
    buffer: &mut Vec<&str>,
    summary: &mut String,
    steps: &mut Vec<PlanStep>,
    resources: &mut Vec<Resource>,
) {
    if buffer.is_empty() {
        buffer.clear();
        return;
    }
    match section {
        Section::Summary => *summary = buffer.join("\n"),
        Section::Steps => {
            let start_order = steps.len() as u32 + 1;
            steps.extend(parse_steps(buffer.iter().copied(), start_order));
        }
        Section::Resources => resources.extend(parse_resources(buffer.iter().copied())),
        Section::None => {}
    }
    buffer.clear();
}

/// Extract steps from a block of lines
///
/// A numbered, bulleted, or heading line starts a new step; anything else
/// extends the open step's description. Lines before the first step line are
/// discarded.
pub(crate) fn parse_steps<'a>(lines: impl IntoIterator<Item = &'a str>, start_order: u32) -> Vec<PlanStep> {
    let mut steps = Vec::new();
    let mut order = start_order;
    let mut current: Option<PlanStep> = None;

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some((literal, raw)) = match_step_line(line) {
            if let Some(step) = current.take() {
                steps.push(step);
            }
            if let Some(n) = literal {
                order = n;
            }
            let (title, description, estimated_time) = split_step_details(&raw);
            current = Some(PlanStep {
                order,
                title,
                description,
                estimated_time,
            });
            order = order.saturating_add(1);
        } else if let Some(step) = current.as_mut() {
            if step.description.is_empty() {
                step.description = line.to_string();
            } else {
                step.description.push(' ');
                step.description.push_str(line);
            }
        }
    }

    if let Some(step) = current {
        steps.push(step);
    }
    steps
}

/// Match a line against the three step patterns, in priority order
///
/// Returns the literal order number (numbered lists only) and the raw step
/// text. A heading whose text starts with `N.` keeps the literal number, so
/// rendered plans (`### 2. Title`) re-parse with order values intact.
fn match_step_line(line: &str) -> Option<(Option<u32>, String)> {
    if let Some(caps) = NUMBERED.captures(line) {
        return Some((caps[1].parse().ok(), caps[2].to_string()));
    }
    if let Some(caps) = BULLET.captures(line) {
        return Some((None, caps[1].to_string()));
    }
    if let Some(caps) = HEADING.captures(line) {
        let rest = caps[1].trim();
        if let Some(inner) = NUMBERED.captures(rest) {
            return Some((inner[1].parse().ok(), inner[2].to_string()));
        }
        return Some((None, rest.to_string()));
    }
    None
}

/// Split raw step text into title, description, and time estimate
fn split_step_details(raw: &str) -> (String, String, Option<String>) {
    let mut estimated_time = None;
    let text = if let Some(caps) = TIME_ESTIMATE.captures(raw) {
        estimated_time = Some(caps[1].trim().to_string());
        TIME_ESTIMATE.replace_all(raw, "").trim().to_string()
    } else {
        raw.trim().to_string()
    };

    for sep in SEPARATORS {
        if let Some(idx) = text.find(sep) {
            let title = LEADING_MARKER.replace(text[..idx].trim(), "").trim().to_string();
            let description = text[idx + sep.len()..].trim().to_string();
            return (title, description, estimated_time);
        }
    }

    let title = LEADING_MARKER.replace(text.trim(), "").trim().to_string();
    (title, String::new(), estimated_time)
}

/// Extract resources from a block of lines
pub(crate) fn parse_resources<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<Resource> {
    let mut resources = Vec::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let stripped = LEADING_MARKER.replace(line, "");
        let line = stripped.as_ref();

        let (title, url, description) = if let Some(caps) = LINK.captures(line) {
            let title = caps[1].to_string();
            let url = Some(caps[2].to_string());
            let remainder = LINK.replace_all(line, "");
            let description = LEADING_DASH.replace(remainder.trim(), "").trim().to_string();
            (title, url, description)
        } else if let Some(idx) = line.find(" - ") {
            (
                line[..idx].trim().to_string(),
                None,
                line[idx + 3..].trim().to_string(),
            )
        } else {
            (line.trim().to_string(), None, String::new())
        };

        if title.is_empty() {
            continue;
        }

        let kind = detect_resource_kind(&title, &description);
        resources.push(Resource {
            title,
            url,
            kind,
            description,
        });
    }

    resources
}

/// Infer a resource kind from keywords in its title and description
fn detect_resource_kind(title: &str, description: &str) -> ResourceKind {
    let combined = format!("{} {}", title, description).to_lowercase();

    let matches_any = |words: &[&str]| words.iter().any(|w| combined.contains(w));

    if matches_any(&["api", "service", "platform", "subscription"]) {
        ResourceKind::Service
    } else if matches_any(&["library", "framework", "tool", "software", "cli", "package"]) {
        ResourceKind::Tool
    } else if matches_any(&["article", "blog", "tutorial", "guide", "documentation", "docs"]) {
        ResourceKind::Article
    } else if matches_any(&["github", "repo", "repository", "code"]) {
        ResourceKind::Repository
    } else {
        ResourceKind::Tool
    }
}

/// Fallback for documents with no recognizable sections
///
/// Step extraction is retried against the whole document. When that finds
/// steps, the first paragraph becomes the summary; pure prose with no step
/// structure gets a fixed summary and a single synthetic step wrapping the
/// content.
fn parse_unstructured(content: &str) -> Plan {
    let steps = parse_steps(content.lines(), 1);

    if steps.is_empty() {
        return Plan::new("Uploaded implementation plan", vec![synthetic_step(content)], vec![]);
    }

    let summary = content
        .split("\n\n")
        .map(str::trim)
        .find(|p| !p.is_empty())
        .unwrap_or("Uploaded implementation plan")
        .to_string();

    Plan::new(summary, steps, vec![])
}

fn synthetic_step(content: &str) -> PlanStep {
    let description = if content.chars().count() > 500 {
        format!("{}...", truncate_chars(content, 500))
    } else {
        content.to_string()
    };
    PlanStep::new(1, "Implementation Plan", description)
}

fn default_summary(content: &str, steps: &[PlanStep]) -> String {
    if steps.is_empty() {
        format!("Implementation plan: {}...", truncate_chars(content, 150))
    } else {
        format!(
            "Implementation plan with {} steps. {}...",
            steps.len(),
            truncate_chars(content, 100)
        )
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
