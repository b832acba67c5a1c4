//! Embedded prompt templates
//!
//! Handlebars templates compiled into the binary, plus the per-category
//! breakdown blocks spliced into the plan template. Prompt text must be
//! fully determined by its inputs, so nothing here reads the environment.

use crate::domain::ProjectCategory;

/// Template for clarifying-question generation
pub const QUESTIONS: &str = r#"You are an expert consultant helping someone refine their project idea.

Given this idea:
Title: "{{title}}"
Description: "{{description}}"
{{#if prior_answers}}
Earlier refinement rounds collected these answers:
{{prior_answers}}

Build on what is already known. Go deeper instead of repeating earlier questions.
{{/if}}
Generate 3-7 specific, thoughtful questions that will help clarify and improve this idea. Focus on:
- Target audience and users
- Implementation approach
- Market positioning
- Technical requirements
- Business model considerations

Return ONLY a JSON array of questions in this exact format:
[
  {"id": "q1", "question": "Who specifically are your target users and what problem does this solve for them?"},
  {"id": "q2", "question": "How do you envision users accessing this - web app, mobile app, browser extension, or API?"},
  {"id": "q3", "question": "What existing solutions are you competing with and how is yours different?"}
]

Make each question specific to this idea. Avoid generic questions. Do not include any text outside the JSON array."#;

/// Template for plan generation
pub const PLAN: &str = r#"You are {{persona}}, creating an implementation plan.

Original Idea:
Title: "{{title}}"
Description: "{{description}}"

Refinement Details:
{{answers}}

Think the project through with this breakdown approach:
{{breakdown}}

Create a detailed implementation plan with:
1. A clear 1-paragraph summary of the refined idea
2. 5-10 specific, actionable steps to build this
3. Helpful resources (tools, articles, services)

Do NOT use generic phase names like "Research, Planning, Development, Testing, Launch". Every step must name work that is specific to this exact idea.

Return ONLY a JSON object in this exact format:
{
  "summary": "A clear paragraph describing what will be built and for whom...",
  "steps": [
    {"order": 1, "title": "Step title", "description": "What this step accomplishes", "estimated_time": "1-2 weeks"}
  ],
  "resources": [
    {"title": "Figma", "url": "https://figma.com", "type": "tool", "description": "For creating mockups and prototypes"}
  ]
}

Make it specific to this exact idea and answers. Do not include any text outside the JSON object."#;

const TECHNICAL_TOOL: &str = "\
- What data sources does the tool consume, and how are they accessed?
- What processing or transformation happens to that data?
- Where do results live - files, a database, an API response?
- What failure modes need handling (bad input, unreachable sources, partial runs)?
- How do users invoke it - CLI flags, configuration, a small API?";

const CONTENT_CREATION: &str = "\
- What content pillars and formats anchor the work?
- What does the production workflow look like, from draft to published?
- Which channels distribute the content, and on what cadence?
- How does the audience grow from zero?
- How is the work monetized or otherwise sustained?";

const BUSINESS_SERVICE: &str = "\
- Who pays, and what exactly are they paying for?
- How do the first ten customers hear about the service?
- What does delivering the service end-to-end involve?
- What pricing and billing mechanics fit this market?
- Which operational tasks must happen weekly to keep customers happy?";

const RESEARCH_ANALYSIS: &str = "\
- What precise questions is the research answering?
- What data needs collecting, and from where?
- What methodology turns raw data into findings?
- How are findings validated against bias and error?
- In what form are results presented to their audience?";

const APPLICATION: &str = "\
- What are the two or three core user flows?
- What screens or views does each flow need?
- What data does the app store, and what shape is it?
- Which backend capabilities or third-party integrations are required?
- How does the app reach users - app stores, the web, both?";

const COMMUNITY_PLATFORM: &str = "\
- Who are the first fifty members, and why do they join?
- What interactions keep members coming back weekly?
- What moderation and governance does the space need?
- What tooling hosts the community at the start?
- What turns early members into recruiters for the next wave?";

const GENERAL: &str = "\
- What is the smallest version that delivers the core value?
- Who uses it first, and how do they find it?
- What does the idea need to store, show, or automate?
- What existing services can be leveraged instead of built?
- How does an early version gather feedback for the next one?";

/// Breakdown-approach block for a category
pub fn breakdown(category: ProjectCategory) -> &'static str {
    match category {
        ProjectCategory::TechnicalTool => TECHNICAL_TOOL,
        ProjectCategory::ContentCreation => CONTENT_CREATION,
        ProjectCategory::BusinessService => BUSINESS_SERVICE,
        ProjectCategory::ResearchAnalysis => RESEARCH_ANALYSIS,
        ProjectCategory::Application => APPLICATION,
        ProjectCategory::CommunityPlatform => COMMUNITY_PLATFORM,
        ProjectCategory::General => GENERAL,
    }
}
