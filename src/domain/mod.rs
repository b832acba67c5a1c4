//! Canonical value types for the refinement engine
//!
//! Everything here is a transient, request-scoped value: questions and
//! answers for a refinement round, the structured plan, and the derived
//! project classification. Persistence belongs to callers.

mod classification;
mod plan;
mod question;

pub use classification::{ProjectCategory, ProjectClassification};
pub use plan::{Plan, PlanStep, Resource, ResourceKind};
pub use question::{AnswerSet, Question};
