//! Core of the travel-plan prompt generator: the trip-plan model, the
//! Markdown prompt generator and its inverse parser.

pub mod markdown;
pub mod plan;

pub use markdown::{MarkdownGenerator, TemplateSet, generate_markdown, parse_markdown};
pub use plan::{PlanWarning, TripPlan, validate_plan};
