//! Markdown prompt format: generation, lexing and parsing.

pub mod calendar;
mod escape;
pub mod generate;
pub mod grammar;
pub mod lexer;
pub mod parser;
mod standard;
mod suggestion;
pub mod template;
mod transport;

pub use generate::{MarkdownGenerator, generate_markdown};
pub use parser::parse_markdown;
pub use template::{TemplateError, TemplateSet};
