//! Terraform plan summarization module
//!
//! This module provides parsing and rendering capabilities for Terraform
//! plan output, turning the raw text into action counts and a markdown
//! report suitable for CI job summaries.
//!
//! # Example
//!
//! ```ignore
//! use crate::plan::{MarkdownRenderer, PlanParser};
//!
//! let parser = PlanParser::new();
//! let summary = parser.parse(&plan_output);
//!
//! let renderer = MarkdownRenderer::new();
//! let markdown = renderer.render(&summary);
//!
//! println!("{}", markdown);
//! ```

mod parser;
mod renderer;
mod types;

pub use parser::PlanParser;
pub use renderer::MarkdownRenderer;
pub use types::{Action, PlanSummary, ResourceEntry};
