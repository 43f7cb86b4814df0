use crate::plan::{MarkdownRenderer, PlanParser};
use anyhow::{Context, Result};
use std::io::Read;

/// Handles the 'render' command - local preview of a plan summary
pub struct RenderCommand;

impl RenderCommand {
    /// Execute the render command
    ///
    /// Reads plan text from the given file, or from stdin when no path is
    /// given, and prints the rendered document to stdout.
    pub fn execute(path: Option<&str>, json: bool) -> Result<()> {
        let plan_output = match path {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read plan file {}", path))?,
            None => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read plan output from stdin")?;
                buffer
            }
        };

        let document = Self::render_document(&plan_output, json)?;
        print!("{}", document);

        Ok(())
    }

    /// Render plan text to the requested document format
    fn render_document(plan_output: &str, json: bool) -> Result<String> {
        let summary = PlanParser::new().parse(plan_output);

        if json {
            let mut document = serde_json::to_string_pretty(&summary)
                .context("Failed to serialize plan summary")?;
            document.push('\n');
            Ok(document)
        } else {
            Ok(MarkdownRenderer::new().render(&summary))
        }
    }
}
