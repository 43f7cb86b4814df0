use crate::context::Context;
use crate::plan::{MarkdownRenderer, PlanParser};
use anyhow::{Context as _, Result};

/// Name of the workflow input carrying the raw plan text
const PLAN_OUTPUT_INPUT: &str = "plan_output";

/// Name of the step output carrying the rendered markdown
const SUMMARY_OUTPUT: &str = "summary";

/// Handles the 'report' command - publishes the plan summary to CI
pub struct ReportCommand;

impl ReportCommand {
    /// Run the report, funneling any failure into a single failure report
    ///
    /// Returns false when the run failed; the caller decides the process
    /// exit code. The error never propagates past this point.
    pub async fn run(ctx: &Context) -> bool {
        match Self::execute(ctx).await {
            Ok(()) => true,
            Err(err) => {
                let message = format!("{:#}", err);
                ctx.platform.report_failure(&message);
                ctx.output.error(&message);
                false
            }
        }
    }

    /// Execute the report command
    ///
    /// Reads the plan text, renders the markdown document, publishes it as
    /// the step output, then appends it to the job summary. The summary
    /// write is awaited; the run is complete only once both sinks have it.
    pub async fn execute(ctx: &Context) -> Result<()> {
        let plan_output = ctx
            .platform
            .read_input(PLAN_OUTPUT_INPUT)
            .with_context(|| format!("Failed to read '{}' input", PLAN_OUTPUT_INPUT))?;

        let summary = PlanParser::new().parse(&plan_output);

        ctx.output.info("Summarizing Terraform plan output...");

        if summary.has_changes() {
            ctx.output.dimmed(&format!(
                "{} to create, {} to update, {} to destroy",
                summary.create, summary.update, summary.destroy
            ));
        } else {
            ctx.output.dimmed("No changes detected");
        }

        let markdown = MarkdownRenderer::new().render(&summary);

        ctx.platform
            .set_output(SUMMARY_OUTPUT, &markdown)
            .with_context(|| format!("Failed to set '{}' output", SUMMARY_OUTPUT))?;

        ctx.platform
            .write_summary(&markdown)
            .await
            .context("Failed to write job summary")?;

        ctx.output.success("Plan summary published");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{MockOutput, MockPlatform, OutputMessage, PlatformCall};
    use std::sync::Arc;

    fn sample_plan_output() -> &'static str {
        "+ resource \"aws_instance\" \"example\" {\n\
         ~ resource \"aws_security_group\" \"example\" {\n\
         - resource \"aws_s3_bucket\" \"example\" {\n"
    }

    fn test_context(platform: MockPlatform) -> (Context, Arc<MockPlatform>, Arc<MockOutput>) {
        let platform = Arc::new(platform);
        let output = Arc::new(MockOutput::new());
        let ctx = Context::test_with(platform.clone(), output.clone());
        (ctx, platform, output)
    }

    #[tokio::test]
    async fn test_report_publishes_to_both_sinks() {
        let (ctx, platform, output) = test_context(
            MockPlatform::new().with_input("plan_output", sample_plan_output()),
        );

        assert!(ReportCommand::run(&ctx).await);

        let outputs = platform.outputs_named("summary");
        assert_eq!(outputs.len(), 1);
        assert!(outputs[0].contains("| Create | 1 |"));
        assert!(outputs[0].contains("| Update | 1 |"));
        assert!(outputs[0].contains("| Destroy | 1 |"));
        assert!(outputs[0].contains(r#"| create | resource "aws_instance" "example" { |"#));
        assert!(outputs[0].contains(r#"| update | resource "aws_security_group" "example" { |"#));
        assert!(outputs[0].contains(r#"| destroy | resource "aws_s3_bucket" "example" { |"#));

        // The job summary receives the same document.
        assert_eq!(platform.summaries(), outputs);
        assert!(platform.failures().is_empty());

        let messages = output.get_messages();
        assert!(messages.contains(&OutputMessage::Success("Plan summary published".to_string())));
        assert!(messages.contains(&OutputMessage::Dimmed(
            "1 to create, 1 to update, 1 to destroy".to_string()
        )));
    }

    #[tokio::test]
    async fn test_report_sets_output_before_summary_write() {
        let (ctx, platform, _) = test_context(
            MockPlatform::new().with_input("plan_output", sample_plan_output()),
        );

        assert!(ReportCommand::run(&ctx).await);

        let calls = platform.get_calls();
        let output_pos = calls
            .iter()
            .position(|c| matches!(c, PlatformCall::SetOutput(_, _)))
            .unwrap();
        let summary_pos = calls
            .iter()
            .position(|c| matches!(c, PlatformCall::WriteSummary(_)))
            .unwrap();

        assert!(output_pos < summary_pos);
    }

    #[tokio::test]
    async fn test_report_empty_input_publishes_zero_summary() {
        let (ctx, platform, _) = test_context(MockPlatform::new());

        assert!(ReportCommand::run(&ctx).await);

        let outputs = platform.outputs_named("summary");
        assert_eq!(outputs.len(), 1);
        assert!(outputs[0].contains("| Create | 0 |"));
        assert!(outputs[0].contains("| Destroy | 0 |"));
        assert!(outputs[0].contains("| Update | 0 |"));
        assert!(outputs[0].ends_with("|--------|----------|\n"));
    }

    #[tokio::test]
    async fn test_report_read_failure_reports_once_and_sets_nothing() {
        let (ctx, platform, output) = test_context(
            MockPlatform::new().with_read_failure("input source unavailable"),
        );

        assert!(!ReportCommand::run(&ctx).await);

        let failures = platform.failures();
        assert_eq!(failures.len(), 1);
        assert!(failures[0].contains("input source unavailable"));

        assert!(platform.outputs_named("summary").is_empty());
        assert!(platform.summaries().is_empty());
        assert!(output.has_error());
    }

    #[tokio::test]
    async fn test_report_set_output_failure_skips_summary_write() {
        let (ctx, platform, _) = test_context(
            MockPlatform::new()
                .with_input("plan_output", sample_plan_output())
                .with_set_output_failure("output file not writable"),
        );

        assert!(!ReportCommand::run(&ctx).await);

        let failures = platform.failures();
        assert_eq!(failures.len(), 1);
        assert!(failures[0].contains("output file not writable"));
        assert!(platform.summaries().is_empty());
    }

    #[tokio::test]
    async fn test_report_summary_write_failure_is_terminal() {
        let (ctx, platform, _) = test_context(
            MockPlatform::new()
                .with_input("plan_output", sample_plan_output())
                .with_write_summary_failure("summary sink unavailable"),
        );

        assert!(!ReportCommand::run(&ctx).await);

        let failures = platform.failures();
        assert_eq!(failures.len(), 1);
        assert!(failures[0].contains("summary sink unavailable"));

        // The step output was already set; no rollback is attempted.
        assert_eq!(platform.outputs_named("summary").len(), 1);
    }
}
