//! Markdown renderer for plan summaries
//!
//! This module renders a [`PlanSummary`] as a markdown document with an
//! action-count table and an affected-resources table, for CI job summaries
//! and step outputs.

use super::types::{Action, PlanSummary};

/// Markdown renderer for plan summaries
pub struct MarkdownRenderer;

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self
    }

    /// Render the summary to a markdown document
    ///
    /// The document has two sections: a "Terraform Plan Summary" table with
    /// the counts in fixed Create, Destroy, Update row order, then an
    /// "Affected Resources" table with one row per entry in input order.
    ///
    /// Resource text is rendered verbatim. A `|` inside a resource name will
    /// break the table layout; markdown cell escaping is intentionally not
    /// applied.
    pub fn render(&self, summary: &PlanSummary) -> String {
        let mut markdown = self.render_counts(summary);
        markdown.push_str(&self.render_resources(summary));
        markdown
    }

    /// Render the action-count section
    fn render_counts(&self, summary: &PlanSummary) -> String {
        let mut output = String::new();

        output.push_str("## Terraform Plan Summary\n\n");
        output.push_str("| Action | Count |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!("| {} | {} |\n", Action::Create.label(), summary.create));
        output.push_str(&format!("| {} | {} |\n", Action::Destroy.label(), summary.destroy));
        output.push_str(&format!("| {} | {} |\n\n", Action::Update.label(), summary.update));

        output
    }

    /// Render the affected-resources section
    fn render_resources(&self, summary: &PlanSummary) -> String {
        let mut output = String::new();

        output.push_str("## Affected Resources\n\n");
        output.push_str("| Action | Resource |\n");
        output.push_str("|--------|----------|\n");

        for entry in &summary.resources {
            output.push_str(&format!(
                "| {} | {} |\n",
                entry.action.as_str(),
                entry.resource
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> PlanSummary {
        let mut summary = PlanSummary::new();
        summary.record(Action::Create, "aws_instance.example");
        summary.record(Action::Update, "aws_security_group.example1");
        summary.record(Action::Update, "aws_security_group.example2");
        summary.record(Action::Destroy, "aws_s3_bucket.example1");
        summary.record(Action::Destroy, "aws_s3_bucket.example2");
        summary.record(Action::Destroy, "aws_s3_bucket.example3");
        summary
    }

    #[test]
    fn test_render_counts_table() {
        let renderer = MarkdownRenderer::new();
        let markdown = renderer.render(&sample_summary());

        assert!(markdown.contains("## Terraform Plan Summary"));
        assert!(markdown.contains("| Action | Count |"));
        assert!(markdown.contains("| Create | 1 |"));
        assert!(markdown.contains("| Update | 2 |"));
        assert!(markdown.contains("| Destroy | 3 |"));
    }

    #[test]
    fn test_render_resource_rows_in_order() {
        let renderer = MarkdownRenderer::new();
        let markdown = renderer.render(&sample_summary());

        let rows: Vec<&str> = markdown
            .lines()
            .skip_while(|line| *line != "|--------|----------|")
            .skip(1)
            .collect();

        assert_eq!(
            rows,
            vec![
                "| create | aws_instance.example |",
                "| update | aws_security_group.example1 |",
                "| update | aws_security_group.example2 |",
                "| destroy | aws_s3_bucket.example1 |",
                "| destroy | aws_s3_bucket.example2 |",
                "| destroy | aws_s3_bucket.example3 |",
            ]
        );
    }

    #[test]
    fn test_render_fixed_count_row_order() {
        // Create, Destroy, Update, regardless of the count magnitudes.
        let mut summary = PlanSummary::new();
        summary.record(Action::Update, "a");
        summary.record(Action::Update, "b");
        summary.record(Action::Destroy, "c");

        let renderer = MarkdownRenderer::new();
        let markdown = renderer.render(&summary);

        let create_pos = markdown.find("| Create | 0 |").unwrap();
        let destroy_pos = markdown.find("| Destroy | 1 |").unwrap();
        let update_pos = markdown.find("| Update | 2 |").unwrap();

        assert!(create_pos < destroy_pos);
        assert!(destroy_pos < update_pos);
    }

    #[test]
    fn test_render_empty_summary() {
        let renderer = MarkdownRenderer::new();
        let markdown = renderer.render(&PlanSummary::new());

        assert!(markdown.contains("| Create | 0 |"));
        assert!(markdown.contains("| Destroy | 0 |"));
        assert!(markdown.contains("| Update | 0 |"));

        // Affected-resources table has a header and separator but no rows.
        assert!(markdown.ends_with(
            "## Affected Resources\n\n| Action | Resource |\n|--------|----------|\n"
        ));
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = MarkdownRenderer::new();
        let summary = sample_summary();

        assert_eq!(renderer.render(&summary), renderer.render(&summary));
    }

    #[test]
    fn test_render_exact_document_layout() {
        let mut summary = PlanSummary::new();
        summary.record(Action::Create, "aws_instance.web");

        let renderer = MarkdownRenderer::new();
        let markdown = renderer.render(&summary);

        let expected = "## Terraform Plan Summary\n\n\
                        | Action | Count |\n\
                        |--------|-------|\n\
                        | Create | 1 |\n\
                        | Destroy | 0 |\n\
                        | Update | 0 |\n\n\
                        ## Affected Resources\n\n\
                        | Action | Resource |\n\
                        |--------|----------|\n\
                        | create | aws_instance.web |\n";

        assert_eq!(markdown, expected);
    }

    #[test]
    fn test_render_does_not_escape_pipes() {
        let mut summary = PlanSummary::new();
        summary.record(Action::Create, "odd|name");

        let renderer = MarkdownRenderer::new();
        let markdown = renderer.render(&summary);

        // Known limitation: the pipe passes through verbatim.
        assert!(markdown.contains("| create | odd|name |"));
    }
}
