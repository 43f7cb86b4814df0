//! Plan output parser for Terraform
//!
//! This module parses the text output of `terraform plan` to count resource
//! actions and collect the affected resource lines.

use super::types::{Action, PlanSummary};

/// Parser for Terraform plan output
pub struct PlanParser;

impl Default for PlanParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanParser {
    /// Create a new plan parser
    pub fn new() -> Self {
        Self
    }

    /// Parse plan output and return a [`PlanSummary`]
    ///
    /// Each line is trimmed and classified by its two-character prefix:
    /// `"+ "` counts as a create, `"- "` as a destroy, `"~ "` as an update;
    /// everything else is ignored. The entry's resource text is the rest of
    /// the trimmed line after the marker, verbatim. Lines inside a resource
    /// block (attribute diffs, comments) carry no marker at this position
    /// and contribute nothing.
    ///
    /// Total for any input: arbitrary or empty text yields a zero summary.
    pub fn parse(&self, plan_output: &str) -> PlanSummary {
        let mut summary = PlanSummary::new();

        for line in plan_output.lines() {
            let trimmed = line.trim();

            for action in Action::ALL {
                let matched = trimmed
                    .strip_prefix(action.symbol())
                    .and_then(|rest| rest.strip_prefix(' '));

                if let Some(resource) = matched {
                    summary.record(action, resource);
                    break;
                }
            }
        }

        summary
    }
}
