//! Data types for plan summarization
//!
//! This module defines the data structures used to represent parsed plan
//! output and feed the markdown renderer.

use serde::{Deserialize, Serialize};

/// Represents the action Terraform will take for a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Resource will be created
    Create,
    /// Resource will be updated in-place
    Update,
    /// Resource will be destroyed
    Destroy,
}

impl Action {
    /// All actions, in the order markers are checked against a plan line
    pub const ALL: [Action; 3] = [Action::Create, Action::Destroy, Action::Update];

    /// Get the symbol used to mark this action in plan output
    pub fn symbol(&self) -> &'static str {
        match self {
            Action::Create => "+",
            Action::Update => "~",
            Action::Destroy => "-",
        }
    }

    /// Get the lowercase name used in the affected-resources table
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Update => "update",
            Action::Destroy => "destroy",
        }
    }

    /// Get the capitalized label used in the summary table
    pub fn label(&self) -> &'static str {
        match self {
            Action::Create => "Create",
            Action::Update => "Update",
            Action::Destroy => "Destroy",
        }
    }
}

/// A single matched plan line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceEntry {
    /// Action the plan takes for this resource
    pub action: Action,

    /// Remainder of the matched line after the action marker, verbatim
    pub resource: String,
}

/// Parsed summary of a Terraform plan
///
/// The counters always mirror the entry list: `create` equals the number of
/// entries with [`Action::Create`], and so on, because [`PlanSummary::record`]
/// is the only mutation path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Number of resources to be created
    pub create: usize,

    /// Number of resources to be updated in-place
    pub update: usize,

    /// Number of resources to be destroyed
    pub destroy: usize,

    /// Matched entries in the order they appeared in the plan output
    pub resources: Vec<ResourceEntry>,
}

impl PlanSummary {
    /// Create an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one matched plan line, keeping counters in sync with the list
    pub fn record(&mut self, action: Action, resource: &str) {
        match action {
            Action::Create => self.create += 1,
            Action::Update => self.update += 1,
            Action::Destroy => self.destroy += 1,
        }

        self.resources.push(ResourceEntry {
            action,
            resource: resource.to_string(),
        });
    }

    /// Total number of matched entries
    pub fn total_changes(&self) -> usize {
        self.create + self.update + self.destroy
    }

    /// Whether the plan contains any changes
    pub fn has_changes(&self) -> bool {
        self.total_changes() > 0
    }
}
