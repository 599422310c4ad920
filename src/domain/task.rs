//! Task record type and the fixed strategy catalog
//!
//! A Task is the unit of work tracked by the dashboard. Field names on the
//! wire follow the v1 document format (`task` for the description, spaced
//! status labels) so existing exports import cleanly.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The ten strategic pillars a task is classified under, in catalog order.
pub const STRATEGIES: [&str; 10] = [
    "01. Managerial Leverage",
    "02. Clear Objectives & Key Results (OKRs)",
    "03. Optimize Processes",
    "04. Effective Meetings",
    "05. Training & Development",
    "06. Feedback Mechanisms",
    "07. Task-Relevant Maturity",
    "08. Cultural Alignment",
    "09. Use of Technology",
    "10. Self-Assessment & Reflection",
];

/// Workflow status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Status {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Blocked")]
    Blocked,
    #[serde(rename = "Done")]
    Done,
}

impl Status {
    /// The label used on the wire and in CSV exports
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Blocked => "Blocked",
            Self::Done => "Done",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "not started" | "not-started" | "notstarted" => Ok(Self::NotStarted),
            "in progress" | "in-progress" | "inprogress" => Ok(Self::InProgress),
            "blocked" => Ok(Self::Blocked),
            "done" => Ok(Self::Done),
            _ => Err(format!(
                "Unknown status: {}. Use: not-started, in-progress, blocked, or done",
                s
            )),
        }
    }
}

/// A trackable unit of work tied to a strategic pillar.
///
/// Every field defaults so that partially-formed objects in an imported
/// document deserialize with empty values instead of rejecting the import.
/// `progress` is nominally 0-100 but storage does not enforce the bound;
/// display is expected to clamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Task {
    /// Opaque unique identifier, assigned at creation, immutable after
    pub id: String,

    /// One of the [`STRATEGIES`] catalog labels
    pub strategy: String,

    /// What the task is (wire name `task`, kept for v1 document compatibility)
    #[serde(rename = "task")]
    pub description: String,

    /// Responsible person or team
    pub owner: String,

    /// Start date, `YYYY-MM-DD` or empty when unset
    pub start: String,

    /// Due date, `YYYY-MM-DD` or empty when unset
    pub due: String,

    /// Current workflow status
    pub status: Status,

    /// Completion percentage; no invariant ties this to `status`
    pub progress: i64,

    /// Key performance indicator being moved
    pub kpi: String,

    /// Target value for the KPI
    pub target: String,

    /// Free-form notes
    pub notes: String,
}

impl Task {
    /// Create a new Task with a freshly generated id
    pub fn new(strategy: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            strategy: strategy.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    /// Create a Task with a specific id (for imports and testing)
    pub fn with_id(id: impl Into<String>, strategy: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            strategy: strategy.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    /// Set the owner
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    /// Set the due date (`YYYY-MM-DD`)
    pub fn with_due(mut self, due: impl Into<String>) -> Self {
        self.due = due.into();
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Set the progress percentage
    pub fn with_progress(mut self, progress: i64) -> Self {
        self.progress = progress;
        self
    }
}

/// Generate a task id: `T-` plus four uppercase hex chars from a fresh UUID.
///
/// Collision probability under this scheme is accepted as negligible for a
/// list of dozens to low hundreds of tasks; it is not cryptographic.
pub fn generate_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("T-{}", hex[..4].to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_format() {
        let id = generate_id();
        assert_eq!(id.len(), 6);
        assert!(id.starts_with("T-"));
        assert!(id[2..].chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_task_new() {
        let task = Task::new(STRATEGIES[0], "Audit activity log");
        assert!(task.id.starts_with("T-"));
        assert_eq!(task.strategy, STRATEGIES[0]);
        assert_eq!(task.description, "Audit activity log");
        assert_eq!(task.status, Status::NotStarted);
        assert_eq!(task.progress, 0);
        assert!(task.due.is_empty());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(Status::NotStarted.label(), "Not Started");
        assert_eq!(Status::InProgress.label(), "In Progress");
        assert_eq!(Status::Done.to_string(), "Done");
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("in-progress".parse::<Status>(), Ok(Status::InProgress));
        assert_eq!("In Progress".parse::<Status>(), Ok(Status::InProgress));
        assert_eq!("done".parse::<Status>(), Ok(Status::Done));
        assert!("finished".parse::<Status>().is_err());
    }

    #[test]
    fn test_task_wire_format() {
        let task = Task::with_id("T-01", STRATEGIES[1], "Define OKRs")
            .with_owner("PMO")
            .with_status(Status::InProgress)
            .with_progress(30);

        let json = serde_json::to_value(&task).unwrap();
        // Wire names follow the v1 document format
        assert_eq!(json["task"], "Define OKRs");
        assert_eq!(json["status"], "In Progress");
        assert_eq!(json["progress"], 30);

        let back: Task = serde_json::from_value(json).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn test_task_defaults_on_partial_object() {
        // A malformed import object with missing fields still deserializes
        let partial: Task = serde_json::from_str(r#"{"id": "T-99"}"#).unwrap();
        assert_eq!(partial.id, "T-99");
        assert_eq!(partial.status, Status::NotStarted);
        assert!(partial.description.is_empty());
        assert_eq!(partial.progress, 0);
    }
}
