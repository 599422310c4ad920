//! Domain types: the root document, tasks, and OKR data

mod default_data;
mod okr;
mod task;

pub use default_data::default_data;
pub use okr::{KeyResult, Objective};
pub use task::{STRATEGIES, Status, Task, generate_id};

use serde::{Deserialize, Serialize};

/// The root document: everything the tool persists, as one value.
///
/// The whole document is the unit of persistence; every mutation replaces
/// it in memory and rewrites it in full.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppData {
    /// Freeform period label (e.g. "Q4-2025"), display-only
    pub cycle: String,

    /// Tasks in insertion order
    pub tasks: Vec<Task>,

    /// Objectives, read-only in this version
    pub okrs: Vec<Objective>,
}
