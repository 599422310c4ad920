//! Objective / Key Result types
//!
//! Read-only in this version: nothing in the crate mutates OKRs, they are
//! carried through the document and listed on request.

use serde::{Deserialize, Serialize};

/// A single measurable key result under an objective
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KeyResult {
    /// Key result description
    pub kr: String,

    /// Starting value at the beginning of the cycle
    pub baseline: f64,

    /// Value to reach by the end of the cycle
    pub target: f64,

    /// Most recently recorded value
    pub current: f64,
}

/// An objective with its key results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Objective {
    pub id: String,

    /// Objective statement
    pub objective: String,

    pub owner: String,

    /// Cycle label this objective belongs to
    pub cycle: String,

    #[serde(rename = "keyResults")]
    pub key_results: Vec<KeyResult>,
}
