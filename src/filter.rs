//! Filter predicate set
//!
//! Six independent optional predicates combined by AND. Filtering is a
//! stable selection: the output preserves the input's relative order and
//! applying the same filters twice yields the same subsequence.

use crate::domain::Task;

/// Transient filter state; empty string means "no constraint". Never
/// persisted.
///
/// Date bounds compare lexicographically against the task's `due` string,
/// which is date-order-correct for well-formed `YYYY-MM-DD` values.
/// Malformed dates compare lexicographically too and simply produce odd,
/// non-crashing results.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    /// Case-insensitive substring over description, owner, kpi, strategy, notes
    pub search: String,

    /// Exact strategy label match
    pub strategy: String,

    /// Exact owner match
    pub owner: String,

    /// Exact status label match (e.g. "In Progress")
    pub status: String,

    /// Keep tasks due on or after this date; undated tasks always pass
    pub due_from: String,

    /// Keep tasks due on or before this date; undated tasks always pass
    pub due_to: String,
}

impl Filters {
    /// True when no predicate is active
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.strategy.is_empty()
            && self.owner.is_empty()
            && self.status.is_empty()
            && self.due_from.is_empty()
            && self.due_to.is_empty()
    }

    /// Whether a single task satisfies every active predicate
    pub fn matches(&self, task: &Task) -> bool {
        if !self.search.is_empty() {
            let search = self.search.to_lowercase();
            let hit = task.description.to_lowercase().contains(&search)
                || task.owner.to_lowercase().contains(&search)
                || task.kpi.to_lowercase().contains(&search)
                || task.strategy.to_lowercase().contains(&search)
                || task.notes.to_lowercase().contains(&search);
            if !hit {
                return false;
            }
        }

        if !self.strategy.is_empty() && task.strategy != self.strategy {
            return false;
        }

        if !self.owner.is_empty() && task.owner != self.owner {
            return false;
        }

        if !self.status.is_empty() && task.status.label() != self.status {
            return false;
        }

        // Undated tasks pass both date bounds: don't hide tasks with no due date
        if !self.due_from.is_empty() && !task.due.is_empty() && task.due.as_str() < self.due_from.as_str() {
            return false;
        }

        if !self.due_to.is_empty() && !task.due.is_empty() && task.due.as_str() > self.due_to.as_str() {
            return false;
        }

        true
    }

    /// Select the ordered subsequence of `tasks` satisfying all active
    /// predicates.
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        tasks.iter().filter(|t| self.matches(t)).cloned().collect()
    }

    /// Human description of the active predicates, for display alongside
    /// the filtered list.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if !self.search.is_empty() {
            parts.push(format!("search: \"{}\"", self.search));
        }
        if !self.strategy.is_empty() {
            parts.push(self.strategy.clone());
        }
        if !self.owner.is_empty() {
            parts.push(format!("owner: {}", self.owner));
        }
        if !self.status.is_empty() {
            parts.push(format!("status: {}", self.status));
        }
        if !self.due_from.is_empty() || !self.due_to.is_empty() {
            let from = if self.due_from.is_empty() { "..." } else { self.due_from.as_str() };
            let to = if self.due_to.is_empty() { "..." } else { self.due_to.as_str() };
            parts.push(format!("due {} -> {}", from, to));
        }
        if parts.is_empty() {
            "all tasks".to_string()
        } else {
            parts.join(" · ")
        }
    }
}
