//! Rollup metrics over the filtered task set
//!
//! Pure derivation: no side effects, input is the task slice (usually the
//! filtered subset) and the evaluation date.

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{Status, Task};

/// Summary counts and average progress for a task set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub total: usize,
    pub done: usize,
    pub in_progress: usize,
    pub blocked: usize,
    pub not_started: usize,

    /// round(sum(progress) / max(total, 1)); 0 for an empty set
    pub avg_progress: i64,

    /// Tasks past due and not Done; undated tasks never count
    pub overdue: usize,

    /// Tasks due within [today, today+7], inclusive, any status
    pub next7: usize,
}

impl Metrics {
    /// Aggregate `tasks` as of `today` (`YYYY-MM-DD`).
    ///
    /// Date comparisons are lexicographic on the `YYYY-MM-DD` strings,
    /// which is date-order-correct for well-formed values and merely odd
    /// (never a crash) for malformed ones.
    pub fn compute(tasks: &[Task], today: &str) -> Self {
        let total = tasks.len();
        let done = tasks.iter().filter(|t| t.status == Status::Done).count();
        let in_progress = tasks.iter().filter(|t| t.status == Status::InProgress).count();
        let blocked = tasks.iter().filter(|t| t.status == Status::Blocked).count();
        let not_started = tasks.iter().filter(|t| t.status == Status::NotStarted).count();

        let sum: i64 = tasks.iter().map(|t| t.progress).sum();
        let avg_progress = (sum as f64 / total.max(1) as f64).round() as i64;

        let overdue = tasks
            .iter()
            .filter(|t| !t.due.is_empty() && t.due.as_str() < today && t.status != Status::Done)
            .count();

        let horizon = plus_days(today, 7);
        let next7 = tasks
            .iter()
            .filter(|t| !t.due.is_empty() && t.due.as_str() >= today && t.due.as_str() <= horizon.as_str())
            .count();

        Self {
            total,
            done,
            in_progress,
            blocked,
            not_started,
            avg_progress,
            overdue,
            next7,
        }
    }

    /// Aggregate as of the current local calendar date
    pub fn compute_today(tasks: &[Task]) -> Self {
        Self::compute(tasks, &today_string())
    }
}

/// The current local calendar date, `YYYY-MM-DD`
pub fn today_string() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// `date` plus `days`, by calendar arithmetic when `date` parses as
/// `YYYY-MM-DD`; falls back to the input unchanged when it does not.
fn plus_days(date: &str, days: i64) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => (d + Duration::days(days)).format("%Y-%m-%d").to_string(),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(due: &str, status: Status, progress: i64) -> Task {
        Task::with_id("T-X", "01. Managerial Leverage", "work")
            .with_due(due)
            .with_status(status)
            .with_progress(progress)
    }

    #[test]
    fn test_status_counts_partition_total() {
        let tasks = vec![
            task("", Status::Done, 100),
            task("", Status::InProgress, 40),
            task("", Status::Blocked, 10),
            task("", Status::NotStarted, 0),
            task("", Status::InProgress, 60),
        ];
        let m = Metrics::compute(&tasks, "2025-01-10");
        assert_eq!(m.done + m.in_progress + m.blocked + m.not_started, m.total);
        assert_eq!(m.in_progress, 2);
    }

    #[test]
    fn test_avg_progress_empty_is_zero() {
        let m = Metrics::compute(&[], "2025-01-10");
        assert_eq!(m.total, 0);
        assert_eq!(m.avg_progress, 0);
    }

    #[test]
    fn test_avg_progress_rounds() {
        let tasks = vec![task("", Status::InProgress, 40), task("", Status::InProgress, 60)];
        assert_eq!(Metrics::compute(&tasks, "2025-01-10").avg_progress, 50);

        let tasks = vec![task("", Status::InProgress, 1), task("", Status::InProgress, 2)];
        assert_eq!(Metrics::compute(&tasks, "2025-01-10").avg_progress, 2); // 1.5 rounds up
    }

    #[test]
    fn test_overdue_respects_status_and_due() {
        let today = "2025-01-10";

        let past_open = vec![task("2025-01-05", Status::InProgress, 50)];
        assert_eq!(Metrics::compute(&past_open, today).overdue, 1);

        let past_done = vec![task("2025-01-05", Status::Done, 100)];
        assert_eq!(Metrics::compute(&past_done, today).overdue, 0);

        let undated = vec![task("", Status::Blocked, 0)];
        assert_eq!(Metrics::compute(&undated, today).overdue, 0);
    }

    #[test]
    fn test_next7_window_inclusive() {
        let today = "2025-01-10";

        assert_eq!(Metrics::compute(&[task("2025-01-10", Status::NotStarted, 0)], today).next7, 1);
        assert_eq!(Metrics::compute(&[task("2025-01-15", Status::NotStarted, 0)], today).next7, 1);
        assert_eq!(Metrics::compute(&[task("2025-01-17", Status::NotStarted, 0)], today).next7, 1);
        assert_eq!(Metrics::compute(&[task("2025-01-18", Status::NotStarted, 0)], today).next7, 0);
        assert_eq!(Metrics::compute(&[task("2025-01-09", Status::NotStarted, 0)], today).next7, 0);
        // Status is ignored for the lookahead window
        assert_eq!(Metrics::compute(&[task("2025-01-12", Status::Done, 100)], today).next7, 1);
        // Undated tasks never count
        assert_eq!(Metrics::compute(&[task("", Status::NotStarted, 0)], today).next7, 0);
    }

    #[test]
    fn test_blocked_scenario() {
        // Filtered set [B(status=Blocked, no due)] from the two-task store
        let b = task("", Status::Blocked, 10);
        let m = Metrics::compute(std::slice::from_ref(&b), "2025-01-10");
        assert_eq!(m.total, 1);
        assert_eq!(m.blocked, 1);
        assert_eq!(m.avg_progress, b.progress);
        assert_eq!(m.overdue, 0);
    }

    #[test]
    fn test_json_wire_names() {
        let m = Metrics::compute(&[task("", Status::InProgress, 40)], "2025-01-10");
        let json = serde_json::to_value(&m).unwrap();
        assert!(json.get("avgProgress").is_some());
        assert!(json.get("inProgress").is_some());
        assert!(json.get("notStarted").is_some());
    }

    #[test]
    fn test_today_string_format() {
        let t = today_string();
        assert_eq!(t.len(), 10);
        assert!(NaiveDate::parse_from_str(&t, "%Y-%m-%d").is_ok());
    }
}
