//! Persistent task store
//!
//! Owns the in-memory `AppData` document and mirrors it to a JSON file on
//! every mutation. The whole document is the unit of persistence: each
//! mutator rewrites the full file synchronously before returning, which is
//! safe because there is exactly one logical writer.

use eyre::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppData, Task, default_data};

/// The single-document store behind the dashboard.
///
/// Callers own the store as an explicit value; all mutation funnels through
/// the mutators below, each of which persists before returning.
pub struct TaskStore {
    /// Path of the JSON document file
    path: PathBuf,

    /// The current document
    data: AppData,
}

impl TaskStore {
    /// Open the store at `path`, loading the saved document if one exists
    /// or bootstrapping from the bundled default document on first use.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create store directory")?;
        }

        let data = if path.exists() {
            let raw = fs::read_to_string(&path).context(format!("Failed to read store file: {}", path.display()))?;
            debug!("Loaded store from {}", path.display());
            serde_json::from_str(&raw).context("Failed to parse store file")?
        } else {
            info!("No store file at {}, starting from default document", path.display());
            default_data()
        };

        let store = Self { path, data };
        if !store.path.exists() {
            store.persist()?;
        }
        Ok(store)
    }

    /// The current document
    pub fn current(&self) -> &AppData {
        &self.data
    }

    /// Sorted, deduplicated list of non-empty task owners
    pub fn owners(&self) -> Vec<String> {
        let mut owners: Vec<String> = self
            .data
            .tasks
            .iter()
            .map(|t| t.owner.clone())
            .filter(|o| !o.is_empty())
            .collect();
        owners.sort();
        owners.dedup();
        owners
    }

    /// Append a task (arriving with its freshly generated id) and persist
    pub fn add(&mut self, task: Task) -> Result<()> {
        info!("Adding task {}", task.id);
        self.data.tasks.push(task);
        self.persist()
    }

    /// Replace the task whose id matches; silently a no-op when no task
    /// matches (never an error).
    pub fn update(&mut self, task: Task) -> Result<()> {
        if let Some(slot) = self.data.tasks.iter_mut().find(|t| t.id == task.id) {
            info!("Updating task {}", task.id);
            *slot = task;
        } else {
            debug!("Update for unmatched id {}, ignoring", task.id);
        }
        self.persist()
    }

    /// Drop the task with the given id; silently a no-op when absent
    pub fn remove(&mut self, id: &str) -> Result<()> {
        let before = self.data.tasks.len();
        self.data.tasks.retain(|t| t.id != id);
        if self.data.tasks.len() < before {
            info!("Removed task {}", id);
        } else {
            debug!("Remove for unmatched id {}, ignoring", id);
        }
        self.persist()
    }

    /// Wholesale replacement of the document (import and reset)
    pub fn replace_all(&mut self, data: AppData) -> Result<()> {
        info!("Replacing document ({} tasks)", data.tasks.len());
        self.data = data;
        self.persist()
    }

    /// Update only the cycle label
    pub fn set_cycle(&mut self, label: &str) -> Result<()> {
        self.data.cycle = label.to_string();
        self.persist()
    }

    /// Restore the bundled default document
    pub fn reset(&mut self) -> Result<()> {
        info!("Resetting document to the default template");
        self.replace_all(default_data())
    }

    /// Serialize the full document to the store file
    fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, raw).context(format!("Failed to write store file: {}", self.path.display()))?;
        debug!("Persisted {} tasks to {}", self.data.tasks.len(), self.path.display());
        Ok(())
    }
}
