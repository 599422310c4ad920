//! epmtrack - local task tracker for an organizational productivity program
//!
//! A single-user dashboard backend: a persistent document of tasks grouped
//! by strategic pillar plus OKR data, with filter/metrics derivation and
//! CSV/JSON export-import. All state lives in one JSON document under a
//! local data directory; every mutation rewrites the whole document.
//!
//! # Architecture
//!
//! ```text
//! <data_dir>/
//! ├── epmData_v1.json   # the whole document: {cycle, tasks[], okrs[]}
//! └── epm-auth          # "true" while logged in
//! ```
//!
//! Derivation order mirrors the dashboard: filters select a task
//! subsequence, metrics aggregate over that subsequence.
//!
//! # Example
//!
//! ```ignore
//! use epmtrack::{Filters, Metrics, TaskStore};
//!
//! let mut store = TaskStore::open("data/epmData_v1.json")?;
//! let filters = Filters { status: "Blocked".into(), ..Default::default() };
//! let visible = filters.apply(&store.current().tasks);
//! let metrics = Metrics::compute_today(&visible);
//! ```

pub mod auth;
pub mod cli;
pub mod config;
pub mod domain;
pub mod export;
pub mod filter;
pub mod metrics;
pub mod store;

pub use auth::AuthGate;
pub use config::Config;
pub use domain::{AppData, KeyResult, Objective, STRATEGIES, Status, Task, default_data};
pub use export::{CSV_HEADER, import_json, tasks_from_csv, tasks_to_csv};
pub use filter::Filters;
pub use metrics::{Metrics, today_string};
pub use store::TaskStore;

/// File name of the persisted document inside the data directory
pub const STORE_FILE: &str = "epmData_v1.json";

/// File name of the auth flag inside the data directory
pub const AUTH_FLAG_FILE: &str = "epm-auth";
