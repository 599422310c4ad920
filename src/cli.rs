//! CLI argument parsing for epmtrack

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::filter::Filters;

#[derive(Parser, Debug)]
#[command(name = "epm")]
#[command(author, version, about = "Local task tracker for an organizational productivity program", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Filter flags shared by `list` and `metrics`
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Case-insensitive text search over description, owner, KPI, strategy, notes
    #[arg(short, long)]
    pub search: Option<String>,

    /// Exact strategy label
    #[arg(long)]
    pub strategy: Option<String>,

    /// Exact owner
    #[arg(short, long)]
    pub owner: Option<String>,

    /// Status: not-started, in-progress, blocked, or done
    #[arg(long)]
    pub status: Option<String>,

    /// Keep tasks due on or after this date (YYYY-MM-DD); undated tasks always pass
    #[arg(long)]
    pub due_from: Option<String>,

    /// Keep tasks due on or before this date (YYYY-MM-DD); undated tasks always pass
    #[arg(long)]
    pub due_to: Option<String>,
}

impl FilterArgs {
    /// Convert to the filter predicate set. Status flags accept the CLI
    /// spellings and are normalized to the stored labels.
    pub fn to_filters(&self) -> Filters {
        let status = match &self.status {
            Some(raw) => raw
                .parse::<crate::domain::Status>()
                .map(|s| s.label().to_string())
                .unwrap_or_else(|_| raw.clone()),
            None => String::new(),
        };
        Filters {
            search: self.search.clone().unwrap_or_default(),
            strategy: self.strategy.clone().unwrap_or_default(),
            owner: self.owner.clone().unwrap_or_default(),
            status,
            due_from: self.due_from.clone().unwrap_or_default(),
            due_to: self.due_to.clone().unwrap_or_default(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in to unlock dashboard commands
    Login {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        password: String,
    },

    /// Log out and clear the auth flag
    Logout,

    /// List tasks matching the active filters
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Add a task
    Add {
        /// Task description
        #[arg(required = true)]
        description: String,

        /// Strategy label (or 1-based catalog number)
        #[arg(long, default_value = "01. Managerial Leverage")]
        strategy: String,

        #[arg(short, long, default_value = "")]
        owner: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        start: String,

        /// Due date (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        due: String,

        /// Status: not-started, in-progress, blocked, or done
        #[arg(long, default_value = "not-started")]
        status: String,

        /// Progress percentage
        #[arg(short, long, default_value = "0")]
        progress: i64,

        #[arg(long, default_value = "")]
        kpi: String,

        #[arg(long, default_value = "")]
        target: String,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Edit fields of an existing task
    Edit {
        /// Task id
        #[arg(required = true)]
        id: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        strategy: Option<String>,

        #[arg(short, long)]
        owner: Option<String>,

        #[arg(long)]
        start: Option<String>,

        #[arg(long)]
        due: Option<String>,

        #[arg(long)]
        status: Option<String>,

        #[arg(short, long)]
        progress: Option<i64>,

        #[arg(long)]
        kpi: Option<String>,

        #[arg(long)]
        target: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Remove a task
    Remove {
        /// Task id
        #[arg(required = true)]
        id: String,
    },

    /// Show rollup metrics for the filtered task set
    Metrics {
        #[command(flatten)]
        filters: FilterArgs,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Export all tasks to CSV
    Export {
        /// Output file (defaults to epm_tasks.csv; use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace the document from a JSON file
    Import {
        /// JSON file matching the document shape
        #[arg(required = true)]
        file: PathBuf,
    },

    /// Reset the document to the bundled default template
    Reset,

    /// Show or set the cycle label
    Cycle {
        /// New cycle label; omit to show the current one
        label: Option<String>,
    },

    /// List objectives and key results (read-only)
    Okrs,

    /// List distinct task owners
    Owners,
}

/// Output format for list/metrics commands
#[derive(Clone, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}
