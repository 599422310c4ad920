use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use log::info;
use std::path::PathBuf;

use epmtrack::cli::{Cli, Command, OutputFormat};
use epmtrack::config::Config;
use epmtrack::domain::{STRATEGIES, Status, Task};
use epmtrack::metrics::Metrics;
use epmtrack::store::TaskStore;
use epmtrack::{AuthGate, export};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
    Ok(())
}

/// Dashboard commands refuse to run without the durable auth flag
fn require_auth(gate: &AuthGate) -> Result<()> {
    if !gate.is_authenticated() {
        return Err(eyre!("Not logged in. Run `epm login -u <user> -p <password>` first."));
    }
    Ok(())
}

/// Accept either a full strategy label or its 1-based catalog number
fn resolve_strategy(raw: &str) -> String {
    if let Ok(n) = raw.trim().parse::<usize>() {
        if (1..=STRATEGIES.len()).contains(&n) {
            return STRATEGIES[n - 1].to_string();
        }
    }
    raw.to_string()
}

fn parse_status(raw: &str) -> Result<Status> {
    raw.parse::<Status>().map_err(|e| eyre!(e))
}

fn status_colored(status: Status) -> ColoredString {
    match status {
        Status::Done => status.label().green(),
        Status::InProgress => status.label().yellow(),
        Status::Blocked => status.label().red(),
        Status::NotStarted => status.label().dimmed(),
    }
}

fn print_task_line(task: &Task) {
    // Display clamps progress; storage does not
    let progress = task.progress.clamp(0, 100);
    let due = if task.due.is_empty() { "-" } else { &task.due };
    println!(
        "{}  {:<11}  {:>4}%  due {:<10}  {:<16}  {}",
        task.id.cyan(),
        status_colored(task.status),
        progress,
        due,
        task.owner,
        task.description
    );
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let gate = AuthGate::new(config.auth_path());

    info!("epmtrack starting, data dir {}", config.data_dir.display());

    match cli.command {
        Command::Login { username, password } => {
            if gate.login(&username, &password)? {
                println!("{} Logged in as {}", "✓".green(), username.cyan());
            } else {
                return Err(eyre!("Login failed: invalid credentials"));
            }
        }
        Command::Logout => {
            gate.logout()?;
            println!("{} Logged out", "✓".green());
        }
        Command::List { filters, format } => {
            require_auth(&gate)?;
            let store = TaskStore::open(config.store_path())?;
            let filters = filters.to_filters();
            let visible = filters.apply(&store.current().tasks);
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&visible)?),
                OutputFormat::Text => {
                    println!("{} · {} of {} tasks", filters.describe().dimmed(), visible.len(), store.current().tasks.len());
                    for task in &visible {
                        print_task_line(task);
                    }
                }
            }
        }
        Command::Add {
            description,
            strategy,
            owner,
            start,
            due,
            status,
            progress,
            kpi,
            target,
            notes,
        } => {
            require_auth(&gate)?;
            let mut store = TaskStore::open(config.store_path())?;
            let task = Task {
                owner,
                start,
                due,
                status: parse_status(&status)?,
                progress,
                kpi,
                target,
                notes,
                ..Task::new(resolve_strategy(&strategy), description)
            };
            let id = task.id.clone();
            store.add(task)?;
            println!("{} Added task {}", "✓".green(), id.cyan());
        }
        Command::Edit {
            id,
            description,
            strategy,
            owner,
            start,
            due,
            status,
            progress,
            kpi,
            target,
            notes,
        } => {
            require_auth(&gate)?;
            let mut store = TaskStore::open(config.store_path())?;
            let Some(mut task) = store.current().tasks.iter().find(|t| t.id == id).cloned() else {
                // Unmatched ids are a quiet notice, not an error
                println!("{}", format!("No task with id {}", id).dimmed());
                return Ok(());
            };
            if let Some(v) = description {
                task.description = v;
            }
            if let Some(v) = strategy {
                task.strategy = resolve_strategy(&v);
            }
            if let Some(v) = owner {
                task.owner = v;
            }
            if let Some(v) = start {
                task.start = v;
            }
            if let Some(v) = due {
                task.due = v;
            }
            if let Some(v) = status {
                task.status = parse_status(&v)?;
            }
            if let Some(v) = progress {
                task.progress = v;
            }
            if let Some(v) = kpi {
                task.kpi = v;
            }
            if let Some(v) = target {
                task.target = v;
            }
            if let Some(v) = notes {
                task.notes = v;
            }
            store.update(task)?;
            println!("{} Updated task {}", "✓".green(), id.cyan());
        }
        Command::Remove { id } => {
            require_auth(&gate)?;
            let mut store = TaskStore::open(config.store_path())?;
            store.remove(&id)?;
            println!("{} Removed task {}", "✓".green(), id.cyan());
        }
        Command::Metrics { filters, format } => {
            require_auth(&gate)?;
            let store = TaskStore::open(config.store_path())?;
            let filters = filters.to_filters();
            let visible = filters.apply(&store.current().tasks);
            let metrics = Metrics::compute_today(&visible);
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&metrics)?),
                OutputFormat::Text => {
                    println!("{}", filters.describe().dimmed());
                    println!("  Total:       {}", metrics.total);
                    println!("  Done:        {}", metrics.done.to_string().green());
                    println!("  In Progress: {}", metrics.in_progress.to_string().yellow());
                    println!("  Blocked:     {}", metrics.blocked.to_string().red());
                    println!("  Not Started: {}", metrics.not_started);
                    println!("  Avg Progress: {}%", metrics.avg_progress);
                    println!("  Overdue:     {}", metrics.overdue.to_string().red());
                    println!("  Due in 7d:   {}", metrics.next7);
                }
            }
        }
        Command::Export { output } => {
            require_auth(&gate)?;
            let store = TaskStore::open(config.store_path())?;
            let csv = export::tasks_to_csv(&store.current().tasks);
            match output {
                Some(path) if path == PathBuf::from("-") => println!("{}", csv),
                other => {
                    let path = other.unwrap_or_else(|| PathBuf::from("epm_tasks.csv"));
                    std::fs::write(&path, csv).context(format!("Failed to write {}", path.display()))?;
                    println!(
                        "{} Exported {} tasks to {}",
                        "✓".green(),
                        store.current().tasks.len(),
                        path.display().to_string().cyan()
                    );
                }
            }
        }
        Command::Import { file } => {
            require_auth(&gate)?;
            let raw = std::fs::read_to_string(&file).context(format!("Failed to read {}", file.display()))?;
            let data = export::import_json(&raw)?;
            let mut store = TaskStore::open(config.store_path())?;
            let count = data.tasks.len();
            store.replace_all(data)?;
            println!("{} Imported {} tasks from {}", "✓".green(), count, file.display());
        }
        Command::Reset => {
            require_auth(&gate)?;
            let mut store = TaskStore::open(config.store_path())?;
            store.reset()?;
            println!("{} Data reset to the default template", "✓".green());
        }
        Command::Cycle { label } => {
            require_auth(&gate)?;
            let mut store = TaskStore::open(config.store_path())?;
            match label {
                Some(label) => {
                    store.set_cycle(&label)?;
                    println!("{} Cycle set to {}", "✓".green(), label.cyan());
                }
                None => println!("{}", store.current().cycle),
            }
        }
        Command::Okrs => {
            require_auth(&gate)?;
            let store = TaskStore::open(config.store_path())?;
            if store.current().okrs.is_empty() {
                println!("No objectives");
            }
            for obj in &store.current().okrs {
                println!("{} {} ({}, {})", obj.id.cyan(), obj.objective, obj.owner, obj.cycle.dimmed());
                for kr in &obj.key_results {
                    println!(
                        "    {}  baseline {} -> target {} · current {}",
                        kr.kr,
                        kr.baseline,
                        kr.target,
                        kr.current.to_string().yellow()
                    );
                }
            }
        }
        Command::Owners => {
            require_auth(&gate)?;
            let store = TaskStore::open(config.store_path())?;
            for owner in store.owners() {
                println!("{}", owner);
            }
        }
    }

    Ok(())
}
