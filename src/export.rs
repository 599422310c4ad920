//! Export/import adapter
//!
//! CSV export of the full task list (fixed header, every field quoted,
//! internal quotes doubled, newlines in notes collapsed to spaces), a
//! reverse parser for that format, and whole-document JSON import gated
//! only on the presence of a `tasks` field.

use eyre::{Result, eyre};

use crate::domain::{AppData, Task};

/// Fixed CSV header row, kept byte-for-byte across export versions
pub const CSV_HEADER: [&str; 11] = [
    "ID", "Strategi", "Tugas", "Owner", "Mulai", "Due", "Status", "Progress", "KPI", "Target", "Catatan",
];

/// Quote a field: wrap in double quotes, double internal double quotes
fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn csv_row(fields: &[String]) -> String {
    fields.iter().map(|f| csv_field(f)).collect::<Vec<_>>().join(",")
}

/// Serialize all tasks (never a filtered subset) to the delimited format,
/// one row per task in store order.
pub fn tasks_to_csv(tasks: &[Task]) -> String {
    let header = csv_row(&CSV_HEADER.iter().map(|h| h.to_string()).collect::<Vec<_>>());
    let mut lines = vec![header];
    for t in tasks {
        lines.push(csv_row(&[
            t.id.clone(),
            t.strategy.clone(),
            t.description.clone(),
            t.owner.clone(),
            t.start.clone(),
            t.due.clone(),
            t.status.label().to_string(),
            t.progress.to_string(),
            t.kpi.clone(),
            t.target.clone(),
            // Notes are the one field that may hold newlines; collapse them
            t.notes.replace('\n', " "),
        ]));
    }
    lines.join("\n")
}

/// Split CSV text into rows of fields, honoring quoted fields with doubled
/// internal quotes. Permissive on unquoted fields.
fn parse_rows(input: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => row.push(std::mem::take(&mut field)),
                '\r' => {}
                '\n' => {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                _ => field.push(c),
            }
        }
    }
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }
    rows
}

/// Reverse of [`tasks_to_csv`]: parse the delimited format back into tasks.
///
/// Round-trips reproduce field values exactly, modulo the newline-to-space
/// collapse already applied to notes on export. Unknown progress or status
/// values fall back to defaults rather than failing; missing trailing
/// columns read as empty.
pub fn tasks_from_csv(input: &str) -> Result<Vec<Task>> {
    let rows = parse_rows(input);
    let mut iter = rows.into_iter();

    let header = iter.next().ok_or_else(|| eyre!("Empty CSV input"))?;
    if header != CSV_HEADER {
        return Err(eyre!("Unrecognized CSV header: {:?}", header));
    }

    let mut tasks = Vec::new();
    for row in iter {
        let col = |i: usize| row.get(i).cloned().unwrap_or_default();
        tasks.push(Task {
            id: col(0),
            strategy: col(1),
            description: col(2),
            owner: col(3),
            start: col(4),
            due: col(5),
            status: col(6).parse().unwrap_or_default(),
            progress: col(7).parse().unwrap_or(0),
            kpi: col(8),
            target: col(9),
            notes: col(10),
        });
    }
    Ok(tasks)
}

/// Parse an uploaded JSON document into a full `AppData` replacement.
///
/// The only shape check is the presence of a `tasks` key; task objects
/// inside the array deserialize with per-field defaults rather than being
/// validated. Parse failure or a missing key is an error and the caller
/// leaves the store untouched.
pub fn import_json(raw: &str) -> Result<AppData> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| eyre!("Failed to read JSON file: {}", e))?;

    if value.get("tasks").is_none() {
        return Err(eyre!("Unrecognized file format: no `tasks` field"));
    }

    serde_json::from_value(value).map_err(|e| eyre!("Failed to read JSON file: {}", e))
}
