use serde::Serialize;

use super::LineRecord;

const DATETIME_DISPLAY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

pub fn print_report(component_key: &str, records: &[LineRecord]) {
    if records.is_empty() {
        println!("No SCM measures recorded for {component_key}.");
        return;
    }

    let max_author_len = records
        .iter()
        .filter_map(|r| r.author.as_ref().map(|a| a.len()))
        .max()
        .unwrap_or(6)
        .max(6);

    let max_rev_len = records
        .iter()
        .filter_map(|r| r.revision.as_ref().map(|v| v.len()))
        .max()
        .unwrap_or(8)
        .max(8);

    // line(5) + 2 + author + 2 + datetime(24) + 2 + revision + 1
    let header_width = max_author_len + max_rev_len + 36;
    let separator = "─".repeat(header_width.max(60));

    println!("SCM Measures — {component_key}");
    println!("{separator}");
    println!(
        " {:>5}  {:<aw$}  {:<24}  {:<rw$}",
        "Line",
        "Author",
        "Last Commit",
        "Revision",
        aw = max_author_len,
        rw = max_rev_len
    );
    println!("{separator}");

    for r in records {
        let last_commit = r
            .last_commit
            .map(|d| d.format(DATETIME_DISPLAY_FORMAT).to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            " {:>5}  {:<aw$}  {:<24}  {:<rw$}",
            r.line,
            r.author.as_deref().unwrap_or("-"),
            last_commit,
            r.revision.as_deref().unwrap_or("-"),
            aw = max_author_len,
            rw = max_rev_len
        );
    }

    println!("{separator}");
    println!("{} lines with SCM data", records.len());
}

#[derive(Serialize)]
struct JsonEntry {
    line: usize,
    author: Option<String>,
    last_commit_datetime: Option<String>,
    revision: Option<String>,
}

fn to_entry(r: &LineRecord) -> JsonEntry {
    JsonEntry {
        line: r.line,
        author: r.author.clone(),
        last_commit_datetime: r
            .last_commit
            .map(|d| d.format(DATETIME_DISPLAY_FORMAT).to_string()),
        revision: r.revision.clone(),
    }
}

pub fn print_json(records: &[LineRecord]) -> Result<(), Box<dyn std::error::Error>> {
    let entries: Vec<JsonEntry> = records.iter().map(to_entry).collect();
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}
