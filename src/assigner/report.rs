use serde::Serialize;

use super::{IssueRecord, Outcome};

pub fn print_report(records: &[IssueRecord]) {
    if records.is_empty() {
        println!("No issues found in the snapshot.");
        return;
    }

    let max_issue_len = records
        .iter()
        .map(|r| r.issue_key.len())
        .max()
        .unwrap_or(5)
        .max(5);

    let max_comp_len = records
        .iter()
        .map(|r| r.component.len())
        .max()
        .unwrap_or(9)
        .max(9);

    let max_assignee_len = records
        .iter()
        .map(|r| match &r.outcome {
            Outcome::Assigned { assignee, .. } => assignee.len(),
            _ => 1,
        })
        .max()
        .unwrap_or(8)
        .max(8);

    // issue + 2 + component + 2 + line(5) + 2 + assignee + 2 + outcome(12) + 1
    let header_width = max_issue_len + max_comp_len + max_assignee_len + 26;
    let separator = "─".repeat(header_width.max(70));

    println!("Issue Auto-Assignment");
    println!("{separator}");
    println!(
        " {:<iw$}  {:<cw$}  {:>5}  {:<aw$}  {:<12}",
        "Issue",
        "Component",
        "Line",
        "Assignee",
        "Outcome",
        iw = max_issue_len,
        cw = max_comp_len,
        aw = max_assignee_len
    );
    println!("{separator}");

    for r in records {
        let (assignee, outcome) = match &r.outcome {
            Outcome::Assigned { assignee, .. } => (assignee.as_str(), "assigned"),
            Outcome::NotEligible => ("-", "not eligible"),
            Outcome::Failed { .. } => ("-", "failed"),
        };
        let line = r
            .line
            .map(|l| l.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            " {:<iw$}  {:<cw$}  {:>5}  {:<aw$}  {:<12}",
            r.issue_key,
            r.component,
            line,
            assignee,
            outcome,
            iw = max_issue_len,
            cw = max_comp_len,
            aw = max_assignee_len
        );
    }

    println!("{separator}");

    let assigned = records
        .iter()
        .filter(|r| matches!(r.outcome, Outcome::Assigned { .. }))
        .count();
    println!("{assigned} of {} issues assigned", records.len());

    let failed: Vec<&IssueRecord> = records
        .iter()
        .filter(|r| matches!(r.outcome, Outcome::Failed { .. }))
        .collect();
    if !failed.is_empty() {
        println!();
        println!("Issues that could not be assigned: {}", failed.len());
        for r in failed {
            if let Outcome::Failed { reason } = &r.outcome {
                println!("  {} ({reason})", r.issue_key);
            }
        }
    }
}

#[derive(Serialize)]
struct JsonEntry {
    issue: String,
    component: String,
    line: Option<usize>,
    rule: Option<String>,
    outcome: String,
    scm_author: Option<String>,
    assignee: Option<String>,
    reason: Option<String>,
}

fn to_entry(r: &IssueRecord) -> JsonEntry {
    let mut entry = JsonEntry {
        issue: r.issue_key.clone(),
        component: r.component.clone(),
        line: r.line,
        rule: r.rule.clone(),
        outcome: String::new(),
        scm_author: None,
        assignee: None,
        reason: None,
    };
    match &r.outcome {
        Outcome::Assigned {
            scm_author,
            assignee,
        } => {
            entry.outcome = "assigned".to_string();
            entry.scm_author = scm_author.clone();
            entry.assignee = Some(assignee.clone());
        }
        Outcome::NotEligible => entry.outcome = "not_eligible".to_string(),
        Outcome::Failed { reason } => {
            entry.outcome = "failed".to_string();
            entry.reason = Some(reason.clone());
        }
    }
    entry
}

pub fn print_json(records: &[IssueRecord]) -> Result<(), Box<dyn std::error::Error>> {
    let entries: Vec<JsonEntry> = records.iter().map(to_entry).collect();
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}
