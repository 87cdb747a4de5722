//! Issue auto-assignment over an analysis snapshot.
//!
//! Walks the reported issues, decides which are eligible, resolves an
//! SCM author for each one and routes it through the assignee fallback
//! chain. A resolution failure is contained to its issue; the batch
//! always runs to the end.

mod report;

use std::error::Error;
use std::path::Path;

use chrono::{NaiveDate, NaiveTime, Utc};
use tracing::{debug, info, warn};

use crate::assign::Assign;
use crate::blame::Blame;
use crate::config::Settings;
use crate::error::AssignError;
use crate::host::snapshot::{AssignmentLog, Snapshot};
use crate::host::{Issue, IssueSink, UserDirectory, project_key};
use crate::measures::collector::MeasuresCollector;
use report::{print_json, print_report};

/// What happened to one issue.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Assigned {
        scm_author: Option<String>,
        assignee: String,
    },
    NotEligible,
    Failed {
        reason: String,
    },
}

/// One processed issue, in input order.
#[derive(Debug, Clone)]
pub struct IssueRecord {
    pub issue_key: String,
    pub component: String,
    pub line: Option<usize>,
    pub rule: Option<String>,
    pub outcome: Outcome,
}

pub struct IssueAssigner<'a> {
    settings: &'a Settings,
    blame: Blame<'a>,
    assign: Assign<'a>,
}

impl<'a> IssueAssigner<'a> {
    pub fn new(
        settings: &'a Settings,
        collector: MeasuresCollector<'a>,
        directory: &'a dyn UserDirectory,
    ) -> IssueAssigner<'a> {
        IssueAssigner {
            settings,
            blame: Blame::new(collector),
            assign: Assign::new(settings, directory),
        }
    }

    /// Routes one issue. Any resolution error is contained here: the
    /// issue stays unassigned and the batch moves on.
    pub fn on_issue(&mut self, issue: &Issue, sink: &mut dyn IssueSink) -> Outcome {
        if !self.should_assign(issue) {
            debug!("issue [{}] is not eligible for auto-assignment", issue.key);
            return Outcome::NotEligible;
        }
        debug!(
            "found assignable issue [{}] on project [{}]",
            issue.key,
            project_key(&issue.component)
        );
        match self.assign_issue(issue, sink) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!("unable to assign issue [{}]: {err}", issue.key);
                Outcome::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }

    fn assign_issue(
        &mut self,
        issue: &Issue,
        sink: &mut dyn IssueSink,
    ) -> Result<Outcome, AssignError> {
        let scm_author = match self.blame.author_for_issue(issue, self.settings.assign_to_author) {
            Ok(author) => Some(author),
            Err(AssignError::MissingScmMeasureData { component }) => {
                debug!("no SCM measure data for [{component}], using the default assignee");
                None
            }
            Err(err) => return Err(err),
        };

        let assignee = self.assign.assignee(scm_author.as_deref())?;
        info!("assigning issue [{}] to [{}]", issue.key, assignee.login);
        sink.assign(&issue.key, &assignee.login);
        Ok(Outcome::Assigned {
            scm_author,
            assignee: assignee.login,
        })
    }

    /// An issue qualifies when it is new. With a cutoff date configured
    /// the window widens: known but unassigned issues qualify too, as
    /// long as they were created or updated after the cutoff.
    fn should_assign(&self, issue: &Issue) -> bool {
        match self.settings.defect_introduced_date() {
            None => issue.is_new,
            Some(date) => (issue.is_new || issue.assignee.is_none()) && touched_after(issue, date),
        }
    }
}

fn touched_after(issue: &Issue, date: NaiveDate) -> bool {
    let cutoff = date.and_time(NaiveTime::MIN).and_utc();
    let created_after = issue
        .creation_date
        .is_some_and(|d| d.with_timezone(&Utc) > cutoff);
    let updated_after = issue
        .update_date
        .is_some_and(|d| d.with_timezone(&Utc) > cutoff);
    created_after || updated_after
}

/// Run auto-assignment for every issue in a snapshot and report the
/// outcomes.
pub fn run(
    snapshot_path: &Path,
    config_path: Option<&Path>,
    json: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let settings = match config_path {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    if !settings.enabled {
        info!("issue auto-assignment is DISABLED");
        println!("Issue auto-assignment is disabled; set enabled = true in the config file.");
        return Ok(());
    }
    info!("issue auto-assignment is ENABLED");

    let snapshot = Snapshot::load(snapshot_path)?;

    let mut collector = MeasuresCollector::new(&snapshot);
    collector.collect_files();
    info!(
        "collected SCM measures for {} file components",
        collector.collected()
    );

    let mut assigner = IssueAssigner::new(&settings, collector, &snapshot);
    let mut log = AssignmentLog::new();
    let mut records = Vec::with_capacity(snapshot.issues.len());

    for issue in &snapshot.issues {
        let outcome = assigner.on_issue(issue, &mut log);
        records.push(IssueRecord {
            issue_key: issue.key.clone(),
            component: issue.component.clone(),
            line: issue.line,
            rule: issue.rule.clone(),
            outcome,
        });
    }

    if let Some(path) = output {
        log.write_json(path)?;
        info!(
            "wrote {} assignments to {}",
            log.assignments().len(),
            path.display()
        );
    }

    if json {
        print_json(&records)?;
    } else {
        print_report(&records);
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
