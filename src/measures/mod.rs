//! Per-line SCM measures.
//!
//! Every analyzed file carries three raw measures: the author, the last
//! commit timestamp, and the revision of each line. Payloads arrive as
//! `line=value` strings and stay unparsed until an accessor needs them;
//! each one is parsed at most once per component.

pub mod collector;
pub mod keyvalue;
mod report;

use std::cell::OnceCell;
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::path::Path;

use chrono::{DateTime, FixedOffset};

use crate::error::AssignError;
use crate::host::snapshot::Snapshot;
use collector::MeasuresCollector;
use report::{print_json, print_report};

/// The three per-line measures of one component.
///
/// Construction never fails; a malformed payload surfaces from the
/// accessor that first touches it. Successful parses are memoized, so
/// repeated accessors hand back the same map.
#[derive(Debug)]
pub struct ScmMeasures {
    key: String,
    raw_authors: String,
    raw_last_commits: String,
    raw_revisions: String,
    authors: OnceCell<BTreeMap<usize, String>>,
    last_commits: OnceCell<BTreeMap<usize, DateTime<FixedOffset>>>,
    revisions: OnceCell<BTreeMap<usize, String>>,
}

impl ScmMeasures {
    pub fn new(key: &str, authors: &str, last_commits: &str, revisions: &str) -> ScmMeasures {
        ScmMeasures {
            key: key.to_string(),
            raw_authors: authors.to_string(),
            raw_last_commits: last_commits.to_string(),
            raw_revisions: revisions.to_string(),
            authors: OnceCell::new(),
            last_commits: OnceCell::new(),
            revisions: OnceCell::new(),
        }
    }

    /// Key of the component these measures belong to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Line -> author login or email, as recorded by the SCM.
    pub fn authors_by_line(&self) -> Result<&BTreeMap<usize, String>, AssignError> {
        if let Some(map) = self.authors.get() {
            return Ok(map);
        }
        let parsed = keyvalue::parse_by_line(&self.raw_authors).map_err(|d| self.malformed(d))?;
        Ok(self.authors.get_or_init(|| parsed))
    }

    /// Line -> timestamp of the commit that last touched it.
    pub fn last_commits_by_line(
        &self,
    ) -> Result<&BTreeMap<usize, DateTime<FixedOffset>>, AssignError> {
        if let Some(map) = self.last_commits.get() {
            return Ok(map);
        }
        let parsed = keyvalue::parse_datetimes_by_line(&self.raw_last_commits)
            .map_err(|d| self.malformed(d))?;
        Ok(self.last_commits.get_or_init(|| parsed))
    }

    /// Line -> SCM revision identifier.
    pub fn revisions_by_line(&self) -> Result<&BTreeMap<usize, String>, AssignError> {
        if let Some(map) = self.revisions.get() {
            return Ok(map);
        }
        let parsed = keyvalue::parse_by_line(&self.raw_revisions).map_err(|d| self.malformed(d))?;
        Ok(self.revisions.get_or_init(|| parsed))
    }

    fn malformed(&self, detail: String) -> AssignError {
        AssignError::MalformedMeasureData {
            component: self.key.clone(),
            detail,
        }
    }
}

/// One line with its three measures merged, for display.
pub struct LineRecord {
    pub line: usize,
    pub author: Option<String>,
    pub last_commit: Option<DateTime<FixedOffset>>,
    pub revision: Option<String>,
}

fn merge_lines(measures: &ScmMeasures) -> Result<Vec<LineRecord>, AssignError> {
    let authors = measures.authors_by_line()?;
    let last_commits = measures.last_commits_by_line()?;
    let revisions = measures.revisions_by_line()?;

    let mut lines: BTreeSet<usize> = BTreeSet::new();
    lines.extend(authors.keys());
    lines.extend(last_commits.keys());
    lines.extend(revisions.keys());

    Ok(lines
        .into_iter()
        .map(|line| LineRecord {
            line,
            author: authors.get(&line).cloned(),
            last_commit: last_commits.get(&line).copied(),
            revision: revisions.get(&line).cloned(),
        })
        .collect())
}

/// Show the parsed per-line measures of one component in a snapshot.
pub fn run(snapshot_path: &Path, component_key: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let snapshot = Snapshot::load(snapshot_path)?;
    let mut collector = MeasuresCollector::new(&snapshot);
    let measures = collector.measures_for(component_key)?;
    let records = merge_lines(measures)?;

    if json {
        print_json(&records)?;
    } else {
        print_report(component_key, &records);
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
