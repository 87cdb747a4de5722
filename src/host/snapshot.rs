//! JSON snapshot of one analysis: components with their raw measures,
//! the reported issues, and the known user accounts. A snapshot file is
//! the batch equivalent of a live host connection.

use std::error::Error;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::host::{Component, Issue, IssueSink, MeasureProvider, Metric, User, UserDirectory};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl Snapshot {
    pub fn load(path: &Path) -> Result<Snapshot, Box<dyn Error>> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read snapshot {}: {}", path.display(), e))?;
        let snapshot: Snapshot = serde_json::from_str(&raw)
            .map_err(|e| format!("cannot parse snapshot {}: {}", path.display(), e))?;
        debug!(
            "loaded snapshot with {} components, {} issues, {} users",
            snapshot.components.len(),
            snapshot.issues.len(),
            snapshot.users.len()
        );
        Ok(snapshot)
    }
}

impl MeasureProvider for Snapshot {
    fn find_component(&self, key: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.key == key)
    }

    fn components(&self) -> &[Component] {
        &self.components
    }

    fn measure_data(&self, component_key: &str, metric: Metric) -> Option<&str> {
        self.find_component(component_key)
            .and_then(|c| c.measures.get(metric.key()))
            .map(String::as_str)
    }
}

impl UserDirectory for Snapshot {
    fn find_by_login(&self, login: &str) -> Option<&User> {
        self.users.iter().find(|u| u.login == login)
    }

    fn all_users(&self) -> &[User] {
        &self.users
    }
}

/// One recorded assignment.
#[derive(Debug, Clone, Serialize)]
pub struct Assignment {
    pub issue: String,
    pub assignee: String,
}

/// Collects assignments instead of pushing them anywhere. The report
/// and the `--output` file are rendered from this log after the run.
#[derive(Debug, Default)]
pub struct AssignmentLog {
    assignments: Vec<Assignment>,
}

impl AssignmentLog {
    pub fn new() -> AssignmentLog {
        AssignmentLog::default()
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn write_json(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        let json = serde_json::to_string_pretty(&self.assignments)?;
        std::fs::write(path, json)
            .map_err(|e| format!("cannot write {}: {}", path.display(), e))?;
        Ok(())
    }
}

impl IssueSink for AssignmentLog {
    fn assign(&mut self, issue_key: &str, login: &str) {
        self.assignments.push(Assignment {
            issue: issue_key.to_string(),
            assignee: login.to_string(),
        });
    }
}

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod tests;
