//! The host side of the assignment pipeline.
//!
//! The core never talks to an analysis platform directly. It sees the
//! world through three narrow traits: a [`MeasureProvider`] hands out
//! components and raw measure payloads, a [`UserDirectory`] resolves
//! accounts, and an [`IssueSink`] receives the assignments. The bundled
//! implementation of all three is a JSON snapshot file, in
//! [`snapshot`].

pub mod snapshot;

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Qualifier of file-level components. Only these carry line measures.
pub const QUALIFIER_FILE: &str = "FIL";

/// The per-line SCM measures the pipeline consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    AuthorsByLine,
    LastCommitDatetimesByLine,
    RevisionsByLine,
}

impl Metric {
    /// The measure key under which the payload is stored.
    pub fn key(self) -> &'static str {
        match self {
            Metric::AuthorsByLine => "authors_by_line",
            Metric::LastCommitDatetimesByLine => "last_commit_datetimes_by_line",
            Metric::RevisionsByLine => "revisions_by_line",
        }
    }
}

/// One analyzed component, usually a source file.
///
/// Keys follow the `org:project:path` convention; the measures map holds
/// raw key=value payloads per metric key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Component {
    pub key: String,
    #[serde(default = "default_qualifier")]
    pub qualifier: String,
    #[serde(default)]
    pub measures: BTreeMap<String, String>,
}

fn default_qualifier() -> String {
    QUALIFIER_FILE.to_string()
}

impl Component {
    pub fn is_file(&self) -> bool {
        self.qualifier == QUALIFIER_FILE
    }
}

/// One issue reported by an analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Issue {
    pub key: String,
    /// Key of the component the issue was raised on.
    pub component: String,
    #[serde(default)]
    pub line: Option<usize>,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub creation_date: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub update_date: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub rule: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// One user account known to the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Read access to components and their raw measure payloads.
pub trait MeasureProvider {
    fn find_component(&self, key: &str) -> Option<&Component>;
    fn components(&self) -> &[Component];
    /// The raw payload for one metric of one component, if present.
    fn measure_data(&self, component_key: &str, metric: Metric) -> Option<&str>;
}

/// Read access to user accounts.
pub trait UserDirectory {
    fn find_by_login(&self, login: &str) -> Option<&User>;
    fn all_users(&self) -> &[User];
}

/// Receives resolved assignments.
pub trait IssueSink {
    fn assign(&mut self, issue_key: &str, login: &str);
}

/// The `org:project` prefix of a component key. Keys with fewer than two
/// segments are returned whole.
pub fn project_key(component_key: &str) -> &str {
    match component_key.match_indices(':').nth(1) {
        Some((pos, _)) => &component_key[..pos],
        None => component_key,
    }
}

/// The path segment of a component key, everything after `org:project:`.
pub fn path_part(component_key: &str) -> Option<&str> {
    component_key
        .match_indices(':')
        .nth(1)
        .map(|(pos, _)| &component_key[pos + 1..])
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
