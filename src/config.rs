//! Run settings loaded from a TOML file.
//!
//! Every setting is optional; an absent file yields the defaults, under
//! which assignment is disabled. Empty strings count as "not configured"
//! exactly like absent keys.

use std::error::Error;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, error};

use crate::error::AssignError;

/// Public names of the settings looked up by key, used in logs and
/// error messages.
pub mod keys {
    pub const DEFAULT_ASSIGNEE: &str = "default.assignee";
    pub const OVERRIDE_ASSIGNEE: &str = "override.assignee";
    pub const DEFECT_INTRODUCED: &str = "defect.introduced";
    pub const EMAIL_START_CHAR: &str = "email.start.char";
    pub const EMAIL_END_CHAR: &str = "email.end.char";
}

const DEFECT_DATE_FORMAT: &str = "%m/%d/%Y";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Master switch. Off by default so a bare config assigns nothing.
    pub enabled: bool,
    /// Login to fall back to when no SCM author can be resolved.
    pub default_assignee: Option<String>,
    /// Login that wins over any resolved SCM author.
    pub override_assignee: Option<String>,
    /// Prefer the line author over the last committer of the file.
    pub assign_to_author: bool,
    /// Cutoff date (MM/DD/YYYY). Issues touched after it are eligible
    /// even when they are not new.
    pub defect_introduced: Option<String>,
    /// Delimiters around an email address embedded in an author string,
    /// for example "<" and ">" in "Jane Doe <jane@example.org>".
    pub email_start_char: Option<String>,
    pub email_end_char: Option<String>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Settings, Box<dyn Error>> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read config file {}: {}", path.display(), e))?;
        let settings: Settings = toml::from_str(&raw)
            .map_err(|e| format!("cannot parse config file {}: {}", path.display(), e))?;
        Ok(settings)
    }

    /// Looks up a setting by its public key name, treating empty values
    /// as absent.
    pub fn required(&self, key: &'static str) -> Result<&str, AssignError> {
        let value = match key {
            keys::DEFAULT_ASSIGNEE => self.default_assignee.as_deref(),
            keys::OVERRIDE_ASSIGNEE => self.override_assignee.as_deref(),
            keys::DEFECT_INTRODUCED => self.defect_introduced.as_deref(),
            keys::EMAIL_START_CHAR => self.email_start_char.as_deref(),
            keys::EMAIL_END_CHAR => self.email_end_char.as_deref(),
            _ => None,
        };
        match value.filter(|v| !v.is_empty()) {
            Some(v) => Ok(v),
            None => {
                debug!("setting [{key}] is not configured");
                Err(AssignError::SettingNotConfigured { key })
            }
        }
    }

    /// The parsed cutoff date, or `None` when the setting is absent or
    /// unparseable. A bad value is reported and then ignored, so a typo
    /// degrades the filter instead of failing the run.
    pub fn defect_introduced_date(&self) -> Option<NaiveDate> {
        let raw = self.defect_introduced.as_deref().filter(|v| !v.is_empty())?;
        match NaiveDate::parse_from_str(raw, DEFECT_DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(err) => {
                error!("unable to parse {} value [{raw}]: {err}", keys::DEFECT_INTRODUCED);
                None
            }
        }
    }

    /// Both email delimiters, or `None` unless both are configured.
    pub fn email_delimiters(&self) -> Option<(&str, &str)> {
        let start = self.email_start_char.as_deref().filter(|v| !v.is_empty())?;
        let end = self.email_end_char.as_deref().filter(|v| !v.is_empty())?;
        Some((start, end))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
