//! The assignee fallback chain: override, then SCM author, then default.

use tracing::{debug, warn};

use crate::config::{Settings, keys};
use crate::error::AssignError;
use crate::host::{User, UserDirectory};
use crate::users::Users;

pub struct Assign<'a> {
    settings: &'a Settings,
    users: Users<'a>,
}

impl<'a> Assign<'a> {
    pub fn new(settings: &'a Settings, directory: &'a dyn UserDirectory) -> Assign<'a> {
        let users = Users::new(directory, settings.email_delimiters());
        Assign { settings, users }
    }

    /// The user an issue goes to.
    ///
    /// A configured override wins over everything. Otherwise the
    /// resolved SCM author is used when it maps to an account, and the
    /// default assignee catches the rest. Only the last step is
    /// mandatory; a failure there propagates to the caller.
    pub fn assignee(&mut self, scm_author: Option<&str>) -> Result<User, AssignError> {
        if let Some(user) = self.override_assignee() {
            return Ok(user);
        }

        if let Some(author) = scm_author {
            match self.users.user_for_author(author) {
                Ok(user) => return Ok(user),
                Err(err) => {
                    debug!("cannot assign to scm author [{author}]: {err}");
                }
            }
        }

        self.default_assignee()
    }

    /// The override account, when one is configured and resolvable. An
    /// unresolvable override is reported and skipped, so a stale login
    /// degrades to the normal chain instead of blocking it.
    fn override_assignee(&mut self) -> Option<User> {
        match self.configured_user(keys::OVERRIDE_ASSIGNEE) {
            Ok(user) => {
                debug!("override assignee is [{}]", user.login);
                Some(user)
            }
            Err(AssignError::SettingNotConfigured { .. }) => None,
            Err(err) => {
                warn!("ignoring override assignee: {err}");
                None
            }
        }
    }

    fn default_assignee(&mut self) -> Result<User, AssignError> {
        let user = self.configured_user(keys::DEFAULT_ASSIGNEE)?;
        debug!("default assignee is [{}]", user.login);
        Ok(user)
    }

    fn configured_user(&mut self, key: &'static str) -> Result<User, AssignError> {
        let settings = self.settings;
        let login = settings.required(key)?;
        self.users.user_for_author(login)
    }
}

#[cfg(test)]
#[path = "assign_test.rs"]
mod tests;
