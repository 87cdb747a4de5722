//! User account resolution: by login first, by email as a fallback.

use std::collections::HashMap;

use tracing::debug;

use crate::error::AssignError;
use crate::host::{User, UserDirectory};

/// Resolves SCM author strings to user accounts.
///
/// A login match always wins, even when the author string looks like an
/// email address. The email fallback scans the directory once into an
/// index that serves every later lookup.
pub struct Users<'a> {
    directory: &'a dyn UserDirectory,
    email_delimiters: Option<(&'a str, &'a str)>,
    email_index: Option<HashMap<String, User>>,
}

impl<'a> Users<'a> {
    pub fn new(
        directory: &'a dyn UserDirectory,
        email_delimiters: Option<(&'a str, &'a str)>,
    ) -> Users<'a> {
        Users {
            directory,
            email_delimiters,
            email_index: None,
        }
    }

    /// The account behind an SCM author string.
    pub fn user_for_author(&mut self, author: &str) -> Result<User, AssignError> {
        if let Some(user) = self.directory.find_by_login(author) {
            return Ok(user.clone());
        }

        let candidate = self.email_candidate(author);
        if candidate.contains('@') {
            debug!("scm author [{author}] looks like an email address, trying email lookup");
            return self.user_by_email(candidate, author);
        }

        debug!("no user found for [{author}]");
        Err(AssignError::UserNotFound {
            author: author.to_string(),
        })
    }

    /// The raw author string, or the fragment between the configured
    /// delimiters when both occur in it, e.g. the address inside
    /// `Jane Doe <jane@example.org>`.
    fn email_candidate<'s>(&self, author: &'s str) -> &'s str {
        let Some((start, end)) = self.email_delimiters else {
            return author;
        };
        let Some(start_pos) = author.find(start) else {
            return author;
        };
        let after = &author[start_pos + start.len()..];
        match after.find(end) {
            Some(end_pos) => &after[..end_pos],
            None => author,
        }
    }

    fn user_by_email(&mut self, email: &str, author: &str) -> Result<User, AssignError> {
        let directory = self.directory;
        let index = self
            .email_index
            .get_or_insert_with(|| build_email_index(directory));

        match index.get(email) {
            Some(user) => {
                debug!("found user [{}] by email [{email}]", user.login);
                Ok(user.clone())
            }
            None => {
                debug!("no user found for email [{email}]");
                Err(AssignError::UserNotFound {
                    author: author.to_string(),
                })
            }
        }
    }
}

/// Indexes every account that carries an email. The first account with
/// a given address wins.
fn build_email_index(directory: &dyn UserDirectory) -> HashMap<String, User> {
    let mut index = HashMap::new();
    for user in directory.all_users() {
        let Some(email) = user.email.as_deref().filter(|e| !e.is_empty()) else {
            continue;
        };
        index
            .entry(email.to_string())
            .or_insert_with(|| user.clone());
    }
    debug!("indexed {} users by email", index.len());
    index
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
