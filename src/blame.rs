//! Resolves the developer behind an issue from per-line blame measures.

use tracing::{debug, error};

use crate::error::AssignError;
use crate::host::Issue;
use crate::measures::ScmMeasures;
use crate::measures::collector::MeasuresCollector;

pub struct Blame<'a> {
    collector: MeasuresCollector<'a>,
}

impl<'a> Blame<'a> {
    pub fn new(collector: MeasuresCollector<'a>) -> Blame<'a> {
        Blame { collector }
    }

    /// The SCM author an issue should be routed to.
    ///
    /// The author of the issue line is used when it matches the author
    /// of the file's most recent commit. When the two differ the last
    /// committer wins, on the grounds that the most recent change is
    /// the most likely origin of a new issue. With `assign_to_author`
    /// the line author is preferred outright whenever one is recorded.
    pub fn author_for_issue(
        &mut self,
        issue: &Issue,
        assign_to_author: bool,
    ) -> Result<String, AssignError> {
        let measures = self.collector.measures_for(&issue.component)?;

        let line_author = match issue.line {
            Some(line) => measures.authors_by_line()?.get(&line).cloned(),
            None => None,
        };

        if assign_to_author {
            if let Some(author) = line_author {
                debug!("assigning issue [{}] to its line author [{author}]", issue.key);
                return Ok(author);
            }
        }

        let last_committer = last_committer(measures)?;
        match line_author {
            Some(author) if author == last_committer => {
                debug!("issue line author [{author}] is also the last committer");
                Ok(author)
            }
            Some(author) => {
                debug!(
                    "issue line author [{author}] superseded by last committer [{last_committer}]"
                );
                Ok(last_committer)
            }
            None => Ok(last_committer),
        }
    }
}

/// The author of the file's most recent commit.
///
/// Every line stamped with the newest commit timestamp must agree on
/// one author. Stamped lines without an author entry are ignored; when
/// none of them has one, the measures are unusable.
fn last_committer(measures: &ScmMeasures) -> Result<String, AssignError> {
    let authors = measures.authors_by_line()?;
    let last_commits = measures.last_commits_by_line()?;

    let newest = last_commits
        .values()
        .max()
        .copied()
        .ok_or_else(|| AssignError::MissingScmMeasureData {
            component: measures.key().to_string(),
        })?;

    let mut author: Option<&str> = None;
    for (line, datetime) in last_commits {
        if *datetime != newest {
            continue;
        }
        let Some(line_author) = authors.get(line) else {
            continue;
        };
        match author {
            None => author = Some(line_author),
            Some(current) if current != line_author => {
                error!(
                    "no unique author for [{}]: [{current}] and [{line_author}] share the last commit",
                    measures.key()
                );
                return Err(AssignError::NoUniqueAuthorForLastCommit {
                    component: measures.key().to_string(),
                });
            }
            Some(_) => {}
        }
    }

    match author {
        Some(author) => {
            debug!("last committer for [{}] is [{author}]", measures.key());
            Ok(author.to_string())
        }
        None => Err(AssignError::MissingScmMeasureData {
            component: measures.key().to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "blame_test.rs"]
mod tests;
