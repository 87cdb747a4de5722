//! Error kinds raised while resolving blame data or an assignee.
//!
//! The assignment chain distinguishes recoverable kinds (an unset setting,
//! an unknown user) from kinds that end resolution for one issue (missing
//! or inconsistent measure data). All of them are contained per issue by
//! the assigner; none of them aborts a run.

/// Errors surfaced by measure retrieval, blame resolution, and the
/// assignee fallback chain.
#[derive(Debug, thiserror::Error)]
pub enum AssignError {
    /// A required setting is empty or absent. Recoverable: the chain
    /// moves on to its next step.
    #[error("setting [{key}] is not configured")]
    SettingNotConfigured { key: &'static str },

    /// No user account matches a login or email. Recoverable until it
    /// happens on the default-assignee step.
    #[error("no user found for [{author}]")]
    UserNotFound { author: String },

    /// A component has no usable SCM measure data.
    #[error("no SCM measure data for [{component}]")]
    MissingScmMeasureData { component: String },

    /// The lines of the most recent commit name more than one author.
    #[error("no unique author found for [{component}]")]
    NoUniqueAuthorForLastCommit { component: String },

    /// Neither lookup strategy found the component in the index.
    #[error("no resource found for component [{component}]")]
    ResourceNotFound { component: String },

    /// A raw measure payload could not be parsed.
    #[error("malformed measure data for [{component}]: {detail}")]
    MalformedMeasureData { component: String, detail: String },
}
