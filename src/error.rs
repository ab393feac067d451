//! Error type shared by every page behavior.

/// Failures raised while reacting to page events.
///
/// Every variant is local to the event that produced it; callers log and
/// move on rather than retry.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("required element not found: {selector}")]
    MissingElement { selector: String },
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("dom operation failed: {0}")]
    Dom(String),
    #[error("invalid config json: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid config field `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}
