//! Query builder error types.

/// Errors that can occur while building a journey query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// The named timezone is not in the timezone database
    #[error("timezone unavailable: {name}")]
    TimezoneUnavailable { name: String },

    /// The query could not be assembled
    #[error("request construction failed: {0}")]
    RequestConstructionFailed(String),
}
