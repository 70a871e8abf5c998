//! Summarizer error types.

/// Errors from turning a response into a summary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SummaryError {
    /// The response was valid but held no trip patterns
    #[error("no trips found")]
    NoTripsFound,
}
