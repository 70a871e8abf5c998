//! Data transfer objects for web requests and responses.
//!
//! The request body is [`TripRequest`](crate::domain::TripRequest) and the
//! success body is [`TravelSummary`](crate::summary::TravelSummary), both
//! deserialized/serialized as-is.

use serde::{Deserialize, Serialize};

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
