//! The "when will I get home" pipeline.
//!
//! Builds the trip query, runs it against a [`JourneyPlanner`] exactly
//! once, and summarizes the result. A failure at any step ends the lookup;
//! the summarizer never sees a failed fetch.

use tracing::{info, warn};

use crate::domain::{InvalidCoordinate, TripRequest};
use crate::entur::{EnturError, JourneyPlanner};
use crate::query::{QueryBuilder, QueryError};
use crate::summary::{Summarizer, SummaryError, TravelSummary};

/// Broad category of a lookup failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidCoordinate,
    TimezoneUnavailable,
    RequestConstructionFailed,
    TransportFailure,
    ResponseDecodeFailed,
    NoTripsFound,
}

/// Errors from a home-time lookup.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error(transparent)]
    InvalidCoordinate(#[from] InvalidCoordinate),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Planner(#[from] EnturError),

    #[error(transparent)]
    Summary(#[from] SummaryError),
}

impl LookupError {
    /// Which stage failed, and how.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::InvalidCoordinate(_) => ErrorKind::InvalidCoordinate,
            LookupError::Query(QueryError::TimezoneUnavailable { .. }) => {
                ErrorKind::TimezoneUnavailable
            }
            LookupError::Query(QueryError::RequestConstructionFailed(_)) => {
                ErrorKind::RequestConstructionFailed
            }
            LookupError::Planner(EnturError::InvalidClientName(_)) => {
                ErrorKind::RequestConstructionFailed
            }
            LookupError::Planner(EnturError::Decode { .. }) => ErrorKind::ResponseDecodeFailed,
            LookupError::Planner(
                EnturError::Transport(_) | EnturError::Api { .. } | EnturError::MockData(_),
            ) => ErrorKind::TransportFailure,
            LookupError::Summary(SummaryError::NoTripsFound) => ErrorKind::NoTripsFound,
        }
    }
}

/// Answers trip requests using a query builder and a journey planner.
#[derive(Debug, Clone)]
pub struct HomeTime<P> {
    builder: QueryBuilder,
    planner: P,
}

impl<P: JourneyPlanner> HomeTime<P> {
    /// Create a pipeline from its two collaborators.
    pub fn new(builder: QueryBuilder, planner: P) -> Self {
        Self { builder, planner }
    }

    /// The journey planner in use.
    pub fn planner(&self) -> &P {
        &self.planner
    }

    /// Look up the trips home for `request`.
    ///
    /// Times in the summary are shown in the zone the departure was
    /// resolved in.
    pub async fn lookup(&self, request: &TripRequest) -> Result<TravelSummary, LookupError> {
        request.validate()?;
        info!(
            from = %request.from,
            to = %request.to,
            debug = request.debug,
            "looking up trips home"
        );

        let query = self.builder.build(request)?;
        let response = self.planner.fetch_trip(&query).await?;
        let patterns = response.trip_patterns();

        if !response.errors.is_empty() {
            let messages: Vec<&str> = response.errors.iter().map(|e| e.message.as_str()).collect();
            warn!(
                errors = ?messages,
                patterns = patterns.len(),
                "journey planner reported errors"
            );
        }

        let summarizer = Summarizer::new(query.departure.instant().timezone());
        Ok(summarizer.summarize(patterns)?)
    }
}
