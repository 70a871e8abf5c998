//! Journey planner client.
//!
//! This module talks to the public journey-planning GraphQL API: it posts
//! the query built by [`crate::query`] and decodes the trip patterns the
//! summarizer needs.
//!
//! Key characteristics of the API:
//! - Every request must carry an `ET-Client-Name` header naming the caller
//! - Times are ISO 8601 with a UTC offset
//! - Errors may come back as a 200 response with a GraphQL `errors` array

mod client;
mod error;
mod mock;
mod types;

pub use client::{CLIENT_NAME_HEADER, DEFAULT_BASE_URL, EnturClient, EnturConfig, JourneyPlanner};
pub use error::EnturError;
pub use mock::MockPlanner;
pub use types::{
    FromPlace, FromStation, GraphQlError, JourneyPlannerResponse, Leg, LegMode, Line,
    ResponseData, ToPlace, ToStation, Trip, TripPattern,
};
