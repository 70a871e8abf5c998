//! Domain types for the trip request.
//!
//! Coordinates are carried as the caller's decimal strings and validated
//! once at the edge, so the query builder can embed them verbatim.

mod coordinate;
mod request;

pub use coordinate::{Axis, Coordinate, InvalidCoordinate};
pub use request::TripRequest;
