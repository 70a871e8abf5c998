//! Journey query construction.
//!
//! Turns a [`TripRequest`](crate::domain::TripRequest) into the GraphQL
//! body sent to the journey planner, together with the departure instant
//! the query asks about.

mod builder;
mod clock;
mod departure;
mod error;
mod options;

pub use builder::{DEFAULT_TIMEZONE, QueryBuilder, TRIP_SELECTION, TripQuery};
pub use clock::{Clock, FixedClock, SystemClock};
pub use departure::{DEBUG_DEPARTURE_HOUR, DEBUG_DEPARTURE_MINUTE, DepartureTime, resolve_zone};
pub use error::QueryError;
pub use options::{BicycleOptimisation, QueryOptions, StreetMode, TransportMode};
