//! Trip query construction.

use std::fmt::Write;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::{Coordinate, TripRequest};

use super::clock::{Clock, SystemClock};
use super::departure::{DepartureTime, resolve_zone};
use super::error::QueryError;
use super::options::QueryOptions;

/// Default zone for departure and display times.
pub const DEFAULT_TIMEZONE: &str = "Europe/Oslo";

/// Fields selected from the `trip` result.
///
/// The response types in [`crate::entur`] mirror this selection; a field
/// removed here must be removed (or made optional) there too.
pub const TRIP_SELECTION: &str = "tripPatterns{expectedStartTime duration expectedEndTime \
    endTime aimedEndTime directDuration legs{mode distance bikeRentalNetworks duration \
    fromPlace{latitude longitude name bikeRentalStation{bikesAvailable id}} \
    expectedEndTime expectedStartTime line{id publicCode transportMode} \
    toPlace{name bikeRentalStation{bikesAvailable spacesAvailable id}}}}";

/// A built query: the request body and the departure it was built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripQuery {
    /// JSON request body, `{"query": "..."}`.
    pub payload: String,

    /// Departure instant embedded in the query.
    pub departure: DepartureTime,
}

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
}

/// Builds trip queries from trip requests.
///
/// The clock and zone name are injected so query construction is
/// reproducible in tests.
#[derive(Clone)]
pub struct QueryBuilder {
    options: QueryOptions,
    zone_name: String,
    clock: Arc<dyn Clock>,
}

impl QueryBuilder {
    /// Create a builder with default options and the system clock.
    pub fn new(zone_name: impl Into<String>) -> Self {
        Self {
            options: QueryOptions::default(),
            zone_name: zone_name.into(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the query options.
    pub fn with_options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the clock.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// The configured query options.
    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    /// Name of the zone departures are resolved in.
    pub fn zone_name(&self) -> &str {
        &self.zone_name
    }

    /// Resolve the departure time and render the query payload.
    ///
    /// Coordinates are embedded exactly as received.
    pub fn build(&self, request: &TripRequest) -> Result<TripQuery, QueryError> {
        let zone = resolve_zone(&self.zone_name)?;
        let now = self.clock.now();
        let departure = if request.debug {
            DepartureTime::debug(now, zone)?
        } else {
            DepartureTime::live(now, zone)
        };

        let document = self
            .render_document(&request.from, &request.to, &departure)
            .map_err(|e| QueryError::RequestConstructionFailed(e.to_string()))?;

        let payload = serde_json::to_string(&GraphQlRequest { query: &document })
            .map_err(|e| QueryError::RequestConstructionFailed(e.to_string()))?;

        Ok(TripQuery { payload, departure })
    }

    fn render_document(
        &self,
        from: &Coordinate,
        to: &Coordinate,
        departure: &DepartureTime,
    ) -> Result<String, std::fmt::Error> {
        let mut out = String::with_capacity(768);
        out.push_str("{trip(");
        write_place(&mut out, "from", from)?;
        out.push(' ');
        write_place(&mut out, "to", to)?;
        out.push(' ');
        self.options
            .write_arguments(&departure.to_query_literal(), &mut out)?;
        out.push_str("){");
        out.push_str(TRIP_SELECTION);
        out.push('}');
        out.push('}');
        Ok(out)
    }
}

fn write_place(out: &mut String, key: &str, place: &Coordinate) -> std::fmt::Result {
    write!(
        out,
        "{key}:{{coordinates:{{latitude:{} longitude:{}}}}}",
        place.latitude, place.longitude
    )
}

impl std::fmt::Debug for QueryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryBuilder")
            .field("options", &self.options)
            .field("zone_name", &self.zone_name)
            .finish_non_exhaustive()
    }
}
