//! Rendering trip patterns as text.
//!
//! Patterns are rendered in the order the journey planner returned them;
//! the service's ranking is trusted and nothing is re-sorted.

use std::fmt::Write;

use chrono::{DateTime, FixedOffset};
use chrono_tz::Tz;
use serde::Serialize;
use tracing::debug;

use crate::entur::{Leg, LegMode, TripPattern};

use super::error::SummaryError;

/// Appended to every route description.
pub const ARRIVED_MARKER: &str = "Arrived!";

/// Text summary of the trips home.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TravelSummary {
    /// One-liner: first arrival time plus the alternatives.
    pub sms: String,

    /// Detail block of the first trip pattern.
    pub next_trip: String,

    /// Detail blocks of every trip pattern, each followed by a blank line.
    pub all_trips: String,
}

/// Renders trip patterns with times shown in a fixed zone.
#[derive(Debug, Clone, Copy)]
pub struct Summarizer {
    zone: Tz,
}

impl Summarizer {
    /// Create a summarizer displaying times in `zone`.
    pub fn new(zone: Tz) -> Self {
        Self { zone }
    }

    /// Summarize trip patterns.
    ///
    /// Fails with [`SummaryError::NoTripsFound`] when `patterns` is empty;
    /// no partial summary is ever produced.
    pub fn summarize(&self, patterns: &[TripPattern]) -> Result<TravelSummary, SummaryError> {
        let (first, rest) = patterns.split_first().ok_or(SummaryError::NoTripsFound)?;

        let next_trip = self.trip_details(first);

        let mut all_trips = String::new();
        for pattern in patterns {
            all_trips.push_str(&self.trip_details(pattern));
            all_trips.push('\n');
        }

        let alternatives = rest
            .iter()
            .map(|p| self.clock_time(&p.expected_end_time))
            .collect::<Vec<_>>()
            .join(", ");

        let sms = format!(
            "Home around {}(alternatively {alternatives})",
            self.clock_time(&first.expected_end_time)
        );
        debug!(sms = %sms, patterns = patterns.len(), "summarized trips");

        Ok(TravelSummary {
            sms,
            next_trip,
            all_trips,
        })
    }

    /// The four-line detail block for one trip pattern.
    pub fn trip_details(&self, pattern: &TripPattern) -> String {
        let availability = BikeAvailability::of(pattern);
        format!(
            "Latest departure: {}\nAvailable bikes: {}\nAvailable docks: {}\nRoute: {}\n",
            self.clock_time(&pattern.expected_start_time),
            availability.bikes,
            availability.docks,
            route(pattern),
        )
    }

    /// `HH:MM` in the display zone.
    fn clock_time(&self, time: &DateTime<FixedOffset>) -> String {
        time.with_timezone(&self.zone).format("%H:%M").to_string()
    }
}

/// Bike-share counts along the cycling legs of a pattern.
#[derive(Debug, Default, PartialEq, Eq)]
struct BikeAvailability {
    /// `name(count) ` per cycling leg origin
    bikes: String,
    /// `name(count) ` per cycling leg destination
    docks: String,
}

impl BikeAvailability {
    fn of(pattern: &TripPattern) -> Self {
        let mut out = Self::default();
        for leg in pattern.legs.iter().filter(|l| l.mode == LegMode::Bicycle) {
            let bikes = leg
                .from_place
                .bike_rental_station
                .as_ref()
                .and_then(|s| s.bikes_available)
                .unwrap_or(0);
            let docks = leg
                .to_place
                .bike_rental_station
                .as_ref()
                .and_then(|s| s.spaces_available)
                .unwrap_or(0);
            let _ = write!(out.bikes, "{}({bikes}) ", leg.from_place.name());
            let _ = write!(out.docks, "{}({docks}) ", leg.to_place.name());
        }
        out
    }
}

/// Route description: one label per leg, then the arrival marker.
fn route(pattern: &TripPattern) -> String {
    let mut out = String::new();
    for leg in &pattern.legs {
        push_leg_label(&mut out, leg);
    }
    out.push_str(ARRIVED_MARKER);
    out
}

fn push_leg_label(out: &mut String, leg: &Leg) {
    let from = leg.from_place.name();
    let _ = match (&leg.line, leg.mode.is_self_propelled()) {
        (Some(line), false) => write!(
            out,
            "{from}({}, {}) - ",
            line.public_code.as_deref().unwrap_or(""),
            line.transport_mode.as_deref().unwrap_or(leg.mode.as_str()),
        ),
        _ => write!(out, "{from}({}) - ", leg.mode),
    };
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
