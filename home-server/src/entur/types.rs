//! Journey planner response DTOs.
//!
//! These types map directly to the JSON returned for the trip query built
//! in [`crate::query`]. One struct per nesting level, each only as deep as
//! the selection goes. Optional fields are `Option` because the service
//! sends `null` rather than omitting them (e.g. `line` on a foot leg).

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// Top-level GraphQL response.
#[derive(Debug, Clone, Deserialize)]
pub struct JourneyPlannerResponse {
    /// Query result. `null` when the query failed outright.
    pub data: Option<ResponseData>,

    /// GraphQL errors reported alongside (or instead of) data.
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl JourneyPlannerResponse {
    /// Trip patterns in the order the service ranked them.
    ///
    /// Empty when `data` or `trip` is absent.
    pub fn trip_patterns(&self) -> &[TripPattern] {
        self.data
            .as_ref()
            .and_then(|d| d.trip.as_ref())
            .map(|t| t.trip_patterns.as_slice())
            .unwrap_or(&[])
    }
}

/// The `data` object.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseData {
    pub trip: Option<Trip>,
}

/// The `trip` object.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    #[serde(default)]
    pub trip_patterns: Vec<TripPattern>,
}

/// One candidate itinerary.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPattern {
    /// Expected departure from the origin, including delays.
    pub expected_start_time: DateTime<FixedOffset>,

    /// Expected arrival at the destination, including delays.
    pub expected_end_time: DateTime<FixedOffset>,

    /// Total duration in seconds.
    pub duration: Option<i64>,

    /// Scheduled arrival.
    pub end_time: Option<DateTime<FixedOffset>>,

    /// Aimed (timetabled) arrival.
    pub aimed_end_time: Option<DateTime<FixedOffset>>,

    /// Duration of a direct street route, in seconds.
    pub direct_duration: Option<i64>,

    /// Segments in travel order.
    #[serde(default)]
    pub legs: Vec<Leg>,
}

/// One segment of a trip pattern.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    pub mode: LegMode,

    /// Distance in metres.
    pub distance: Option<f64>,

    /// Bike-share networks used on this leg.
    pub bike_rental_networks: Option<Vec<String>>,

    /// Duration in seconds.
    pub duration: Option<i64>,

    pub from_place: FromPlace,

    pub to_place: ToPlace,

    /// Line for vehicle legs. `null` for foot and bicycle legs.
    pub line: Option<Line>,

    pub expected_start_time: Option<DateTime<FixedOffset>>,

    pub expected_end_time: Option<DateTime<FixedOffset>>,
}

/// Leg mode as reported by the journey planner.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum LegMode {
    Air,
    Bicycle,
    Bus,
    Cableway,
    Car,
    Coach,
    Foot,
    Funicular,
    Lift,
    Metro,
    Monorail,
    Rail,
    Scooter,
    Taxi,
    Tram,
    Trolleybus,
    Water,
    /// A mode this client does not know about, with the service's tag.
    Other(String),
}

impl LegMode {
    /// The mode's tag, as the service spells it.
    pub fn as_str(&self) -> &str {
        match self {
            LegMode::Air => "air",
            LegMode::Bicycle => "bicycle",
            LegMode::Bus => "bus",
            LegMode::Cableway => "cableway",
            LegMode::Car => "car",
            LegMode::Coach => "coach",
            LegMode::Foot => "foot",
            LegMode::Funicular => "funicular",
            LegMode::Lift => "lift",
            LegMode::Metro => "metro",
            LegMode::Monorail => "monorail",
            LegMode::Rail => "rail",
            LegMode::Scooter => "scooter",
            LegMode::Taxi => "taxi",
            LegMode::Tram => "tram",
            LegMode::Trolleybus => "trolleybus",
            LegMode::Water => "water",
            LegMode::Other(tag) => tag,
        }
    }

    /// Foot and bicycle legs are self-propelled and have no line.
    pub fn is_self_propelled(&self) -> bool {
        matches!(self, LegMode::Foot | LegMode::Bicycle)
    }
}

impl From<String> for LegMode {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "air" => LegMode::Air,
            "bicycle" => LegMode::Bicycle,
            "bus" => LegMode::Bus,
            "cableway" => LegMode::Cableway,
            "car" => LegMode::Car,
            "coach" => LegMode::Coach,
            "foot" => LegMode::Foot,
            "funicular" => LegMode::Funicular,
            "lift" => LegMode::Lift,
            "metro" => LegMode::Metro,
            "monorail" => LegMode::Monorail,
            "rail" => LegMode::Rail,
            "scooter" => LegMode::Scooter,
            "taxi" => LegMode::Taxi,
            "tram" => LegMode::Tram,
            "trolleybus" => LegMode::Trolleybus,
            "water" => LegMode::Water,
            _ => LegMode::Other(tag),
        }
    }
}

impl fmt::Display for LegMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a leg starts.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FromPlace {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub name: Option<String>,

    /// Bike-share station, when the place is one.
    pub bike_rental_station: Option<FromStation>,
}

impl FromPlace {
    /// Place name, or an empty string if the service sent none.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// Where a leg ends.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToPlace {
    pub name: Option<String>,

    /// Bike-share station, when the place is one.
    pub bike_rental_station: Option<ToStation>,
}

impl ToPlace {
    /// Place name, or an empty string if the service sent none.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// Bike-share station at the start of a leg.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FromStation {
    pub id: String,
    pub bikes_available: Option<u32>,
}

/// Bike-share station at the end of a leg.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToStation {
    pub id: String,
    pub bikes_available: Option<u32>,
    pub spaces_available: Option<u32>,
}

/// Public transport line.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub id: String,

    /// Number or code shown to passengers, e.g. "37".
    pub public_code: Option<String>,

    /// Transport mode of the line, e.g. "bus".
    pub transport_mode: Option<String>,
}

/// An entry of the GraphQL `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}
