//! Recognised journey query options.
//!
//! Each option renders to the literal the journey planner's GraphQL schema
//! expects, so changing the shape of a query means changing a field here
//! rather than editing a query string.

use std::fmt::{self, Write};

/// How the traveller moves on the first or last stretch of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreetMode {
    Foot,
    Bicycle,
    BikeRental,
    BikePark,
    Car,
    CarPark,
    CarPickup,
    CarRental,
    Flexible,
    ScooterRental,
}

impl StreetMode {
    pub fn as_graphql(&self) -> &'static str {
        match self {
            StreetMode::Foot => "foot",
            StreetMode::Bicycle => "bicycle",
            StreetMode::BikeRental => "bike_rental",
            StreetMode::BikePark => "bike_park",
            StreetMode::Car => "car",
            StreetMode::CarPark => "car_park",
            StreetMode::CarPickup => "car_pickup",
            StreetMode::CarRental => "car_rental",
            StreetMode::Flexible => "flexible",
            StreetMode::ScooterRental => "scooter_rental",
        }
    }
}

/// Public transport modes the planner may use between access and egress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    Air,
    Bus,
    Cableway,
    Coach,
    Funicular,
    Lift,
    Metro,
    Rail,
    Tram,
    Water,
}

impl TransportMode {
    pub fn as_graphql(&self) -> &'static str {
        match self {
            TransportMode::Air => "air",
            TransportMode::Bus => "bus",
            TransportMode::Cableway => "cableway",
            TransportMode::Coach => "coach",
            TransportMode::Funicular => "funicular",
            TransportMode::Lift => "lift",
            TransportMode::Metro => "metro",
            TransportMode::Rail => "rail",
            TransportMode::Tram => "tram",
            TransportMode::Water => "water",
        }
    }
}

/// Strategy for choosing bicycle routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BicycleOptimisation {
    Quick,
    Safe,
    Flat,
    Greenways,
    Triangle,
}

impl BicycleOptimisation {
    pub fn as_graphql(&self) -> &'static str {
        match self {
            BicycleOptimisation::Quick => "quick",
            BicycleOptimisation::Safe => "safe",
            BicycleOptimisation::Flat => "flat",
            BicycleOptimisation::Greenways => "greenways",
            BicycleOptimisation::Triangle => "triangle",
        }
    }
}

/// Tunable arguments of the trip query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOptions {
    /// Number of candidate trip patterns to request.
    pub num_trip_patterns: u32,

    /// Walking speed in metres per second.
    pub walk_speed: f64,

    /// `true` means the departure time is a latest arrival instead.
    pub arrive_by: bool,

    /// Mode for getting from the origin to the first stop.
    pub access_mode: StreetMode,

    /// Mode for getting from the last stop to the destination.
    pub egress_mode: StreetMode,

    /// Allowed public transport modes.
    pub transport_modes: Vec<TransportMode>,

    /// How bicycle stretches are routed.
    pub bicycle_optimisation: BicycleOptimisation,
}

impl QueryOptions {
    /// Set the number of trip patterns.
    pub fn with_num_trip_patterns(mut self, n: u32) -> Self {
        self.num_trip_patterns = n;
        self
    }

    /// Set the walking speed (m/s).
    pub fn with_walk_speed(mut self, speed: f64) -> Self {
        self.walk_speed = speed;
        self
    }

    /// Set the allowed transport modes.
    pub fn with_transport_modes(mut self, modes: impl IntoIterator<Item = TransportMode>) -> Self {
        self.transport_modes = modes.into_iter().collect();
        self
    }

    /// Set the access and egress modes.
    pub fn with_street_modes(mut self, access: StreetMode, egress: StreetMode) -> Self {
        self.access_mode = access;
        self.egress_mode = egress;
        self
    }

    /// Set the bicycle routing strategy.
    pub fn with_bicycle_optimisation(mut self, method: BicycleOptimisation) -> Self {
        self.bicycle_optimisation = method;
        self
    }

    /// Render the `modes:{...}` argument.
    fn write_modes(&self, out: &mut String) -> fmt::Result {
        write!(
            out,
            "modes:{{accessMode:{} egressMode:{} transportModes:[",
            self.access_mode.as_graphql(),
            self.egress_mode.as_graphql()
        )?;
        for (i, mode) in self.transport_modes.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            write!(out, "{{transportMode:{}}}", mode.as_graphql())?;
        }
        out.push_str("]}");
        Ok(())
    }

    /// Render every option argument, space separated, after `dateTime`.
    pub(crate) fn write_arguments(&self, date_time: &str, out: &mut String) -> fmt::Result {
        write!(
            out,
            "numTripPatterns:{} dateTime:\"{}\" walkSpeed:{} arriveBy:{} ",
            self.num_trip_patterns, date_time, self.walk_speed, self.arrive_by
        )?;
        self.write_modes(out)?;
        write!(
            out,
            " bicycleOptimisationMethod:{}",
            self.bicycle_optimisation.as_graphql()
        )
    }
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            num_trip_patterns: 3,
            walk_speed: 1.3,
            arrive_by: false,
            access_mode: StreetMode::BikeRental,
            egress_mode: StreetMode::Foot,
            transport_modes: vec![TransportMode::Bus],
            bicycle_optimisation: BicycleOptimisation::Quick,
        }
    }
}
