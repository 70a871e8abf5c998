//! Unit tests for trip summary rendering.

use super::*;
use crate::entur::{
    FromPlace, FromStation, JourneyPlannerResponse, Line, ToPlace, ToStation,
};

const FIXTURE: &str = include_str!("../../tests/fixtures/trip_response.json");

fn summarizer() -> Summarizer {
    Summarizer::new(chrono_tz::Europe::Oslo)
}

fn at(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

fn hhmm(s: &str) -> DateTime<FixedOffset> {
    at(&format!("2024-03-18T{s}:00+01:00"))
}

fn pattern(start: &str, end: &str, legs: Vec<Leg>) -> TripPattern {
    TripPattern {
        expected_start_time: hhmm(start),
        expected_end_time: hhmm(end),
        duration: None,
        end_time: None,
        aimed_end_time: None,
        direct_duration: None,
        legs,
    }
}

fn place(name: &str) -> FromPlace {
    FromPlace {
        latitude: None,
        longitude: None,
        name: Some(name.to_string()),
        bike_rental_station: None,
    }
}

fn to(name: &str) -> ToPlace {
    ToPlace {
        name: Some(name.to_string()),
        bike_rental_station: None,
    }
}

fn leg(mode: LegMode, from: FromPlace, to: ToPlace, line: Option<Line>) -> Leg {
    Leg {
        mode,
        distance: None,
        bike_rental_networks: None,
        duration: None,
        from_place: from,
        to_place: to,
        line,
        expected_start_time: None,
        expected_end_time: None,
    }
}

fn walk(from: &str, dest: &str) -> Leg {
    leg(LegMode::Foot, place(from), to(dest), None)
}

fn cycle(from: &str, bikes: u32, dest: &str, spaces: u32) -> Leg {
    let mut from = place(from);
    from.bike_rental_station = Some(FromStation {
        id: "YOS:VehicleSharingParkingArea:1".into(),
        bikes_available: Some(bikes),
    });
    let mut dest = to(dest);
    dest.bike_rental_station = Some(ToStation {
        id: "YOS:VehicleSharingParkingArea:2".into(),
        bikes_available: None,
        spaces_available: Some(spaces),
    });
    leg(LegMode::Bicycle, from, dest, None)
}

fn bus(from: &str, code: &str, dest: &str) -> Leg {
    leg(
        LegMode::Bus,
        place(from),
        to(dest),
        Some(Line {
            id: format!("RUT:Line:{code}"),
            public_code: Some(code.to_string()),
            transport_mode: Some("bus".to_string()),
        }),
    )
}

#[test]
fn single_pattern_snapshot() {
    let patterns = vec![pattern("16:10", "16:40", vec![walk("Origin", "Destination")])];
    let summary = summarizer().summarize(&patterns).unwrap();

    let block = "Latest departure: 16:10\n\
                 Available bikes: \n\
                 Available docks: \n\
                 Route: Origin(foot) - Arrived!\n";
    assert_eq!(summary.sms, "Home around 16:40(alternatively )");
    assert_eq!(summary.next_trip, block);
    assert_eq!(summary.all_trips, format!("{block}\n"));
}

#[test]
fn multi_mode_fixture_snapshot() {
    let response: JourneyPlannerResponse = serde_json::from_str(FIXTURE).unwrap();
    let summary = summarizer().summarize(response.trip_patterns()).unwrap();

    let first = "Latest departure: 16:52\n\
                 Available bikes: Olaf Ryes plass(7) \n\
                 Available docks: Jernbanetorget(12) \n\
                 Route: Origin(foot) - Olaf Ryes plass(bicycle) - Jernbanetorget(37, bus) - \
                 Nydalen T(foot) - Arrived!\n";
    let second = "Latest departure: 17:05\n\
                  Available bikes: Birkelunden(3) \n\
                  Available docks: Storgata(4) \n\
                  Route: Origin(foot) - Birkelunden(bicycle) - Storgata(31, bus) - \
                  Nydalen T(foot) - Arrived!\n";
    let third = "Latest departure: 17:20\n\
                 Available bikes: \n\
                 Available docks: \n\
                 Route: Origin(foot) - Carl Berners plass(20, bus) - Nydalen T(foot) - Arrived!\n";

    assert_eq!(summary.sms, "Home around 17:18(alternatively 17:33, 17:48)");
    assert_eq!(summary.next_trip, first);
    assert_eq!(summary.all_trips, format!("{first}\n{second}\n{third}\n"));
}

#[test]
fn alternatives_exclude_first_arrival() {
    let patterns = vec![
        pattern("16:10", "16:40", vec![]),
        pattern("16:40", "17:10", vec![]),
        pattern("17:10", "17:40", vec![]),
    ];
    let summary = summarizer().summarize(&patterns).unwrap();
    assert_eq!(summary.sms, "Home around 16:40(alternatively 17:10, 17:40)");
}

#[test]
fn service_order_is_kept() {
    // Later arrival listed first stays first.
    let patterns = vec![
        pattern("17:00", "17:50", vec![walk("Late", "Destination")]),
        pattern("16:00", "16:30", vec![walk("Early", "Destination")]),
    ];
    let summary = summarizer().summarize(&patterns).unwrap();

    assert_eq!(summary.sms, "Home around 17:50(alternatively 16:30)");
    assert!(summary.next_trip.contains("Route: Late(foot)"));
    let late = summary.all_trips.find("Late(foot)").unwrap();
    let early = summary.all_trips.find("Early(foot)").unwrap();
    assert!(late < early);
}

#[test]
fn all_trips_has_one_block_per_pattern() {
    let patterns: Vec<_> = (0..5)
        .map(|i| pattern("16:00", &format!("16:{:02}", 30 + i), vec![]))
        .collect();
    let summary = summarizer().summarize(&patterns).unwrap();

    assert_eq!(summary.all_trips.matches("Latest departure: ").count(), 5);
    assert!(summary.all_trips.starts_with(&summary.next_trip));
    assert!(summary.all_trips.ends_with("Arrived!\n\n"));
}

#[test]
fn no_patterns_is_an_error() {
    assert_eq!(summarizer().summarize(&[]), Err(SummaryError::NoTripsFound));
}

#[test]
fn pattern_without_legs_only_arrives() {
    let details = summarizer().trip_details(&pattern("16:10", "16:40", vec![]));
    assert!(details.ends_with("Route: Arrived!\n"));
}

#[test]
fn only_cycling_legs_count_availability() {
    let p = pattern(
        "16:10",
        "16:40",
        vec![
            walk("Origin", "Birkelunden"),
            cycle("Birkelunden", 3, "Storgata", 4),
            walk("Storgata", "Destination"),
        ],
    );
    assert_eq!(
        BikeAvailability::of(&p),
        BikeAvailability {
            bikes: "Birkelunden(3) ".into(),
            docks: "Storgata(4) ".into(),
        }
    );

    let walking_only = pattern("16:10", "16:40", vec![walk("Origin", "Destination")]);
    assert_eq!(BikeAvailability::of(&walking_only), BikeAvailability::default());
}

#[test]
fn each_cycling_leg_adds_an_entry() {
    let p = pattern(
        "16:10",
        "16:40",
        vec![
            cycle("Birkelunden", 3, "Storgata", 4),
            cycle("Storgata", 11, "Nydalen", 0),
        ],
    );
    let availability = BikeAvailability::of(&p);
    assert_eq!(availability.bikes, "Birkelunden(3) Storgata(11) ");
    assert_eq!(availability.docks, "Storgata(4) Nydalen(0) ");
}

#[test]
fn cycling_leg_without_station_counts_zero() {
    let p = pattern(
        "16:10",
        "16:40",
        vec![leg(LegMode::Bicycle, place("Home"), to("Work"), None)],
    );
    let availability = BikeAvailability::of(&p);
    assert_eq!(availability.bikes, "Home(0) ");
    assert_eq!(availability.docks, "Work(0) ");
}

#[test]
fn vehicle_leg_labels() {
    let with_line = pattern("16:10", "16:40", vec![bus("Jernbanetorget", "37", "Nydalen T")]);
    assert!(
        summarizer()
            .trip_details(&with_line)
            .ends_with("Route: Jernbanetorget(37, bus) - Arrived!\n")
    );

    let without_line = pattern(
        "16:10",
        "16:40",
        vec![leg(LegMode::Tram, place("Storo"), to("Grefsen"), None)],
    );
    assert!(
        summarizer()
            .trip_details(&without_line)
            .ends_with("Route: Storo(tram) - Arrived!\n")
    );
}

#[test]
fn unlisted_modes_render_their_own_tag() {
    let hovercraft = LegMode::Other("hovercraft".into());
    let without_line = pattern(
        "16:10",
        "16:40",
        vec![leg(hovercraft.clone(), place("Aker brygge"), to("Nesodden"), None)],
    );
    assert!(
        summarizer()
            .trip_details(&without_line)
            .ends_with("Route: Aker brygge(hovercraft) - Arrived!\n")
    );

    let untyped_line = pattern(
        "16:10",
        "16:40",
        vec![leg(
            hovercraft,
            place("Aker brygge"),
            to("Nesodden"),
            Some(Line {
                id: "RUT:Line:B10".into(),
                public_code: Some("B10".into()),
                transport_mode: None,
            }),
        )],
    );
    assert!(
        summarizer()
            .trip_details(&untyped_line)
            .ends_with("Route: Aker brygge(B10, hovercraft) - Arrived!\n")
    );
}

#[test]
fn times_are_shown_in_display_zone() {
    let mut p = pattern("16:10", "16:40", vec![]);
    p.expected_start_time = at("2024-03-18T15:10:00Z");
    p.expected_end_time = at("2024-06-18T14:40:30Z");

    let summary = summarizer().summarize(&[p]).unwrap();
    assert!(summary.next_trip.starts_with("Latest departure: 16:10\n"));
    // Summer time, seconds dropped.
    assert_eq!(summary.sms, "Home around 16:40(alternatively )");
}

#[test]
fn serializes_with_field_names() {
    let summary = TravelSummary {
        sms: "a".into(),
        next_trip: "b".into(),
        all_trips: "c".into(),
    };
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"Sms": "a", "NextTrip": "b", "AllTrips": "c"})
    );
}
