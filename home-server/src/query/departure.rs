//! Departure time resolution.
//!
//! A journey query always carries a zone-qualified departure instant. In
//! live mode that is simply "now"; in debug mode it is pinned to 16:52 on
//! the next weekday so repeated runs hit comparable timetables.

use std::fmt;

use chrono::{DateTime, Datelike, Days, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;

use super::error::QueryError;

/// Local hour of debug departures.
pub const DEBUG_DEPARTURE_HOUR: u32 = 16;

/// Local minute of debug departures.
pub const DEBUG_DEPARTURE_MINUTE: u32 = 52;

/// Format of the `dateTime` query argument: millisecond precision with a
/// `+HH:MM` offset.
const QUERY_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Look up a zone in the compiled-in timezone database.
///
/// # Examples
///
/// ```
/// use home_server::query::resolve_zone;
///
/// assert!(resolve_zone("Europe/Oslo").is_ok());
/// assert!(resolve_zone("Europe/Atlantis").is_err());
/// ```
pub fn resolve_zone(name: &str) -> Result<Tz, QueryError> {
    name.parse::<Tz>()
        .map_err(|_| QueryError::TimezoneUnavailable {
            name: name.to_string(),
        })
}

/// A resolved departure instant in the query's zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepartureTime(DateTime<Tz>);

impl DepartureTime {
    /// Wrap an already zoned instant.
    pub fn new(instant: DateTime<Tz>) -> Self {
        Self(instant)
    }

    /// The current instant, expressed in `zone`.
    pub fn live(now: DateTime<Utc>, zone: Tz) -> Self {
        Self(now.with_timezone(&zone))
    }

    /// 16:52:00.000 local time on the first weekday after today.
    ///
    /// "Today" is the calendar day of `now` in `zone`.
    pub fn debug(now: DateTime<Utc>, zone: Tz) -> Result<Self, QueryError> {
        let today = now.with_timezone(&zone).date_naive();
        let mut day = next_day(today)?;
        while matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            day = next_day(day)?;
        }

        let time = NaiveTime::from_hms_milli_opt(DEBUG_DEPARTURE_HOUR, DEBUG_DEPARTURE_MINUTE, 0, 0)
            .ok_or_else(|| QueryError::RequestConstructionFailed("invalid debug time".into()))?;

        zone.from_local_datetime(&day.and_time(time))
            .single()
            .map(Self)
            .ok_or_else(|| {
                QueryError::RequestConstructionFailed(format!(
                    "{day} {time} does not exist exactly once in {zone}"
                ))
            })
    }

    /// The zoned instant.
    pub fn instant(&self) -> DateTime<Tz> {
        self.0
    }

    /// The timestamp as it appears in the query, e.g.
    /// `2024-03-18T16:52:00.000+01:00`.
    pub fn to_query_literal(&self) -> String {
        self.0.format(QUERY_TIMESTAMP_FORMAT).to_string()
    }
}

impl fmt::Display for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_literal())
    }
}

fn next_day(day: chrono::NaiveDate) -> Result<chrono::NaiveDate, QueryError> {
    day.checked_add_days(Days::new(1))
        .ok_or_else(|| QueryError::RequestConstructionFailed("date out of range".into()))
}
