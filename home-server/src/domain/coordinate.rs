//! Coordinate types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which half of a coordinate pair failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Longitude,
    Latitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Longitude => f.write_str("longitude"),
            Axis::Latitude => f.write_str("latitude"),
        }
    }
}

/// Error returned when a coordinate string is not a finite decimal number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {axis} for '{place}': {value:?}")]
pub struct InvalidCoordinate {
    pub place: &'static str,
    pub axis: Axis,
    pub value: String,
}

/// A longitude/latitude pair, kept as the decimal strings the caller sent.
///
/// The strings are embedded verbatim in the journey query, so no numeric
/// re-formatting happens. Use [`Coordinate::validate`] at the edge of the
/// system to reject values that do not parse as finite numbers.
///
/// # Examples
///
/// ```
/// use home_server::domain::Coordinate;
///
/// let oslo_s = Coordinate::new("10.7522", "59.9111");
/// assert!(oslo_s.validate("from").is_ok());
///
/// let broken = Coordinate::new("ten", "59.9111");
/// assert!(broken.validate("from").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    pub longitude: String,
    pub latitude: String,
}

impl Coordinate {
    /// Create a coordinate from longitude and latitude strings.
    pub fn new(longitude: impl Into<String>, latitude: impl Into<String>) -> Self {
        Self {
            longitude: longitude.into(),
            latitude: latitude.into(),
        }
    }

    /// Check that both halves are finite numbers written as GraphQL
    /// numeric literals.
    ///
    /// `place` names the coordinate in the error ("from" or "to").
    pub fn validate(&self, place: &'static str) -> Result<(), InvalidCoordinate> {
        check_number(&self.longitude, place, Axis::Longitude)?;
        check_number(&self.latitude, place, Axis::Latitude)
    }
}

fn check_number(value: &str, place: &'static str, axis: Axis) -> Result<(), InvalidCoordinate> {
    let finite = value.parse::<f64>().is_ok_and(f64::is_finite);
    if finite && is_graphql_number(value.as_bytes()) {
        Ok(())
    } else {
        Err(InvalidCoordinate {
            place,
            axis,
            value: value.to_string(),
        })
    }
}

/// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`
fn is_graphql_number(bytes: &[u8]) -> bool {
    let mut rest = bytes.strip_prefix(b"-").unwrap_or(bytes);

    // Integer part: a lone zero or no leading zeros.
    match rest {
        [b'0', tail @ ..] => rest = tail,
        [b'1'..=b'9', ..] => rest = skip_digits(rest),
        _ => return false,
    }

    if let Some(tail) = rest.strip_prefix(b".") {
        let after = skip_digits(tail);
        if after.len() == tail.len() {
            return false;
        }
        rest = after;
    }

    if let [b'e' | b'E', tail @ ..] = rest {
        let tail = tail
            .strip_prefix(b"+")
            .or_else(|| tail.strip_prefix(b"-"))
            .unwrap_or(tail);
        let after = skip_digits(tail);
        if after.len() == tail.len() {
            return false;
        }
        rest = after;
    }

    rest.is_empty()
}

fn skip_digits(bytes: &[u8]) -> &[u8] {
    let n = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    &bytes[n..]
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}
