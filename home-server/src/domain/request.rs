//! The inbound trip request.

use serde::{Deserialize, Serialize};

use super::coordinate::{Coordinate, InvalidCoordinate};

/// A request for the way home: where from, where to, and whether to pin
/// the departure time for reproducible results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    pub from: Coordinate,
    pub to: Coordinate,
    #[serde(default)]
    pub debug: bool,
}

impl TripRequest {
    /// Create a new request.
    pub fn new(from: Coordinate, to: Coordinate, debug: bool) -> Self {
        Self { from, to, debug }
    }

    /// Validate both endpoints.
    pub fn validate(&self) -> Result<(), InvalidCoordinate> {
        self.from.validate("from")?;
        self.to.validate("to")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_inbound_body() {
        let json = r#"{
            "from": {"longitude": "10.7522", "latitude": "59.9111"},
            "to": {"longitude": "10.8001", "latitude": "59.9300"},
            "debug": true
        }"#;
        let req: TripRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.from.longitude, "10.7522");
        assert_eq!(req.to.latitude, "59.9300");
        assert!(req.debug);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn debug_defaults_to_false() {
        let json = r#"{
            "from": {"longitude": "10.7522", "latitude": "59.9111"},
            "to": {"longitude": "10.8001", "latitude": "59.9300"}
        }"#;
        let req: TripRequest = serde_json::from_str(json).unwrap();
        assert!(!req.debug);
    }

    #[test]
    fn validate_reports_destination() {
        let req = TripRequest::new(
            Coordinate::new("10.7", "59.9"),
            Coordinate::new("10.8", "north"),
            false,
        );
        let err = req.validate().unwrap_err();
        assert_eq!(err.place, "to");
    }
}
