use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::distance::haversine_distance;

/// A geographic coordinate in decimal degrees.
///
/// Latitude is expected in [-90, 90] and longitude in [-180, 180] by
/// convention, but the ranges are not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GpsPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn distance_between(&self, point: &GpsPoint) -> f64 {
        haversine_distance(self.lat, self.lon, point.lat, point.lon)
    }
}

impl Display for GpsPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Point({}, {})", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_between_matches_haversine() {
        let riga = GpsPoint::new(56.9496, 24.1052);
        let tallinn = GpsPoint::new(59.437, 24.7536);

        assert_eq!(riga.distance_between(&riga), 0.0);
        assert_eq!(
            riga.distance_between(&tallinn),
            haversine_distance(riga.lat, riga.lon, tallinn.lat, tallinn.lon)
        );
        assert_eq!(
            riga.distance_between(&tallinn),
            tallinn.distance_between(&riga)
        );
    }

    #[test]
    fn serde_wire_names() {
        let point: GpsPoint = serde_json::from_str(r#"{"lat":57.153232,"lon":24.858824}"#)
            .expect("point json should parse");
        assert_eq!(point, GpsPoint::new(57.153232, 24.858824));

        let json = serde_json::to_string(&point).expect("point should serialize");
        assert_eq!(json, r#"{"lat":57.153232,"lon":24.858824}"#);
    }
}
