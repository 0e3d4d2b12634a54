//! OSRM API response types for the Route service.
//!
//! Only the fields the engine consumes are decoded: each route's GeoJSON
//! geometry, its length and its travel time. Unknown fields are ignored.
//!
//! See: <http://project-osrm.org/docs/v5.24.0/api/#route-service>

use serde::Deserialize;

/// OSRM Route API response.
#[derive(Debug, Deserialize)]
pub struct RouteResponse {
    /// Status code from OSRM.
    ///
    /// Common values:
    /// - `"Ok"` - Request was successful
    /// - `"NoRoute"` - No route between the coordinates
    /// - `"InvalidQuery"` - Invalid query parameters
    pub code: String,

    /// Optional error message when `code` is not `"Ok"`.
    pub message: Option<String>,

    /// Primary route followed by any alternatives.
    pub routes: Option<Vec<OsrmRoute>>,
}

impl RouteResponse {
    /// Check if the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == "Ok"
    }

    /// Check if OSRM found no path between the coordinates.
    #[must_use]
    pub fn is_no_route(&self) -> bool {
        self.code == "NoRoute"
    }
}

/// One candidate route.
#[derive(Debug, Deserialize)]
pub struct OsrmRoute {
    /// Full-overview geometry.
    pub geometry: LineString,
    /// Length in metres.
    pub distance: f64,
    /// Travel time in seconds.
    pub duration: f64,
}

/// GeoJSON `LineString` with `[longitude, latitude]` positions.
#[derive(Debug, Deserialize)]
pub struct LineString {
    /// Vertices in travel order.
    pub coordinates: Vec<[f64; 2]>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialise_success_response() {
        let json = r#"{
            "code": "Ok",
            "waypoints": [],
            "routes": [{
                "geometry": {"type": "LineString", "coordinates": [[77.209, 28.6139], [77.23, 28.65]]},
                "legs": [],
                "distance": 5012.4,
                "duration": 611.0,
                "weight_name": "routability"
            }]
        }"#;

        let response: RouteResponse = serde_json::from_str(json).expect("should deserialise");

        assert!(response.is_ok());
        let routes = response.routes.expect("should have routes");
        let route = routes.first().expect("one route");
        assert_eq!(route.geometry.coordinates, [[77.209, 28.6139], [77.23, 28.65]]);
        assert_eq!(route.distance, 5012.4);
        assert_eq!(route.duration, 611.0);
    }

    #[test]
    fn deserialise_no_route_response() {
        let json = r#"{"code": "NoRoute", "message": "Impossible route between points"}"#;

        let response: RouteResponse = serde_json::from_str(json).expect("should deserialise");

        assert!(!response.is_ok());
        assert!(response.is_no_route());
        assert!(response.routes.is_none());
    }

    #[test]
    fn three_dimensional_positions_are_rejected() {
        let json = r#"{
            "code": "Ok",
            "routes": [{"geometry": {"coordinates": [[77.2, 28.6, 210.0]]}, "distance": 1.0, "duration": 1.0}]
        }"#;

        assert!(serde_json::from_str::<RouteResponse>(json).is_err());
    }
}
