//! Response types for the Distance Matrix and Directions services.
//!
//! Field names follow the Google Maps JSON format. Everything optional on
//! the wire defaults to empty so that partial error payloads still decode.
//!
//! See: <https://developers.google.com/maps/documentation/distance-matrix>
//! and <https://developers.google.com/maps/documentation/directions>

use serde::{Deserialize, Serialize};

/// Top-level and per-element status for success.
pub const STATUS_OK: &str = "OK";

/// Distance Matrix response for one origin row.
#[derive(Debug, Clone, Deserialize)]
pub struct DistanceMatrixResponse {
    /// Overall status, e.g. `"OK"`, `"INVALID_REQUEST"`,
    /// `"MAX_ELEMENTS_EXCEEDED"`, `"REQUEST_DENIED"`.
    pub status: String,

    #[serde(default)]
    pub error_message: Option<String>,

    #[serde(default)]
    pub origin_addresses: Vec<String>,

    #[serde(default)]
    pub destination_addresses: Vec<String>,

    /// One row per origin; this engine always sends exactly one.
    #[serde(default)]
    pub rows: Vec<MatrixRow>,
}

impl DistanceMatrixResponse {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatrixRow {
    #[serde(default)]
    pub elements: Vec<MatrixElement>,
}

/// One origin/destination pair.
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixElement {
    /// `"OK"`, `"NOT_FOUND"` or `"ZERO_RESULTS"`.
    pub status: String,

    /// Absent unless `status` is `"OK"`.
    #[serde(default)]
    pub distance: Option<TextValue>,

    #[serde(default)]
    pub duration: Option<TextValue>,
}

impl MatrixElement {
    /// Distance in kilometers, or `None` when the pair is unreachable.
    #[must_use]
    pub fn distance_km(&self) -> Option<f64> {
        if self.status != STATUS_OK {
            return None;
        }
        self.distance.as_ref().map(|distance| distance.value / 1000.0)
    }
}

/// Human-readable text paired with a value in meters or seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextValue {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub value: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LatLngBounds {
    pub northeast: LatLng,
    pub southwest: LatLng,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EncodedPolyline {
    #[serde(default)]
    pub points: String,
}

/// Directions response.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    /// `"OK"`, `"NOT_FOUND"`, `"ZERO_RESULTS"`, `"MAX_WAYPOINTS_EXCEEDED"`,
    /// `"INVALID_REQUEST"`, `"REQUEST_DENIED"`, ...
    pub status: String,

    #[serde(default)]
    pub error_message: Option<String>,

    #[serde(default)]
    pub routes: Vec<Route>,

    #[serde(default)]
    pub geocoded_waypoints: Vec<GeocodedWaypoint>,
}

impl DirectionsResponse {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodedWaypoint {
    #[serde(default)]
    pub geocoder_status: String,
    #[serde(default)]
    pub place_id: String,
    #[serde(default)]
    pub types: Vec<String>,
}

/// One candidate route, made of one leg per consecutive pair of stops.
#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub legs: Vec<Leg>,
    #[serde(default)]
    pub overview_polyline: EncodedPolyline,
    #[serde(default)]
    pub bounds: LatLngBounds,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub waypoint_order: Vec<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Leg {
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default)]
    pub distance: TextValue,
    #[serde(default)]
    pub duration: TextValue,
    #[serde(default)]
    pub duration_in_traffic: Option<TextValue>,
    #[serde(default)]
    pub start_location: LatLng,
    #[serde(default)]
    pub end_location: LatLng,
    #[serde(default)]
    pub start_address: String,
    #[serde(default)]
    pub end_address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    #[serde(default)]
    pub travel_mode: String,
    pub start_location: LatLng,
    pub end_location: LatLng,
    #[serde(default)]
    pub polyline: EncodedPolyline,
    #[serde(default)]
    pub duration: TextValue,
    #[serde(default)]
    pub distance: TextValue,
    #[serde(default)]
    pub html_instructions: String,
    #[serde(default)]
    pub maneuver: Option<String>,
    /// Transit and walking sub-steps.
    #[serde(default)]
    pub steps: Vec<Step>,
}
