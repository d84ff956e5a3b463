//! Scripted provider doubles.

use std::cell::{Cell, RefCell};

use itinerary_router::coordinate::Coordinate;
use itinerary_router::directions::DirectionsQuery;
use itinerary_router::error::RouteError;
use itinerary_router::haversine;
use itinerary_router::traits::{DirectionsProvider, RoadDistanceProvider};
use itinerary_router::travel_mode::TravelMode;
use itinerary_router::wire::DirectionsResponse;

type DistanceScript = Box<dyn Fn(usize, Coordinate, &[Coordinate]) -> Result<Vec<f64>, RouteError>>;

/// Road-distance provider driven by a closure that receives the zero-based
/// call number, the origin, and the destinations.
pub struct ScriptedRoadDistances {
    script: DistanceScript,
    calls: Cell<usize>,
    modes: RefCell<Vec<TravelMode>>,
}

impl ScriptedRoadDistances {
    pub fn new(
        script: impl Fn(usize, Coordinate, &[Coordinate]) -> Result<Vec<f64>, RouteError> + 'static,
    ) -> Self {
        Self {
            script: Box::new(script),
            calls: Cell::new(0),
            modes: RefCell::new(Vec::new()),
        }
    }

    /// Every call fails as if the connection was refused.
    pub fn unreachable_service() -> Self {
        Self::new(|_, _, _| Err(network_error()))
    }

    /// Every call answers with straight-line distances.
    pub fn straight_line() -> Self {
        Self::new(|_, origin, destinations| Ok(haversine::distances_from(origin, destinations)))
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn modes(&self) -> Vec<TravelMode> {
        self.modes.borrow().clone()
    }
}

impl RoadDistanceProvider for ScriptedRoadDistances {
    fn road_distances_km(
        &self,
        origin: Coordinate,
        destinations: &[Coordinate],
        mode: TravelMode,
    ) -> Result<Vec<f64>, RouteError> {
        let call = self.calls.get();
        self.calls.set(call + 1);
        self.modes.borrow_mut().push(mode);
        (self.script)(call, origin, destinations)
    }
}

pub fn network_error() -> RouteError {
    RouteError::Network {
        url: "http://maps.example.com/distancematrix/json".to_string(),
        message: "connection refused".to_string(),
    }
}

/// Directions provider returning a canned JSON body and recording queries.
pub struct CannedDirections {
    /// `None` fails every request with a network error.
    body: Option<String>,
    queries: RefCell<Vec<DirectionsQuery>>,
}

impl CannedDirections {
    pub fn with_body(body: &str) -> Self {
        Self {
            body: Some(body.to_string()),
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            body: None,
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<DirectionsQuery> {
        self.queries.borrow().clone()
    }
}

impl DirectionsProvider for CannedDirections {
    fn fetch_directions(&self, query: &DirectionsQuery) -> Result<DirectionsResponse, RouteError> {
        self.queries.borrow_mut().push(query.clone());
        match &self.body {
            Some(body) => serde_json::from_str(body).map_err(|err| RouteError::Decode {
                message: err.to_string(),
            }),
            None => Err(network_error()),
        }
    }
}

/// A two-leg driving route through three stops.
pub const THREE_STOP_ROUTE: &str = r#"{
    "status": "OK",
    "geocoded_waypoints": [
        {"geocoder_status": "OK", "place_id": "a", "types": ["premise"]},
        {"geocoder_status": "OK", "place_id": "b", "types": ["premise"]},
        {"geocoder_status": "OK", "place_id": "c", "types": ["premise"]}
    ],
    "routes": [{
        "summary": "Las Vegas Blvd S",
        "overview_polyline": {"points": "_p~iF~ps|U"},
        "bounds": {"northeast": {"lat": 36.13, "lng": -115.16}, "southwest": {"lat": 36.10, "lng": -115.18}},
        "warnings": [],
        "waypoint_order": [0],
        "legs": [
            {
                "distance": {"text": "1.6 km", "value": 1600},
                "duration": {"text": "5 mins", "value": 300},
                "start_address": "3131 Las Vegas Blvd S, Las Vegas, NV",
                "end_address": "3600 Las Vegas Blvd S, Las Vegas, NV",
                "start_location": {"lat": 36.1263, "lng": -115.1658},
                "end_location": {"lat": 36.1126, "lng": -115.1767},
                "steps": [{
                    "travel_mode": "DRIVING",
                    "html_instructions": "Head <b>south</b> on <b>Las Vegas Blvd S</b>",
                    "distance": {"text": "1.6 km", "value": 1600},
                    "duration": {"text": "5 mins", "value": 300},
                    "start_location": {"lat": 36.1263, "lng": -115.1658},
                    "end_location": {"lat": 36.1126, "lng": -115.1767}
                }]
            },
            {
                "distance": {"text": "1.2 km", "value": 1200},
                "duration": {"text": "4 mins", "value": 240},
                "start_address": "3600 Las Vegas Blvd S, Las Vegas, NV",
                "end_address": "3799 Las Vegas Blvd S, Las Vegas, NV",
                "start_location": {"lat": 36.1126, "lng": -115.1767},
                "end_location": {"lat": 36.1023, "lng": -115.1688},
                "steps": [{
                    "travel_mode": "DRIVING",
                    "html_instructions": "Turn <b>left</b> onto <b>Tropicana Ave</b>",
                    "maneuver": "turn-left",
                    "distance": {"text": "1.2 km", "value": 1200},
                    "duration": {"text": "4 mins", "value": 240},
                    "start_location": {"lat": 36.1126, "lng": -115.1767},
                    "end_location": {"lat": 36.1023, "lng": -115.1688}
                }]
            }
        ]
    }]
}"#;
