//! Provider seams for the route engine.
//!
//! The HTTP implementation lives in [`crate::google`]; tests and embedding
//! services can substitute their own.

use crate::coordinate::Coordinate;
use crate::directions::DirectionsQuery;
use crate::error::RouteError;
use crate::travel_mode::TravelMode;
use crate::wire::DirectionsResponse;

/// Real travel distances from one origin to a batch of destinations.
pub trait RoadDistanceProvider {
    /// Returns one distance in kilometers per destination, in the order
    /// supplied. Unreachable destinations are `f64::INFINITY`.
    ///
    /// Transport failures and a non-OK overall status fail the whole call.
    fn road_distances_km(
        &self,
        origin: Coordinate,
        destinations: &[Coordinate],
        mode: TravelMode,
    ) -> Result<Vec<f64>, RouteError>;
}

/// Turn-by-turn directions through an ordered list of stops.
pub trait DirectionsProvider {
    /// Issues one directions request. A decoded response with a non-OK
    /// status is `Ok`; only transport and decode failures are errors.
    fn fetch_directions(&self, query: &DirectionsQuery) -> Result<DirectionsResponse, RouteError>;
}
