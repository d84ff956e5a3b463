//! Nearest-neighbor sequencing of itinerary stops.
//!
//! Starting from the first point, the sequencer repeatedly moves to the
//! closest unvisited point. Distances come from a [`DistanceSource`]; when a
//! road-distance lookup fails, that single step is decided on great-circle
//! distances instead.

use std::fmt;

use tracing::{debug, info, warn};

use crate::coordinate::Coordinate;
use crate::error::RouteError;
use crate::haversine;
use crate::itinerary::ItemId;
use crate::traits::RoadDistanceProvider;
use crate::travel_mode::TravelMode;

/// A parsed stop: its coordinate plus enough of the originating item to
/// identify it in logs.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub coordinate: Coordinate,
    pub item_id: ItemId,
    pub title: String,
    pub address: String,
    pub item_type: String,
}

/// Where the sequencer gets its distances from.
#[derive(Clone, Copy)]
pub enum DistanceSource<'a> {
    /// Road distances from an external provider, per travel mode.
    Road {
        provider: &'a dyn RoadDistanceProvider,
        mode: TravelMode,
    },
    /// Straight-line distances only; no I/O.
    GreatCircle,
}

impl fmt::Debug for DistanceSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Road { mode, .. } => f.debug_struct("Road").field("mode", mode).finish(),
            Self::GreatCircle => f.write_str("GreatCircle"),
        }
    }
}

impl<'a> DistanceSource<'a> {
    pub fn road(provider: &'a dyn RoadDistanceProvider, mode: TravelMode) -> Self {
        Self::Road { provider, mode }
    }

    /// Distances in kilometers from `origin` to each destination.
    ///
    /// Only the road source can fail; a provider answer with the wrong
    /// number of distances counts as a failure.
    pub fn distances(
        &self,
        origin: Coordinate,
        destinations: &[Coordinate],
    ) -> Result<Vec<f64>, RouteError> {
        match self {
            Self::Road { provider, mode } => {
                let distances = provider.road_distances_km(origin, destinations, *mode)?;
                if distances.len() != destinations.len() {
                    return Err(RouteError::Decode {
                        message: format!(
                            "expected {} distances, provider returned {}",
                            destinations.len(),
                            distances.len()
                        ),
                    });
                }
                Ok(distances)
            }
            Self::GreatCircle => Ok(haversine::distances_from(origin, destinations)),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Road { .. } => "road",
            Self::GreatCircle => "great-circle",
        }
    }
}

/// Visit order over `points` as a permutation of their indices.
///
/// Always starts at index 0. Ties go to the earliest unvisited index; if
/// every remaining point is unreachable, the earliest one is taken.
pub fn nearest_neighbor(points: &[Point], source: &DistanceSource<'_>) -> Vec<usize> {
    let n = points.len();
    if n <= 1 {
        return (0..n).collect();
    }

    info!(points = n, source = source.label(), "sequencing stops");

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut current = 0;
    visited[current] = true;
    order.push(current);
    debug!(index = current, title = %points[current].title, "starting point");

    while order.len() < n {
        let unvisited: Vec<usize> = (0..n).filter(|&i| !visited[i]).collect();
        let destinations: Vec<Coordinate> = unvisited.iter().map(|&i| points[i].coordinate).collect();
        let origin = points[current].coordinate;

        let distances = source.distances(origin, &destinations).unwrap_or_else(|err| {
            warn!(
                %err,
                from = %points[current].title,
                "distance lookup failed, falling back to great-circle"
            );
            haversine::distances_from(origin, &destinations)
        });

        let (slot, distance) = closest(&distances);
        current = unvisited[slot];
        visited[current] = true;
        order.push(current);
        debug!(
            index = current,
            title = %points[current].title,
            distance_km = distance,
            "next nearest point"
        );
    }

    order
}

/// Position and value of the first strict minimum. NaN and infinite
/// entries never win; position 0 when no entry is finite.
fn closest(distances: &[f64]) -> (usize, f64) {
    let mut best = (0, f64::INFINITY);
    for (slot, &distance) in distances.iter().enumerate() {
        if distance < best.1 {
            best = (slot, distance);
        }
    }
    best
}
