//! Great-circle distance estimation (fallback when road distances are
//! unavailable).
//!
//! Ignores roads entirely, but needs no I/O and never fails.

use rayon::prelude::*;

use crate::coordinate::Coordinate;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in kilometers.
#[must_use]
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1.0 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distances from `origin` to each destination, in destination order.
#[must_use]
pub fn distances_from(origin: Coordinate, destinations: &[Coordinate]) -> Vec<f64> {
    destinations
        .par_iter()
        .map(|destination| haversine_km(origin, *destination))
        .collect()
}

/// Great-circle length of the open path visiting `coordinates` in `order`.
///
/// Indices outside `coordinates` are skipped.
#[must_use]
pub fn tour_length_km(coordinates: &[Coordinate], order: &[usize]) -> f64 {
    let stops: Vec<Coordinate> = order
        .iter()
        .filter_map(|&index| coordinates.get(index).copied())
        .collect();

    stops
        .windows(2)
        .map(|pair| haversine_km(pair[0], pair[1]))
        .sum()
}
