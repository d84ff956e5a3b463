//! Test fixtures for itinerary-router.
//!
//! Provides:
//! - Real Las Vegas stops (from OpenStreetMap) as itinerary items
//! - Scripted road-distance and directions providers

pub mod las_vegas_stops;
pub mod providers;

pub use las_vegas_stops::*;
pub use providers::*;
