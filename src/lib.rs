//! itinerary-router
//!
//! Visit-order optimization and turn-by-turn directions for itinerary stops.

pub mod config;
pub mod coordinate;
pub mod directions;
pub mod error;
pub mod google;
pub mod haversine;
pub mod itinerary;
pub mod polyline;
pub mod sequencer;
pub mod traits;
pub mod travel_mode;
pub mod wire;

pub use error::RouteError;
