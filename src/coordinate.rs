//! Parsing of free-form `"lat,lng"` location strings.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// A validated latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// Why a location string could not be turned into a [`Coordinate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocationError {
    #[error("expected \"lat,lng\", got {0:?}")]
    Shape(String),
    #[error("{part:?} is not a number")]
    NotANumber { part: String },
    #[error("coordinates out of range: {lat}, {lng}")]
    OutOfRange { lat: f64, lng: f64 },
}

impl Coordinate {
    /// The value returned by [`parse_location`] when nothing usable was
    /// found. Indistinguishable from a real location at (0, 0).
    pub const SENTINEL: Self = Self { lat: 0.0, lng: 0.0 };

    /// Builds a coordinate, rejecting values outside the valid ranges.
    pub fn new(lat: f64, lng: f64) -> Result<Self, LocationError> {
        let in_range = (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng);
        if !in_range {
            return Err(LocationError::OutOfRange { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    /// Parses `"lat,lng"`, trimming whitespace around the whole string and
    /// around each part.
    pub fn parse(location: &str) -> Result<Self, LocationError> {
        let location = location.trim();
        let mut parts = location.split(',');
        let (Some(lat), Some(lng), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(LocationError::Shape(location.to_string()));
        };

        Self::new(parse_part(lat)?, parse_part(lng)?)
    }

    /// True when this is the "no location" sentinel.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        *self == Self::SENTINEL
    }

    /// Formats as `"lat,lng"`, the form both Google endpoints accept.
    #[must_use]
    pub fn to_query(&self) -> String {
        format!("{:.6},{:.6}", self.lat, self.lng)
    }
}

fn parse_part(part: &str) -> Result<f64, LocationError> {
    let part = part.trim();
    part.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| LocationError::NotANumber {
            part: part.to_string(),
        })
}

/// Parses a location string, returning [`Coordinate::SENTINEL`] when it is
/// missing or malformed. Callers must check [`Coordinate::is_sentinel`].
#[must_use]
pub fn parse_location(location: &str) -> Coordinate {
    match Coordinate::parse(location) {
        Ok(coordinate) => coordinate,
        Err(err) => {
            warn!(location, %err, "unparseable location");
            Coordinate::SENTINEL
        }
    }
}
