//! Polyline representation for route geometries.
//!
//! Directions responses carry paths in the compact encoded polyline format
//! (precision 5). [`Polyline`] holds the decoded coordinates; encoding and
//! decoding happen at the boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const PRECISION: f64 = 1e5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolylineError {
    /// The input ended in the middle of a value.
    #[error("encoded polyline truncated at byte {0}")]
    Truncated(usize),
    /// A byte outside the encoding alphabet, or a value too long to fit.
    #[error("invalid encoded polyline byte at {0}")]
    InvalidByte(usize),
}

/// A route geometry as decoded (latitude, longitude) points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Decodes an encoded polyline string.
    pub fn decode(encoded: &str) -> Result<Self, PolylineError> {
        let bytes = encoded.as_bytes();
        let mut points = Vec::new();
        let mut position = 0;
        let (mut lat, mut lng) = (0_i64, 0_i64);

        while position < bytes.len() {
            lat += next_value(bytes, &mut position)?;
            lng += next_value(bytes, &mut position)?;
            points.push((lat as f64 / PRECISION, lng as f64 / PRECISION));
        }

        Ok(Self { points })
    }

    /// Encodes the points back into the compact string format.
    pub fn encode(&self) -> String {
        let mut encoded = String::new();
        let (mut prev_lat, mut prev_lng) = (0_i64, 0_i64);

        for &(lat, lng) in &self.points {
            let lat = (lat * PRECISION).round() as i64;
            let lng = (lng * PRECISION).round() as i64;
            push_value(&mut encoded, lat - prev_lat);
            push_value(&mut encoded, lng - prev_lng);
            prev_lat = lat;
            prev_lng = lng;
        }

        encoded
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }
}

fn next_value(bytes: &[u8], position: &mut usize) -> Result<i64, PolylineError> {
    let mut result = 0_i64;
    let mut shift = 0;

    loop {
        let Some(&byte) = bytes.get(*position) else {
            return Err(PolylineError::Truncated(*position));
        };
        if !(63..=126).contains(&byte) || shift > 30 {
            return Err(PolylineError::InvalidByte(*position));
        }
        *position += 1;

        let chunk = i64::from(byte - 63);
        result |= (chunk & 0x1f) << shift;
        shift += 5;
        if chunk < 0x20 {
            break;
        }
    }

    Ok(if result & 1 == 1 { !(result >> 1) } else { result >> 1 })
}

fn push_value(encoded: &mut String, value: i64) {
    let mut value = if value < 0 { !(value << 1) } else { value << 1 };
    while value >= 0x20 {
        encoded.push(char::from((((value & 0x1f) | 0x20) + 63) as u8));
        value >>= 5;
    }
    encoded.push(char::from((value + 63) as u8));
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference example from the polyline format documentation.
    const ENCODED: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

    #[test]
    fn test_decode_reference_example() {
        let polyline = Polyline::decode(ENCODED).expect("valid polyline");
        assert_eq!(
            polyline.points(),
            &[(38.5, -120.2), (40.7, -120.95), (43.252, -126.453)]
        );
    }

    #[test]
    fn test_encode_reference_example() {
        let polyline = Polyline::new(vec![(38.5, -120.2), (40.7, -120.95), (43.252, -126.453)]);
        assert_eq!(polyline.encode(), ENCODED);
    }

    #[test]
    fn test_decode_empty() {
        let polyline = Polyline::decode("").expect("empty is valid");
        assert!(polyline.points().is_empty());
    }

    #[test]
    fn test_decode_truncated() {
        // Latitude only, longitude missing.
        assert_eq!(Polyline::decode("_p~iF"), Err(PolylineError::Truncated(5)));
        // Continuation bit set on the last byte.
        assert_eq!(Polyline::decode("_"), Err(PolylineError::Truncated(1)));
    }

    #[test]
    fn test_decode_rejects_bytes_outside_alphabet() {
        assert_eq!(Polyline::decode("_p iF~ps|U"), Err(PolylineError::InvalidByte(2)));
    }

    #[test]
    fn test_into_points() {
        let points = vec![(38.5, -120.2), (40.7, -120.95)];
        let polyline = Polyline::new(points.clone());
        assert_eq!(polyline.into_points(), points);
    }
}
