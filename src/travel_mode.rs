//! Travel modes understood by the distance and directions providers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RouteError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl TravelMode {
    pub const ALL: [Self; 4] = [Self::Driving, Self::Walking, Self::Bicycling, Self::Transit];

    /// Wire name, as sent in the `mode` query parameter.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Bicycling => "bicycling",
            Self::Transit => "transit",
        }
    }

    /// Parses an optional user-supplied mode; absent or blank means driving.
    pub fn parse_or_default(mode: Option<&str>) -> Result<Self, RouteError> {
        match mode.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(mode) => mode.parse(),
        }
    }
}

impl FromStr for TravelMode {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| RouteError::InvalidTravelMode(s.to_string()))
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
