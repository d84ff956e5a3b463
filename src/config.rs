//! Provider configuration.

use std::env;

/// Environment variable read by [`GoogleMapsConfig::from_env`].
pub const API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

pub const DEFAULT_DISTANCE_MATRIX_URL: &str =
    "https://maps.googleapis.com/maps/api/distancematrix/json";
pub const DEFAULT_DIRECTIONS_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

#[derive(Debug, Clone)]
pub struct GoogleMapsConfig {
    pub api_key: String,
    pub distance_matrix_url: String,
    pub directions_url: String,
    pub timeout_secs: u64,
    /// Language for instructions and addresses in directions responses.
    pub language: String,
}

impl Default for GoogleMapsConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            distance_matrix_url: DEFAULT_DISTANCE_MATRIX_URL.to_string(),
            directions_url: DEFAULT_DIRECTIONS_URL.to_string(),
            timeout_secs: 5,
            language: "en".to_string(),
        }
    }
}

impl GoogleMapsConfig {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Defaults, with the API key taken from `GOOGLE_MAPS_API_KEY` (empty
    /// when unset).
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(env::var(API_KEY_ENV).unwrap_or_default())
    }

    #[must_use]
    pub fn with_distance_matrix_url(mut self, url: impl Into<String>) -> Self {
        self.distance_matrix_url = url.into();
        self
    }

    #[must_use]
    pub fn with_directions_url(mut self, url: impl Into<String>) -> Self {
        self.directions_url = url.into();
        self
    }

    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}
