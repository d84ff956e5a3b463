//! Google Maps HTTP adapter for road distances and directions.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::GoogleMapsConfig;
use crate::coordinate::Coordinate;
use crate::directions::DirectionsQuery;
use crate::error::RouteError;
use crate::traits::{DirectionsProvider, RoadDistanceProvider};
use crate::travel_mode::TravelMode;
use crate::wire::{DirectionsResponse, DistanceMatrixResponse};

/// Most destinations the Distance Matrix service accepts per request.
///
/// Batches are not split; larger ones are rejected before any I/O.
pub const MAX_DESTINATIONS_PER_REQUEST: usize = 25;

#[derive(Debug, Clone)]
pub struct GoogleMapsClient {
    config: GoogleMapsConfig,
    client: Client,
}

impl GoogleMapsClient {
    /// Builds a client with the configured timeout.
    ///
    /// # Errors
    ///
    /// [`RouteError::MissingApiKey`] when the key is blank, or
    /// [`RouteError::Client`] when the HTTP client cannot be built.
    pub fn new(config: GoogleMapsConfig) -> Result<Self, RouteError> {
        if config.api_key.trim().is_empty() {
            return Err(RouteError::MissingApiKey);
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.timeout_secs))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(RouteError::Client)?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &GoogleMapsConfig {
        &self.config
    }

    fn distance_matrix_request(
        &self,
        origin: Coordinate,
        destinations: &[Coordinate],
        mode: TravelMode,
    ) -> RequestBuilder {
        let origin = origin.to_query();
        let destinations = destinations
            .iter()
            .map(Coordinate::to_query)
            .collect::<Vec<_>>()
            .join("|");

        self.client.get(&self.config.distance_matrix_url).query(&[
            ("origins", origin.as_str()),
            ("destinations", destinations.as_str()),
            ("mode", mode.as_str()),
            ("units", "metric"),
            ("key", self.config.api_key.as_str()),
        ])
    }

    fn directions_request(&self, query: &DirectionsQuery) -> RequestBuilder {
        let mut params = vec![
            ("origin", query.origin.clone()),
            ("destination", query.destination.clone()),
            ("mode", query.mode.as_str().to_string()),
        ];
        if !query.waypoints.is_empty() {
            params.push(("waypoints", query.waypoints.join("|")));
        }
        params.extend([
            ("alternatives", "false".to_string()),
            ("units", "metric".to_string()),
            ("language", self.config.language.clone()),
            ("key", self.config.api_key.clone()),
        ]);

        self.client.get(&self.config.directions_url).query(&params)
    }

    fn get_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, RouteError> {
        let request = request
            .build()
            .map_err(|err| self.convert_reqwest_error(err, ""))?;

        // Never log or report the API key.
        let mut endpoint = request.url().clone();
        endpoint.set_query(None);
        let url = endpoint.to_string();

        let response = self
            .client
            .execute(request)
            .and_then(|resp| resp.error_for_status())
            .map_err(|err| self.convert_reqwest_error(err, &url))?;

        response.json::<T>().map_err(|err| RouteError::Decode {
            message: err.without_url().to_string(),
        })
    }

    /// Classifies a reqwest error. The request URL is stripped from the
    /// message since its query carries the API key.
    fn convert_reqwest_error(&self, error: reqwest::Error, url: &str) -> RouteError {
        let error = error.without_url();
        if error.is_timeout() {
            return RouteError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout_secs,
            };
        }

        if let Some(status) = error.status() {
            return RouteError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        RouteError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}

/// Turns a one-row matrix into per-destination kilometers.
fn convert_matrix(response: DistanceMatrixResponse, expected: usize) -> Result<Vec<f64>, RouteError> {
    if !response.is_ok() {
        return Err(RouteError::ProviderStatus {
            status: response.status,
            message: response.error_message,
        });
    }

    let elements = response
        .rows
        .into_iter()
        .next()
        .map(|row| row.elements)
        .unwrap_or_default();

    if elements.len() != expected {
        return Err(RouteError::Decode {
            message: format!("expected {expected} matrix elements, got {}", elements.len()),
        });
    }

    let distances = elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            element.distance_km().unwrap_or_else(|| {
                warn!(destination = index, status = %element.status, "no route to destination");
                f64::INFINITY
            })
        })
        .collect();

    Ok(distances)
}

impl RoadDistanceProvider for GoogleMapsClient {
    fn road_distances_km(
        &self,
        origin: Coordinate,
        destinations: &[Coordinate],
        mode: TravelMode,
    ) -> Result<Vec<f64>, RouteError> {
        if destinations.is_empty() {
            return Err(RouteError::EmptyDestinations);
        }
        if destinations.len() > MAX_DESTINATIONS_PER_REQUEST {
            return Err(RouteError::BatchTooLarge {
                count: destinations.len(),
                limit: MAX_DESTINATIONS_PER_REQUEST,
            });
        }

        debug!(destinations = destinations.len(), %mode, "requesting road distances");
        let response: DistanceMatrixResponse =
            self.get_json(self.distance_matrix_request(origin, destinations, mode))?;

        convert_matrix(response, destinations.len())
    }
}

impl DirectionsProvider for GoogleMapsClient {
    fn fetch_directions(&self, query: &DirectionsQuery) -> Result<DirectionsResponse, RouteError> {
        debug!(
            waypoints = query.waypoints.len(),
            mode = %query.mode,
            "requesting directions"
        );
        self.get_json(self.directions_request(query))
    }
}
