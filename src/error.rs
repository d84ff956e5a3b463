//! Error taxonomy for the route engine.

use thiserror::Error;

use crate::itinerary::ItemId;

/// Errors surfaced by the distance and directions providers and by the
/// directions aggregator.
///
/// The optimizer never returns these to its callers: provider failures are
/// absorbed by falling back to great-circle distances.
#[derive(Debug, Error)]
pub enum RouteError {
    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },

    /// The request failed before a response was received.
    #[error("network error calling {url}: {message}")]
    Network { url: String, message: String },

    /// The provider answered with a non-success HTTP status.
    #[error("HTTP {status} from {url}: {message}")]
    Http {
        url: String,
        status: u16,
        message: String,
    },

    /// The response body could not be decoded or failed validation.
    #[error("failed to decode provider response: {message}")]
    Decode { message: String },

    /// The provider answered, but with a non-OK top-level status.
    #[error("provider returned status {status}")]
    ProviderStatus {
        status: String,
        message: Option<String>,
    },

    /// A distance lookup was requested for zero destinations.
    #[error("no destinations supplied")]
    EmptyDestinations,

    /// More destinations than the provider accepts in one request.
    #[error("batch of {count} destinations exceeds the limit of {limit}")]
    BatchTooLarge { count: usize, limit: usize },

    /// Fewer than two stops with usable locations.
    #[error("at least two stops with valid locations are required")]
    NotEnoughStops,

    /// The requested travel mode is not one of the supported values.
    #[error("invalid travel mode {0:?}; use driving, walking, bicycling, or transit")]
    InvalidTravelMode(String),

    #[error("Google Maps API key is not configured")]
    MissingApiKey,

    /// A segment boundary names an item that is not in the plan.
    #[error("item {0} not found in plan")]
    UnknownItem(ItemId),

    /// A segment's start item comes after its end item.
    #[error("start item must come before end item in the plan order")]
    SegmentOrder,

    /// A point-to-point request names an item without a location.
    #[error("item {0} has no location")]
    MissingLocation(ItemId),

    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl RouteError {
    /// True for failures that happened before any provider answer arrived.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::Network { .. } | Self::Http { .. }
        )
    }
}
