//! Turn-by-turn directions through an already-ordered list of stops.
//!
//! One provider call per request: the first stop is the origin, the last is
//! the destination, and everything in between is passed as waypoints in the
//! given order. The nested route → leg → step response is flattened into
//! [`SimplifiedRoute`]s.

use serde::Serialize;
use tracing::{info, warn};

use crate::error::RouteError;
use crate::itinerary::ItineraryItem;
use crate::polyline::{Polyline, PolylineError};
use crate::traits::DirectionsProvider;
use crate::travel_mode::TravelMode;
use crate::wire::{DirectionsResponse, LatLng, Route, Step};

/// One directions request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionsQuery {
    pub origin: String,
    pub destination: String,
    pub waypoints: Vec<String>,
    pub mode: TravelMode,
}

impl DirectionsQuery {
    /// Builds a query from ordered location strings, dropping blank ones.
    ///
    /// # Errors
    ///
    /// [`RouteError::NotEnoughStops`] when fewer than two locations remain.
    pub fn from_locations<'a>(
        locations: impl IntoIterator<Item = &'a str>,
        mode: TravelMode,
    ) -> Result<Self, RouteError> {
        let mut stops: Vec<String> = locations
            .into_iter()
            .map(str::trim)
            .filter(|location| !location.is_empty())
            .map(str::to_string)
            .collect();

        if stops.len() < 2 {
            return Err(RouteError::NotEnoughStops);
        }

        let destination = stops.pop().unwrap_or_default();
        let origin = stops.remove(0);

        Ok(Self {
            origin,
            destination,
            waypoints: stops,
            mode,
        })
    }

    /// Builds a query through `items` in their given order, skipping items
    /// without a location.
    pub fn from_items(items: &[ItineraryItem], mode: TravelMode) -> Result<Self, RouteError> {
        Self::from_locations(items.iter().map(|item| item.location.as_str()), mode)
    }
}

/// One instruction along a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimplifiedStep {
    /// HTML-formatted instruction as returned by the provider.
    pub instruction: String,
    pub distance: String,
    pub duration: String,
    pub start_location: LatLng,
    pub end_location: LatLng,
    pub travel_mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maneuver: Option<String>,
}

impl From<&Step> for SimplifiedStep {
    fn from(step: &Step) -> Self {
        Self {
            instruction: step.html_instructions.clone(),
            distance: step.distance.text.clone(),
            duration: step.duration.text.clone(),
            start_location: step.start_location,
            end_location: step.end_location,
            travel_mode: step.travel_mode.clone(),
            maneuver: step.maneuver.clone(),
        }
    }
}

/// One candidate path with all legs merged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimplifiedRoute {
    pub summary: String,
    /// Distance text of the first leg. Undercounts multi-leg routes.
    pub distance: String,
    /// Duration text of the first leg. Undercounts multi-leg routes.
    pub duration: String,
    pub start_address: String,
    pub end_address: String,
    pub steps: Vec<SimplifiedStep>,
    pub encoded_polyline: String,
    pub warnings: Vec<String>,
}

impl SimplifiedRoute {
    /// Decodes the overview path.
    pub fn path(&self) -> Result<Polyline, PolylineError> {
        Polyline::decode(&self.encoded_polyline)
    }

    fn from_route(route: &Route) -> Self {
        let first = route.legs.first();
        let last = route.legs.last();

        Self {
            summary: route.summary.clone(),
            distance: first.map(|leg| leg.distance.text.clone()).unwrap_or_default(),
            duration: first.map(|leg| leg.duration.text.clone()).unwrap_or_default(),
            start_address: first.map(|leg| leg.start_address.clone()).unwrap_or_default(),
            end_address: last.map(|leg| leg.end_address.clone()).unwrap_or_default(),
            steps: route
                .legs
                .iter()
                .flat_map(|leg| leg.steps.iter())
                .map(SimplifiedStep::from)
                .collect(),
            encoded_polyline: route.overview_polyline.points.clone(),
            warnings: route.warnings.clone(),
        }
    }
}

/// Outcome of a directions request that reached the provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DirectionsResult {
    Ok { routes: Vec<SimplifiedRoute> },
    /// The provider answered with a non-OK status, e.g. `"ZERO_RESULTS"`.
    /// Callers should show the status and message as-is.
    NotOk {
        status: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        error_message: Option<String>,
    },
}

impl DirectionsResult {
    /// Flattens a decoded provider response.
    ///
    /// # Errors
    ///
    /// [`RouteError::Decode`] when an OK response has no routes or a route
    /// has no legs.
    pub fn from_response(response: DirectionsResponse) -> Result<Self, RouteError> {
        if !response.is_ok() {
            return Ok(Self::NotOk {
                status: response.status,
                error_message: response.error_message.filter(|message| !message.is_empty()),
            });
        }

        if response.routes.is_empty() {
            return Err(RouteError::Decode {
                message: "OK directions response carried no routes".to_string(),
            });
        }
        if response.routes.iter().any(|route| route.legs.is_empty()) {
            return Err(RouteError::Decode {
                message: "directions route without legs".to_string(),
            });
        }

        Ok(Self::Ok {
            routes: response.routes.iter().map(SimplifiedRoute::from_route).collect(),
        })
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    /// Candidate routes; empty for a non-OK result.
    pub fn routes(&self) -> &[SimplifiedRoute] {
        match self {
            Self::Ok { routes } => routes,
            Self::NotOk { .. } => &[],
        }
    }

    /// Distance and duration text of the first route, used as the plan
    /// total.
    pub fn totals(&self) -> Option<(&str, &str)> {
        self.routes()
            .first()
            .map(|route| (route.distance.as_str(), route.duration.as_str()))
    }

    /// Converts a non-OK outcome into [`RouteError::ProviderStatus`].
    pub fn into_routes(self) -> Result<Vec<SimplifiedRoute>, RouteError> {
        match self {
            Self::Ok { routes } => Ok(routes),
            Self::NotOk {
                status,
                error_message,
            } => Err(RouteError::ProviderStatus {
                status,
                message: error_message,
            }),
        }
    }
}

/// Issues `query` and flattens the answer.
///
/// # Errors
///
/// Transport and decode failures. A non-OK provider status is returned as
/// [`DirectionsResult::NotOk`], not as an error.
pub fn get_directions<P>(provider: &P, query: &DirectionsQuery) -> Result<DirectionsResult, RouteError>
where
    P: DirectionsProvider + ?Sized,
{
    info!(
        origin = %query.origin,
        destination = %query.destination,
        waypoints = query.waypoints.len(),
        mode = %query.mode,
        "fetching directions"
    );

    let result = DirectionsResult::from_response(provider.fetch_directions(query)?)?;
    if let DirectionsResult::NotOk {
        status,
        error_message,
    } = &result
    {
        warn!(%status, message = error_message.as_deref().unwrap_or(""), "directions provider returned non-OK status");
    }

    Ok(result)
}

/// Directions through `items` in their current order.
///
/// `mode` may be blank (driving) or one of the [`TravelMode`] names.
///
/// # Errors
///
/// [`RouteError::InvalidTravelMode`], [`RouteError::NotEnoughStops`] when
/// fewer than two items have a location, and provider failures.
pub fn directions_for_items<P>(
    provider: &P,
    items: &[ItineraryItem],
    mode: &str,
) -> Result<DirectionsResult, RouteError>
where
    P: DirectionsProvider + ?Sized,
{
    let mode = TravelMode::parse_or_default(Some(mode))?;
    let query = DirectionsQuery::from_items(items, mode)?;
    get_directions(provider, &query)
}

/// Point-to-point directions between two items.
///
/// # Errors
///
/// [`RouteError::MissingLocation`] when either item has no location, plus
/// everything [`directions_for_items`] can return.
pub fn directions_between<P>(
    provider: &P,
    from: &ItineraryItem,
    to: &ItineraryItem,
    mode: &str,
) -> Result<DirectionsResult, RouteError>
where
    P: DirectionsProvider + ?Sized,
{
    if let Some(missing) = [from, to].into_iter().find(|item| !item.has_location()) {
        return Err(RouteError::MissingLocation(missing.id));
    }

    let mode = TravelMode::parse_or_default(Some(mode))?;
    let query = DirectionsQuery::from_locations([from.location.as_str(), to.location.as_str()], mode)?;
    get_directions(provider, &query)
}
