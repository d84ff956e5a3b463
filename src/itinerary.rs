//! Itinerary items and visit-order optimization.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::coordinate::Coordinate;
use crate::error::RouteError;
use crate::haversine;
use crate::sequencer::{self, DistanceSource, Point};

/// Identifier of an item within one plan.
pub type ItemId = u64;

/// One stop in a plan, as stored by the hosting service.
///
/// The optimizer only reads `location` and rewrites `order_index`; the
/// remaining fields pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryItem {
    pub id: ItemId,
    #[serde(default)]
    pub plan_id: u64,
    /// Free-form category: "attraction", "event", "food", "accommodation".
    #[serde(default)]
    pub item_type: String,
    /// Id of the referenced content record.
    #[serde(default)]
    pub item_id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Empty, or `"lat,lng"`.
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub address: String,
    /// Estimated time spent at the stop, in minutes.
    #[serde(default)]
    pub duration: i32,
    /// 1-based position in the plan.
    #[serde(default)]
    pub order_index: u32,
    #[serde(default)]
    pub notes: String,
}

impl ItineraryItem {
    pub fn new(id: ItemId, title: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id,
            plan_id: 0,
            item_type: String::new(),
            item_id: 0,
            title: title.into(),
            description: String::new(),
            location: location.into(),
            address: String::new(),
            duration: 0,
            order_index: 0,
            notes: String::new(),
        }
    }

    #[must_use]
    pub fn with_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = item_type.into();
        self
    }

    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    #[must_use]
    pub fn with_order_index(mut self, order_index: u32) -> Self {
        self.order_index = order_index;
        self
    }

    /// True when the location string is non-blank.
    pub fn has_location(&self) -> bool {
        !self.location.trim().is_empty()
    }

    fn to_point(&self) -> Option<Point> {
        match Coordinate::parse(&self.location) {
            Ok(coordinate) => Some(Point {
                coordinate,
                item_id: self.id,
                title: self.title.clone(),
                address: self.address.clone(),
                item_type: self.item_type.clone(),
            }),
            Err(err) => {
                warn!(id = self.id, title = %self.title, location = %self.location, %err, "skipping item with invalid location");
                None
            }
        }
    }
}

/// Reorders a plan's items to shorten travel between them.
///
/// Items with a parseable location are sequenced nearest-neighbor style,
/// starting from the first of them; items without one follow in their
/// original relative order. `order_index` is rewritten to `1..=n`.
///
/// With fewer than two located items nothing is sequenced, but the input
/// order is still not preserved verbatim: a lone located item moves ahead
/// of the unlocated ones so that unlocated items always come last.
///
/// Never fails: distance lookup failures fall back to great-circle
/// distances inside the sequencer.
pub fn optimize_route(items: Vec<ItineraryItem>, source: &DistanceSource<'_>) -> Vec<ItineraryItem> {
    let total = items.len();
    let mut located: Vec<(ItineraryItem, Point)> = Vec::with_capacity(total);
    let mut unlocated: Vec<ItineraryItem> = Vec::new();

    for item in items {
        match item.to_point() {
            Some(point) => {
                debug!(id = item.id, title = %item.title, lat = point.coordinate.lat, lng = point.coordinate.lng, "valid point");
                located.push((item, point));
            }
            None => unlocated.push(item),
        }
    }

    let order: Vec<usize> = if located.len() <= 1 {
        info!(valid = located.len(), "not enough valid points to optimize");
        (0..located.len()).collect()
    } else {
        let points: Vec<Point> = located.iter().map(|(_, point)| point.clone()).collect();
        let order = sequencer::nearest_neighbor(&points, source);

        let coordinates: Vec<Coordinate> = points.iter().map(|point| point.coordinate).collect();
        info!(
            stops = points.len(),
            straight_line_km = haversine::tour_length_km(&coordinates, &order),
            "optimized visit order"
        );
        order
    };

    let mut slots: Vec<Option<ItineraryItem>> = located.into_iter().map(|(item, _)| Some(item)).collect();
    let sequenced = order.iter().filter_map(|&index| slots.get_mut(index).and_then(Option::take));

    let mut result: Vec<ItineraryItem> = sequenced.chain(unlocated).collect();
    for (position, item) in (1..).zip(result.iter_mut()) {
        item.order_index = position;
        debug!(id = item.id, title = %item.title, order_index = position, "assigned order");
    }

    result
}

/// The contiguous run of `items` from `start` to `end` inclusive.
///
/// Missing bounds default to the first and last item.
///
/// # Errors
///
/// [`RouteError::UnknownItem`] when a bound is not in `items`, and
/// [`RouteError::SegmentOrder`] when `start` comes after `end`.
pub fn plan_segment(
    items: &[ItineraryItem],
    start: Option<ItemId>,
    end: Option<ItemId>,
) -> Result<&[ItineraryItem], RouteError> {
    let position = |id: ItemId| {
        items
            .iter()
            .position(|item| item.id == id)
            .ok_or(RouteError::UnknownItem(id))
    };

    let first = start.map(position).transpose()?.unwrap_or(0);
    let last = match end {
        Some(id) => position(id)?,
        None => items.len().saturating_sub(1),
    };

    if first > last {
        return Err(RouteError::SegmentOrder);
    }

    Ok(items.get(first..=last).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[ItineraryItem]) -> Vec<ItemId> {
        items.iter().map(|item| item.id).collect()
    }

    fn plan() -> Vec<ItineraryItem> {
        (1..=5)
            .map(|id| ItineraryItem::new(id, format!("stop {id}"), format!("0,{id}")))
            .collect()
    }

    #[test]
    fn empty_plan_stays_empty() {
        assert!(optimize_route(Vec::new(), &DistanceSource::GreatCircle).is_empty());
    }

    #[test]
    fn single_valid_item_goes_before_invalid_ones() {
        let items = vec![
            ItineraryItem::new(1, "nowhere", "").with_order_index(1),
            ItineraryItem::new(2, "somewhere", "10,10").with_order_index(2),
        ];

        let result = optimize_route(items, &DistanceSource::GreatCircle);

        assert_eq!(ids(&result), vec![2, 1]);
        assert_eq!(result[0].order_index, 1);
        assert_eq!(result[1].order_index, 2);
    }

    #[test]
    fn origin_is_a_valid_location() {
        let items = vec![
            ItineraryItem::new(1, "far", "0,3"),
            ItineraryItem::new(2, "null island", "0,0"),
        ];

        let result = optimize_route(items, &DistanceSource::GreatCircle);

        assert_eq!(ids(&result), vec![1, 2]);
    }

    #[test]
    fn pass_through_fields_survive() {
        let items = vec![
            ItineraryItem::new(1, "A", "1,1").with_type("food").with_address("1 Main St"),
            ItineraryItem::new(2, "B", "1,2"),
        ];

        let result = optimize_route(items, &DistanceSource::GreatCircle);

        assert_eq!(result[0].item_type, "food");
        assert_eq!(result[0].address, "1 Main St");
    }

    #[test]
    fn segment_defaults_to_whole_plan() {
        let items = plan();
        let segment = plan_segment(&items, None, None).expect("whole plan");
        assert_eq!(ids(segment), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn segment_between_bounds() {
        let items = plan();
        let segment = plan_segment(&items, Some(2), Some(4)).expect("segment");
        assert_eq!(ids(segment), vec![2, 3, 4]);
    }

    #[test]
    fn segment_rejects_unknown_and_reversed_bounds() {
        let items = plan();
        assert!(matches!(
            plan_segment(&items, Some(9), None),
            Err(RouteError::UnknownItem(9))
        ));
        assert!(matches!(
            plan_segment(&items, Some(4), Some(2)),
            Err(RouteError::SegmentOrder)
        ));
    }

    #[test]
    fn segment_of_empty_plan_is_empty() {
        let segment = plan_segment(&[], None, None).expect("empty");
        assert!(segment.is_empty());
    }

    #[test]
    fn item_deserialises_with_defaults() {
        let item: ItineraryItem = serde_json::from_str(
            r#"{"id": 7, "item_type": "event", "title": "Concert", "location": "1.5,2.5"}"#,
        )
        .expect("should deserialise");

        assert_eq!(item.id, 7);
        assert_eq!(item.order_index, 0);
        assert!(item.has_location());
    }
}
