//! Real Las Vegas locations for realistic itinerary fixtures.
//!
//! Coordinates sourced from OpenStreetMap via Overpass API.

use itinerary_router::itinerary::ItineraryItem;

/// A named, typed location with coordinates.
#[derive(Debug, Clone)]
pub struct Stop {
    pub name: &'static str,
    pub item_type: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Stop {
    pub const fn new(name: &'static str, item_type: &'static str, lat: f64, lng: f64) -> Self {
        Self {
            name,
            item_type,
            lat,
            lng,
        }
    }

    pub fn location(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }

    pub fn item(&self, id: u64) -> ItineraryItem {
        ItineraryItem::new(id, self.name, self.location())
            .with_type(self.item_type)
            .with_address(format!("{}, Las Vegas, NV", self.name))
            .with_order_index(u32::try_from(id).unwrap_or(u32::MAX))
    }
}

pub const STRIP_DAY: &[Stop] = &[
    Stop::new("Wynn Las Vegas", "accommodation", 36.1263781, -115.1658180),
    Stop::new("Bellagio", "attraction", 36.1126, -115.1767),
    Stop::new("Hash House A Go Go", "food", 36.1181377, -115.1710989),
    Stop::new("MGM Grand", "attraction", 36.1023654, -115.1688720),
    Stop::new("Caesars Palace", "attraction", 36.1162, -115.1745),
    Stop::new("Charlie Palmer Steak", "food", 36.0910624, -115.1743364),
    Stop::new("Brooklyn Bowl", "event", 36.1175388, -115.1695094),
    Stop::new("Sinatra", "food", 36.1300035, -115.1654850),
];

pub const OUTLYING: &[Stop] = &[
    Stop::new("I Love Sushi Henderson", "food", 35.9916660, -115.1028343),
    Stop::new("Rivas Mexican Grill North", "food", 36.1450055, -115.0482587),
    Stop::new("Green Valley Ranch Area", "attraction", 36.0308, -115.0825),
    Stop::new("Bootlegger Bistro", "food", 36.0492047, -115.1715744),
    Stop::new("Sunset Station Area", "event", 36.0614, -115.0631),
];

/// Items for `stops`, with ids and order indices starting at `first_id`.
pub fn items_for(stops: &[Stop], first_id: u64) -> Vec<ItineraryItem> {
    (first_id..).zip(stops).map(|(id, stop)| stop.item(id)).collect()
}
