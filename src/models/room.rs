use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: u32,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub room_type: &'static str,
    /// Nightly price in whole dollars.
    pub price: i64,
    pub rating: f32,
    pub reviews: u32,
    pub location: &'static str,
    pub amenities: &'static [&'static str],
    pub max_guests: u32,
    pub property_owner_id: &'static str,
    pub description: &'static str,
}

impl Room {
    pub fn nightly_rate_cents(&self) -> i64 {
        self.price * 100
    }
}

pub static ROOMS: [Room; 3] = [
    Room {
        id: 1,
        name: "Luxury City Suite",
        room_type: "Apartment",
        price: 89,
        rating: 4.8,
        reviews: 124,
        location: "Downtown District",
        amenities: &["wifi", "parking", "kitchen", "gym"],
        max_guests: 4,
        property_owner_id: "acct_demo_owner1",
        description: "Modern apartment with city views, fully equipped kitchen, and premium amenities.",
    },
    Room {
        id: 2,
        name: "Cozy Beach House",
        room_type: "House",
        price: 129,
        rating: 4.9,
        reviews: 89,
        location: "Coastal Area",
        amenities: &["wifi", "parking", "beach_access", "bbq"],
        max_guests: 6,
        property_owner_id: "acct_demo_owner2",
        description: "Charming beach house steps from the ocean, perfect for family getaways.",
    },
    Room {
        id: 3,
        name: "Mountain Cabin Retreat",
        room_type: "Cabin",
        price: 75,
        rating: 4.7,
        reviews: 156,
        location: "Mountain View",
        amenities: &["wifi", "fireplace", "hiking", "hot_tub"],
        max_guests: 8,
        property_owner_id: "acct_demo_owner3",
        description: "Rustic cabin surrounded by nature, ideal for outdoor enthusiasts.",
    },
];

pub fn find_room(id: u32) -> Option<&'static Room> {
    ROOMS.iter().find(|room| room.id == id)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteInput {
    pub check_in: String,
    pub check_out: String,
    pub guests: Option<u32>,
    pub platform_fee_percent: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub success: bool,
    pub room_id: u32,
    pub nights: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub service_fee: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}
