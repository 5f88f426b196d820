use serde::{Deserialize, Serialize};

use super::common::de_amount;

/// Row of `GET /api/rooms`; also returned by `GET /api/rooms/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub id: i64,
    pub room_number: String,
    pub room_type_id: i64,
    #[serde(default)]
    pub room_type_name: Option<String>,
    #[serde(default)]
    pub floor: Option<i32>,
    pub status: String,
    #[serde(default, deserialize_with = "de_amount")]
    pub base_price: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Body of `POST /api/rooms` and `PUT /api/rooms/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomPayload {
    pub room_number: String,
    pub room_type_id: i64,
    pub floor: Option<i32>,
    pub status: String,
    pub notes: String,
}
