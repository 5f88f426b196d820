use serde::{Deserialize, Serialize};

use super::common::de_amount;

/// Row of `GET /api/guests`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GuestListItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub reservation_count: u32,
    #[serde(default)]
    pub last_stay: Option<String>,
}

/// Reservation summary nested in a guest detail record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GuestReservation {
    pub id: i64,
    #[serde(default)]
    pub room_type_name: String,
    #[serde(alias = "check_in")]
    pub check_in_date: String,
    #[serde(alias = "check_out")]
    pub check_out_date: String,
    #[serde(default, deserialize_with = "de_amount")]
    pub total_price: f64,
    pub status: String,
}

/// `GET /api/guests/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GuestDetail {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub reservation_count: u32,
    #[serde(default)]
    pub reservations: Vec<GuestReservation>,
}

/// Body of `POST /api/guests` and `PUT /api/guests/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GuestPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub notes: String,
}
