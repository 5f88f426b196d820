use serde::{Deserialize, Serialize};

use super::common::de_amount;

/// Row of `GET /api/reservations`.
///
/// The list endpoint only sends names; the ids are filled when present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservationListItem {
    pub id: i64,
    #[serde(default)]
    pub guest_id: Option<i64>,
    #[serde(default)]
    pub guest_name: String,
    #[serde(default)]
    pub room_type_id: Option<i64>,
    #[serde(default)]
    pub room_type_name: String,
    #[serde(default)]
    pub room_number: Option<String>,
    #[serde(default)]
    pub check_in: String,
    #[serde(default)]
    pub check_out: String,
    #[serde(default, deserialize_with = "de_amount")]
    pub total_price: f64,
    pub status: String,
}

/// `GET /api/reservations/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservationDetail {
    pub id: i64,
    #[serde(default)]
    pub guest_id: Option<i64>,
    #[serde(default)]
    pub guest_name: String,
    #[serde(default)]
    pub room_type_id: Option<i64>,
    #[serde(default)]
    pub room_type_name: String,
    #[serde(default)]
    pub room_id: Option<i64>,
    #[serde(default)]
    pub room_number: Option<String>,
    #[serde(default)]
    pub check_in: String,
    #[serde(default)]
    pub check_out: String,
    #[serde(default)]
    pub num_guests: Option<u32>,
    #[serde(default, deserialize_with = "de_amount")]
    pub total_price: f64,
    pub status: String,
    #[serde(default)]
    pub special_requests: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST /api/reservations` and `PUT /api/reservations/:id`.
///
/// An update leaves out ids the detail did not carry; the server keeps the stored ones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservationPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_type_id: Option<i64>,
    pub check_in: String,
    pub check_out: String,
    pub num_guests: u32,
    pub status: String,
    pub special_requests: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_row_without_ids() {
        let rows: Vec<ReservationListItem> = serde_json::from_value(json!([{
            "id": 1, "guest_name": "John", "room_number": "101",
            "check_in": "2024-03-15", "check_out": "2024-03-18",
            "status": "confirmed", "total_price": 450.0
        }]))
        .unwrap();
        assert_eq!(rows[0].guest_id, None);
        assert_eq!(rows[0].room_number.as_deref(), Some("101"));
        assert_eq!(rows[0].check_in, "2024-03-15");
        assert_eq!(rows[0].total_price, 450.0);
    }

    #[test]
    fn test_payload_uses_check_in_keys() {
        let body = serde_json::to_value(ReservationPayload {
            guest_id: None,
            room_type_id: Some(2),
            check_in: "2024-03-15".into(),
            check_out: "2024-03-18".into(),
            num_guests: 2,
            status: "confirmed".into(),
            special_requests: String::new(),
        })
        .unwrap();
        assert_eq!(body["check_in"], json!("2024-03-15"));
        assert_eq!(body["check_out"], json!("2024-03-18"));
        assert!(body.get("check_in_date").is_none());
        assert!(body.get("guest_id").is_none());
    }
}
