//! Payloads of `GET /api/dashboard/stats` and `GET /api/dashboard/activity`.

use serde::{Deserialize, Serialize};

use crate::domain::common::de_amount;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RevenueSummary {
    #[serde(default, deserialize_with = "de_amount")]
    pub today: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub yesterday: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub month: f64,
}

/// One bar of the revenue-by-room-type breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomTypeRevenue {
    pub room_type: String,
    #[serde(default, deserialize_with = "de_amount")]
    pub revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentReservation {
    pub id: i64,
    #[serde(default)]
    pub guest_name: String,
    #[serde(default)]
    pub room_type_name: String,
    #[serde(default, alias = "check_in_date")]
    pub check_in: String,
    #[serde(default, alias = "check_out_date")]
    pub check_out: String,
    pub status: String,
}

/// Room counts and the revenue breakdown are always sent.
/// The remaining fields are extras that newer servers may add.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardStats {
    pub total_rooms: u32,
    pub occupied_rooms: u32,
    pub available_rooms: u32,
    pub maintenance_rooms: u32,
    pub revenue_breakdown: Vec<RoomTypeRevenue>,
    pub occupancy_rate: Option<f64>,
    pub todays_checkins: Option<u32>,
    pub todays_checkouts: Option<u32>,
    pub todays_reservations: Option<u32>,
    pub total_guests: Option<u32>,
    pub revenue: Option<RevenueSummary>,
    pub recent_reservations: Vec<RecentReservation>,
}

impl DashboardStats {
    /// Server rate when sent, otherwise occupied over total.
    pub fn occupancy(&self) -> f64 {
        match self.occupancy_rate {
            Some(rate) => rate,
            None if self.total_rooms > 0 => {
                self.occupied_rooms as f64 / self.total_rooms as f64 * 100.0
            }
            None => 0.0,
        }
    }
}

/// Entry of the last-24-hours feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityEntry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub icon: String,
    pub text: String,
    pub time: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stats_as_sent_by_server() {
        let stats: DashboardStats = serde_json::from_value(json!({
            "total_rooms": 20, "occupied_rooms": 5, "available_rooms": 14,
            "maintenance_rooms": 1,
            "revenue_breakdown": [
                {"room_type": "Standard", "revenue": 1200.0},
                {"room_type": "Suite", "revenue": "3400.50"}
            ]
        }))
        .unwrap();
        assert_eq!(stats.revenue_breakdown[1].revenue, 3400.5);
        assert_eq!(stats.occupancy(), 25.0);
        assert!(stats.revenue.is_none());
        assert!(stats.todays_checkins.is_none());
    }

    #[test]
    fn test_activity_type_key() {
        let entry: ActivityEntry = serde_json::from_value(json!({
            "type": "payment", "icon": "x", "text": "Payment received - $50.00",
            "time": "2024-03-15 14:02:00"
        }))
        .unwrap();
        assert_eq!(entry.kind, "payment");
    }
}
