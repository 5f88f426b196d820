//! Payloads of `GET /api/reports/{occupancy,revenue,guest}`.

use serde::{Deserialize, Serialize};

use crate::domain::common::de_amount;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OccupancyDay {
    pub date: String,
    pub occupied: u32,
    pub available: i64,
    #[serde(deserialize_with = "de_amount")]
    pub rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OccupancyReport {
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub total_rooms: u32,
    #[serde(alias = "occupancy_data", default)]
    pub daily: Vec<OccupancyDay>,
}

impl OccupancyReport {
    pub fn average_rate(&self) -> f64 {
        if self.daily.is_empty() {
            return 0.0;
        }
        self.daily.iter().map(|d| d.rate).sum::<f64>() / self.daily.len() as f64
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenueDay {
    pub date: String,
    #[serde(deserialize_with = "de_amount")]
    pub revenue: f64,
    #[serde(default)]
    pub reservation_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomTypeRevenue {
    pub room_type_id: i64,
    pub room_type_name: String,
    #[serde(deserialize_with = "de_amount")]
    pub revenue: f64,
    #[serde(default)]
    pub reservation_count: u32,
    #[serde(default)]
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenueReport {
    pub start_date: String,
    pub end_date: String,
    #[serde(deserialize_with = "de_amount")]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_reservations: u32,
    #[serde(alias = "daily", default)]
    pub daily_revenue: Vec<RevenueDay>,
    #[serde(default)]
    pub room_type_revenue: Vec<RoomTypeRevenue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopGuest {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub reservation_count: u32,
    #[serde(default, deserialize_with = "de_amount")]
    pub total_spent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GuestReport {
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub total_guests: u32,
    #[serde(default)]
    pub new_guests: u32,
    #[serde(default)]
    pub returning_guests: u32,
    #[serde(default)]
    pub top_guests: Vec<TopGuest>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupancy_average() {
        let r: OccupancyReport = serde_json::from_str(
            r#"{"start_date":"2025-03-01","end_date":"2025-03-02","total_rooms":10,
                "daily":[{"date":"2025-03-01","occupied":5,"available":5,"rate":50.0},
                         {"date":"2025-03-02","occupied":8,"available":2,"rate":80.0}]}"#,
        )
        .unwrap();
        assert_eq!(r.average_rate(), 65.0);
    }

    #[test]
    fn test_revenue_accepts_short_daily_key() {
        let r: RevenueReport = serde_json::from_str(
            r#"{"start_date":"a","end_date":"b","total_revenue":10,"daily":[{"date":"a","revenue":10}]}"#,
        )
        .unwrap();
        assert_eq!(r.daily_revenue.len(), 1);
        assert!(r.room_type_revenue.is_empty());
    }
}
