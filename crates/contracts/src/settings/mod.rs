//! Bodies of `GET/POST /api/settings/{general,taxes,notifications}`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralSettings {
    pub hotel_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub currency: String,
    pub check_in_time: String,
    pub check_out_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaxRate {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub rate: f64,
    #[serde(default)]
    pub applies_to: String,
    #[serde(default = "enabled")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TaxSettings {
    pub taxes: Vec<TaxRate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NotificationSettings {
    pub sender_email: String,
    pub booking_confirmation: bool,
    pub payment_receipt: bool,
    pub check_in_reminder: bool,
    pub check_out_reminder: bool,
    pub maintenance_alerts: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            sender_email: String::new(),
            booking_confirmation: true,
            payment_receipt: true,
            check_in_reminder: false,
            check_out_reminder: false,
            maintenance_alerts: false,
        }
    }
}

fn enabled() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_bodies_fill_defaults() {
        let g: GeneralSettings = serde_json::from_str(r#"{"hotel_name":"Seaside"}"#).unwrap();
        assert_eq!(g.hotel_name, "Seaside");
        assert!(g.currency.is_empty());

        let n: NotificationSettings = serde_json::from_str("{}").unwrap();
        assert!(n.booking_confirmation);

        let t: TaxSettings = serde_json::from_str(r#"{"taxes":[{"name":"VAT","rate":7.5}]}"#).unwrap();
        assert!(t.taxes[0].is_active);
        assert_eq!(t.taxes[0].id, None);
    }
}
