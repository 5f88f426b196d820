use serde::{Deserialize, Serialize};

use super::common::{de_amount, de_amount_opt};

/// Row of `GET /api/billing`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceListItem {
    pub id: i64,
    pub reservation_id: i64,
    #[serde(default)]
    pub guest_name: Option<String>,
    #[serde(default, deserialize_with = "de_amount")]
    pub total: f64,
    #[serde(default, deserialize_with = "de_amount_opt")]
    pub paid_amount: Option<f64>,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub id: i64,
    #[serde(deserialize_with = "de_amount")]
    pub amount: f64,
    pub method: String,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub paid_at: Option<String>,
}

/// `GET /api/billing/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceDetail {
    pub id: i64,
    pub reservation_id: i64,
    #[serde(default)]
    pub guest_name: Option<String>,
    #[serde(default, deserialize_with = "de_amount")]
    pub subtotal: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub tax: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub total: f64,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

impl InvoiceDetail {
    pub fn paid(&self) -> f64 {
        self.payments.iter().map(|p| p.amount).sum()
    }

    pub fn balance(&self) -> f64 {
        (self.total - self.paid()).max(0.0)
    }
}

/// Body of `POST /api/billing/generate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateBillRequest {
    pub reservation_id: i64,
}

/// Body of `POST /api/billing/:id/payments`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentRequest {
    pub amount: f64,
    pub method: String,
    pub reference: String,
}
