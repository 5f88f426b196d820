use serde::{Deserialize, Serialize};

use super::common::de_amount;

/// Row of `GET /api/services`; also returned by `GET /api/services/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Service {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type", default)]
    pub service_type: String,
    #[serde(deserialize_with = "de_amount")]
    pub price: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of `POST /api/services` and `PUT /api/services/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServicePayload {
    pub name: String,
    #[serde(rename = "type")]
    pub service_type: String,
    pub price: f64,
    pub status: String,
    pub description: String,
}
