use serde::{Deserialize, Deserializer, Serialize};

use super::common::de_amount;

/// Row of `GET /api/room-types`; the detail endpoint returns the same shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomType {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de_amount")]
    pub base_price: f64,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default, deserialize_with = "de_amenities")]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub room_count: u32,
}

/// Body of `POST /api/room-types` and `PUT /api/room-types/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomTypePayload {
    pub name: String,
    pub description: String,
    pub base_price: f64,
    pub capacity: Option<u32>,
    pub amenities: Vec<String>,
}

/// The list endpoint stores amenities as a JSON-encoded string column, the detail
/// endpoint decodes it. Accept an array, an encoded array, a comma-joined string or null.
fn de_amenities<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<String>),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(Raw::List(items)) => items,
        Some(Raw::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.starts_with('[') {
                serde_json::from_str::<Vec<String>>(trimmed).unwrap_or_default()
            } else {
                split_amenities(trimmed)
            }
        }
    })
}

/// Splits a comma-separated amenity list typed by the user.
pub fn split_amenities(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amenities_shapes() {
        let a: RoomType =
            serde_json::from_str(r#"{"id":1,"name":"Suite","base_price":"200.00","amenities":"[\"WiFi\",\"TV\"]"}"#)
                .unwrap();
        assert_eq!(a.amenities, vec!["WiFi", "TV"]);
        assert_eq!(a.base_price, 200.0);

        let b: RoomType =
            serde_json::from_str(r#"{"id":2,"name":"Std","base_price":80,"amenities":["WiFi"]}"#).unwrap();
        assert_eq!(b.amenities, vec!["WiFi"]);

        let c: RoomType =
            serde_json::from_str(r#"{"id":3,"name":"Eco","base_price":50,"amenities":null}"#).unwrap();
        assert!(c.amenities.is_empty());
    }

    #[test]
    fn test_split_amenities() {
        assert_eq!(split_amenities(" WiFi, ,Mini bar ,TV"), vec!["WiFi", "Mini bar", "TV"]);
        assert!(split_amenities("").is_empty());
    }
}
