use serde::{Deserialize, Deserializer, Serialize};

/// Error body returned by the API for every non-2xx response that has one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiErrorBody {
    pub error: String,
}

/// Acknowledgement returned by create/update/delete endpoints.
///
/// Only `success` is guaranteed; `id` is present on creates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MutationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `{id, name}` pair used to fill select boxes from list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamedRef {
    pub id: i64,
    #[serde(alias = "room_number")]
    pub name: String,
}

/// Decimal columns arrive either as JSON numbers or as strings (`"120.00"`).
pub fn de_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Null(()),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) if s.trim().is_empty() => Ok(0.0),
        Raw::Text(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
        Raw::Null(()) => Ok(0.0),
    }
}

/// Same as [`de_amount`] but keeps `null`/absent apart from zero.
pub fn de_amount_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Raw::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Priced {
        #[serde(deserialize_with = "de_amount")]
        total: f64,
        #[serde(default, deserialize_with = "de_amount_opt")]
        paid: Option<f64>,
    }

    #[test]
    fn test_amount_accepts_numbers_and_strings() {
        let a: Priced = serde_json::from_str(r#"{"total": 120.5}"#).unwrap();
        assert_eq!(a.total, 120.5);
        assert_eq!(a.paid, None);

        let b: Priced = serde_json::from_str(r#"{"total": "99.90", "paid": "10"}"#).unwrap();
        assert_eq!(b.total, 99.9);
        assert_eq!(b.paid, Some(10.0));
    }

    #[test]
    fn test_amount_rejects_garbage() {
        let r: Result<Priced, _> = serde_json::from_str(r#"{"total": "abc"}"#);
        assert!(r.is_err());
    }

    #[test]
    fn test_named_ref_accepts_room_number() {
        let r: NamedRef = serde_json::from_str(r#"{"id": 7, "room_number": "101"}"#).unwrap();
        assert_eq!(r.name, "101");
    }
}
