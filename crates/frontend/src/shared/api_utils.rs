//! URL helpers for frontend-backend communication
//!
//! All API paths are relative (`/api/...`); the configured `api_base` is
//! prepended when the request is sent.

use crate::shared::config;

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/guests/12");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", config::get().api_base.trim_end_matches('/'), path)
}

/// Append query parameters to `path`, skipping empty values.
///
/// Values are percent-encoded; keys are assumed to be plain identifiers.
pub fn with_query(path: &str, params: &[(&str, &str)]) -> String {
    let query: Vec<String> = params
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value.trim())))
        .collect();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query.join("&"))
    }
}

/// `ENDPOINT/<id>` with the id percent-encoded.
pub fn item_path(endpoint: &str, id: &str) -> String {
    format!("{}/{}", endpoint, urlencoding::encode(id.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query_skips_empty() {
        assert_eq!(with_query("/api/guests", &[("search", "")]), "/api/guests");
        assert_eq!(
            with_query("/api/services", &[("search", " spa "), ("status", "active")]),
            "/api/services?search=spa&status=active"
        );
    }

    #[test]
    fn test_with_query_encodes() {
        assert_eq!(
            with_query("/api/guests", &[("search", "John & Jane")]),
            "/api/guests?search=John%20%26%20Jane"
        );
    }

    #[test]
    fn test_item_path() {
        assert_eq!(item_path("/api/rooms", "7"), "/api/rooms/7");
    }

    #[test]
    fn test_api_url_defaults_to_same_origin() {
        assert_eq!(api_url("/api/rooms"), "/api/rooms");
    }
}
