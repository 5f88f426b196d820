use contracts::domain::common::ApiErrorBody;
use thiserror::Error;

/// Every way a request can fail, from the user's point of view.
///
/// All variants end up in the same error notification; only `Server` and
/// `Validation` carry text worth showing verbatim.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The request never completed.
    #[error("Failed to send request: {0}")]
    Transport(String),
    /// Non-2xx with an `{"error": "..."}` body.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// Non-2xx without a usable error body.
    #[error("Request failed with status {status}")]
    Status { status: u16 },
    /// 2xx whose body is not the expected JSON.
    #[error("Failed to parse response: {0}")]
    Decode(String),
    /// Rejected before any request was issued.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Classify a non-2xx response by its body.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) if !parsed.error.trim().is_empty() => ApiError::Server {
                status,
                message: parsed.error,
            },
            _ => ApiError::Status { status },
        }
    }

    /// Text for the error notification.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Validation(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_is_surfaced_verbatim() {
        let err = ApiError::from_error_body(409, r#"{"error":"Room has active reservation"}"#);
        assert_eq!(
            err,
            ApiError::Server {
                status: 409,
                message: "Room has active reservation".into()
            }
        );
        assert_eq!(err.user_message("Failed to delete room"), "Room has active reservation");
    }

    #[test]
    fn test_unparseable_body_uses_fallback() {
        let err = ApiError::from_error_body(502, "<html>Bad gateway</html>");
        assert_eq!(err, ApiError::Status { status: 502 });
        assert_eq!(err.user_message("Failed to load rooms"), "Failed to load rooms");

        let blank = ApiError::from_error_body(400, r#"{"error":"  "}"#);
        assert_eq!(blank, ApiError::Status { status: 400 });
    }

    #[test]
    fn test_transport_and_decode_use_fallback() {
        assert_eq!(ApiError::Transport("offline".into()).user_message("x"), "x");
        assert_eq!(ApiError::Decode("eof".into()).user_message("y"), "y");
        assert_eq!(
            ApiError::Validation("Please enter a valid positive price".into()).user_message("z"),
            "Please enter a valid positive price"
        );
    }
}
