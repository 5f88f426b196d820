use contracts::domain::billing::{GenerateBillRequest, PaymentRequest};

use crate::shared::crud::form::validate;
use crate::shared::crud::ops::reject_unsuccessful;
use crate::shared::crud::{FieldKind, FieldSpec, FormState, SelectSource};
use crate::shared::error::ApiError;
use crate::shared::http::{send_json, ApiClient, Method};

pub const PAYMENT_METHODS: &[(&str, &str)] = &[
    ("cash", "Cash"),
    ("credit_card", "Credit Card"),
    ("debit_card", "Debit Card"),
    ("bank_transfer", "Bank Transfer"),
];

pub fn payment_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("amount", "Amount", FieldKind::Price).required(),
        FieldSpec::new(
            "method",
            "Payment method",
            FieldKind::Select(SelectSource::Static(PAYMENT_METHODS)),
        )
        .required(),
        FieldSpec::new("reference", "Reference", FieldKind::Text),
    ]
}

/// Accepts `12`, `RES-0012` or `res-12`.
pub fn parse_reservation_number(text: &str) -> Result<i64, ApiError> {
    let text = text.trim();
    let digits = text
        .get(..4)
        .filter(|prefix| prefix.eq_ignore_ascii_case("res-"))
        .map(|_| &text[4..])
        .unwrap_or(text);
    digits
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::Validation("Please enter a valid reservation number".to_string()))
}

/// `POST /api/billing/generate`
pub async fn generate_bill<C>(client: &C, reservation: &str) -> Result<(), ApiError>
where
    C: ApiClient + ?Sized,
{
    let body = GenerateBillRequest {
        reservation_id: parse_reservation_number(reservation)?,
    };
    let response = send_json(client, Method::Post, "/api/billing/generate", &body).await?;
    reject_unsuccessful(response)
}

/// `POST /api/billing/:id/payments`; amount and method are checked first.
pub async fn record_payment<C>(client: &C, invoice_id: i64, form: &FormState) -> Result<(), ApiError>
where
    C: ApiClient + ?Sized,
{
    validate(&payment_fields(), form)?;
    let body = PaymentRequest {
        amount: form.amount("amount"),
        method: form.text("method"),
        reference: form.text("reference"),
    };
    let path = format!("/api/billing/{}/payments", invoice_id);
    let response = send_json(client, Method::Post, &path, &body).await?;
    reject_unsuccessful(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::mock::MockClient;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_reservation_number_forms() {
        assert_eq!(parse_reservation_number("12"), Ok(12));
        assert_eq!(parse_reservation_number(" RES-0012 "), Ok(12));
        assert_eq!(parse_reservation_number("res-7"), Ok(7));
        assert!(parse_reservation_number("0").is_err());
        assert!(parse_reservation_number("RES-").is_err());
        assert!(parse_reservation_number("abc").is_err());
    }

    #[test]
    fn test_generate_posts_reservation_id() {
        let client = MockClient::new().respond(Ok(json!({"success": true, "invoice_id": 5})));
        block_on(generate_bill(&client, "RES-0004")).unwrap();
        let sent = &client.requests()[0];
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.path, "/api/billing/generate");
        assert_eq!(sent.body, Some(json!({"reservation_id": 4})));
    }

    #[test]
    fn test_payment_requires_method() {
        let client = MockClient::new();
        let form = FormState::blank(&payment_fields()).with("amount", "50");
        let err = block_on(record_payment(&client, 3, &form)).unwrap_err();
        assert_eq!(err.user_message(""), "Please select a payment method");
        assert!(client.requests().is_empty());
    }

    #[test]
    fn test_payment_rejects_zero_amount() {
        let client = MockClient::new();
        let form = FormState::blank(&payment_fields())
            .with("amount", "0")
            .with("method", "cash");
        let err = block_on(record_payment(&client, 3, &form)).unwrap_err();
        assert_eq!(err.user_message(""), "Please enter a valid positive amount");
        assert!(client.requests().is_empty());
    }

    #[test]
    fn test_payment_body() {
        let client = MockClient::new().respond(Ok(json!({"success": true})));
        let form = FormState::blank(&payment_fields())
            .with("amount", "75.5")
            .with("method", "bank_transfer")
            .with("reference", "TRX-88");
        block_on(record_payment(&client, 3, &form)).unwrap();
        let sent = &client.requests()[0];
        assert_eq!(sent.path, "/api/billing/3/payments");
        assert_eq!(
            sent.body,
            Some(json!({"amount": 75.5, "method": "bank_transfer", "reference": "TRX-88"}))
        );
    }

    #[test]
    fn test_server_error_surfaces() {
        let client = MockClient::new().respond(Err(ApiError::from_error_body(
            404,
            r#"{"error":"Reservation not found"}"#,
        )));
        let err = block_on(generate_bill(&client, "99")).unwrap_err();
        assert_eq!(err.user_message("Failed to generate bill"), "Reservation not found");
    }

    #[test]
    fn test_unsuccessful_acknowledgement_is_an_error() {
        let client = MockClient::new()
            .respond(Ok(json!({"success": false, "error": "Bill already exists"})));
        let err = block_on(generate_bill(&client, "4")).unwrap_err();
        assert_eq!(err.user_message("Failed to generate bill"), "Bill already exists");

        let client = MockClient::new()
            .respond(Ok(json!({"success": false, "error": "Invoice already paid"})));
        let form = FormState::blank(&payment_fields())
            .with("amount", "20")
            .with("method", "cash");
        let err = block_on(record_payment(&client, 3, &form)).unwrap_err();
        assert_eq!(err.user_message("Failed to record payment"), "Invoice already paid");
    }
}
