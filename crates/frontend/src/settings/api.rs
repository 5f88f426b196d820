//! `GET/POST /api/settings/{general,taxes,notifications}`.

use contracts::settings::{TaxRate, TaxSettings};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::crud::ops::reject_unsuccessful;
use crate::shared::error::ApiError;
use crate::shared::http::{get_json, send_json, ApiClient, Method};

pub const GENERAL_PATH: &str = "/api/settings/general";
pub const TAXES_PATH: &str = "/api/settings/taxes";
pub const NOTIFICATIONS_PATH: &str = "/api/settings/notifications";

pub async fn load_settings<T, C>(client: &C, path: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    C: ApiClient + ?Sized,
{
    get_json(client, path).await
}

pub async fn save_settings<T, C>(client: &C, path: &str, body: &T) -> Result<(), ApiError>
where
    T: Serialize,
    C: ApiClient + ?Sized,
{
    let response = send_json(client, Method::Post, path, body).await?;
    reject_unsuccessful(response)?;
    log::debug!("settings: saved {}", path);
    Ok(())
}

/// Finite percentage in `0..=100`.
pub fn parse_rate(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite() && (0.0..=100.0).contains(r))
}

/// One editable tax line; the rate stays text until saved.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxRow {
    pub id: Option<i64>,
    pub name: String,
    pub rate: String,
    pub applies_to: String,
    pub is_active: bool,
}

impl Default for TaxRow {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            rate: String::new(),
            applies_to: "all".to_string(),
            is_active: true,
        }
    }
}

impl From<&TaxRate> for TaxRow {
    fn from(tax: &TaxRate) -> Self {
        Self {
            id: tax.id,
            name: tax.name.clone(),
            rate: tax.rate.to_string(),
            applies_to: tax.applies_to.clone(),
            is_active: tax.is_active,
        }
    }
}

/// Check every row; the first invalid one wins.
pub fn taxes_from_rows(rows: &[TaxRow]) -> Result<TaxSettings, ApiError> {
    let taxes = rows
        .iter()
        .map(|row| {
            let name = row.name.trim();
            if name.is_empty() {
                return Err(ApiError::Validation("Please enter a tax name".to_string()));
            }
            let rate = parse_rate(&row.rate).ok_or_else(|| {
                ApiError::Validation(format!("Please enter a valid rate (0-100) for {}", name))
            })?;
            Ok(TaxRate {
                id: row.id,
                name: name.to_string(),
                rate,
                applies_to: row.applies_to.clone(),
                is_active: row.is_active,
            })
        })
        .collect::<Result<Vec<_>, ApiError>>()?;
    Ok(TaxSettings { taxes })
}

pub async fn save_taxes<C>(client: &C, rows: &[TaxRow]) -> Result<(), ApiError>
where
    C: ApiClient + ?Sized,
{
    let settings = taxes_from_rows(rows)?;
    save_settings(client, TAXES_PATH, &settings).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::mock::MockClient;
    use contracts::settings::GeneralSettings;
    use futures::executor::block_on;
    use serde_json::json;

    fn row(name: &str, rate: &str) -> TaxRow {
        TaxRow {
            name: name.to_string(),
            rate: rate.to_string(),
            ..TaxRow::default()
        }
    }

    #[test]
    fn test_parse_rate_bounds() {
        assert_eq!(parse_rate("0"), Some(0.0));
        assert_eq!(parse_rate(" 7.5 "), Some(7.5));
        assert_eq!(parse_rate("100"), Some(100.0));
        assert_eq!(parse_rate("100.01"), None);
        assert_eq!(parse_rate("-1"), None);
        assert_eq!(parse_rate("NaN"), None);
        assert_eq!(parse_rate(""), None);
    }

    #[test]
    fn test_invalid_rate_blocks_save() {
        let client = MockClient::new();
        let rows = vec![row("VAT", "7.5"), row("City tax", "150")];
        let err = block_on(save_taxes(&client, &rows)).unwrap_err();
        assert_eq!(err.user_message(""), "Please enter a valid rate (0-100) for City tax");
        assert!(client.requests().is_empty());
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let err = taxes_from_rows(&[row("  ", "5")]).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_save_taxes_posts_parsed_rates() {
        let client = MockClient::new().respond(Ok(json!({"success": true})));
        block_on(save_taxes(&client, &[row(" VAT ", "7.5")])).unwrap();
        let req = &client.requests()[0];
        assert_eq!(req.path, TAXES_PATH);
        let body = req.body.clone().unwrap();
        assert_eq!(body["taxes"][0]["name"], json!("VAT"));
        assert_eq!(body["taxes"][0]["rate"], json!(7.5));
        assert_eq!(body["taxes"][0]["applies_to"], json!("all"));
    }

    #[test]
    fn test_server_error_flag_fails_save() {
        let client = MockClient::new().respond(Ok(json!({"success": false, "error": "Invalid email"})));
        let err = block_on(save_settings(&client, GENERAL_PATH, &GeneralSettings::default())).unwrap_err();
        assert_eq!(err.user_message("Failed to save settings"), "Invalid email");
    }

    #[test]
    fn test_load_fills_defaults() {
        let client = MockClient::new().respond(Ok(json!({"hotel_name": "Seaside"})));
        let general: GeneralSettings = block_on(load_settings(&client, GENERAL_PATH)).unwrap();
        assert_eq!(general.hotel_name, "Seaside");
        assert_eq!(client.requests()[0].path, GENERAL_PATH);
    }
}
