use contracts::settings::GeneralSettings;

use super::api::GENERAL_PATH;
use super::form::SettingsDoc;
use crate::shared::crud::{FieldKind, FieldSpec, FormState};
use crate::shared::error::ApiError;

impl SettingsDoc for GeneralSettings {
    const PATH: &'static str = GENERAL_PATH;
    const TITLE: &'static str = "General Settings";

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("hotel_name", "Hotel name", FieldKind::Text).required(),
            FieldSpec::new("address", "Address", FieldKind::TextArea),
            FieldSpec::new("phone", "Phone", FieldKind::Tel),
            FieldSpec::new("email", "Email", FieldKind::Email),
            FieldSpec::new("currency", "Currency", FieldKind::Text).default_value("USD"),
            FieldSpec::new("check_in_time", "Check-in time", FieldKind::Time).default_value("14:00"),
            FieldSpec::new("check_out_time", "Check-out time", FieldKind::Time).default_value("11:00"),
        ]
    }

    fn to_form(&self) -> FormState {
        let blank = FormState::blank(&Self::fields());
        let or_default = |value: &str, name: &str| {
            if value.is_empty() {
                blank.get(name).to_string()
            } else {
                value.to_string()
            }
        };
        FormState::default()
            .with("hotel_name", self.hotel_name.clone())
            .with("address", self.address.clone())
            .with("phone", self.phone.clone())
            .with("email", self.email.clone())
            .with("currency", or_default(&self.currency, "currency"))
            .with("check_in_time", or_default(&self.check_in_time, "check_in_time"))
            .with("check_out_time", or_default(&self.check_out_time, "check_out_time"))
    }

    fn from_form(form: &FormState) -> Result<Self, ApiError> {
        let hotel_name = form.text("hotel_name");
        if hotel_name.is_empty() {
            return Err(ApiError::Validation("Please enter the hotel name".to_string()));
        }
        Ok(GeneralSettings {
            hotel_name,
            address: form.text("address"),
            phone: form.text("phone"),
            email: form.text("email"),
            currency: form.text("currency").to_uppercase(),
            check_in_time: form.text("check_in_time"),
            check_out_time: form.text("check_out_time"),
        })
    }
}
