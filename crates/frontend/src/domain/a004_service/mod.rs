use contracts::domain::service::{Service, ServicePayload};

use crate::shared::crud::{Cell, FieldKind, FieldSpec, FormState, Resource, SelectSource};
use crate::shared::error::ApiError;
use crate::shared::status::title_case;

pub const SERVICE_TYPES: &[(&str, &str)] = &[
    ("food", "Food & Beverage"),
    ("laundry", "Laundry"),
    ("spa", "Spa & Wellness"),
    ("transport", "Transport"),
    ("other", "Other"),
];

pub const SERVICE_STATUSES: &[(&str, &str)] = &[("active", "Active"), ("inactive", "Inactive")];

fn type_label(token: &str) -> String {
    SERVICE_TYPES
        .iter()
        .find(|(value, _)| *value == token)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| title_case(&token.replace('_', " ")))
}

pub struct Services;

impl Resource for Services {
    const KEY: &'static str = "services";
    const TITLE: &'static str = "Services";
    const SINGULAR: &'static str = "Service";
    const ENDPOINT: &'static str = "/api/services";
    const SEARCH_PARAM: Option<&'static str> = Some("search");
    const FILTER_PARAM: Option<&'static str> = Some("status");

    type Item = Service;
    type Detail = Service;
    type Payload = ServicePayload;

    fn columns() -> Vec<&'static str> {
        vec!["Name", "Type", "Price", "Status", "Description"]
    }

    fn cells(s: &Service) -> Vec<Cell> {
        vec![
            Cell::Strong(s.name.clone()),
            Cell::text(type_label(&s.service_type)),
            Cell::Amount(s.price),
            Cell::Status(s.status.clone()),
            Cell::text_or_dash(s.description.as_deref().unwrap_or_default()),
        ]
    }

    fn item_id(s: &Service) -> i64 {
        s.id
    }

    fn filter_options() -> Vec<(&'static str, &'static str)> {
        let mut options = vec![("all", "All Statuses")];
        options.extend_from_slice(SERVICE_STATUSES);
        options
    }

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("name", "Name", FieldKind::Text).required(),
            FieldSpec::new("type", "Type", FieldKind::Select(SelectSource::Static(SERVICE_TYPES)))
                .required(),
            FieldSpec::new("price", "Price", FieldKind::Price).required(),
            FieldSpec::new(
                "status",
                "Status",
                FieldKind::Select(SelectSource::Static(SERVICE_STATUSES)),
            )
            .required()
            .default_value("active"),
            FieldSpec::new("description", "Description", FieldKind::TextArea),
        ]
    }

    fn form_from_detail(s: &Service) -> FormState {
        FormState::for_id(s.id)
            .with("name", s.name.clone())
            .with("type", s.service_type.clone())
            .with("price", format!("{:.2}", s.price))
            .with("status", s.status.clone())
            .with_opt("description", s.description.clone())
    }

    fn payload(form: &FormState) -> Result<ServicePayload, ApiError> {
        Ok(ServicePayload {
            name: form.text("name"),
            service_type: form.text("type"),
            price: form.amount("price"),
            status: form.text("status"),
            description: form.text("description"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::ops::{list_path, submit};
    use crate::shared::http::mock::MockClient;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_negative_price_blocks_request() {
        let client = MockClient::new();
        let form = FormState::blank(&Services::fields())
            .with("name", "Airport pickup")
            .with("type", "transport")
            .with("price", "-5");
        let err = block_on(submit::<Services, _>(&client, &form)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.user_message(""), "Please enter a valid positive price");
        assert!(client.requests().is_empty());
    }

    #[test]
    fn test_payload_uses_type_key() {
        let client = MockClient::new().respond(Ok(json!({"success": true})));
        let mut form = FormState::blank(&Services::fields())
            .with("name", "Massage")
            .with("type", "spa")
            .with("price", "80");
        form.id = "12".to_string();
        block_on(submit::<Services, _>(&client, &form)).unwrap();
        let sent = &client.requests()[0];
        assert_eq!(sent.path, "/api/services/12");
        assert_eq!(
            sent.body,
            Some(json!({
                "name": "Massage", "type": "spa", "price": 80.0,
                "status": "active", "description": ""
            }))
        );
    }

    #[test]
    fn test_search_and_status() {
        assert_eq!(
            list_path::<Services>("room service", "inactive"),
            "/api/services?search=room%20service&status=inactive"
        );
    }

    #[test]
    fn test_type_labels() {
        assert_eq!(type_label("spa"), "Spa & Wellness");
        assert_eq!(type_label("mini_bar"), "Mini Bar");
    }
}
