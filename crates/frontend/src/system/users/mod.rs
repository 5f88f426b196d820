use contracts::system::users::{User, UserPayload};

use crate::shared::crud::{Cell, FieldKind, FieldSpec, FormState, Resource, SelectSource};
use crate::shared::date_utils::format_date_or;
use crate::shared::error::ApiError;

pub const USER_ROLES: &[(&str, &str)] = &[
    ("admin", "Administrator"),
    ("manager", "Manager"),
    ("staff", "Staff"),
];

fn role_label(token: &str) -> &str {
    USER_ROLES
        .iter()
        .find(|(value, _)| *value == token)
        .map(|(_, label)| *label)
        .unwrap_or(token)
}

pub struct Users;

impl Resource for Users {
    const KEY: &'static str = "users";
    const TITLE: &'static str = "Users";
    const SINGULAR: &'static str = "User";
    const ENDPOINT: &'static str = "/api/users";

    type Item = User;
    type Detail = User;
    type Payload = UserPayload;

    fn columns() -> Vec<&'static str> {
        vec!["Username", "Full Name", "Email", "Role", "Status", "Last Login"]
    }

    fn cells(u: &User) -> Vec<Cell> {
        vec![
            Cell::Strong(u.username.clone()),
            Cell::text_or_dash(u.full_name.as_deref().unwrap_or_default()),
            Cell::text_or_dash(u.email.as_deref().unwrap_or_default()),
            Cell::text(role_label(&u.role)),
            Cell::Status(if u.is_active { "active" } else { "inactive" }.to_string()),
            Cell::Muted(format_date_or(u.last_login_at.as_deref(), "Never")),
        ]
    }

    fn item_id(u: &User) -> i64 {
        u.id
    }

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("username", "Username", FieldKind::Text)
                .required()
                .locked_on_edit(),
            FieldSpec::new("full_name", "Full name", FieldKind::Text),
            FieldSpec::new("email", "Email", FieldKind::Email),
            FieldSpec::new("role", "Role", FieldKind::Select(SelectSource::Static(USER_ROLES)))
                .required()
                .default_value("staff"),
            FieldSpec::new("password", "Password", FieldKind::Password)
                .required()
                .create_only(),
            FieldSpec::new("is_active", "Active", FieldKind::Checkbox).default_value("true"),
        ]
    }

    fn form_from_detail(u: &User) -> FormState {
        FormState::for_id(u.id)
            .with("username", u.username.clone())
            .with_opt("full_name", u.full_name.clone())
            .with_opt("email", u.email.clone())
            .with("role", u.role.clone())
            .with_flag("is_active", u.is_active)
    }

    fn payload(form: &FormState) -> Result<UserPayload, ApiError> {
        let password = if form.is_new() {
            let password = form.get("password").to_string();
            if password.is_empty() {
                return Err(ApiError::Validation("Please enter a password".to_string()));
            }
            Some(password)
        } else {
            None
        };
        Ok(UserPayload {
            username: form.text("username"),
            email: form.opt_text("email"),
            full_name: form.opt_text("full_name"),
            role: form.text("role"),
            is_active: form.flag("is_active"),
            password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::ops::submit;
    use crate::shared::http::mock::MockClient;
    use crate::shared::http::Method;
    use futures::executor::block_on;
    use serde_json::json;

    fn user(last_login: Option<&str>) -> User {
        serde_json::from_value(json!({
            "id": 4, "username": "frontdesk", "role": "manager", "is_active": false,
            "last_login_at": last_login
        }))
        .unwrap()
    }

    #[test]
    fn test_cells_show_role_label_and_status() {
        let cells = Users::cells(&user(None));
        assert_eq!(cells[1].display(), "-");
        assert_eq!(cells[3].display(), "Manager");
        assert_eq!(cells[4], Cell::Status("inactive".to_string()));
        assert_eq!(cells[5].display(), "Never");
    }

    #[test]
    fn test_create_sends_password() {
        let client = MockClient::new().respond(Ok(json!({"success": true, "id": 9})));
        let form = FormState::blank(&Users::fields())
            .with("username", "night")
            .with("password", "s3cret");
        block_on(submit::<Users, _>(&client, &form)).unwrap();

        let req = &client.requests()[0];
        assert_eq!(req.method, Method::Post);
        let body = req.body.clone().unwrap();
        assert_eq!(body["password"], json!("s3cret"));
        assert_eq!(body["role"], json!("staff"));
        assert_eq!(body["is_active"], json!(true));
    }

    #[test]
    fn test_create_requires_password() {
        let client = MockClient::new();
        let form = FormState::blank(&Users::fields()).with("username", "night");
        let err = block_on(submit::<Users, _>(&client, &form)).unwrap_err();
        assert_eq!(err.user_message(""), "Please enter a password");
        assert!(client.requests().is_empty());
    }

    #[test]
    fn test_update_never_sends_password() {
        let client = MockClient::new().respond(Ok(json!({"success": true})));
        let form = Users::form_from_detail(&user(Some("2024-03-15T10:00:00"))).with("password", "ignored");
        block_on(submit::<Users, _>(&client, &form)).unwrap();

        let req = &client.requests()[0];
        assert_eq!(req.method, Method::Put);
        assert_eq!(req.path, "/api/users/4");
        assert!(req.body.clone().unwrap().get("password").is_none());
    }
}
