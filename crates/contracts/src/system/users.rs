use serde::{Deserialize, Serialize};

/// Back office account as returned by `GET /api/users` and `GET /api/users/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_login_at: Option<String>,
}

/// Body of `POST /api/users` and `PUT /api/users/:id`.
///
/// `password` is only sent on create; an update without it keeps the old one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserPayload {
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: String,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

fn default_role() -> String {
    "staff".to_string()
}

fn default_active() -> bool {
    true
}
