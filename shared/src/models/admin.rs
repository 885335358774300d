//! Staff (admin) account models

use serde::{Deserialize, Serialize};

/// A staff account allowed into the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminUser {
    pub id: String,
    pub email: String,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Login / registration result from the auth API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: AdminUser,
}
