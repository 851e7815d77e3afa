//! # Authentication request and response bodies
//!
//! | Type | Endpoint | Direction |
//! |------|----------|-----------|
//! | [`LoginForm`] | `POST /auth/login` | request |
//! | [`RegisterForm`] | `POST /auth/register` | request |
//! | [`ForgotPasswordForm`] | `POST /auth/forgot-password` | request |
//! | [`AuthResponse`] | login + register | response |
//!
//! [`AuthResponse`] is the single canonical response shape: a flat object with
//! `firstName`, `lastName`, `email`, `token` (all required) and an optional
//! `id`. Nested or alternative layouts are rejected as malformed rather than
//! patched up with defaults.

use serde::{Deserialize, Serialize};
use store::User;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ForgotPasswordForm {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(default)]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub token: String,
}

impl From<AuthResponse> for User {
    fn from(r: AuthResponse) -> Self {
        User {
            id: r.id,
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            token: r.token,
        }
    }
}
