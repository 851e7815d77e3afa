//! Wire types for the remote API.
//!
//! Forms double as request bodies: they serialise to the camelCase JSON the
//! backend expects. Responses are decoded into one strict schema.

mod auth;

pub use auth::{AuthResponse, ForgotPasswordForm, LoginForm, RegisterForm};
