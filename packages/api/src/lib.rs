//! # API crate: client side of the Second Brain backend
//!
//! Everything the frontends need to talk to the outside world, plus the
//! session logic that depends on it.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | The [`AuthApi`] seam, form validation, and the [`SessionStore`] that keeps the user, its durable record, and the bearer token in step |
//! | [`client`] | [`ApiClient`]: base URL, token injection, status and schema checks |
//! | [`feed`] | [`FeedClient`] for the third-party image feed |
//! | [`models`] | Request and response bodies |
//! | [`error`] | [`ApiError`], the one error type for remote calls |
//!
//! ## Endpoints
//!
//! - `POST /auth/login`, `POST /auth/register` → user with token
//! - `POST /auth/forgot-password` → 2xx

pub mod auth;
pub mod client;
pub mod error;
pub mod feed;
pub mod models;

pub use auth::{AuthApi, Field, FieldErrors, SessionError, SessionStore, PASSWORD_STRENGTH_MESSAGE};
pub use client::ApiClient;
pub use error::ApiError;
pub use feed::FeedClient;
pub use models::{ForgotPasswordForm, LoginForm, RegisterForm};

pub use store::User;
