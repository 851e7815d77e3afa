//! Authentication against the remote API.
//!
//! [`AuthApi`] is the seam the [`SessionStore`] talks through. [`ApiClient`]
//! implements it over HTTP; tests substitute an in-memory fake.

mod session;
mod validation;

use std::future::Future;

use store::User;

use crate::client::{decode, ApiClient};
use crate::error::ApiError;
use crate::models::{AuthResponse, ForgotPasswordForm, LoginForm, RegisterForm};

pub use session::{SessionError, SessionStore};
pub use validation::{Field, FieldErrors, PASSWORD_STRENGTH_MESSAGE};

/// Async interface to the authentication endpoints.
pub trait AuthApi {
    /// Replace the bearer token attached to subsequent calls.
    fn set_token(&mut self, token: Option<String>);

    fn login(&self, form: &LoginForm) -> impl Future<Output = Result<User, ApiError>>;

    fn register(&self, form: &RegisterForm) -> impl Future<Output = Result<User, ApiError>>;

    fn forgot_password(
        &self,
        form: &ForgotPasswordForm,
    ) -> impl Future<Output = Result<(), ApiError>>;
}

fn into_user(body: &str) -> Result<User, ApiError> {
    let response: AuthResponse = decode(body)?;
    if response.token.is_empty() {
        return Err(ApiError::Malformed("empty token".to_string()));
    }
    Ok(response.into())
}

impl AuthApi for ApiClient {
    fn set_token(&mut self, token: Option<String>) {
        self.replace_token(token);
    }

    async fn login(&self, form: &LoginForm) -> Result<User, ApiError> {
        tracing::debug!("Logging in {}", form.email);
        let body = self
            .send(self.post_json("auth/login", form), "Login failed")
            .await?;
        into_user(&body)
    }

    async fn register(&self, form: &RegisterForm) -> Result<User, ApiError> {
        tracing::debug!("Registering {}", form.email);
        let body = self
            .send(self.post_json("auth/register", form), "Registration failed")
            .await?;
        into_user(&body)
    }

    async fn forgot_password(&self, form: &ForgotPasswordForm) -> Result<(), ApiError> {
        self.send(
            self.post_json("auth/forgot-password", form),
            "Password reset failed",
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_user_strict_schema() {
        let user = into_user(
            r#"{"id":"7","firstName":"Jane","lastName":"Doe","email":"j@d.co","token":"abc"}"#,
        )
        .unwrap();
        assert_eq!(user.id.as_deref(), Some("7"));
        assert_eq!(user.token, "abc");

        assert!(matches!(
            into_user(r#"{"firstName":"Jane","lastName":"Doe","email":"j@d.co"}"#),
            Err(ApiError::Malformed(_))
        ));
        assert!(matches!(
            into_user(r#"{"firstName":"Jane","lastName":"Doe","email":"j@d.co","token":""}"#),
            Err(ApiError::Malformed(_))
        ));
    }
}
