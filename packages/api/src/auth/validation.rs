//! # Client-side form validation
//!
//! Each form checks its fields before anything is sent. Failures are
//! collected per [`Field`] in [`FieldErrors`] so the UI can show them inline
//! under the matching input; only the first failing rule of a field is kept.
//!
//! | Form | Rules |
//! |------|-------|
//! | [`LoginForm`] | email required + well-formed, password required + ≥ 8 chars |
//! | [`RegisterForm`] | names required + ≥ 2 chars, email as above, password ≥ 8 chars with lower, upper, digit and one of `@$!%*?&`, starting with a letter, digit or one of those symbols |
//! | [`ForgotPasswordForm`] | email as above |

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::{ForgotPasswordForm, LoginForm, RegisterForm};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

const SPECIAL_CHARS: &str = "@$!%*?&";

pub const PASSWORD_STRENGTH_MESSAGE: &str = "Password must contain at least one uppercase letter, one lowercase letter, one number, and one special character";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Password => "password",
        };
        f.write_str(name)
    }
}

/// Validation failures keyed by field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Error)]
#[error("{}", first_message(.0))]
pub struct FieldErrors(BTreeMap<Field, String>);

fn first_message(errors: &BTreeMap<Field, String>) -> &str {
    errors.values().next().map(String::as_str).unwrap_or("Invalid input")
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn check(&mut self, field: Field, result: Result<(), &str>) {
        if let Err(message) = result {
            self.0.entry(field).or_insert_with(|| message.to_string());
        }
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn email(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        Err("Email is required")
    } else if !EMAIL_RE.is_match(value) {
        Err("Invalid email address")
    } else {
        Ok(())
    }
}

fn password_length(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        Err("Password is required")
    } else if value.chars().count() < 8 {
        Err("Password must be at least 8 characters")
    } else {
        Ok(())
    }
}

fn password_strength(value: &str) -> Result<(), &'static str> {
    let lower = value.chars().any(|c| c.is_ascii_lowercase());
    let upper = value.chars().any(|c| c.is_ascii_uppercase());
    let digit = value.chars().any(|c| c.is_ascii_digit());
    let special = value.chars().any(|c| SPECIAL_CHARS.contains(c));
    let leading = value
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric() || SPECIAL_CHARS.contains(c));
    if lower && upper && digit && special && leading {
        Ok(())
    } else {
        Err(PASSWORD_STRENGTH_MESSAGE)
    }
}

fn name<'a>(value: &str, required: &'a str, too_short: &'a str) -> Result<(), &'a str> {
    if value.is_empty() {
        Err(required)
    } else if value.chars().count() < 2 {
        Err(too_short)
    } else {
        Ok(())
    }
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.check(Field::Email, email(&self.email));
        errors.check(Field::Password, password_length(&self.password));
        errors.into_result()
    }
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.check(
            Field::FirstName,
            name(
                &self.first_name,
                "First name is required",
                "First name must be at least 2 characters",
            ),
        );
        errors.check(
            Field::LastName,
            name(
                &self.last_name,
                "Last name is required",
                "Last name must be at least 2 characters",
            ),
        );
        errors.check(Field::Email, email(&self.email));
        errors.check(Field::Password, password_length(&self.password));
        errors.check(Field::Password, password_strength(&self.password));
        errors.into_result()
    }
}

impl ForgotPasswordForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.check(Field::Email, email(&self.email));
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(password: &str) -> RegisterForm {
        RegisterForm {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@example.com".into(),
            password: password.into(),
        }
    }

    #[test]
    fn test_login_form() {
        let ok = LoginForm {
            email: "jane@example.com".into(),
            password: "whatever1".into(),
        };
        assert!(ok.validate().is_ok());

        let errors = LoginForm::default().validate().unwrap_err();
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Password), Some("Password is required"));

        let errors = LoginForm {
            email: "jane@example".into(),
            password: "short".into(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors.get(Field::Email), Some("Invalid email address"));
        assert_eq!(
            errors.get(Field::Password),
            Some("Password must be at least 8 characters")
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(email("a@b.co").is_ok());
        assert!(email("first.last+tag@sub.example.org").is_ok());
        assert!(email("no-at-sign.com").is_err());
        assert!(email("two words@example.com").is_err());
        assert!(email("a@@b.co").is_err());
    }

    #[test]
    fn test_register_password_missing_uppercase() {
        let errors = register("secret1!x").validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Password), Some(PASSWORD_STRENGTH_MESSAGE));
    }

    #[test]
    fn test_register_password_rules() {
        assert!(register("Secret1!").validate().is_ok());
        assert!(register("SECRET1!").validate().is_err());
        assert!(register("Secretss!").validate().is_err());
        assert!(register("Secret12").validate().is_err());
        assert!(register("@Secret1").validate().is_ok());
        assert!(register("Secret1!_tail").validate().is_ok());
        for leading in ["_Secret1!", "#Secret1!", " Secret1!"] {
            assert_eq!(
                register(leading).validate().unwrap_err().get(Field::Password),
                Some(PASSWORD_STRENGTH_MESSAGE),
                "{leading:?}"
            );
        }
        // length is reported before strength
        assert_eq!(
            register("Se1!").validate().unwrap_err().get(Field::Password),
            Some("Password must be at least 8 characters")
        );
    }

    #[test]
    fn test_register_names() {
        let mut form = register("Secret1!");
        form.first_name = "J".into();
        form.last_name = String::new();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get(Field::FirstName),
            Some("First name must be at least 2 characters")
        );
        assert_eq!(errors.get(Field::LastName), Some("Last name is required"));
        assert_eq!(errors.to_string(), "First name must be at least 2 characters");
    }

    #[test]
    fn test_forgot_password_form() {
        assert!(ForgotPasswordForm { email: "a@b.co".into() }.validate().is_ok());
        let errors = ForgotPasswordForm::default().validate().unwrap_err();
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
    }
}
