//! # Session store
//!
//! [`SessionStore`] is the single owner of the signed-in user. It combines
//! three things that must stay in step:
//!
//! - the in-memory [`User`],
//! - its durable copy ([`UserRecord`]),
//! - the bearer token inside the [`AuthApi`] client.
//!
//! Every change goes through one path: validate the form, call the backend,
//! write the durable record, then update memory and the token. A failure at
//! any step before the durable write leaves all three untouched, so the
//! durable copy always equals the in-memory one.
//!
//! On startup [`SessionStore::restore`] rehydrates from storage. Corrupt
//! records are dropped by [`UserRecord::load`] and the session starts logged
//! out.

use store::{KeyValueStore, StoreError, User, UserRecord};
use thiserror::Error;

use super::validation::FieldErrors;
use super::AuthApi;
use crate::error::ApiError;
use crate::models::{ForgotPasswordForm, LoginForm, RegisterForm};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] FieldErrors),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Could not save your session: {0}")]
    Storage(#[from] StoreError),

    /// The session worker went away before answering.
    #[error("Session is no longer available")]
    Closed,
}

impl SessionError {
    /// Field errors, when this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            SessionError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

pub struct SessionStore<S, A> {
    record: UserRecord<S>,
    api: A,
    user: Option<User>,
}

impl<S: KeyValueStore, A: AuthApi> SessionStore<S, A> {
    /// Rehydrate from durable storage and hand the stored token to `api`.
    pub fn restore(record: UserRecord<S>, mut api: A) -> Self {
        let user = record.load();
        api.set_token(user.as_ref().map(|u| u.token.clone()));
        if let Some(ref u) = user {
            tracing::info!("Restored session for {}", u.email);
        }
        Self { record, api, user }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.as_ref().is_some_and(User::has_token)
    }

    pub async fn login(&mut self, form: &LoginForm) -> Result<User, SessionError> {
        form.validate()?;
        let user = self.api.login(form).await?;
        self.establish(user)
    }

    pub async fn register(&mut self, form: &RegisterForm) -> Result<User, SessionError> {
        form.validate()?;
        let user = self.api.register(form).await?;
        self.establish(user)
    }

    /// Ask the backend to send a reset link. Session state is not touched.
    pub async fn forgot_password(&self, form: &ForgotPasswordForm) -> Result<(), SessionError> {
        form.validate()?;
        self.api.forgot_password(form).await?;
        Ok(())
    }

    /// Forget the user locally. No network call is made.
    ///
    /// Memory and the token are always cleared; a failure to remove the
    /// durable copy is still reported.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.user = None;
        self.api.set_token(None);
        self.record.clear()?;
        tracing::info!("Logged out");
        Ok(())
    }

    fn establish(&mut self, user: User) -> Result<User, SessionError> {
        self.record.save(&user)?;
        self.api.set_token(Some(user.token.clone()));
        self.user = Some(user.clone());
        tracing::info!("Signed in as {}", user.email);
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use store::MemoryStore;

    use super::*;
    use crate::auth::validation::Field;

    #[derive(Default)]
    struct Calls {
        login: usize,
        register: usize,
        forgot: usize,
        tokens: Vec<Option<String>>,
    }

    /// Backend stand-in that records calls and answers from `reply`.
    #[derive(Clone)]
    struct FakeAuth {
        calls: Rc<RefCell<Calls>>,
        reply: Result<User, ApiError>,
    }

    impl FakeAuth {
        fn ok(user: User) -> Self {
            Self {
                calls: Rc::default(),
                reply: Ok(user),
            }
        }

        fn failing(err: ApiError) -> Self {
            Self {
                calls: Rc::default(),
                reply: Err(err),
            }
        }
    }

    impl AuthApi for FakeAuth {
        fn set_token(&mut self, token: Option<String>) {
            self.calls.borrow_mut().tokens.push(token);
        }

        async fn login(&self, _form: &LoginForm) -> Result<User, ApiError> {
            self.calls.borrow_mut().login += 1;
            self.reply.clone()
        }

        async fn register(&self, _form: &RegisterForm) -> Result<User, ApiError> {
            self.calls.borrow_mut().register += 1;
            self.reply.clone()
        }

        async fn forgot_password(&self, _form: &ForgotPasswordForm) -> Result<(), ApiError> {
            self.calls.borrow_mut().forgot += 1;
            self.reply.clone().map(|_| ())
        }
    }

    fn jane() -> User {
        User {
            id: Some("u-1".to_string()),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            token: "token-123".to_string(),
        }
    }

    fn login_form() -> LoginForm {
        LoginForm {
            email: "jane@example.com".to_string(),
            password: "password1".to_string(),
        }
    }

    fn record(storage: &MemoryStore) -> UserRecord<MemoryStore> {
        UserRecord::new(storage.clone(), "user")
    }

    #[tokio::test]
    async fn test_login_persists_matching_durable_copy() {
        let storage = MemoryStore::new();
        let api = FakeAuth::ok(jane());
        let calls = api.calls.clone();
        let mut session = SessionStore::restore(record(&storage), api);
        assert!(!session.is_authenticated());

        let user = session.login(&login_form()).await.unwrap();

        assert!(!user.token.is_empty());
        assert!(session.is_authenticated());
        assert_eq!(session.user(), Some(&jane()));
        assert_eq!(
            storage.get("user").unwrap(),
            Some(serde_json::to_string(session.user().unwrap()).unwrap())
        );
        assert_eq!(calls.borrow().login, 1);
        assert_eq!(
            calls.borrow().tokens.last().cloned().flatten().as_deref(),
            Some("token-123")
        );
    }

    #[tokio::test]
    async fn test_invalid_login_makes_no_call() {
        let storage = MemoryStore::new();
        let api = FakeAuth::ok(jane());
        let calls = api.calls.clone();
        let mut session = SessionStore::restore(record(&storage), api);

        let err = session
            .login(&LoginForm {
                email: "not-an-email".to_string(),
                password: "password1".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(
            err.field_errors().unwrap().get(Field::Email),
            Some("Invalid email address")
        );
        assert_eq!(calls.borrow().login, 0);
        assert_eq!(storage.get("user").unwrap(), None);
    }

    #[tokio::test]
    async fn test_rejected_login_leaves_prior_state() {
        let storage = MemoryStore::new();
        record(&storage).save(&jane()).unwrap();
        let before = storage.get("user").unwrap();

        let api = FakeAuth::failing(ApiError::Rejected {
            status: 401,
            message: "Invalid credentials".to_string(),
        });
        let mut session = SessionStore::restore(record(&storage), api);

        let err = session.login(&login_form()).await.unwrap_err();

        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(session.user(), Some(&jane()));
        assert_eq!(storage.get("user").unwrap(), before);
    }

    #[tokio::test]
    async fn test_register_weak_password_makes_no_call() {
        let storage = MemoryStore::new();
        let api = FakeAuth::ok(jane());
        let calls = api.calls.clone();
        let mut session = SessionStore::restore(record(&storage), api);

        let err = session
            .register(&RegisterForm {
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                email: "jane@example.com".to_string(),
                password: "lowercase1!".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), crate::PASSWORD_STRENGTH_MESSAGE);
        assert_eq!(calls.borrow().register, 0);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_register_signs_in() {
        let storage = MemoryStore::new();
        let mut session = SessionStore::restore(record(&storage), FakeAuth::ok(jane()));

        session
            .register(&RegisterForm {
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                email: "jane@example.com".to_string(),
                password: "Secret1!".to_string(),
            })
            .await
            .unwrap();

        assert!(session.is_authenticated());
        assert!(storage.get("user").unwrap().is_some());
    }

    #[tokio::test]
    async fn test_logout_clears_everything() {
        let storage = MemoryStore::new();
        let api = FakeAuth::ok(jane());
        let calls = api.calls.clone();
        let mut session = SessionStore::restore(record(&storage), api);
        session.login(&login_form()).await.unwrap();

        session.logout().unwrap();

        assert_eq!(session.user(), None);
        assert_eq!(storage.get("user").unwrap(), None);
        assert_eq!(calls.borrow().tokens.last().cloned(), Some(None));
        assert_eq!(calls.borrow().login, 1);
    }

    #[tokio::test]
    async fn test_restore_hands_token_to_client() {
        let storage = MemoryStore::new();
        record(&storage).save(&jane()).unwrap();
        let api = FakeAuth::ok(jane());
        let calls = api.calls.clone();

        let session = SessionStore::restore(record(&storage), api);

        assert!(session.is_authenticated());
        assert_eq!(
            calls.borrow().tokens,
            vec![Some("token-123".to_string())]
        );
    }

    #[tokio::test]
    async fn test_restore_discards_corrupt_record() {
        let storage = MemoryStore::new();
        storage.set("user", "{\"firstName\": 12").unwrap();

        let session = SessionStore::restore(record(&storage), FakeAuth::ok(jane()));

        assert!(!session.is_authenticated());
        assert_eq!(storage.get("user").unwrap(), None);
    }

    #[tokio::test]
    async fn test_restore_ignores_record_without_token() {
        let storage = MemoryStore::new();
        let mut stale = jane();
        stale.token = String::new();
        record(&storage).save(&stale).unwrap();
        let api = FakeAuth::ok(jane());
        let calls = api.calls.clone();

        let session = SessionStore::restore(record(&storage), api);

        assert_eq!(session.user(), None);
        assert!(!session.is_authenticated());
        assert_eq!(calls.borrow().tokens, vec![None]);
        assert_eq!(storage.get("user").unwrap(), None);
    }

    #[tokio::test]
    async fn test_forgot_password_validates_then_posts() {
        let storage = MemoryStore::new();
        let api = FakeAuth::ok(jane());
        let calls = api.calls.clone();
        let session = SessionStore::restore(record(&storage), api);

        assert!(session
            .forgot_password(&ForgotPasswordForm::default())
            .await
            .is_err());
        assert_eq!(calls.borrow().forgot, 0);

        session
            .forgot_password(&ForgotPasswordForm {
                email: "jane@example.com".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(calls.borrow().forgot, 1);
        assert!(!session.is_authenticated());
    }
}
