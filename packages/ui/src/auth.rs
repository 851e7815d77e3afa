//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] owns one [`SessionStore`] inside a coroutine. Components
//! never touch it directly: they send [`SessionCommand`]s through the
//! [`Session`] handle and await the reply. The coroutine handles commands one
//! at a time and is the only writer of the [`AuthState`] signal.

use api::{
    ApiClient, AuthApi, ForgotPasswordForm, LoginForm, RegisterForm, SessionError, SessionStore,
};
use dioxus::prelude::*;
use futures::channel::oneshot;
use futures::StreamExt;
use store::{AppConfig, KeyValueStore, User, UserRecord};

use crate::notifications::{notify, use_notifications, ToastKind};
use crate::storage::make_storage;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True until the durable record has been read at startup.
    pub loading: bool,
    /// True while a command is being handled.
    pub pending: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            pending: false,
        }
    }
}

type Reply<T> = oneshot::Sender<Result<T, SessionError>>;

pub enum SessionCommand {
    Login(LoginForm, Reply<User>),
    Register(RegisterForm, Reply<User>),
    ForgotPassword(ForgotPasswordForm, Reply<()>),
    Logout(Reply<()>),
}

/// Handle to the session: read the state, send commands.
#[derive(Clone, Copy)]
pub struct Session {
    state: Signal<AuthState>,
    commands: Coroutine<SessionCommand>,
}

impl Session {
    pub fn state(&self) -> AuthState {
        self.state.read().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    pub async fn login(self, form: LoginForm) -> Result<User, SessionError> {
        self.request(|reply| SessionCommand::Login(form, reply)).await
    }

    pub async fn register(self, form: RegisterForm) -> Result<User, SessionError> {
        self.request(|reply| SessionCommand::Register(form, reply)).await
    }

    pub async fn forgot_password(self, form: ForgotPasswordForm) -> Result<(), SessionError> {
        self.request(|reply| SessionCommand::ForgotPassword(form, reply))
            .await
    }

    pub async fn logout(self) -> Result<(), SessionError> {
        self.request(SessionCommand::Logout).await
    }

    async fn request<T>(self, command: impl FnOnce(Reply<T>) -> SessionCommand) -> Result<T, SessionError> {
        let (tx, rx) = oneshot::channel();
        self.commands.send(command(tx));
        rx.await.unwrap_or(Err(SessionError::Closed))
    }
}

/// Get the session handle provided by [`SessionProvider`].
pub fn use_session() -> Session {
    use_context::<Session>()
}

/// Get the current authentication state.
/// Re-renders the caller when the user logs in or out.
pub fn use_auth() -> AuthState {
    use_session().state()
}

/// Apply one command to the store and answer on its reply channel.
///
/// A dropped receiver is not an error: the caller stopped waiting.
pub(crate) async fn apply<S: KeyValueStore, A: AuthApi>(
    session: &mut SessionStore<S, A>,
    command: SessionCommand,
) {
    match command {
        SessionCommand::Login(form, reply) => {
            let _ = reply.send(session.login(&form).await);
        }
        SessionCommand::Register(form, reply) => {
            let _ = reply.send(session.register(&form).await);
        }
        SessionCommand::ForgotPassword(form, reply) => {
            let _ = reply.send(session.forgot_password(&form).await);
        }
        SessionCommand::Logout(reply) => {
            let result = session.logout();
            if let Err(ref e) = result {
                tracing::warn!("Logout could not clear storage: {}", e);
            }
            let _ = reply.send(result);
        }
    }
}

/// Provider component that manages the session.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn SessionProvider(config: AppConfig, children: Element) -> Element {
    let mut state = use_signal(AuthState::default);
    let base_url = config.api.base_url.clone();
    let storage_key = config.session.storage_key.clone();

    let commands = use_coroutine(move |mut rx: UnboundedReceiver<SessionCommand>| {
        let base_url = base_url.clone();
        let storage_key = storage_key.clone();
        async move {
            let record = UserRecord::new(make_storage(), storage_key);
            let mut session = SessionStore::restore(record, ApiClient::new(base_url));
            state.set(AuthState {
                user: session.user().cloned(),
                loading: false,
                pending: false,
            });

            while let Some(command) = rx.next().await {
                state.write().pending = true;
                apply(&mut session, command).await;
                state.set(AuthState {
                    user: session.user().cloned(),
                    loading: false,
                    pending: false,
                });
            }
        }
    });

    use_context_provider(|| Session { state, commands });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    let session = use_session();
    let mut notifications = use_notifications();

    let onclick = move |_| async move {
        match session.logout().await {
            Ok(()) => notify(
                &mut notifications,
                ToastKind::Default,
                "Logged out",
                Some("You have been logged out successfully."),
            ),
            Err(e) => notify(&mut notifications, ToastKind::Destructive, "Logout failed", Some(&e.to_string())),
        }
    };

    rsx! {
        button {
            class: "{class}",
            disabled: session.state().pending,
            onclick: onclick,
            {children}
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use api::ApiError;
    use store::MemoryStore;

    use super::*;

    struct Backend;

    impl AuthApi for Backend {
        fn set_token(&mut self, _token: Option<String>) {}

        async fn login(&self, form: &LoginForm) -> Result<User, ApiError> {
            if form.password == "password1" {
                Ok(User {
                    id: None,
                    first_name: "Ada".to_string(),
                    last_name: "Lovelace".to_string(),
                    email: form.email.clone(),
                    token: "t-1".to_string(),
                })
            } else {
                Err(ApiError::Rejected {
                    status: 401,
                    message: "Invalid credentials".to_string(),
                })
            }
        }

        async fn register(&self, _form: &RegisterForm) -> Result<User, ApiError> {
            Err(ApiError::Network)
        }

        async fn forgot_password(&self, _form: &ForgotPasswordForm) -> Result<(), ApiError> {
            Ok(())
        }
    }

    fn session_over(storage: &MemoryStore) -> SessionStore<MemoryStore, Backend> {
        SessionStore::restore(UserRecord::new(storage.clone(), "user"), Backend)
    }

    fn login(password: &str) -> LoginForm {
        LoginForm {
            email: "ada@example.com".to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_commands_reply_in_order() {
        let storage = MemoryStore::new();
        let mut session = session_over(&storage);

        let (tx, rx) = oneshot::channel();
        apply(&mut session, SessionCommand::Login(login("wrong-password"), tx)).await;
        assert_eq!(
            rx.await.unwrap().unwrap_err().to_string(),
            "Invalid credentials"
        );
        assert!(!session.is_authenticated());

        let (tx, rx) = oneshot::channel();
        apply(&mut session, SessionCommand::Login(login("password1"), tx)).await;
        assert_eq!(rx.await.unwrap().unwrap().first_name, "Ada");
        assert!(storage.get("user").unwrap().is_some());

        let (tx, rx) = oneshot::channel();
        apply(&mut session, SessionCommand::Logout(tx)).await;
        assert!(rx.await.unwrap().is_ok());
        assert!(session.user().is_none());
        assert_eq!(storage.get("user").unwrap(), None);
    }

    #[tokio::test]
    async fn test_network_failure_message() {
        let storage = MemoryStore::new();
        let mut session = session_over(&storage);

        let (tx, rx) = oneshot::channel();
        let form = RegisterForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "Engine1!".to_string(),
        };
        apply(&mut session, SessionCommand::Register(form, tx)).await;
        assert_eq!(
            rx.await.unwrap().unwrap_err().to_string(),
            "Network error. Please try again."
        );
    }

    #[tokio::test]
    async fn test_dropped_receiver_is_ignored() {
        let storage = MemoryStore::new();
        let mut session = session_over(&storage);

        let (tx, rx) = oneshot::channel();
        drop(rx);
        apply(&mut session, SessionCommand::Login(login("password1"), tx)).await;
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_default_state_is_loading() {
        let state = AuthState::default();
        assert!(state.loading);
        assert!(state.user.is_none());
    }
}
