use api::{Field, FieldErrors, ForgotPasswordForm};
use dioxus::prelude::*;
use ui::components::{
    Button, ButtonVariant, Card, CardDescription, CardFooter, CardHeader, CardTitle, FieldError,
    Input, Label,
};
use ui::{notify, use_notifications, use_session, ToastKind};

use crate::Route;

#[component]
pub fn ForgotPassword() -> Element {
    let session = use_session();
    let mut notifications = use_notifications();
    let mut email = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::default);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let form = ForgotPasswordForm {
            email: email().trim().to_string(),
        };
        if let Err(invalid) = form.validate() {
            errors.set(invalid);
            return;
        }
        errors.set(FieldErrors::default());
        loading.set(true);

        spawn(async move {
            match session.forgot_password(form).await {
                Ok(()) => notify(
                    &mut notifications,
                    ToastKind::Success,
                    "Password reset email sent",
                    Some("Check your email for a link to reset your password."),
                ),
                Err(e) => {
                    tracing::warn!("Password reset failed: {}", e);
                    notify(
                        &mut notifications,
                        ToastKind::Destructive,
                        "Password reset failed",
                        Some("This feature is currently not available. Please contact support."),
                    );
                }
            }
            loading.set(false);
        });
    };

    let email_error = errors.read().get(Field::Email).map(str::to_string);

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Forgot password" }
                CardDescription {
                    "Enter your email address and we'll send you a link to reset your password"
                }
            }

            form {
                onsubmit: handle_submit,
                class: "auth-form",
                novalidate: true,

                div {
                    class: "form-field",
                    Label { html_for: "email", "Email" }
                    Input {
                        id: "email",
                        r#type: "email",
                        placeholder: "name@example.com",
                        autocomplete: "email",
                        value: email(),
                        invalid: email_error.is_some(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                    FieldError { message: email_error.clone() }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "auth-submit",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Sending reset link..." } else { "Send reset link" }
                }
            }

            CardFooter {
                "Remember your password? "
                Link { class: "auth-link", to: Route::Login {}, "Back to login" }
            }
        }
    }
}
