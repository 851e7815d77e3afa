//! Login page view with email/password form.

use api::{Field, FieldErrors, LoginForm};
use dioxus::prelude::*;
use ui::components::{
    Button, ButtonVariant, Card, CardDescription, CardFooter, CardHeader, CardTitle, FieldError,
    Input, Label,
};
use ui::icons::{FaEye, FaEyeSlash};
use ui::{notify, use_notifications, use_session, Icon, ToastKind};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let mut notifications = use_notifications();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut errors = use_signal(FieldErrors::default);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let form = LoginForm {
            email: email().trim().to_string(),
            password: password(),
        };
        if let Err(invalid) = form.validate() {
            errors.set(invalid);
            return;
        }
        errors.set(FieldErrors::default());
        loading.set(true);

        spawn(async move {
            match session.login(form).await {
                Ok(_) => {
                    nav.replace(Route::Dashboard {});
                }
                Err(e) => match e.field_errors() {
                    Some(invalid) => errors.set(invalid.clone()),
                    None => notify(
                        &mut notifications,
                        ToastKind::Destructive,
                        "Login failed",
                        Some(&e.to_string()),
                    ),
                },
            }
            loading.set(false);
        });
    };

    let password_type = if show_password() { "text" } else { "password" };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Login" }
                CardDescription { "Enter your email and password to login to your account" }
            }

            form {
                onsubmit: handle_login,
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
                        invalid: errors.read().get(Field::Email).is_some(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                    FieldError { message: errors.read().get(Field::Email).map(str::to_string) }
                }

                div {
                    class: "form-field",
                    div {
                        class: "form-field-row",
                        Label { html_for: "password", "Password" }
                        Link { class: "auth-link", to: Route::ForgotPassword {}, "Forgot password?" }
                    }
                    div {
                        class: "password-field",
                        Input {
                            id: "password",
                            r#type: password_type.to_string(),
                            placeholder: "••••••••",
                            autocomplete: "current-password",
                            value: password(),
                            invalid: errors.read().get(Field::Password).is_some(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                        button {
                            class: "password-toggle",
                            r#type: "button",
                            aria_label: if show_password() { "Hide password" } else { "Show password" },
                            onclick: move |_| show_password.toggle(),
                            if show_password() {
                                Icon { width: 18, height: 18, icon: FaEyeSlash }
                            } else {
                                Icon { width: 18, height: 18, icon: FaEye }
                            }
                        }
                    }
                    FieldError { message: errors.read().get(Field::Password).map(str::to_string) }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "auth-submit",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Logging in..." } else { "Login" }
                }
            }

            CardFooter {
                "Don't have an account? "
                Link { class: "auth-link", to: Route::Register {}, "Register" }
            }
        }
    }
}
