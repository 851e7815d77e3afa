//! Registration page view.

use api::{Field, FieldErrors, RegisterForm};
use dioxus::prelude::*;
use ui::components::{
    Button, ButtonVariant, Card, CardDescription, CardFooter, CardHeader, CardTitle, FieldError,
    Input, Label,
};
use ui::{notify, use_notifications, use_session, ToastKind};

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let session = use_session();
    let mut notifications = use_notifications();
    let nav = use_navigator();
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::default);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let form = RegisterForm {
            first_name: first_name().trim().to_string(),
            last_name: last_name().trim().to_string(),
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
            match session.register(form).await {
                Ok(_) => {
                    notify(
                        &mut notifications,
                        ToastKind::Success,
                        "Account created",
                        Some("Your account has been created successfully."),
                    );
                    nav.replace(Route::Dashboard {});
                }
                Err(e) => match e.field_errors() {
                    Some(invalid) => errors.set(invalid.clone()),
                    None => notify(
                        &mut notifications,
                        ToastKind::Destructive,
                        "Registration failed",
                        Some(&e.to_string()),
                    ),
                },
            }
            loading.set(false);
        });
    };

    let error_for = move |field: Field| errors.read().get(field).map(str::to_string);

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Create an account" }
                CardDescription { "Enter your information to create an account" }
            }

            form {
                onsubmit: handle_register,
                class: "auth-form",
                novalidate: true,

                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        Label { html_for: "firstName", "First name" }
                        Input {
                            id: "firstName",
                            placeholder: "John",
                            autocomplete: "given-name",
                            value: first_name(),
                            invalid: error_for(Field::FirstName).is_some(),
                            oninput: move |evt: FormEvent| first_name.set(evt.value()),
                        }
                        FieldError { message: error_for(Field::FirstName) }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "lastName", "Last name" }
                        Input {
                            id: "lastName",
                            placeholder: "Doe",
                            autocomplete: "family-name",
                            value: last_name(),
                            invalid: error_for(Field::LastName).is_some(),
                            oninput: move |evt: FormEvent| last_name.set(evt.value()),
                        }
                        FieldError { message: error_for(Field::LastName) }
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "email", "Email" }
                    Input {
                        id: "email",
                        r#type: "email",
                        placeholder: "name@example.com",
                        autocomplete: "email",
                        value: email(),
                        invalid: error_for(Field::Email).is_some(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                    FieldError { message: error_for(Field::Email) }
                }

                div {
                    class: "form-field",
                    Label { html_for: "password", "Password" }
                    Input {
                        id: "password",
                        r#type: "password",
                        placeholder: "••••••••",
                        autocomplete: "new-password",
                        value: password(),
                        invalid: error_for(Field::Password).is_some(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                    FieldError { message: error_for(Field::Password) }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "auth-submit",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Create account" }
                }
            }

            CardFooter {
                "Already have an account? "
                Link { class: "auth-link", to: Route::Login {}, "Login" }
            }
        }
    }
}
