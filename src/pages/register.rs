//! Registration page.

use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_meta::Title;
use leptos_router::{use_navigate, A};

use crate::components::use_toaster;
use crate::services::api;
use crate::types::RegisterRequest;

#[derive(Debug, Default, PartialEq)]
struct RegistrationErrors {
    username: Option<&'static str>,
    email: Option<&'static str>,
    password: Option<&'static str>,
    confirm: Option<&'static str>,
}

impl RegistrationErrors {
    fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm.is_none()
    }
}

fn looks_like_email(value: &str) -> bool {
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> RegistrationErrors {
    let email_error = if email.is_empty() {
        Some("Email is required")
    } else if !looks_like_email(email) {
        Some("Invalid email address")
    } else {
        None
    };

    let password_error = if password.is_empty() {
        Some("Password is required")
    } else if password.len() < 6 {
        Some("Password must be at least 6 characters")
    } else {
        None
    };

    let confirm_error = if confirm.is_empty() {
        Some("Please confirm your password")
    } else if confirm != password {
        Some("Passwords do not match")
    } else {
        None
    };

    RegistrationErrors {
        username: username.is_empty().then_some("Username is required"),
        email: email_error,
        password: password_error,
        confirm: confirm_error,
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toaster = use_toaster();
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());
    let (errors, set_errors) = create_signal(RegistrationErrors::default());
    let (is_loading, set_is_loading) = create_signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let name = username.get_untracked();
        let mail = email.get_untracked();
        let pass = password.get_untracked();
        let conf = confirm.get_untracked();

        let found = validate_registration(&name, &mail, &pass, &conf);
        let valid = found.is_empty();
        set_errors.set(found);
        if !valid || is_loading.get_untracked() {
            return;
        }

        let navigate = navigate.clone();
        spawn_local(async move {
            set_is_loading.set(true);
            let request = RegisterRequest {
                username: name,
                email: mail,
                password: pass,
            };
            match api::register(&request).await {
                Ok(()) => {
                    toaster.success(
                        "Registration successful",
                        "You can now sign in with your credentials",
                    );
                    navigate("/login", Default::default());
                }
                Err(err) => toaster.error("Registration failed", &err.user_message()),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <Title text="Register | WindSightAI"/>
        <div class="page auth-page">
            <div class="card auth-card">
                <h1 class="page-title">"Create Your Account"</h1>
                <p class="page-subtitle">"Start inspecting turbine blades in minutes"</p>

                <form on:submit=on_submit>
                    <div class="form-field">
                        <label for="register-username">"Username"</label>
                        <input
                            id="register-username"
                            type="text"
                            placeholder="Choose a username"
                            prop:value=username
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                        {move || {
                            errors
                                .with(|e| e.username)
                                .map(|msg| view! { <div class="field-error">{msg}</div> })
                        }}
                    </div>

                    <div class="form-field">
                        <label for="register-email">"Email"</label>
                        <input
                            id="register-email"
                            type="email"
                            placeholder="Enter your email"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                        {move || {
                            errors
                                .with(|e| e.email)
                                .map(|msg| view! { <div class="field-error">{msg}</div> })
                        }}
                    </div>

                    <div class="form-field">
                        <label for="register-password">"Password"</label>
                        <input
                            id="register-password"
                            type="password"
                            placeholder="Create a password"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        {move || {
                            errors
                                .with(|e| e.password)
                                .map(|msg| view! { <div class="field-error">{msg}</div> })
                        }}
                    </div>

                    <div class="form-field">
                        <label for="register-confirm">"Confirm Password"</label>
                        <input
                            id="register-confirm"
                            type="password"
                            placeholder="Repeat your password"
                            prop:value=confirm
                            on:input=move |ev| set_confirm.set(event_target_value(&ev))
                        />
                        {move || {
                            errors
                                .with(|e| e.confirm)
                                .map(|msg| view! { <div class="field-error">{msg}</div> })
                        }}
                    </div>

                    <button class="btn btn-primary" type="submit" disabled=is_loading>
                        {move || if is_loading.get() { "Creating account" } else { "Register" }}
                    </button>
                </form>

                <p class="auth-switch">
                    "Already have an account? "
                    <A href="/login">"Sign in here"</A>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_required() {
        let errors = validate_registration("", "", "", "");
        assert_eq!(errors.username, Some("Username is required"));
        assert_eq!(errors.email, Some("Email is required"));
        assert_eq!(errors.password, Some("Password is required"));
        assert_eq!(errors.confirm, Some("Please confirm your password"));
    }

    #[test]
    fn test_email_shape() {
        assert!(looks_like_email("ops@windsightai.com"));
        assert!(!looks_like_email("ops"));
        assert!(!looks_like_email("ops@"));
        assert!(!looks_like_email("ops@domain"));
        assert!(!looks_like_email("ops@.com"));
        assert!(!looks_like_email("a@b@c.com"));
    }

    #[test]
    fn test_password_rules() {
        let short = validate_registration("a", "a@b.co", "12345", "12345");
        assert_eq!(short.password, Some("Password must be at least 6 characters"));

        let mismatch = validate_registration("a", "a@b.co", "123456", "654321");
        assert_eq!(mismatch.confirm, Some("Passwords do not match"));

        assert!(validate_registration("a", "a@b.co", "123456", "123456").is_empty());
    }
}
