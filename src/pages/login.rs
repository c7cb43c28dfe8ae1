//! Login page.
//!
//! Credentials go to the backend as-is; hashing and verification are the
//! server's job.

use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_meta::Title;
use leptos_router::{use_navigate, A};

use crate::components::use_toaster;
use crate::services::api;
use crate::session::use_session;
use crate::types::{LoginRequest, SessionUser};

#[derive(Debug, Default, PartialEq)]
struct CredentialErrors {
    username: Option<&'static str>,
    password: Option<&'static str>,
}

impl CredentialErrors {
    fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

fn validate_credentials(username: &str, password: &str) -> CredentialErrors {
    CredentialErrors {
        username: username.is_empty().then_some("Username is required"),
        password: password.is_empty().then_some("Password is required"),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let toaster = use_toaster();
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (username_error, set_username_error) = create_signal(None::<&'static str>);
    let (password_error, set_password_error) = create_signal(None::<&'static str>);
    let (is_loading, set_is_loading) = create_signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let name = username.get_untracked();
        let pass = password.get_untracked();

        let errors = validate_credentials(&name, &pass);
        set_username_error.set(errors.username);
        set_password_error.set(errors.password);
        if !errors.is_empty() || is_loading.get_untracked() {
            return;
        }

        let navigate = navigate.clone();
        spawn_local(async move {
            set_is_loading.set(true);
            let request = LoginRequest {
                username: name.clone(),
                password: pass,
            };
            match api::login(&request).await {
                Ok(response) => {
                    session.log_in(SessionUser {
                        username: name,
                        id: response.user_id,
                    });
                    toaster.success("Welcome back!", "Login successful");
                    navigate("/dashboard", Default::default());
                }
                Err(err) => toaster.error("Login failed", &err.user_message()),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <Title text="Sign In | WindSightAI"/>
        <div class="page auth-page">
            <div class="card auth-card">
                <h1 class="page-title">"Welcome Back"</h1>
                <p class="page-subtitle">"Sign in to access your WindSightAI dashboard"</p>

                <form on:submit=on_submit>
                    <div class="form-field">
                        <label for="login-username">"Username"</label>
                        <input
                            id="login-username"
                            type="text"
                            placeholder="Enter your username"
                            prop:value=username
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                        {move || {
                            username_error
                                .get()
                                .map(|msg| view! { <div class="field-error">{msg}</div> })
                        }}
                    </div>

                    <div class="form-field">
                        <label for="login-password">"Password"</label>
                        <input
                            id="login-password"
                            type="password"
                            placeholder="Enter your password"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        {move || {
                            password_error
                                .get()
                                .map(|msg| view! { <div class="field-error">{msg}</div> })
                        }}
                    </div>

                    <button class="btn btn-primary" type="submit" disabled=is_loading>
                        {move || if is_loading.get() { "Signing in" } else { "Sign In" }}
                    </button>
                </form>

                <p class="auth-switch">
                    "Don't have an account? "
                    <A href="/register">"Register here"</A>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_required() {
        let errors = validate_credentials("", "");
        assert_eq!(errors.username, Some("Username is required"));
        assert_eq!(errors.password, Some("Password is required"));
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_filled_credentials_pass() {
        assert!(validate_credentials("inspector", "hunter2").is_empty());
    }
}
