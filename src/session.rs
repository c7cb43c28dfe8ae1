//! Persisted session state and the authentication route guard.
//!
//! The backend identifies the user by an id string kept in localStorage;
//! a reactive [`Session`] context mirrors it so the header and pages can
//! react to sign-in/sign-out without a reload.

use leptos::*;
use leptos_router::use_navigate;

use crate::config::{STORAGE_USER_ID_KEY, STORAGE_USER_KEY};
use crate::types::SessionUser;

fn local_storage() -> Option<web_sys::Storage> {
    gloo_utils::window().local_storage().ok().flatten()
}

/// The persisted user id, if any. Read once per call, never cached.
pub fn stored_user_id() -> Option<String> {
    local_storage()?
        .get_item(STORAGE_USER_ID_KEY)
        .ok()
        .flatten()
        .filter(|id| !id.is_empty())
}

/// The persisted user profile, if present and well-formed.
pub fn stored_user() -> Option<SessionUser> {
    let raw = local_storage()?.get_item(STORAGE_USER_KEY).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

/// Reactive session handle, provided once at the application root.
#[derive(Clone, Copy)]
pub struct Session {
    user: RwSignal<Option<SessionUser>>,
}

impl Session {
    fn restore() -> Self {
        Self {
            user: create_rw_signal(stored_user()),
        }
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.user.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with(|user| user.is_some())
    }

    /// Persist the signed-in user and update the reactive state.
    pub fn log_in(&self, user: SessionUser) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(STORAGE_USER_ID_KEY, &user.id.to_string());
            if let Ok(json) = serde_json::to_string(&user) {
                let _ = storage.set_item(STORAGE_USER_KEY, &json);
            }
        }
        self.user.set(Some(user));
    }

    /// Drop the persisted session and update the reactive state.
    pub fn log_out(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_USER_ID_KEY);
            let _ = storage.remove_item(STORAGE_USER_KEY);
        }
        self.user.set(None);
    }
}

pub fn provide_session() {
    provide_context(Session::restore());
}

pub fn use_session() -> Session {
    expect_context::<Session>()
}

/// Routing-layer precondition for authenticated pages.
///
/// Evaluated before the wrapped page body runs: without a persisted user id
/// the visitor is sent to the login page and the children are never built,
/// so no page state initializes and no API call goes out.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let authenticated = stored_user_id().is_some();

    let navigate = use_navigate();
    create_effect(move |_| {
        if !authenticated {
            navigate("/login", Default::default());
        }
    });

    move || {
        if authenticated {
            children().into_view()
        } else {
            ().into_view()
        }
    }
}
