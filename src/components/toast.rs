//! Transient toast notifications.
//!
//! A [`Toaster`] handle lives in context; any page can push a toast and the
//! [`ToastHost`] at the application root renders the stack. Toasts dismiss
//! themselves after a level-dependent delay or on click.

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::config::{TOAST_LONG_MS, TOAST_SHORT_MS};

/// Toast severity level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Success,
    Error,
    Warning,
}

impl ToastLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "toast-success",
            ToastLevel::Error => "toast-error",
            ToastLevel::Warning => "toast-warning",
        }
    }

    fn duration_ms(&self) -> u32 {
        match self {
            ToastLevel::Error => TOAST_LONG_MS,
            _ => TOAST_SHORT_MS,
        }
    }
}

/// A single notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub level: ToastLevel,
}

/// Context handle for pushing notifications.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Toaster {
    fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: create_rw_signal(0),
        }
    }

    pub fn success(&self, title: &str, message: &str) {
        self.push(ToastLevel::Success, title, message);
    }

    pub fn error(&self, title: &str, message: &str) {
        self.push(ToastLevel::Error, title, message);
    }

    pub fn warning(&self, title: &str, message: &str) {
        self.push(ToastLevel::Warning, title, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn push(&self, level: ToastLevel, title: &str, message: &str) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                title: title.to_string(),
                message: message.to_string(),
                level,
            });
        });

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(level.duration_ms()).await;
            toasts.update(|toasts| toasts.retain(|t| t.id != id));
        });
    }
}

pub fn provide_toaster() {
    provide_context(Toaster::new());
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

/// Renders the active toast stack. Mount once, at the application root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast-host">
            <For
                each=move || toaster.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.level.css_class()) role="status">
                            <div class="toast-body">
                                <div class="toast-title">{toast.title.clone()}</div>
                                <div class="toast-message">{toast.message.clone()}</div>
                            </div>
                            <button
                                class="toast-close"
                                on:click=move |_| toaster.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
