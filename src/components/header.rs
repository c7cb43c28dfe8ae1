use leptos::*;
use leptos_router::{use_navigate, A};

use crate::services::api;
use crate::session::use_session;

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let sign_out_navigate = use_navigate();

    view! {
        <header>
            <div class="header-left">
                <A href="/" class="logo">
                    "WindSightAI"
                </A>
            </div>
            <nav class="header-nav">
                <A href="/">"Home"</A>
                <Show when=move || session.is_authenticated() fallback=|| view! {}>
                    <A href="/dashboard">"Dashboard"</A>
                </Show>
                <A href="/contact">"Contact"</A>
                {move || {
                    if session.is_authenticated() {
                        let navigate = sign_out_navigate.clone();
                        let on_sign_out = move |_| {
                            session.log_out();
                            // Server-side invalidation is best-effort
                            spawn_local(async {
                                let _ = api::logout().await;
                            });
                            navigate("/", Default::default());
                        };
                        view! {
                            <button class="nav-button" on:click=on_sign_out>
                                "Sign Out"
                            </button>
                        }
                            .into_view()
                    } else {
                        view! {
                            <A href="/login" class="nav-button">
                                "Sign In"
                            </A>
                        }
                            .into_view()
                    }
                }}
            </nav>
        </header>
    }
}
