//! Contact page: support address with copy-to-clipboard.

use leptos::*;
use leptos_meta::Title;
use wasm_bindgen_futures::JsFuture;

use crate::components::use_toaster;
use crate::config::SUPPORT_EMAIL;

const CONTACT_REASONS: &[&str] = &[
    "Request a demo of our AI inspection system",
    "Learn more about our technology and capabilities",
    "Discuss partnership opportunities",
    "Get support for existing installations",
    "Schedule a consultation with our experts",
];

#[component]
pub fn ContactPage() -> impl IntoView {
    let toaster = use_toaster();

    let on_copy = move |_| {
        let promise = gloo_utils::window()
            .navigator()
            .clipboard()
            .write_text(SUPPORT_EMAIL);
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => toaster.success(
                    "Email copied!",
                    "Email address has been copied to clipboard",
                ),
                Err(_) => toaster.error("Copy failed", "Could not access the clipboard"),
            }
        });
    };

    view! {
        <Title text="Contact | WindSightAI"/>
        <div class="page contact">
            <h1 class="page-title">"Contact Us"</h1>
            <div class="card contact-card">
                <p>"Reach out to the WindSightAI team:"</p>
                <ul class="contact-reasons">
                    {CONTACT_REASONS
                        .iter()
                        .map(|reason| view! { <li>{*reason}</li> })
                        .collect_view()}
                </ul>
                <div class="contact-email">
                    <span>{SUPPORT_EMAIL}</span>
                    <button class="btn btn-secondary" on:click=on_copy>
                        "Copy"
                    </button>
                </div>
            </div>
        </div>
    }
}
