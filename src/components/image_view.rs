//! Image rendering with explicit load states.
//!
//! Every remote image goes through the same three phases: a spinner while
//! the browser fetches it, an inline error region if the resource fails
//! (terminal for that instance), and the image itself once loaded. Loaded
//! gallery images can open in the [`ImageLightbox`] overlay.

use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ImagePhase {
    Loading,
    Loaded,
    Failed,
}

/// An `<img>` wrapped in loading/error affordances.
///
/// `on_open` fires with the image URL when a loaded image is clicked.
#[component]
pub fn RemoteImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(into, optional)] on_open: Option<Callback<String>>,
) -> impl IntoView {
    let (phase, set_phase) = create_signal(ImagePhase::Loading);

    let open_src = src.clone();
    let on_click = move |_| {
        if phase.get_untracked() == ImagePhase::Loaded {
            if let Some(callback) = on_open {
                callback.call(open_src.clone());
            }
        }
    };

    view! {
        <div class="image-frame" on:click=on_click>
            <Show when=move || phase.get() == ImagePhase::Loading fallback=|| view! {}>
                <div class="image-spinner" aria-label="Loading image"></div>
            </Show>
            <Show when=move || phase.get() == ImagePhase::Failed fallback=|| view! {}>
                <div class="image-error" role="alert">"Failed to load image"</div>
            </Show>
            <img
                src=src.clone()
                alt=alt.clone()
                class="image-content"
                style:display=move || {
                    if phase.get() == ImagePhase::Loaded { "block" } else { "none" }
                }
                on:load=move |_| set_phase.set(ImagePhase::Loaded)
                on:error=move |_| set_phase.set(ImagePhase::Failed)
            />
        </div>
    }
}

/// Dismissible fullscreen overlay for an enlarged image.
///
/// Pure presentation: open when `src` holds a URL, closed otherwise.
#[component]
pub fn ImageLightbox(
    src: ReadSignal<Option<String>>,
    set_src: WriteSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || src.get().is_some() fallback=|| view! {}>
            <div class="lightbox-overlay" on:click=move |_| set_src.set(None)>
                <button class="lightbox-close" on:click=move |_| set_src.set(None)>
                    "×"
                </button>
                <img
                    class="lightbox-image"
                    src=move || src.get().unwrap_or_default()
                    alt="Enlarged view"
                />
            </div>
        </Show>
    }
}
