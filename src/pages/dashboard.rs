//! Dashboard page: file selection, upload, analysis and the upload gallery.
//!
//! All dashboard state lives here. A selection moves through
//! select → preview → upload; each upload card carries its own analyze
//! action, tracked per upload id so several analyses can run at once.

use std::collections::HashSet;

use leptos::*;
use leptos_meta::Title;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, FileReader, HtmlInputElement};

use crate::components::{use_toaster, ImageLightbox, RemoteImage, Toaster};
use crate::services::api;
use crate::session;
use crate::types::{accepts_media_type, Upload};

/// Analyze guard: the action is closed once any analysis exists, or while a
/// request for this id is in flight.
fn can_analyze(upload: &Upload, in_flight: &HashSet<u64>) -> bool {
    !upload.is_analyzed() && !in_flight.contains(&upload.id)
}

/// Display form of the server's upload timestamp. The backend has emitted
/// both RFC 1123 and ISO shapes over time; anything else renders as-is.
fn format_upload_date(raw: &str) -> String {
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%b %e, %Y %H:%M").to_string();
    }
    if let Ok(parsed) = chrono::NaiveDateTime::parse_from_str(raw, "%a, %d %b %Y %H:%M:%S GMT") {
        return parsed.format("%b %e, %Y %H:%M").to_string();
    }
    if let Ok(parsed) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return parsed.format("%b %e, %Y %H:%M").to_string();
    }
    raw.to_string()
}

/// Replace the upload list; on failure the previous list stays untouched.
async fn refresh_uploads(user_id: &str, set_uploads: WriteSignal<Vec<Upload>>, toaster: Toaster) {
    match api::fetch_uploads(user_id).await {
        Ok(list) => set_uploads.set(list),
        Err(err) => toaster.error("Error fetching uploads", &err.user_message()),
    }
}

/// Best-effort data-URI preview decode. A failure leaves the preview empty
/// without touching the pending file.
fn decode_preview(file: &web_sys::File, set_preview: WriteSignal<Option<String>>) {
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(_) => return,
    };

    let reader_handle = reader.clone();
    let onloadend = Closure::once(move |_event: web_sys::ProgressEvent| {
        let data_uri = reader_handle.result().ok().and_then(|value| value.as_string());
        set_preview.set(data_uri);
    });
    reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref::<js_sys::Function>()));

    if reader.read_as_data_url(file).is_err() {
        log::warn!("could not start preview decode");
    }
    onloadend.forget();
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let toaster = use_toaster();

    // The route guard guarantees a stored id; an empty id only happens if
    // storage was cleared between navigation and mount, and then no
    // request is issued at all.
    let user_id = session::stored_user_id().unwrap_or_default();

    let (uploads, set_uploads) = create_signal(Vec::<Upload>::new());
    let (pending_file, set_pending_file) = create_signal(None::<web_sys::File>);
    let (preview, set_preview) = create_signal(None::<String>);
    let (is_uploading, set_is_uploading) = create_signal(false);
    let (analyzing, set_analyzing) = create_signal(HashSet::<u64>::new());
    let (lightbox, set_lightbox) = create_signal(None::<String>);

    if !user_id.is_empty() {
        let mount_user_id = user_id.clone();
        spawn_local(async move {
            refresh_uploads(&mount_user_id, set_uploads, toaster).await;
        });
    }

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        if !accepts_media_type(&file.type_()) {
            // Rejected: the selection is discarded and nothing is sent
            set_pending_file.set(None);
            set_preview.set(None);
            toaster.warning("Invalid file type", "Please select an image file");
            return;
        }

        set_preview.set(None);
        decode_preview(&file, set_preview);
        set_pending_file.set(Some(file));
    };

    let upload_user_id = user_id.clone();
    let on_upload = move |_| {
        if is_uploading.get_untracked() {
            return;
        }
        let Some(file) = pending_file.get_untracked() else {
            return;
        };
        let user_id = upload_user_id.clone();
        if user_id.is_empty() {
            return;
        }

        spawn_local(async move {
            set_is_uploading.set(true);
            match api::upload_file(&file, &user_id).await {
                Ok(()) => {
                    set_pending_file.set(None);
                    set_preview.set(None);
                    refresh_uploads(&user_id, set_uploads, toaster).await;
                    toaster.success("Success", "File uploaded successfully");
                }
                Err(err) => {
                    // The selection is not kept for retry; the user reselects
                    set_pending_file.set(None);
                    set_preview.set(None);
                    toaster.error("Upload failed", &err.user_message());
                }
            }
            set_is_uploading.set(false);
        });
    };

    let analyze_user_id = user_id.clone();
    let on_analyze = move |upload_id: u64| {
        let open = uploads.with_untracked(|list| {
            analyzing.with_untracked(|in_flight| {
                list.iter()
                    .find(|upload| upload.id == upload_id)
                    .map(|upload| can_analyze(upload, in_flight))
                    .unwrap_or(false)
            })
        });
        if !open {
            return;
        }

        set_analyzing.update(|in_flight| {
            in_flight.insert(upload_id);
        });

        let user_id = analyze_user_id.clone();
        spawn_local(async move {
            match api::trigger_analysis(upload_id).await {
                Ok(()) => {
                    refresh_uploads(&user_id, set_uploads, toaster).await;
                    toaster.success("Success", "Analysis completed");
                }
                Err(err) => toaster.error("Analysis failed", &err.user_message()),
            }
            // Cleared on every exit path
            set_analyzing.update(|in_flight| {
                in_flight.remove(&upload_id);
            });
        });
    };

    view! {
        <Title text="Dashboard | WindSightAI"/>
        <div class="page dashboard">
            <h1 class="page-title">"Dashboard"</h1>

            <section class="card upload-card">
                <h2 class="section-title">"Upload New Image"</h2>
                <input
                    type="file"
                    accept="image/*"
                    class="file-input"
                    on:change=on_file_change
                />
                {move || {
                    preview
                        .get()
                        .map(|data_uri| view! { <RemoteImage src=data_uri alt="Preview"/> })
                }}
                <button
                    class="btn btn-primary"
                    on:click=on_upload
                    disabled=move || pending_file.with(|file| file.is_none()) || is_uploading.get()
                >
                    {move || if is_uploading.get() { "Uploading" } else { "Upload" }}
                </button>
            </section>

            <section class="uploads-section">
                <h2 class="section-title">"Your Uploads"</h2>

                <Show when=move || uploads.with(|list| list.is_empty()) fallback=|| view! {}>
                    <div class="card empty-state">
                        "No uploads yet. Upload a file to get started!"
                    </div>
                </Show>

                <div class="upload-grid">
                    <For
                        each=move || uploads.get()
                        key=|upload| (upload.id, upload.analyses.len())
                        children=move |upload| {
                            let on_analyze = on_analyze.clone();
                            let upload_id = upload.id;
                            let analyzed = upload.is_analyzed();
                            let busy = move || analyzing.with(|ids| ids.contains(&upload_id));
                            let original_src = api::upload_image_url(&upload.filename);
                            let result_src = upload.first_result_path().map(api::output_image_url);
                            let uploaded_on = format_upload_date(&upload.upload_date);

                            view! {
                                <div class="card upload-item">
                                    <div class="upload-item-header">
                                        <span class="upload-filename">{upload.filename.clone()}</span>
                                        <button
                                            class="btn btn-small"
                                            on:click=move |_| on_analyze(upload_id)
                                            disabled=move || analyzed || busy()
                                        >
                                            {move || {
                                                if analyzed {
                                                    "Analyzed"
                                                } else if busy() {
                                                    "Analyzing"
                                                } else {
                                                    "Analyze"
                                                }
                                            }}
                                        </button>
                                    </div>

                                    <div class="upload-item-images">
                                        <div>
                                            <div class="image-label">"Original Image"</div>
                                            <RemoteImage
                                                src=original_src
                                                alt=upload.filename.clone()
                                                on_open=Callback::new(move |src| {
                                                    set_lightbox.set(Some(src))
                                                })
                                            />
                                        </div>
                                        {result_src
                                            .map(|src| {
                                                view! {
                                                    <div>
                                                        <div class="image-label">"Analyzed Image"</div>
                                                        <RemoteImage
                                                            src=src
                                                            alt="Analyzed Image"
                                                            on_open=Callback::new(move |src| {
                                                                set_lightbox.set(Some(src))
                                                            })
                                                        />
                                                    </div>
                                                }
                                            })}
                                    </div>

                                    <div class="upload-date">"Uploaded on: " {uploaded_on}</div>
                                </div>
                            }
                        }
                    />
                </div>
            </section>

            <ImageLightbox src=lightbox set_src=set_lightbox/>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Analysis;

    fn upload(id: u64, analyses: Vec<Analysis>) -> Upload {
        Upload {
            id,
            filename: format!("blade_{id}.png"),
            upload_date: "2025-07-30T14:12:03".to_string(),
            analyses,
        }
    }

    #[test]
    fn test_analyze_open_for_fresh_upload() {
        let fresh = upload(7, Vec::new());
        assert!(can_analyze(&fresh, &HashSet::new()));
    }

    #[test]
    fn test_analyzed_upload_is_terminal() {
        let done = upload(
            7,
            vec![Analysis {
                result_path: Some("out.png".to_string()),
            }],
        );
        assert!(!can_analyze(&done, &HashSet::new()));
        // Terminal even when an artifact path never materialized
        let pending_artifact = upload(8, vec![Analysis { result_path: None }]);
        assert!(!can_analyze(&pending_artifact, &HashSet::new()));
    }

    #[test]
    fn test_in_flight_guard_is_per_id() {
        let seven = upload(7, Vec::new());
        let nine = upload(9, Vec::new());
        let in_flight: HashSet<u64> = [7].into_iter().collect();

        assert!(!can_analyze(&seven, &in_flight));
        // An unrelated in-flight id does not close the action
        assert!(can_analyze(&nine, &in_flight));
    }

    #[test]
    fn test_format_upload_date() {
        assert_eq!(
            format_upload_date("Wed, 30 Jul 2025 14:12:03 GMT"),
            "Jul 30, 2025 14:12"
        );
        assert_eq!(
            format_upload_date("2025-07-30T14:12:03"),
            "Jul 30, 2025 14:12"
        );
        assert_eq!(
            format_upload_date("2025-07-30T14:12:03+00:00"),
            "Jul 30, 2025 14:12"
        );
        // Unknown shapes pass through untouched
        assert_eq!(format_upload_date("yesterday"), "yesterday");
    }
}
