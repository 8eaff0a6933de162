//! PDF upload card

use crate::components::LoadingSpinner;
use crate::state::AppState;
use docqa_core::{Document, OpState, UploadFlow};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

async fn read_file(file: File) -> Option<Document> {
    let buffer = JsFuture::from(file.array_buffer()).await.ok()?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Some(Document::new(file.name(), bytes))
}

/// File picker plus Upload button. Shows the server's message or the error
/// under the button.
#[component]
pub fn UploadCard() -> impl IntoView {
    let state = expect_context::<AppState>();
    let flow = RwSignal::new(UploadFlow::new());

    on_cleanup(move || {
        flow.try_update(|f| f.teardown());
    });

    // Picks are numbered so a slow read of an earlier file cannot replace a later one
    let picks = StoredValue::new(0u64);
    let reading = RwSignal::new(false);

    let on_change = move |ev: web_sys::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let pick = picks.try_update_value(|n| {
            *n += 1;
            *n
        });
        flow.update(|f| f.clear_selection());
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            reading.set(false);
            return;
        };
        reading.set(true);
        spawn_local(async move {
            let document = read_file(file).await;
            if picks.try_get_value() != pick {
                return;
            }
            match document {
                Some(document) => {
                    if !document.looks_like_pdf() {
                        tracing::warn!(file = %document.file_name, "Selected file is not a PDF");
                    }
                    flow.try_update(|f| f.select(document));
                }
                None => tracing::warn!("Failed to read the selected file"),
            }
            reading.try_set(false);
        });
    };

    let on_upload = move |_| {
        if reading.get_untracked() {
            return;
        }
        let Some(pending) = flow.try_update(|f| f.begin()).flatten() else {
            return;
        };
        let gateway = state.gateway.clone();
        spawn_local(async move {
            let result = docqa_core::Gateway::upload_document(&gateway, &pending.request).await;
            flow.try_update(|f| f.finish(pending, result));
        });
    };

    let is_uploading = move || flow.with(|f| f.is_uploading());
    let is_busy = move || is_uploading() || reading.get();
    let is_error = move || flow.with(|f| matches!(f.state(), OpState::Failed(_)));

    view! {
        <section class="card p-6">
            <h2 class="text-lg font-semibold mb-4">"Upload PDF"</h2>
            <div class="flex items-center gap-3">
                <input
                    type="file"
                    accept="application/pdf,.pdf"
                    on:change=on_change
                    class="input flex-1"
                />
                <button
                    on:click=on_upload
                    disabled=is_busy
                    class="btn btn-primary"
                >
                    <Show when=is_uploading>
                        <LoadingSpinner />
                    </Show>
                    {move || {
                        if is_uploading() {
                            "Uploading..."
                        } else if reading.get() {
                            "Reading file..."
                        } else {
                            "Upload"
                        }
                    }}
                </button>
            </div>
            {move || flow.with(|f| f.status_message()).map(|message| view! {
                <p class=if is_error() { "mt-3 text-sm text-red-500" } else { "mt-3 text-sm text-green-500" }>
                    {message}
                </p>
            })}
        </section>
    }
}
