//! Question input, latest answer and history

use crate::components::{ChatHistory, LoadingSpinner};
use crate::state::AppState;
use docqa_core::{AskFlow, Exchange, Gateway};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn AskCard() -> impl IntoView {
    let state = expect_context::<AppState>();
    let flow = RwSignal::new(AskFlow::new());

    on_cleanup(move || {
        flow.try_update(|f| f.teardown());
    });

    let submit = move || {
        let Some(pending) = flow.try_update(|f| f.begin()).flatten() else {
            return;
        };
        let gateway = state.gateway.clone();
        spawn_local(async move {
            let result = gateway.ask(&pending.request).await;
            flow.try_update(|f| f.finish(pending, result));
        });
    };

    // Enter sends, Shift+Enter inserts a newline
    let on_keydown = {
        let submit = submit.clone();
        move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Enter" && !ev.shift_key() {
                ev.prevent_default();
                if !flow.with_untracked(|f| f.is_asking()) {
                    submit();
                }
            }
        }
    };

    let is_asking = move || flow.with(|f| f.is_asking());
    let history = Signal::derive(move || {
        flow.with(|f| f.history().iter().cloned().collect::<Vec<Exchange>>())
    });

    view! {
        <section class="card p-6">
            <h2 class="text-lg font-semibold mb-4">"Ask a Question"</h2>
            <textarea
                prop:value=move || flow.with(|f| f.input.clone())
                on:input=move |ev| flow.update(|f| f.input = event_target_value(&ev))
                on:keydown=on_keydown
                placeholder="What would you like to know about the document?"
                rows="3"
                class="input w-full resize-none"
            ></textarea>
            <button
                on:click=move |_| submit()
                disabled=is_asking
                class="btn btn-primary mt-3"
            >
                <Show when=is_asking>
                    <LoadingSpinner />
                </Show>
                {move || if is_asking() { "Processing..." } else { "Ask" }}
            </button>

            {move || flow.with(|f| f.error().map(|e| e.to_string())).map(|error| view! {
                <p class="mt-3 text-sm text-red-500">{error}</p>
            })}

            {move || flow.with(|f| f.answer().map(str::to_string)).map(|answer| view! {
                <div class="mt-4 p-4 rounded-[var(--radius-md)] bg-[var(--bg-secondary)]">
                    <h3 class="font-semibold mb-2">"Answer"</h3>
                    <p class="whitespace-pre-wrap">{answer}</p>
                </div>
            })}

            <ChatHistory exchanges=history />
        </section>
    }
}
