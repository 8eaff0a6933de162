//! Answered questions, newest first

use docqa_core::Exchange;
use leptos::prelude::*;

#[component]
pub fn ChatHistory(#[prop(into)] exchanges: Signal<Vec<Exchange>>) -> impl IntoView {
    view! {
        <Show when=move || exchanges.with(|e| !e.is_empty())>
            <div class="mt-6">
                <h3 class="text-md font-semibold mb-3">"Chat History"</h3>
                <ul class="space-y-3">
                    {move || exchanges.get().into_iter().map(|exchange| view! {
                        <li class="card p-4 message-appear">
                            <p class="font-medium">
                                <span class="text-[var(--text-muted)]">"Q: "</span>
                                {exchange.question().to_string()}
                            </p>
                            <p class="mt-1 whitespace-pre-wrap">
                                <span class="text-[var(--text-muted)]">"A: "</span>
                                {exchange.answer().to_string()}
                            </p>
                        </li>
                    }).collect_view()}
                </ul>
            </div>
        </Show>
    }
}
