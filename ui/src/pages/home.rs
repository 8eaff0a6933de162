//! Home page: upload a PDF, then ask about it

use crate::components::{AskCard, Navbar, UploadCard};
use crate::state::AppState;
use docqa_core::Route;
use leptos::prelude::*;
use leptos_router::components::Redirect;

/// Renders only with a session; otherwise sends the visitor to `/login`.
///
/// The check is reactive, so logging out from the navbar leaves the page.
#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<AppState>();

    move || {
        if state.allows(Route::Home) {
            view! {
                <div class="min-h-screen flex flex-col bg-[var(--bg-primary)]">
                    <Navbar />
                    <main class="flex-1 max-w-3xl w-full mx-auto px-4 py-8 space-y-6">
                        <UploadCard />
                        <AskCard />
                    </main>
                </div>
            }
            .into_any()
        } else {
            view! { <Redirect path=Route::Login.path() /> }.into_any()
        }
    }
}
