//! Navigation bar

use crate::state::AppState;
use docqa_core::Route;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Top bar: brand link plus Logout when signed in, Login / Sign Up otherwise.
#[component]
pub fn Navbar() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let token = state.token;
    let is_auth = Signal::derive(move || token.get().is_some());

    view! {
        <header class="header h-16 sticky top-0 z-40">
            <div class="h-full max-w-7xl mx-auto px-4 flex items-center justify-between">
                <a href="/" class="logo hover:opacity-80 transition-opacity">
                    <h1 class="text-xl font-bold text-gradient">"DocQA"</h1>
                </a>

                <nav class="flex items-center gap-2">
                    {move || {
                        if is_auth.get() {
                            let state = state.clone();
                            let navigate = navigate.clone();
                            view! {
                                <a href=Route::Home.path() class="btn btn-ghost">"Home"</a>
                                <button
                                    on:click=move |_| {
                                        state.sign_out();
                                        navigate(Route::Login.path(), Default::default());
                                    }
                                    class="btn btn-ghost"
                                >
                                    "Logout"
                                </button>
                            }.into_any()
                        } else {
                            view! {
                                <a href=Route::Login.path() class="btn btn-ghost">"Login"</a>
                                <a href=Route::Signup.path() class="btn btn-primary">"Sign Up"</a>
                            }.into_any()
                        }
                    }}
                </nav>
            </div>
        </header>
    }
}
